//! Book records

use super::{null_as_default, Record};
use serde::{Deserialize, Serialize};

/// Book as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id_book: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub book_name: String,
    /// Page count, kept as text because the API stores it as text
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_page: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub publisher: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_year: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stock: i64,
    /// Public URL of the cover image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
}

impl Record for Book {
    fn id(&self) -> i64 {
        self.id_book
    }

    fn display_name(&self) -> &str {
        &self.book_name
    }
}

/// Payload for `POST /book/add`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBook {
    pub book_name: String,
    pub total_page: String,
    pub publisher: String,
    pub author: String,
    pub release_year: i32,
    pub stock: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
}

/// Partial payload for `PUT /book/edit/:id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateBook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
}

impl From<CreateBook> for UpdateBook {
    fn from(book: CreateBook) -> Self {
        Self {
            book_name: Some(book.book_name),
            total_page: Some(book.total_page),
            publisher: Some(book.publisher),
            author: Some(book.author),
            release_year: Some(book.release_year),
            stock: Some(book.stock),
            cover: book.cover,
        }
    }
}
