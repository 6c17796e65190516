//! Book endpoints
//!
//! Maps to `/book/*`. Unlike the other entities, book responses are not
//! consistently wrapped: lists come back either as a bare array or as an
//! object with a `data` array, and single books either bare or under `data`.

use super::Routes;
use crate::client::LibraryClient;
use crate::error::ApiResult;
use async_trait::async_trait;
use library_admin_core::model::{Book, CreateBook, UpdateBook};
use library_admin_core::resource::Resource;
use serde_json::Value;

const ROUTES: Routes = Routes::new("book");

/// Books API interface
#[derive(Clone)]
pub struct BooksApi {
    client: LibraryClient,
}

impl BooksApi {
    /// Create a new books API interface
    pub(crate) fn new(client: LibraryClient) -> Self {
        Self { client }
    }

    /// List one page of books
    ///
    /// GET /book/get/all?page=<page>
    pub async fn list(&self, page: u32) -> ApiResult<Vec<Book>> {
        let raw = self.client.get(&ROUTES.list(page)).await?;
        unwrap_list(raw)
    }

    /// Get a single book by ID
    ///
    /// GET /book/get/<id>
    pub async fn get(&self, id: i64) -> ApiResult<Option<Book>> {
        let raw = self.client.get(&ROUTES.get(id)).await?;
        unwrap_one(raw)
    }

    /// Create a new book
    ///
    /// POST /book/add
    pub async fn create(&self, book: &CreateBook) -> ApiResult<Option<Book>> {
        let raw = self.client.post(&ROUTES.add(), book).await?;
        unwrap_one(raw)
    }

    /// Update an existing book with a partial payload
    ///
    /// PUT /book/edit/<id>
    pub async fn update(&self, id: i64, book: &UpdateBook) -> ApiResult<Option<Book>> {
        let raw = self.client.put(&ROUTES.edit(id), book).await?;
        unwrap_one(raw)
    }

    /// Delete a book
    ///
    /// DELETE /book/delete/<id>
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete(&ROUTES.delete(id)).await
    }
}

/// Normalize a list response: bare array, `{data: [...]}`, or nothing
fn unwrap_list(raw: Option<Value>) -> ApiResult<Vec<Book>> {
    let items = match raw {
        Some(items @ Value::Array(_)) => items,
        Some(Value::Object(mut map)) => match map.remove("data") {
            Some(items @ Value::Array(_)) => items,
            _ => return Ok(Vec::new()),
        },
        _ => return Ok(Vec::new()),
    };
    Ok(serde_json::from_value(items)?)
}

/// Normalize a single-book response: bare book or `{data: {...}}`
fn unwrap_one(raw: Option<Value>) -> ApiResult<Option<Book>> {
    match raw {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(mut map)) if !map.contains_key("id_book") => match map.remove("data") {
            None | Some(Value::Null) => Ok(None),
            Some(book) => Ok(Some(serde_json::from_value(book)?)),
        },
        Some(book) => Ok(Some(serde_json::from_value(book)?)),
    }
}

#[async_trait]
impl Resource for BooksApi {
    type Entity = Book;
    type Create = CreateBook;
    type Update = UpdateBook;
    type Error = crate::error::ApiError;

    fn name(&self) -> &'static str {
        "book"
    }

    async fn list(&self, page: u32) -> ApiResult<Vec<Book>> {
        BooksApi::list(self, page).await
    }

    async fn get(&self, id: i64) -> ApiResult<Option<Book>> {
        BooksApi::get(self, id).await
    }

    async fn create(&self, payload: &CreateBook) -> ApiResult<Option<Book>> {
        BooksApi::create(self, payload).await
    }

    async fn update(&self, id: i64, payload: &UpdateBook) -> ApiResult<Option<Book>> {
        BooksApi::update(self, id, payload).await
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        BooksApi::delete(self, id).await
    }
}
