//! Entity endpoint clients
//!
//! Each module provides a typed interface for one entity of the library API.
//!
//! | Module | Path segment | Response shape |
//! |--------|--------------|----------------|
//! | `books` | `/book` | bare JSON, or `{data}` |
//! | `members` | `/member` | [`Envelope`] |
//! | `employees` | `/employe` | [`Envelope`] |
//! | `loans` | `/loan` | [`Envelope`] |
//!
//! Every entity exposes the same five routes:
//! `get/all?page=N`, `get/:id`, `add`, `edit/:id` and `delete/:id`.
//!
//! [`Envelope`]: library_admin_core::model::Envelope

pub mod books;
pub mod employees;
pub mod loans;
pub mod members;

pub use books::BooksApi;
pub use employees::EmployeesApi;
pub use loans::LoansApi;
pub use members::MembersApi;

use crate::error::ApiResult;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Route layout shared by every entity
#[derive(Debug, Clone, Copy)]
pub(crate) struct Routes {
    segment: &'static str,
}

impl Routes {
    pub(crate) const fn new(segment: &'static str) -> Self {
        Self { segment }
    }

    pub(crate) fn list(self, page: u32) -> String {
        format!("/{}/get/all?page={page}", self.segment)
    }

    pub(crate) fn get(self, id: i64) -> String {
        format!("/{}/get/{id}", self.segment)
    }

    pub(crate) fn add(self) -> String {
        format!("/{}/add", self.segment)
    }

    pub(crate) fn edit(self, id: i64) -> String {
        format!("/{}/edit/{id}", self.segment)
    }

    pub(crate) fn delete(self, id: i64) -> String {
        format!("/{}/delete/{id}", self.segment)
    }
}

/// Unwrap an enveloped list
///
/// Only an object whose `data` is an array yields items. No body, a missing
/// or null `data`, or any other shape means an empty page.
pub(crate) fn envelope_list<T: DeserializeOwned>(raw: Option<Value>) -> ApiResult<Vec<T>> {
    match raw {
        Some(Value::Object(mut map)) => match map.remove("data") {
            Some(items @ Value::Array(_)) => Ok(serde_json::from_value(items)?),
            _ => Ok(Vec::new()),
        },
        _ => Ok(Vec::new()),
    }
}

/// Unwrap an enveloped single entity; anything but an object with `data` is `None`
pub(crate) fn envelope_one<T: DeserializeOwned>(raw: Option<Value>) -> ApiResult<Option<T>> {
    match raw {
        Some(Value::Object(mut map)) => match map.remove("data") {
            None | Some(Value::Null) => Ok(None),
            Some(entity) => Ok(Some(serde_json::from_value(entity)?)),
        },
        _ => Ok(None),
    }
}
