//! HTTP client for the library administration REST API
//!
//! Wraps the book, member, employee and loan endpoints of the library
//! backend and the object storage used for cover images.
//!
//! # Features
//!
//! - **Environment-based configuration**: Base URL, timeout and storage keys from env or TOML
//! - **Uniform error mapping**: Non-2xx responses carry the server's message verbatim
//! - **Request correlation**: Every request carries a unique `X-Request-ID`
//! - **List controller support**: Every entity API implements [`Resource`]
//!
//! # Example
//!
//! ```rust,no_run
//! use library_admin_api_client::{ClientConfig, LibraryClient};
//! use library_admin_core::list::ListController;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = LibraryClient::with_config(ClientConfig::from_env()?)?;
//!
//!     let mut books = ListController::new(client.books());
//!     books.mount().await;
//!     for book in books.items() {
//!         println!("{} by {}", book.book_name, book.author);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! [`Resource`]: library_admin_core::resource::Resource

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod forms;
pub mod storage;

pub use client::LibraryClient;
pub use config::{ClientConfig, Environment, StorageConfig};
pub use error::{ApiError, ApiResult};
pub use storage::{StorageClient, UploadFile, UploadResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::LibraryClient;
    pub use crate::config::{ClientConfig, Environment, StorageConfig};
    pub use crate::endpoints::{BooksApi, EmployeesApi, LoansApi, MembersApi};
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::forms::{book_create_payload, book_update_payload};
    pub use crate::storage::{StorageClient, UploadFile, UploadResult};
}
