//! Core domain and list-state logic for the library admin client
//!
//! This crate has no HTTP dependency. It provides:
//!
//! - **Domain model**: books, members, employees, loans and the response envelope
//! - **Error handling**: structured errors with codes, context and suggestions
//! - **Validation**: required-field checks run before any request
//! - **Forms**: drafts that turn user input into create/update payloads
//! - **Resources**: the CRUD capability every entity client implements
//! - **List state**: a paged list controller with reload-after-mutation
//! - **References**: loading and resolving loan book/member references
//!
//! # Example
//!
//! ```rust,ignore
//! use library_admin_core::list::ListController;
//!
//! let mut members = ListController::new(client.members());
//! members.mount().await;
//!
//! if let Some(message) = members.error() {
//!     eprintln!("Error: {message}");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod forms;
pub mod list;
pub mod model;
pub mod references;
pub mod resource;
pub mod validation;

#[cfg(test)]
mod testing;

pub use error::{Error, ErrorCode, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{Error, ErrorCode, Result};
    pub use crate::forms::{BookDraft, EmployeeDraft, LoanDraft, MemberDraft};
    pub use crate::list::{DeleteOutcome, ListController, LoadStatus, LoadTicket, PAGE_SIZE};
    pub use crate::model::{
        Book, CreateBook, CreateEmployee, CreateLoan, CreateMember, Employee, Envelope, Loan,
        Member, Record, UpdateBook, UpdateEmployee, UpdateLoan, UpdateMember,
    };
    pub use crate::references::{collect_all, resolve_reference};
    pub use crate::resource::Resource;
    pub use crate::validation::{ValidationResult, Validator};
}
