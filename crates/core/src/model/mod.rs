//! Domain model for the library back office
//!
//! | Entity | Key | API segment |
//! |--------|-----|-------------|
//! | [`Book`] | `id_book` | `book` |
//! | [`Member`] | `id_member` | `member` |
//! | [`Employee`] | `id_employee` | `employe` |
//! | [`Loan`] | `id_loan` | `loan` |
//!
//! Keys are assigned by the server and never change. Create payloads carry
//! every field; update payloads are partial and only serialize the fields
//! that were set.

pub mod book;
pub mod employee;
pub mod envelope;
pub mod loan;
pub mod member;

use serde::{Deserialize, Deserializer};

pub use book::{Book, CreateBook, UpdateBook};
pub use employee::{CreateEmployee, Employee, UpdateEmployee};
pub use envelope::Envelope;
pub use loan::{BookSummary, CreateLoan, Loan, LoanParty, MemberSummary, UpdateLoan};
pub use member::{CreateMember, Member, UpdateMember};

/// A stored entity with a server-assigned key and a human label
pub trait Record {
    /// Server-assigned primary key
    fn id(&self) -> i64;

    /// Name shown in lists and used for reference lookups
    fn display_name(&self) -> &str;
}

/// Read an explicit `null` the same as a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
