//! Book loans
//!
//! Loans are created from raw `id_book`/`id_member` references. When read
//! back, the API may substitute an embedded summary or a plain label for
//! each side of the loan.

use super::{null_as_default, Record};
use serde::{Deserialize, Serialize};

/// Embedded book reference on a loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id_book: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub book_name: String,
}

/// Embedded member reference on a loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberSummary {
    pub id_member: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub member_name: String,
}

/// One side of a loan as read from the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LoanParty<T> {
    Summary(T),
    Label(String),
}

/// Loan as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id_loan: i64,
    #[serde(default)]
    pub book: Option<LoanParty<BookSummary>>,
    #[serde(default)]
    pub member: Option<LoanParty<MemberSummary>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_book: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_member: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub loan_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub due_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl Loan {
    /// Book title to display, `"Book"` when the API sent nothing usable
    pub fn book_label(&self) -> &str {
        match &self.book {
            Some(LoanParty::Summary(summary)) => &summary.book_name,
            Some(LoanParty::Label(label)) => label,
            None => "Book",
        }
    }

    /// Member name to display, `"Member"` when the API sent nothing usable
    pub fn member_label(&self) -> &str {
        match &self.member {
            Some(LoanParty::Summary(summary)) => &summary.member_name,
            Some(LoanParty::Label(label)) => label,
            None => "Member",
        }
    }

    /// Id of the loaned book, from the raw reference or the embedded summary
    pub fn book_id(&self) -> Option<i64> {
        self.id_book.or(match &self.book {
            Some(LoanParty::Summary(summary)) => Some(summary.id_book),
            _ => None,
        })
    }

    /// Id of the borrowing member, from the raw reference or the embedded summary
    pub fn member_id(&self) -> Option<i64> {
        self.id_member.or(match &self.member {
            Some(LoanParty::Summary(summary)) => Some(summary.id_member),
            _ => None,
        })
    }

    /// A loan without a return date means the book is still out
    pub fn is_on_loan(&self) -> bool {
        self.return_date
            .as_deref()
            .is_none_or(|date| date.trim().is_empty())
    }
}

impl Record for Loan {
    fn id(&self) -> i64 {
        self.id_loan
    }

    fn display_name(&self) -> &str {
        self.book_label()
    }
}

/// Payload for `POST /loan/add`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLoan {
    pub id_book: i64,
    pub id_member: i64,
    pub loan_date: String,
    pub due_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
}

/// Partial payload for `PUT /loan/edit/:id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateLoan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_book: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_member: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
}
