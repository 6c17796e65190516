//! Form drafts and their conversion into API payloads
//!
//! A draft holds what the user typed. Converting it runs the required-field
//! checks and fails before any request is made, so the error can be shown
//! inline on the form.

use crate::error::{Error, Result};
use crate::model::{
    Book, CreateBook, CreateEmployee, CreateLoan, CreateMember, Employee, Loan, Member,
    UpdateBook, UpdateEmployee, UpdateLoan, UpdateMember,
};
use crate::references::resolve_reference;
use crate::validation::Validator;

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// ============================================================================
// Books
// ============================================================================

/// Book form input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookDraft {
    pub book_name: String,
    pub total_page: String,
    pub publisher: String,
    pub author: String,
    pub release_year: i32,
    pub stock: i64,
    /// Cover URL typed or produced by an upload
    pub cover_url: String,
}

impl BookDraft {
    /// Prefill the edit form
    pub fn from_book(book: &Book) -> Self {
        Self {
            book_name: book.book_name.clone(),
            total_page: book.total_page.clone(),
            publisher: book.publisher.clone(),
            author: book.author.clone(),
            release_year: book.release_year,
            stock: book.stock,
            cover_url: book.cover.clone().unwrap_or_default(),
        }
    }

    /// Required fields: name, author, publisher
    pub fn validate(&self) -> Result<()> {
        Validator::new()
            .required("book_name", &self.book_name, "book name is required")
            .required("author", &self.author, "author is required")
            .required("publisher", &self.publisher, "publisher is required")
            .validate()
            .to_result()
    }

    /// Replace the cover with an uploaded image URL
    #[must_use]
    pub fn with_cover(mut self, url: impl Into<String>) -> Self {
        self.cover_url = url.into();
        self
    }

    /// Build the create payload; a blank cover is left out
    pub fn into_create(self) -> Result<CreateBook> {
        self.validate()?;
        Ok(CreateBook {
            cover: non_blank(&self.cover_url),
            book_name: self.book_name,
            total_page: self.total_page,
            publisher: self.publisher,
            author: self.author,
            release_year: self.release_year,
            stock: self.stock,
        })
    }

    /// Build the update payload with every field the form shows
    pub fn into_update(self) -> Result<UpdateBook> {
        self.into_create().map(UpdateBook::from)
    }
}

// ============================================================================
// Members
// ============================================================================

/// Member form input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberDraft {
    pub member_name: String,
    pub age: u32,
    pub phone_number: String,
    pub email: String,
    pub level: String,
}

impl MemberDraft {
    /// Prefill the edit form
    pub fn from_member(member: &Member) -> Self {
        Self {
            member_name: member.member_name.clone(),
            age: member.age,
            phone_number: member.phone_number.clone(),
            email: member.email.clone(),
            level: member.level.clone(),
        }
    }

    /// Build the create payload from trimmed input; the name is required
    pub fn into_create(self) -> Result<CreateMember> {
        Validator::new()
            .required("member_name", &self.member_name, "member name is required")
            .validate()
            .to_result()?;

        Ok(CreateMember {
            member_name: self.member_name.trim().to_string(),
            age: self.age,
            phone_number: self.phone_number.trim().to_string(),
            email: self.email.trim().to_string(),
            level: self.level.trim().to_string(),
        })
    }

    /// Build the update payload
    pub fn into_update(self) -> Result<UpdateMember> {
        self.into_create().map(UpdateMember::from)
    }
}

// ============================================================================
// Employees
// ============================================================================

/// Employee form input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeDraft {
    pub employee_name: String,
    pub age: u32,
    pub email: String,
    pub phone_number: String,
    pub position: String,
}

impl EmployeeDraft {
    /// Prefill the edit form
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            employee_name: employee.employee_name.clone(),
            age: employee.age,
            email: employee.email.clone(),
            phone_number: employee.phone_number.clone(),
            position: employee.position.clone(),
        }
    }

    /// Build the create payload from trimmed input; the name is required
    pub fn into_create(self) -> Result<CreateEmployee> {
        Validator::new()
            .required("employee_name", &self.employee_name, "employee name is required")
            .validate()
            .to_result()?;

        Ok(CreateEmployee {
            employee_name: self.employee_name.trim().to_string(),
            age: self.age,
            email: self.email.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            position: self.position.trim().to_string(),
        })
    }

    /// Build the update payload
    pub fn into_update(self) -> Result<UpdateEmployee> {
        self.into_create().map(UpdateEmployee::from)
    }
}

// ============================================================================
// Loans
// ============================================================================

/// Loan form input
///
/// Book and member can be picked from a list (`id_*`) or typed into the
/// query fields as an id or a name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoanDraft {
    pub id_book: Option<i64>,
    pub book_query: String,
    pub id_member: Option<i64>,
    pub member_query: String,
    pub loan_date: String,
    pub due_date: String,
    /// Blank while the book is still out
    pub return_date: String,
}

impl LoanDraft {
    /// Prefill the edit form
    pub fn from_loan(loan: &Loan) -> Self {
        Self {
            id_book: loan.book_id(),
            book_query: String::new(),
            id_member: loan.member_id(),
            member_query: String::new(),
            loan_date: loan.loan_date.clone(),
            due_date: loan.due_date.clone(),
            return_date: loan.return_date.clone().unwrap_or_default(),
        }
    }

    fn resolve(&self, books: &[Book], members: &[Member]) -> (Option<i64>, Option<i64>) {
        (
            resolve_reference(self.id_book, &self.book_query, books),
            resolve_reference(self.id_member, &self.member_query, members),
        )
    }

    fn check_dates(&self) -> Validator {
        Validator::new()
            .required("loan_date", &self.loan_date, "loan date is required")
            .required("due_date", &self.due_date, "due date is required")
    }

    /// Build the create payload; dates and both references are required
    pub fn into_create(self, books: &[Book], members: &[Member]) -> Result<CreateLoan> {
        self.check_dates().validate().to_result()?;
        let (Some(id_book), Some(id_member)) = self.resolve(books, members) else {
            return Err(Error::missing_reference("book and member are required"));
        };

        Ok(CreateLoan {
            id_book,
            id_member,
            loan_date: self.loan_date.trim().to_string(),
            due_date: self.due_date.trim().to_string(),
            return_date: non_blank(&self.return_date),
        })
    }

    /// Build the update payload
    ///
    /// References are only sent when they resolve, so an edit that does not
    /// touch them leaves the stored loan pointing where it did.
    pub fn into_update(self, books: &[Book], members: &[Member]) -> Result<UpdateLoan> {
        self.check_dates().validate().to_result()?;
        let (id_book, id_member) = self.resolve(books, members);

        Ok(UpdateLoan {
            id_book,
            id_member,
            loan_date: Some(self.loan_date.trim().to_string()),
            due_date: Some(self.due_date.trim().to_string()),
            return_date: non_blank(&self.return_date),
        })
    }
}
