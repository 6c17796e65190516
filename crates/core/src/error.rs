//! Structured errors with codes, context and recovery suggestions
//!
//! Errors raised before any request leaves the process, blank required
//! fields and unresolved loan references, are reported through this type so
//! a host can render them inline next to the offending form.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// What kind of client-side check failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// One or more required form fields are blank
    ValidationError = 6000,
    /// A loan form names a book or member that could not be resolved
    MissingReference = 6004,
}

impl ErrorCode {
    /// Get the numeric code
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Form field the host should highlight, if the code maps to one
    pub fn form_hint(&self) -> Option<&'static str> {
        match self {
            Self::ValidationError => None,
            Self::MissingReference => Some("reference"),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// Main error type with rich context
#[derive(Error, Debug)]
pub struct Error {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional context
    pub context: Option<String>,
    /// Recovery suggestion
    pub suggestion: Option<String>,
}

/// Forms show the message on its own, so `Display` only carries the message.
/// Use [`Error::to_report`] for the full picture.
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Create a new error
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
            suggestion: None,
        }
    }

    /// Add context to the error
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add a recovery suggestion
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Convert to a serializable report
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code,
            code_str: self.code.to_string(),
            message: self.message.clone(),
            context: self.context.clone(),
            suggestion: self.suggestion.clone(),
        }
    }

    /// Blank required field(s)
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    /// Unresolved loan book or member
    pub fn missing_reference(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingReference, message)
            .with_suggestion("Pick an existing entry or type its numeric id")
    }

    /// Whether a required field was left blank
    pub fn is_validation(&self) -> bool {
        self.code == ErrorCode::ValidationError
    }
}

/// Serializable error report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub code_str: String,
    pub message: String,
    pub context: Option<String>,
    pub suggestion: Option<String>,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
