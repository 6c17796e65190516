//! Response envelope used by the member, employee and loan endpoints

use serde::{Deserialize, Serialize};

/// Wrapper carrying status metadata around the actual payload
///
/// Every field is optional on the wire. A missing `data` unwraps to `None`
/// for single entities and to an empty list for collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub response_code: Option<u16>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl<T> Envelope<T> {
    /// Take the payload out of the envelope
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl<T> Envelope<Vec<T>> {
    /// Take the list payload, treating a missing `data` as empty
    pub fn into_list(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}
