//! Library members

use super::{null_as_default, Record};
use serde::{Deserialize, Serialize};

/// Member as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id_member: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub member_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub age: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    /// Membership tier
    #[serde(default, deserialize_with = "null_as_default")]
    pub level: String,
}

impl Record for Member {
    fn id(&self) -> i64 {
        self.id_member
    }

    fn display_name(&self) -> &str {
        &self.member_name
    }
}

/// Payload for `POST /member/add`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMember {
    pub member_name: String,
    pub age: u32,
    pub phone_number: String,
    pub email: String,
    pub level: String,
}

/// Partial payload for `PUT /member/edit/:id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl From<CreateMember> for UpdateMember {
    fn from(member: CreateMember) -> Self {
        Self {
            member_name: Some(member.member_name),
            age: Some(member.age),
            phone_number: Some(member.phone_number),
            email: Some(member.email),
            level: Some(member.level),
        }
    }
}
