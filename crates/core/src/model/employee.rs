//! Library staff

use super::{null_as_default, Record};
use serde::{Deserialize, Serialize};

/// Employee as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id_employee: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub employee_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub age: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: String,
}

impl Record for Employee {
    fn id(&self) -> i64 {
        self.id_employee
    }

    fn display_name(&self) -> &str {
        &self.employee_name
    }
}

/// Payload for `POST /employe/add`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEmployee {
    pub employee_name: String,
    pub age: u32,
    pub email: String,
    pub phone_number: String,
    pub position: String,
}

/// Partial payload for `PUT /employe/edit/:id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateEmployee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl From<CreateEmployee> for UpdateEmployee {
    fn from(employee: CreateEmployee) -> Self {
        Self {
            employee_name: Some(employee.employee_name),
            age: Some(employee.age),
            email: Some(employee.email),
            phone_number: Some(employee.phone_number),
            position: Some(employee.position),
        }
    }
}
