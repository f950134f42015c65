//! Wire shapes for the employee API.
//!
//! Every response is wrapped in an envelope: `{success: true, data, message?}`
//! on success and `{success: false, message}` on failure. Employee fields are
//! camelCase with RFC 3339 timestamps.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::Employee;

/// Employee as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeBody {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub position: String,
    pub salary: f64,
    #[schema(value_type = String, format = DateTime)]
    pub hire_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

impl From<Employee> for EmployeeBody {
    fn from(employee: Employee) -> Self {
        Self {
            id: *employee.id.as_uuid(),
            name: employee.name,
            age: employee.age,
            position: employee.position,
            salary: employee.salary,
            hire_date: employee.hire_date,
            user_id: employee.user_id,
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}

/// Successful response envelope.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Success<T> {
    /// Always `true`.
    pub success: bool,
    /// Optional human-readable note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Response payload; `null` for deletions.
    pub data: T,
}

impl<T> Success<T> {
    /// Wrap `data` without a message.
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    /// Wrap `data` with a message.
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data,
        }
    }
}

/// Failure envelope produced by the error responder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, serde::Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Always `false`.
    pub success: bool,
    /// Human-readable explanation; redacted for internal failures.
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// `POST /api/employees` request body.
///
/// Handlers read the raw JSON so every field can be validated with its own
/// message; this type documents the accepted shape.
#[derive(Debug, serde::Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    #[schema(min_length = 2, max_length = 100, example = "Ann Lee")]
    pub name: String,
    #[schema(minimum = 18, example = 30)]
    pub age: i32,
    #[schema(max_length = 50, example = "Engineer")]
    pub position: String,
    #[schema(minimum = 0, example = 50000)]
    pub salary: f64,
    /// RFC 3339 timestamp or `YYYY-MM-DD`; defaults to the creation time.
    #[schema(example = "2024-01-15")]
    pub hire_date: Option<String>,
    pub user_id: Option<String>,
}

/// `PUT /api/employees/{id}` request body; every field is optional.
#[derive(Debug, serde::Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    #[schema(min_length = 2, max_length = 100)]
    pub name: Option<String>,
    #[schema(minimum = 18)]
    pub age: Option<i32>,
    #[schema(max_length = 50)]
    pub position: Option<String>,
    #[schema(minimum = 0)]
    pub salary: Option<f64>,
    pub hire_date: Option<String>,
    pub user_id: Option<String>,
}
