//! Domain primitives, validation rules and use-cases.
//!
//! Purpose: keep the employee record, its constraints and the request
//! validation contract free of HTTP and database concerns. Inbound adapters
//! call the ports in [`ports`]; outbound adapters implement them.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic failure carried to the responder.
//! - `Employee`, `EmployeeDraft`, `EmployeePatch`, `NewEmployee`: the record
//!   and its write-side shapes.
//! - `RuleSet`, `FieldRule`, `CREATE_EMPLOYEE_RULES`, `UPDATE_EMPLOYEE_RULES`:
//!   declarative request-body validation.
//! - `EmployeeService`: the use-case implementation.

pub mod employee;
pub mod employee_service;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod validation;

pub use self::employee::{
    ConstraintViolations, EMPLOYEE_NOT_FOUND, Employee, EmployeeDraft, EmployeeId, EmployeePatch,
    NewEmployee,
};
pub use self::employee_service::EmployeeService;
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::validation::{
    CREATE_EMPLOYEE_RULES, FieldRule, RuleSet, UPDATE_EMPLOYEE_RULES,
};
