//! Driven port for employee persistence.
//!
//! Adapters own identifier allocation and the `created_at` / `updated_at`
//! timestamps, and must re-check the record constraints on every write.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeId, EmployeePatch, NewEmployee};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by employee store adapters.
    pub enum EmployeePersistenceError {
        /// The store could not be reached.
        Connection { message: String } => "employee store connection failed: {message}",
        /// A query or mutation failed during execution.
        Query { message: String } => "employee store query failed: {message}",
        /// The write would break a record constraint.
        Constraint { message: String } => "{message}",
    }
}

/// Store of employee records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Every record, most recently created first.
    async fn list_all(&self) -> Result<Vec<Employee>, EmployeePersistenceError>;

    /// Fetch one record.
    async fn find_by_id(&self, id: &EmployeeId)
    -> Result<Option<Employee>, EmployeePersistenceError>;

    /// Insert a record, allocating its identifier and timestamps.
    async fn create(&self, employee: NewEmployee) -> Result<Employee, EmployeePersistenceError>;

    /// Atomically merge `patch` into the record and refresh `updated_at`.
    ///
    /// Returns `None` when no record has this identifier.
    async fn update_by_id(
        &self,
        id: &EmployeeId,
        patch: EmployeePatch,
    ) -> Result<Option<Employee>, EmployeePersistenceError>;

    /// Remove a record, returning it if it existed.
    async fn delete_by_id(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeePersistenceError>;
}
