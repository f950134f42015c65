//! Driving ports for the employee use-cases.
//!
//! HTTP handlers depend on these traits only, so they can be exercised
//! against any store without I/O.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeDraft, EmployeeId, EmployeePatch, Error};

/// Read-side employee use-cases.
#[async_trait]
pub trait EmployeesQuery: Send + Sync {
    /// All employees, most recently created first. An empty list is success.
    async fn list_employees(&self) -> Result<Vec<Employee>, Error>;

    /// One employee; `NotFound` when absent.
    async fn get_employee(&self, id: &EmployeeId) -> Result<Employee, Error>;
}

/// Write-side employee use-cases.
#[async_trait]
pub trait EmployeesCommand: Send + Sync {
    /// Persist a new employee.
    async fn create_employee(&self, draft: EmployeeDraft) -> Result<Employee, Error>;

    /// Merge the supplied fields; `NotFound` when absent.
    async fn update_employee(&self, id: &EmployeeId, patch: EmployeePatch)
    -> Result<Employee, Error>;

    /// Remove an employee; `NotFound` when absent.
    async fn delete_employee(&self, id: &EmployeeId) -> Result<(), Error>;
}
