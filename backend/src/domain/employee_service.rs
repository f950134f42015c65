//! Employee service implementing the driving ports on top of a store.
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{error, info, warn};

use crate::domain::ports::{
    EmployeePersistenceError, EmployeeRepository, EmployeesCommand, EmployeesQuery,
};
use crate::domain::{
    EMPLOYEE_NOT_FOUND, Employee, EmployeeDraft, EmployeeId, EmployeePatch, Error,
};

/// Employee use-cases backed by an [`EmployeeRepository`].
#[derive(Clone)]
pub struct EmployeeService<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> EmployeeService<R> {
    /// Create a service over `repository`, reading "now" from `clock`.
    ///
    /// ```rust
    /// # use std::sync::Arc;
    /// # use employees_backend::domain::EmployeeService;
    /// # use employees_backend::outbound::memory::InMemoryEmployeeRepository;
    /// # use mockable::DefaultClock;
    /// let clock = Arc::new(DefaultClock);
    /// let repository = Arc::new(InMemoryEmployeeRepository::new(clock.clone()));
    /// let _service = EmployeeService::new(repository, clock);
    /// ```
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}

/// Translate store failures into domain errors.
///
/// Connection loss and query faults both become internal errors. Their
/// messages are logged here and redacted before they reach the client.
pub(crate) fn map_persistence_error(error: EmployeePersistenceError) -> Error {
    match error {
        EmployeePersistenceError::Connection { message } => {
            warn!(%message, "employee store unreachable");
            Error::internal(message)
        }
        EmployeePersistenceError::Query { message } => {
            error!(%message, "employee store query failed");
            Error::internal(message)
        }
        EmployeePersistenceError::Constraint { message } => Error::invalid_request(message),
    }
}

fn not_found() -> Error {
    Error::not_found(EMPLOYEE_NOT_FOUND)
}

#[async_trait]
impl<R> EmployeesQuery for EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn list_employees(&self) -> Result<Vec<Employee>, Error> {
        self.repository
            .list_all()
            .await
            .map_err(map_persistence_error)
    }

    async fn get_employee(&self, id: &EmployeeId) -> Result<Employee, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(not_found)
    }
}

#[async_trait]
impl<R> EmployeesCommand for EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn create_employee(&self, draft: EmployeeDraft) -> Result<Employee, Error> {
        let employee = self
            .repository
            .create(draft.into_new_employee(self.clock.utc()))
            .await
            .map_err(map_persistence_error)?;
        info!(employee_id = %employee.id, "employee created");
        Ok(employee)
    }

    async fn update_employee(
        &self,
        id: &EmployeeId,
        patch: EmployeePatch,
    ) -> Result<Employee, Error> {
        let employee = self
            .repository
            .update_by_id(id, patch)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(not_found)?;
        info!(employee_id = %employee.id, "employee updated");
        Ok(employee)
    }

    async fn delete_employee(&self, id: &EmployeeId) -> Result<(), Error> {
        self.repository
            .delete_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(not_found)?;
        info!(employee_id = %id, "employee deleted");
        Ok(())
    }
}
