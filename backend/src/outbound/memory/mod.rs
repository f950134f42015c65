//! In-process employee store.
//!
//! Used when no database URL is configured and by the HTTP tests. Records
//! live in insertion order behind one mutex, so each operation is a single
//! critical section and therefore atomic.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::ports::{EmployeePersistenceError, EmployeeRepository};
use crate::domain::{Employee, EmployeeId, EmployeePatch, NewEmployee};

/// `Mutex`-guarded employee store.
pub struct InMemoryEmployeeRepository {
    records: Mutex<Vec<Employee>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryEmployeeRepository {
    /// Create an empty store stamping timestamps from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            clock,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Employee>>, EmployeePersistenceError> {
        self.records
            .lock()
            .map_err(|_| EmployeePersistenceError::query("employee store lock poisoned"))
    }
}

fn constraint_error(err: &impl ToString) -> EmployeePersistenceError {
    EmployeePersistenceError::constraint(err.to_string())
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn list_all(&self) -> Result<Vec<Employee>, EmployeePersistenceError> {
        let mut employees: Vec<Employee> = self.lock()?.iter().rev().cloned().collect();
        // Stable sort keeps later insertions first when timestamps tie.
        employees.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(employees)
    }

    async fn find_by_id(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        Ok(self.lock()?.iter().find(|record| record.id == *id).cloned())
    }

    async fn create(&self, employee: NewEmployee) -> Result<Employee, EmployeePersistenceError> {
        employee
            .check_constraints()
            .map_err(|err| constraint_error(&err))?;
        let now = self.clock.utc();
        let NewEmployee {
            name,
            age,
            position,
            salary,
            hire_date,
            user_id,
        } = employee;
        let record = Employee {
            id: EmployeeId::random(),
            name,
            age,
            position,
            salary,
            hire_date,
            user_id,
            created_at: now,
            updated_at: now,
        };
        self.lock()?.push(record.clone());
        Ok(record)
    }

    async fn update_by_id(
        &self,
        id: &EmployeeId,
        patch: EmployeePatch,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        let mut records = self.lock()?;
        let Some(record) = records.iter_mut().find(|record| record.id == *id) else {
            return Ok(None);
        };
        patch
            .check_constraints()
            .map_err(|err| constraint_error(&err))?;
        patch.apply_to(record, self.clock.utc());
        Ok(Some(record.clone()))
    }

    async fn delete_by_id(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        let mut records = self.lock()?;
        let position = records.iter().position(|record| record.id == *id);
        Ok(position.map(|index| records.remove(index)))
    }
}
