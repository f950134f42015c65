//! PostgreSQL-backed `EmployeeRepository` implementation using Diesel ORM.
//!
//! Every mutation is a single statement with `RETURNING`, so updates and
//! deletes are atomic per record without an explicit transaction. An update
//! of an unknown id reports "absent" even when the patch also breaks a store
//! constraint, matching the in-memory adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{EmployeePersistenceError, EmployeeRepository};
use crate::domain::{Employee, EmployeeId, EmployeePatch, NewEmployee};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{EmployeeChangeset, EmployeeRow, NewEmployeeRow};
use super::pool::DbPool;
use super::schema::employees;

/// Diesel-backed implementation of the employee repository port.
#[derive(Clone)]
pub struct DieselEmployeeRepository {
    pool: DbPool,
}

impl DieselEmployeeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn constraint_error(err: &impl ToString) -> EmployeePersistenceError {
    EmployeePersistenceError::constraint(err.to_string())
}

#[async_trait]
impl EmployeeRepository for DieselEmployeeRepository {
    async fn list_all(&self) -> Result<Vec<Employee>, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<EmployeeRow> = employees::table
            .order(employees::created_at.desc())
            .select(EmployeeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<EmployeeRow> = employees::table
            .find(*id.as_uuid())
            .select(EmployeeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Employee::from))
    }

    async fn create(&self, employee: NewEmployee) -> Result<Employee, EmployeePersistenceError> {
        employee
            .check_constraints()
            .map_err(|err| constraint_error(&err))?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: EmployeeRow = diesel::insert_into(employees::table)
            .values(&NewEmployeeRow::new(Uuid::new_v4(), &employee))
            .returning(EmployeeRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn update_by_id(
        &self,
        id: &EmployeeId,
        patch: EmployeePatch,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        if let Err(err) = patch.check_constraints() {
            let exists: bool =
                diesel::select(diesel::dsl::exists(employees::table.find(*id.as_uuid())))
                    .get_result(&mut conn)
                    .await
                    .map_err(map_diesel_error)?;
            return if exists {
                Err(constraint_error(&err))
            } else {
                Ok(None)
            };
        }
        let changeset = EmployeeChangeset::from(&patch);

        let row: Option<EmployeeRow> = diesel::update(employees::table.find(*id.as_uuid()))
            .set((&changeset, employees::updated_at.eq(diesel::dsl::now)))
            .returning(EmployeeRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Employee::from))
    }

    async fn delete_by_id(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<EmployeeRow> = diesel::delete(employees::table.find(*id.as_uuid()))
            .returning(EmployeeRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Employee::from))
    }
}
