//! Diesel and pool error mapping for the employee repository.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::EmployeePersistenceError;

use super::pool::PoolError;

/// Pool failures mean the database is unreachable.
pub(crate) fn map_pool_error(error: PoolError) -> EmployeePersistenceError {
    EmployeePersistenceError::connection(error.to_string())
}

/// Map Diesel failures, keeping database details out of client messages.
pub(crate) fn map_diesel_error(error: DieselError) -> EmployeePersistenceError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(%error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            EmployeePersistenceError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            EmployeePersistenceError::constraint("employee record violates a store constraint")
        }
        DieselError::QueryBuilderError(_) => EmployeePersistenceError::query("database query error"),
        _ => EmployeePersistenceError::query("database error"),
    }
}
