//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Row structs (`models.rs`) and the table definition (`schema.rs`) stay
//! internal; the adapter converts them to domain types and maps every
//! database failure to [`EmployeePersistenceError`](crate::domain::ports::EmployeePersistenceError).
//!
//! ```ignore
//! use employees_backend::outbound::persistence::{DbPool, DieselEmployeeRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/employees", 10)).await?;
//! let repository = DieselEmployeeRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_employee_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_employee_repository::DieselEmployeeRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
