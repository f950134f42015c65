//! Domain ports for the hexagonal boundary.
//!
//! Driving ports ([`EmployeesQuery`], [`EmployeesCommand`]) are what inbound
//! adapters call; the driven port ([`EmployeeRepository`]) is what storage
//! adapters implement.

mod macros;
pub(crate) use macros::define_port_error;

mod employee_repository;
mod employees;

#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
pub use employee_repository::{EmployeePersistenceError, EmployeeRepository};
pub use employees::{EmployeesCommand, EmployeesQuery};
