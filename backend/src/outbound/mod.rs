//! Outbound adapters implementing the employee store port.
//!
//! - **memory**: process-local store, used when no database is configured.
//! - **persistence**: PostgreSQL via Diesel and `diesel-async`.

pub mod memory;
pub mod persistence;
