//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{EmployeesCommand, EmployeesQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub employees_query: Arc<dyn EmployeesQuery>,
    pub employees: Arc<dyn EmployeesCommand>,
}

impl HttpState {
    /// Construct state from the read and write ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use employees_backend::domain::EmployeeService;
    /// use employees_backend::inbound::http::state::HttpState;
    /// use employees_backend::outbound::memory::InMemoryEmployeeRepository;
    /// use mockable::DefaultClock;
    ///
    /// let clock = Arc::new(DefaultClock);
    /// let service = Arc::new(EmployeeService::new(
    ///     Arc::new(InMemoryEmployeeRepository::new(clock.clone())),
    ///     clock,
    /// ));
    /// let _state = HttpState::new(service.clone(), service);
    /// ```
    pub fn new(
        employees_query: Arc<dyn EmployeesQuery>,
        employees: Arc<dyn EmployeesCommand>,
    ) -> Self {
        Self {
            employees_query,
            employees,
        }
    }
}
