//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::App;
use actix_web::body::BoxBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::web;
use mockable::DefaultClock;

use super::configure;
use super::state::HttpState;
use crate::domain::EmployeeService;
use crate::domain::ports::EmployeeRepository;
use crate::outbound::memory::InMemoryEmployeeRepository;

/// Handler state over `repository`.
pub fn state_over<R>(repository: R) -> HttpState
where
    R: EmployeeRepository + 'static,
{
    let service = Arc::new(EmployeeService::new(
        Arc::new(repository),
        Arc::new(DefaultClock),
    ));
    HttpState::new(service.clone(), service)
}

/// Handler state over an empty in-memory store.
pub fn in_memory_state() -> HttpState {
    state_over(InMemoryEmployeeRepository::new(Arc::new(DefaultClock)))
}

/// Application with every route mounted over an empty in-memory store.
pub fn employee_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<BoxBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    app_with_state(in_memory_state())
}

/// Application with every route mounted over `state`.
pub fn app_with_state(state: HttpState) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<BoxBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .configure(configure)
}
