//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::{Clock, DefaultClock};
use tracing::info;

use employees_backend::Trace;
#[cfg(debug_assertions)]
use employees_backend::doc::ApiDoc;
use employees_backend::domain::EmployeeService;
use employees_backend::domain::ports::EmployeeRepository;
use employees_backend::inbound::http::configure;
use employees_backend::inbound::http::state::HttpState;
use employees_backend::middleware::Cors;
use employees_backend::outbound::memory::InMemoryEmployeeRepository;
use employees_backend::outbound::persistence::DieselEmployeeRepository;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn service_state<R>(repository: R, clock: Arc<dyn Clock>) -> HttpState
where
    R: EmployeeRepository + 'static,
{
    let service = Arc::new(EmployeeService::new(Arc::new(repository), clock));
    HttpState::new(service.clone(), service)
}

/// Select the store: PostgreSQL when a pool is configured, memory otherwise.
fn build_http_state(config: &ServerConfig) -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    match &config.db_pool {
        Some(pool) => {
            info!("serving employees from PostgreSQL");
            service_state(DieselEmployeeRepository::new(pool.clone()), clock)
        }
        None => {
            info!("no database configured; serving employees from memory");
            service_state(InMemoryEmployeeRepository::new(clock.clone()), clock)
        }
    }
}

fn build_app(
    http_state: web::Data<HttpState>,
    cors: Cors,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(http_state)
        .wrap(cors)
        .wrap(Trace);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.configure(configure)
}

/// Construct an Actix HTTP server for `config`.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config));
    let ServerConfig {
        bind_addr,
        allowed_origins,
        db_pool: _,
    } = config;
    let cors = Cors::new(allowed_origins);

    let server = HttpServer::new(move || build_app(http_state.clone(), cors.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "employee API server started");
    Ok(server)
}
