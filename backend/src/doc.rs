//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every employee handler and the envelope schemas. The
//! document backs Swagger UI in debug builds and is exported by
//! `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::index::{Endpoints, IndexBody};
use crate::inbound::http::schemas::{
    CreateEmployeeRequest, EmployeeBody, ErrorBody, UpdateEmployeeRequest,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee records API",
        description = "CRUD over employee records with declarative request validation.",
        license(name = "ISC", url = "https://opensource.org/license/isc-license-txt")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::index::index,
        crate::inbound::http::employees::list_employees,
        crate::inbound::http::employees::get_employee,
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::employees::update_employee,
        crate::inbound::http::employees::delete_employee,
    ),
    components(schemas(
        EmployeeBody,
        ErrorBody,
        CreateEmployeeRequest,
        UpdateEmployeeRequest,
        IndexBody,
        Endpoints
    )),
    tags(
        (name = "employees", description = "Employee record operations"),
        (name = "index", description = "Connectivity check")
    )
)]
pub struct ApiDoc;
