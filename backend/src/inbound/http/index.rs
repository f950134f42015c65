//! Service index used by clients to check connectivity.

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

/// Map of operation names to their routes.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
    pub create_employee: &'static str,
    pub get_employees: &'static str,
    pub get_employee: &'static str,
    pub update_employee: &'static str,
    pub delete_employee: &'static str,
}

/// `GET /` response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct IndexBody {
    pub success: bool,
    pub message: &'static str,
    pub endpoints: Endpoints,
}

const ENDPOINTS: Endpoints = Endpoints {
    create_employee: "POST /api/employees",
    get_employees: "GET /api/employees",
    get_employee: "GET /api/employees/:id",
    update_employee: "PUT /api/employees/:id",
    delete_employee: "DELETE /api/employees/:id",
};

/// Report that the server is up and list the employee routes.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Server is running", body = IndexBody)),
    tags = ["index"],
    operation_id = "index"
)]
#[get("/")]
pub async fn index() -> web::Json<IndexBody> {
    web::Json(IndexBody {
        success: true,
        message: "Employee API Server is running!",
        endpoints: ENDPOINTS,
    })
}
