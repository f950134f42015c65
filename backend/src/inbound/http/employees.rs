//! Employee CRUD handlers.
//!
//! ```text
//! GET    /api/employees
//! GET    /api/employees/{id}
//! POST   /api/employees       {"name":"Ann Lee","age":30,"position":"Engineer","salary":50000}
//! PUT    /api/employees/{id}  {"salary":55000}
//! DELETE /api/employees/{id}
//! ```
//!
//! Write bodies are read as raw JSON and checked by the rule sets before any
//! store access, so each field gets its own validation message.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde_json::Value;

use super::ApiResult;
use super::schemas::{
    CreateEmployeeRequest, EmployeeBody, ErrorBody, Success, UpdateEmployeeRequest,
};
use super::state::HttpState;
use super::validation::{parse_create_body, parse_employee_id, parse_update_body};

const CREATED_MESSAGE: &str = "Employee created successfully";

/// List every employee, most recently created first.
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "Employees", body = Success<Vec<EmployeeBody>>),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["employees"],
    operation_id = "listEmployees"
)]
#[get("/employees")]
pub async fn list_employees(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Success<Vec<EmployeeBody>>>> {
    let employees = state.employees_query.list_employees().await?;
    let data = employees.into_iter().map(EmployeeBody::from).collect();
    Ok(web::Json(Success::new(data)))
}

/// Fetch one employee.
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(("id" = String, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Employee", body = Success<EmployeeBody>),
        (status = 404, description = "Employee not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["employees"],
    operation_id = "getEmployee"
)]
#[get("/employees/{id}")]
pub async fn get_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Success<EmployeeBody>>> {
    let id = parse_employee_id(&path)?;
    let employee = state.employees_query.get_employee(&id).await?;
    Ok(web::Json(Success::new(employee.into())))
}

/// Create an employee.
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = Success<EmployeeBody>),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("/employees")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let draft = parse_create_body(&payload)?;
    let employee = state.employees.create_employee(draft).await?;
    Ok(HttpResponse::Created().json(Success::with_message(
        EmployeeBody::from(employee),
        CREATED_MESSAGE,
    )))
}

/// Update the supplied fields of an employee.
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    params(("id" = String, Path, description = "Employee identifier")),
    request_body = UpdateEmployeeRequest,
    responses(
        (status = 200, description = "Employee updated", body = Success<EmployeeBody>),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 404, description = "Employee not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["employees"],
    operation_id = "updateEmployee"
)]
#[put("/employees/{id}")]
pub async fn update_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<Success<EmployeeBody>>> {
    let patch = parse_update_body(&payload)?;
    let id = parse_employee_id(&path)?;
    let employee = state.employees.update_employee(&id, patch).await?;
    Ok(web::Json(Success::new(employee.into())))
}

/// Delete an employee.
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(("id" = String, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Employee deleted", body = Success<Option<EmployeeBody>>),
        (status = 404, description = "Employee not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployee"
)]
#[delete("/employees/{id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Success<Option<EmployeeBody>>>> {
    let id = parse_employee_id(&path)?;
    state.employees.delete_employee(&id).await?;
    Ok(web::Json(Success::new(None)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{EmployeePersistenceError, MockEmployeeRepository};
    use crate::inbound::http::test_utils::{app_with_state, employee_app, state_over};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use rstest::rstest;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({"name": "Ann Lee", "age": 30, "position": "Engineer", "salary": 50000})
    }

    #[rstest]
    #[actix_web::test]
    async fn list_on_empty_store_is_success() {
        let app = test::init_service(employee_app()).await;
        let request = test::TestRequest::get().uri("/api/employees").to_request();
        let body: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(body, json!({"success": true, "data": []}));
    }

    #[rstest]
    #[actix_web::test]
    async fn lost_store_connection_is_a_redacted_internal_error() {
        let mut repository = MockEmployeeRepository::new();
        repository.expect_list_all().returning(|| {
            Err(EmployeePersistenceError::connection(
                "password authentication failed for user \"payroll_admin\" at 10.0.0.5:5432",
            ))
        });
        let app = test::init_service(app_with_state(state_over(repository))).await;
        let request = test::TestRequest::get().uri("/api/employees").to_request();

        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(
            body,
            json!({"success": false, "message": "Internal server error"})
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn create_returns_created_envelope() {
        let app = test::init_service(employee_app()).await;
        let request = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(valid_body())
            .to_request();

        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["message"], json!(CREATED_MESSAGE));
        assert_eq!(body["data"]["name"], json!("Ann Lee"));
        assert!(body["data"]["id"].is_string());
    }

    #[rstest]
    #[actix_web::test]
    async fn create_with_failing_rules_is_rejected() {
        let app = test::init_service(employee_app()).await;
        let request = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(json!({"name": "A", "age": 0, "position": "Engineer", "salary": 1}))
            .to_request();

        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorBody = test::read_body_json(response).await;
        assert_eq!(
            body,
            ErrorBody::new("name must be at least 2 characters, age must be at least 18")
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn whitespace_padded_name_fails_store_constraint() {
        let app = test::init_service(employee_app()).await;
        let mut body = valid_body();
        body["name"] = json!("  A  ");
        let request = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(body)
            .to_request();

        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorBody = test::read_body_json(response).await;
        assert_eq!(body, ErrorBody::new("Name must be at least 2 characters"));
    }

    #[rstest]
    #[case("/api/employees/00000000-0000-0000-0000-000000000001")]
    #[case("/api/employees/not-a-uuid")]
    #[actix_web::test]
    async fn unknown_ids_are_not_found(#[case] uri: &str) {
        let app = test::init_service(employee_app()).await;
        for request in [
            test::TestRequest::get().uri(uri).to_request(),
            test::TestRequest::delete().uri(uri).to_request(),
            test::TestRequest::put()
                .uri(uri)
                .set_json(json!({"salary": 1}))
                .to_request(),
        ] {
            let response = test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
            let body: ErrorBody = test::read_body_json(response).await;
            assert_eq!(body, ErrorBody::new("Employee not found"));
        }
    }

    #[rstest]
    #[actix_web::test]
    async fn update_validation_runs_before_lookup() {
        let app = test::init_service(employee_app()).await;
        let request = test::TestRequest::put()
            .uri("/api/employees/00000000-0000-0000-0000-000000000001")
            .set_json(json!({"salary": -5}))
            .to_request();

        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorBody = test::read_body_json(response).await;
        assert_eq!(body, ErrorBody::new("salary must be at least 0"));
    }

    #[rstest]
    #[actix_web::test]
    async fn delete_returns_null_data_then_not_found() {
        let app = test::init_service(employee_app()).await;
        let create = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(valid_body())
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, create).await;
        let id = created["data"]["id"].as_str().expect("created id").to_owned();
        let uri = format!("/api/employees/{id}");

        let first = test::TestRequest::delete().uri(&uri).to_request();
        let body: Value = test::call_and_read_body_json(&app, first).await;
        assert_eq!(body, json!({"success": true, "data": null}));

        let second = test::TestRequest::delete().uri(&uri).to_request();
        let response = test::call_service(&app, second).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[actix_web::test]
    async fn get_returns_stored_record() {
        let app = test::init_service(employee_app()).await;
        let create = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(valid_body())
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, create).await;
        let id = created["data"]["id"].as_str().expect("created id").to_owned();

        let request = test::TestRequest::get()
            .uri(&format!("/api/employees/{id}"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(body["data"]["id"], json!(id));
        assert_eq!(body["data"]["position"], json!("Engineer"));
        assert!(body.get("message").is_none());
    }
}
