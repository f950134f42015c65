//! HTTP inbound adapter exposing the employee REST endpoints.

pub mod employees;
pub mod error;
pub mod index;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Mount the index, the `/api` employee routes, the JSON body error handler
/// and the unmatched-route responder.
///
/// Callers provide [`state::HttpState`] as `web::Data`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use employees_backend::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(index::index)
        .service(
            web::scope("/api")
                .service(employees::list_employees)
                .service(employees::create_employee)
                .service(employees::get_employee)
                .service(employees::update_employee)
                .service(employees::delete_employee),
        )
        .default_service(web::to(error::route_not_found));
}
