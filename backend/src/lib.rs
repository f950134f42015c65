//! Employee records backend.
//!
//! A REST service over a single employee resource. Request bodies are checked
//! against declarative rule sets, handlers call domain ports, and every
//! failure leaves through one error responder as `{success: false, message}`.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
