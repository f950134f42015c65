//! Request middleware.
//!
//! Cross-cutting request concerns: trace identifiers with access logging,
//! and cross-origin headers for the browser client.

pub mod cors;
pub mod trace;

pub use cors::Cors;
pub use trace::Trace;
