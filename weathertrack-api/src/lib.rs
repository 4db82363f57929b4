//! HTTP surface for the weather records service.
//!
//! Exposed as a library so integration tests can assemble the same app the
//! binary runs.

pub mod error;
pub mod routes;

pub use routes::AppState;
