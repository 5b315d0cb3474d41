//! # roster-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the discovery endpoint: `GET /discover` carrying an `action`
//!   query parameter plus action-specific key/value pairs
//! - Map query parameters into dispatcher calls (driving adapter)
//! - Map dispatcher results and errors into JSON responses and status codes
//! - Serve a `/health` liveness probe
//!
//! ## Dependency rule
//! Depends on `roster-app` (registry, dispatcher) and `roster-domain`
//! (error taxonomy). Never leaks axum types into the application core.

pub mod discover;
pub mod error;
pub mod router;
pub mod state;
