//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the discovery endpoint at `/discover` and a liveness probe at
/// `/health`. Every route carries a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level, and a permissive [`CorsLayer`]
/// so browser clients on other origins can query the registry.
pub fn build(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/discover", get(crate::discover::handle))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
