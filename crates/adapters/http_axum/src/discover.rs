//! The discovery endpoint — a single GET route multiplexed by `action`.

use std::collections::HashMap;

use axum::Json;
use axum::extract::{Query, State};

use roster_app::dispatcher::{self, Action, Reply};

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /discover?action=<name>&…`
///
/// Decodes the action from the query string, runs it against the registry,
/// and answers `{}` for mutating actions or the device array for `list`.
pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Reply>, ApiError> {
    let action = Action::decode(&params)?;
    let reply = dispatcher::dispatch(&state.registry, action)?;
    Ok(Json(reply))
}
