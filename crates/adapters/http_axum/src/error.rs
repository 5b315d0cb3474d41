//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use roster_domain::error::{DecodeError, RosterError};

/// JSON error body returned by the discovery endpoint.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`RosterError`] to an HTTP response with the matching status code.
///
/// Decoding failures answer `422 Unprocessable Entity`; referencing an
/// unregistered device answers `404 Not Found`. Both leave the registry
/// untouched and the service running.
pub struct ApiError(RosterError);

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        Self(err)
    }
}

impl From<DecodeError> for ApiError {
    fn from(err: DecodeError) -> Self {
        Self(RosterError::Decode(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            RosterError::Decode(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            RosterError::UnknownDevice(err) => (StatusCode::NOT_FOUND, err.to_string()),
        };
        tracing::debug!(%status, error = %message, "discovery request rejected");

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
