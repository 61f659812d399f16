//! World Clock — API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use worldclock_core::error::LookupError;
use worldclock_lookup::LookupClientError;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The country lookup client could not be built.
    #[error("lookup client error: {0}")]
    Lookup(#[from] LookupClientError),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),

    /// The trace exporter could not be set up.
    #[error("telemetry error: {0}")]
    Telemetry(String),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: &'static str,
}

/// HTTP-layer wrapper around `LookupError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub LookupError);

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            LookupError::InvalidRequest => StatusCode::BAD_REQUEST,
            LookupError::NotFound => StatusCode::NOT_FOUND,
            LookupError::UpstreamFailure(cause) => {
                tracing::error!(%cause, "country lookup failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorBody {
            error: self.0.user_message(),
        };

        (status, Json(body)).into_response()
    }
}
