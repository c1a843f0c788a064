//! Error types for the HTTP API.
//!
//! [`ApiError`] unifies request failures into a single enum that is
//! converted into an Axum response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Index
//! and query failures are `400 Bad Request`; a response that cannot be
//! encoded is `500 Internal Server Error`. Either way the body is
//! `{"error": ...}` carrying the underlying error message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use conftalks_core::IndexError;
use conftalks_types::ErrorBody;

/// Errors that can occur while serving an API request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The event index rejected the query.
    #[error(transparent)]
    Index(#[from] IndexError),

    /// A query parameter could not be interpreted.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// A response body could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status reported for this error.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Index(_) | Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, axum::Json(body)).into_response()
    }
}
