use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use skuvault_infra::StoreError;

use crate::app::dto::ErrorEnvelope;

/// Everything a handler can fail with, already classified by HTTP meaning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No row matched a single-product lookup (or a listing came back empty).
    #[error("Product not found")]
    NotFound,

    /// The request body did not parse as the expected shape.
    #[error("Invalid request payload")]
    InvalidPayload,

    /// Any other storage failure; the message is passed through verbatim.
    #[error("{0}")]
    Storage(String),
}

impl ApiError {
    /// Treat every store error, including "no rows", as a storage failure.
    ///
    /// Used by operations where a missing row is not a client-facing 404
    /// (create's re-read, delete).
    pub fn storage(err: StoreError) -> Self {
        Self::Storage(err.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidPayload => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
            StoreError::Backend(msg) => ApiError::Storage(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
        }
        json_error(status, self.to_string())
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(ErrorEnvelope {
            error: message.into(),
        }),
    )
        .into_response()
}
