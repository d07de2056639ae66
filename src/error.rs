use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::config::STATUS_ERROR;
use crate::routes::ENDPOINTS;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Endpoint not found: {0}")]
    NotFound(String),

    #[error("Failed to encode response: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// JSON body sent with every error response.
#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub error: &'static str,
    pub status: &'static str,
    pub available_endpoints: &'static [&'static str],
}

impl ErrorPayload {
    fn new(error: &'static str) -> Self {
        Self {
            error,
            status: STATUS_ERROR,
            available_endpoints: ENDPOINTS,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, payload) = match &self {
            AppError::NotFound(path) => {
                tracing::debug!(%path, "No route for path");
                (StatusCode::NOT_FOUND, ErrorPayload::new("Endpoint not found"))
            }
            AppError::Serialization(_) => {
                tracing::error!("Internal error: {:?}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorPayload::new("Internal server error"),
                )
            }
        };

        // The error body is all static strings; if even this fails there is nothing
        // left to encode, so fall back to a bare status.
        match serde_json::to_vec(&payload) {
            Ok(body) => (
                status,
                [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
                body,
            )
                .into_response(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode error payload");
                status.into_response()
            }
        }
    }
}
