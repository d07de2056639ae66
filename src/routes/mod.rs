//! HTTP route handlers.
//!
//! Two fixed paths are served, each answering any method. Everything else
//! falls through to a JSON 404. Every response is marked `no-store` so that
//! probes are never answered by an intermediate cache.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod ping;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode, Uri},
    middleware,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use ::http::header::CACHE_CONTROL;
use serde::Serialize;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::error::AppError;
use crate::middleware::request_id_layer;

pub const HEALTH_PATH: &str = "/health";
pub const PING_PATH: &str = "/ping";

/// Registered paths, advertised in 404 bodies and at startup.
pub const ENDPOINTS: &[&str] = &[HEALTH_PATH, PING_PATH];

/// Serialize `payload` into a 200 `application/json` response.
///
/// Encoding failures become [`AppError::Serialization`], which is logged and
/// answered with a 500.
pub fn json_response<T: Serialize>(payload: &T) -> Result<Response, AppError> {
    let body = serde_json::to_vec(payload)?;
    Ok((
        StatusCode::OK,
        [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        body,
    )
        .into_response())
}

/// Fallback for unregistered paths.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

/// Creates the Axum router with both endpoints, the 404 fallback and the layers.
pub fn create_router() -> Router {
    Router::new()
        .route(HEALTH_PATH, any(health::health))
        .route(PING_PATH, any(ping::ping))
        .fallback(not_found)
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
