//! Health check endpoint for container orchestration.
//!
//! A liveness probe: it only proves the process can answer HTTP. The payload
//! carries the current time so callers can spot a stale or cached answer.

use axum::response::Response;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::config::{HEALTH_MESSAGE, STATUS_OK};
use crate::error::AppError;

use super::json_response;

#[derive(Debug, Serialize)]
pub struct HealthPayload {
    pub status: &'static str,
    /// RFC3339, UTC, millisecond precision
    pub timestamp: String,
    pub message: &'static str,
}

impl HealthPayload {
    /// Builds a payload stamped with the current wall-clock time.
    pub fn now() -> Self {
        Self {
            status: STATUS_OK,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            message: HEALTH_MESSAGE,
        }
    }
}

/// Health check handler.
pub async fn health() -> Result<Response, AppError> {
    json_response(&HealthPayload::now())
}
