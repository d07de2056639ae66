//! Ping endpoint: a constant reply for quick reachability checks.

use axum::response::Response;
use serde::Serialize;

use crate::config::{PING_MESSAGE, STATUS_OK};
use crate::error::AppError;

use super::json_response;

#[derive(Debug, Serialize)]
pub struct PingPayload {
    pub message: &'static str,
    pub status: &'static str,
}

pub const PING: PingPayload = PingPayload {
    message: PING_MESSAGE,
    status: STATUS_OK,
};

pub async fn ping() -> Result<Response, AppError> {
    json_response(&PING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_matches_contract() {
        assert_eq!(
            serde_json::to_value(&PING).unwrap(),
            serde_json::json!({"message": "pong", "status": "ok"})
        );
    }
}
