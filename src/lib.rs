//! Heartbeat: a minimal HTTP health and ping service.
//!
//! Serves `/health` (status plus a fresh RFC3339 timestamp) and `/ping`
//! (a constant reply) as JSON. Unknown paths get a JSON 404.

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod routes;

pub use error::AppError;
pub use routes::create_router;
