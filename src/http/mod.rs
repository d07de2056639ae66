//! HTTP listener lifecycle.
//!
//! Plain HTTP only. The listener is bound once; a bind failure is fatal and
//! is reported to `main` as [`ServerError::Bind`].

mod server;

pub use server::{bind, serve, start_server, ServerError};
