//! Middleware components for request processing.
//!
//! This module contains middleware for logging, request ID tracking,
//! and JWT authentication.

mod auth;
mod logging;
mod request_id;

pub use auth::{AuthUser, auth_middleware};
pub use logging::logging_middleware;
pub use request_id::{RequestId, request_id_middleware};
