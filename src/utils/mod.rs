//! Shared utilities: password hashing, JWT handling and request validation.

pub mod jwt;
pub mod password;
pub mod validate;
