//! Error handling for both services.
//!
//! `AppError` is the single error type crossing layer boundaries; diesel
//! and pool errors convert into it via `From`, and axum turns it into a
//! JSON error response.

mod app_error;
mod constraint_parser;
mod database_converter;

pub use app_error::{AppError, AppResult};
pub use constraint_parser::ConstraintParser;
pub use database_converter::DatabaseErrorConverter;
