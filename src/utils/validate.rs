use axum::Json;
use axum::extract::{FromRequest, Request, rejection::JsonRejection};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// JSON extractor that runs validator rules after deserialization.
///
/// Deserialization failures and validation failures both surface as 400
/// responses through AppError.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// Returns true when an optional string field carries a non-empty value.
///
/// Mirrors the truthiness check used across the CMS handlers: a missing key
/// and an empty string are both treated as absent.
pub fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// Verifies that every required field is present.
///
/// Returns a 400 error naming the missing fields, e.g.
/// `Missing required fields: email, role`.
pub fn check_required_fields(fields: &[(&'static str, bool)]) -> AppResult<()> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::BadRequest {
            message: format!("Missing required fields: {}", missing.join(", ")),
        })
    }
}
