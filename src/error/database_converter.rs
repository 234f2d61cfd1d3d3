//! Conversion of diesel errors into [`AppError`] variants.

use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::error::{AppError, ConstraintParser};

/// Converts diesel database errors into structured `AppError` variants,
/// extracting entity and field names from constraint violation messages
/// where possible.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a diesel error to an appropriate `AppError` variant.
    ///
    /// # Arguments
    /// * `error` - The diesel error to convert
    /// * `operation` - Description of the database operation that failed
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(kind, info) => {
                Self::convert_database_error(kind, info, operation)
            }
            DieselError::NotFound => AppError::NotFound {
                entity: "resource".to_string(),
                field: "id".to_string(),
                value: "unknown".to_string(),
            },
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }

    fn convert_database_error(
        kind: DatabaseErrorKind,
        info: Box<dyn diesel::result::DatabaseErrorInformation + Send + Sync>,
        operation: &str,
    ) -> AppError {
        let message = info.message();
        let constraint_name = info.constraint_name();

        match kind {
            DatabaseErrorKind::UniqueViolation => {
                if let Some((entity, field, value)) =
                    ConstraintParser::parse_unique_violation(message, constraint_name)
                {
                    AppError::Duplicate {
                        entity,
                        field,
                        value,
                    }
                } else {
                    AppError::Database {
                        operation: operation.to_string(),
                        source: anyhow::Error::msg(format!(
                            "Unique constraint violation: {}",
                            message
                        )),
                    }
                }
            }
            DatabaseErrorKind::NotNullViolation => {
                if let Some((entity, field)) =
                    ConstraintParser::parse_not_null_violation(message, constraint_name)
                {
                    AppError::Validation {
                        field,
                        reason: format!("Field is required for {}", entity),
                    }
                } else {
                    AppError::Database {
                        operation: operation.to_string(),
                        source: anyhow::Error::msg(format!(
                            "Not null constraint violation: {}",
                            message
                        )),
                    }
                }
            }
            DatabaseErrorKind::ForeignKeyViolation => {
                if let Some((entity, field, referenced_value)) =
                    ConstraintParser::parse_foreign_key_violation(message, constraint_name)
                {
                    AppError::Validation {
                        field,
                        reason: format!(
                            "Invalid reference to {} with value '{}'",
                            entity, referenced_value
                        ),
                    }
                } else {
                    AppError::Database {
                        operation: operation.to_string(),
                        source: anyhow::Error::msg(format!(
                            "Foreign key constraint violation: {}",
                            message
                        )),
                    }
                }
            }
            DatabaseErrorKind::CheckViolation => {
                if let Some((entity, field)) =
                    ConstraintParser::parse_check_violation(message, constraint_name)
                {
                    AppError::Validation {
                        field,
                        reason: format!("Check constraint failed for {} field", entity),
                    }
                } else {
                    AppError::Database {
                        operation: operation.to_string(),
                        source: anyhow::Error::msg(format!(
                            "Check constraint violation: {}",
                            message
                        )),
                    }
                }
            }
            _ => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::msg(format!("Database error: {}", message)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockDatabaseErrorInfo {
        message: String,
        constraint_name: Option<String>,
    }

    impl diesel::result::DatabaseErrorInformation for MockDatabaseErrorInfo {
        fn message(&self) -> &str {
            &self.message
        }
        fn details(&self) -> Option<&str> {
            None
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            None
        }
        fn column_name(&self) -> Option<&str> {
            None
        }
        fn constraint_name(&self) -> Option<&str> {
            self.constraint_name.as_deref()
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn unique_violation_error() -> DieselError {
        DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new(MockDatabaseErrorInfo {
                message: "duplicate key value violates unique constraint \"users_email_key\"\nDETAIL: Key (email)=(player@dunes.com) already exists.".to_string(),
                constraint_name: Some("users_email_key".to_string()),
            }),
        )
    }

    #[test]
    fn test_unique_violation_becomes_duplicate() {
        let err = DatabaseErrorConverter::convert_diesel_error(unique_violation_error(), "insert user");
        match err {
            AppError::Duplicate {
                entity,
                field,
                value,
            } => {
                assert_eq!(entity, "users");
                assert_eq!(field, "email");
                assert_eq!(value, "player@dunes.com");
            }
            other => panic!("Expected Duplicate, got {:?}", other),
        }
    }

    #[test]
    fn test_not_found_becomes_not_found() {
        let err = DatabaseErrorConverter::convert_diesel_error(DieselError::NotFound, "find user");
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[test]
    fn test_not_null_violation_becomes_validation() {
        let diesel_err = DieselError::DatabaseError(
            DatabaseErrorKind::NotNullViolation,
            Box::new(MockDatabaseErrorInfo {
                message: "null value in column \"password_hash\" violates not-null constraint"
                    .to_string(),
                constraint_name: None,
            }),
        );
        let err = DatabaseErrorConverter::convert_diesel_error(diesel_err, "insert user");
        match err {
            AppError::Validation { field, .. } => assert_eq!(field, "password_hash"),
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_error_becomes_database() {
        let diesel_err = DieselError::DatabaseError(
            DatabaseErrorKind::SerializationFailure,
            Box::new(MockDatabaseErrorInfo {
                message: "could not serialize access".to_string(),
                constraint_name: None,
            }),
        );
        let err = DatabaseErrorConverter::convert_diesel_error(diesel_err, "update stats");
        match err {
            AppError::Database { operation, .. } => assert_eq!(operation, "update stats"),
            other => panic!("Expected Database, got {:?}", other),
        }
    }
}
