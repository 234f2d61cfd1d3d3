//! Parsing of PostgreSQL constraint violation messages.

use regex::Regex;
use std::sync::OnceLock;

/// Utility for extracting structured information from PostgreSQL
/// constraint violation messages.
pub struct ConstraintParser;

/// Compiled regex patterns for constraint parsing, cached for reuse
struct RegexPatterns {
    key_value: Regex,
    column_name: Regex,
    table_name: Regex,
}

impl RegexPatterns {
    fn new() -> Self {
        Self {
            // Matches "Key (field)=(value)" in PostgreSQL detail messages
            key_value: Regex::new(r"Key \(([^)]+)\)=\(([^)]*)\)").unwrap(),
            // Matches column names in quotes
            column_name: Regex::new(r#"column "([^"]+)""#).unwrap(),
            // Matches table names in quotes
            table_name: Regex::new(r#"table "([^"]+)""#).unwrap(),
        }
    }
}

static REGEX_PATTERNS: OnceLock<RegexPatterns> = OnceLock::new();

impl ConstraintParser {
    fn patterns() -> &'static RegexPatterns {
        REGEX_PATTERNS.get_or_init(RegexPatterns::new)
    }

    /// Parses a unique constraint violation message.
    ///
    /// Attempts to extract entity, field, and value from the constraint name
    /// (e.g. `users_email_key`) plus the `Key (...)=(...)` detail line.
    ///
    /// # Returns
    /// Optional tuple of (entity, field, value) if parsing succeeds
    pub fn parse_unique_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        // Try to parse from constraint name first (e.g., "users_email_key")
        if let Some(constraint) = constraint_name {
            if let Some((entity, field)) = Self::parse_constraint_name(constraint) {
                if let Some(value) = Self::extract_value_from_message(message) {
                    return Some((entity, field, value));
                }
                // Fallback to generic value if the detail line is absent
                return Some((entity, field, "duplicate_value".to_string()));
            }
        }

        // Fallback: parse from the error message directly
        if let Some((field, value)) = Self::extract_key_value_from_message(message) {
            let entity =
                Self::extract_table_from_message(message).unwrap_or_else(|| "resource".to_string());
            return Some((entity, field, value));
        }

        None
    }

    /// Parses a not null constraint violation message.
    ///
    /// # Returns
    /// Optional tuple of (entity, field) if parsing succeeds
    pub fn parse_not_null_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String)> {
        if let Some(field) = Self::extract_column_from_message(message) {
            let entity = Self::extract_table_from_message(message)
                .or_else(|| {
                    constraint_name.and_then(|c| Self::parse_constraint_name(c).map(|(e, _)| e))
                })
                .unwrap_or_else(|| "resource".to_string());
            return Some((entity, field));
        }
        None
    }

    /// Parses a foreign key constraint violation message.
    ///
    /// # Returns
    /// Optional tuple of (entity, field, referenced_value) if parsing succeeds
    pub fn parse_foreign_key_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        let (field, value) = Self::extract_key_value_from_message(message)?;
        let entity = Self::extract_table_from_message(message)
            .or_else(|| constraint_name.and_then(|c| Self::parse_constraint_name(c).map(|(e, _)| e)))
            .unwrap_or_else(|| "resource".to_string());
        Some((entity, field, value))
    }

    /// Parses a check constraint violation message.
    ///
    /// # Returns
    /// Optional tuple of (entity, field) if parsing succeeds
    pub fn parse_check_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String)> {
        if let Some(constraint) = constraint_name {
            if let Some((entity, field)) = Self::parse_constraint_name(constraint) {
                return Some((entity, field));
            }
        }
        let field = Self::extract_column_from_message(message)?;
        let entity =
            Self::extract_table_from_message(message).unwrap_or_else(|| "resource".to_string());
        Some((entity, field))
    }

    /// Splits a conventional constraint name (`{table}_{column}_{suffix}`)
    /// into (table, column).
    fn parse_constraint_name(constraint: &str) -> Option<(String, String)> {
        let trimmed = constraint
            .strip_suffix("_key")
            .or_else(|| constraint.strip_suffix("_unique"))
            .or_else(|| constraint.strip_suffix("_fkey"))
            .or_else(|| constraint.strip_suffix("_check"))
            .or_else(|| constraint.strip_suffix("_idx"))?;

        let (entity, field) = trimmed.split_once('_')?;
        if entity.is_empty() || field.is_empty() {
            return None;
        }
        Some((entity.to_string(), field.to_string()))
    }

    /// Extracts the value from a `Key (field)=(value)` detail line.
    fn extract_value_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .key_value
            .captures(message)
            .map(|caps| caps[2].to_string())
    }

    /// Extracts (field, value) from a `Key (field)=(value)` detail line.
    fn extract_key_value_from_message(message: &str) -> Option<(String, String)> {
        Self::patterns()
            .key_value
            .captures(message)
            .map(|caps| (caps[1].to_string(), caps[2].to_string()))
    }

    /// Extracts a quoted column name from the message.
    fn extract_column_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .column_name
            .captures(message)
            .map(|caps| caps[1].to_string())
    }

    /// Extracts a quoted table name from the message.
    fn extract_table_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .table_name
            .captures(message)
            .map(|caps| caps[1].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unique_violation_with_constraint_name() {
        let message = "duplicate key value violates unique constraint \"users_email_key\"\nDETAIL: Key (email)=(coach@dunes.com) already exists.";
        let result = ConstraintParser::parse_unique_violation(message, Some("users_email_key"));
        assert_eq!(
            result,
            Some((
                "users".to_string(),
                "email".to_string(),
                "coach@dunes.com".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_unique_violation_without_detail_line() {
        let message = "duplicate key value violates unique constraint \"apps_slug_key\"";
        let result = ConstraintParser::parse_unique_violation(message, Some("apps_slug_key"));
        assert_eq!(
            result,
            Some((
                "apps".to_string(),
                "slug".to_string(),
                "duplicate_value".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_unique_violation_from_message_only() {
        let message = "duplicate key value\nDETAIL: Key (slug)=(chess-mate) already exists in table \"apps\".";
        let result = ConstraintParser::parse_unique_violation(message, None);
        assert_eq!(
            result,
            Some((
                "apps".to_string(),
                "slug".to_string(),
                "chess-mate".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_not_null_violation() {
        let message = "null value in column \"email\" violates not-null constraint";
        let result = ConstraintParser::parse_not_null_violation(message, None);
        assert_eq!(result, Some(("resource".to_string(), "email".to_string())));
    }

    #[test]
    fn test_parse_foreign_key_violation() {
        let message = "insert or update on table \"statistics\" violates foreign key constraint \"statistics_athlete_id_fkey\"\nDETAIL: Key (athlete_id)=(999) is not present in table \"athletes\".";
        let result = ConstraintParser::parse_foreign_key_violation(
            message,
            Some("statistics_athlete_id_fkey"),
        );
        assert_eq!(
            result,
            Some((
                "statistics".to_string(),
                "athlete_id".to_string(),
                "999".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_constraint_name_rejects_unknown_suffix() {
        assert_eq!(ConstraintParser::parse_constraint_name("users_email"), None);
    }
}
