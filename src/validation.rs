//! Input Validation
//!
//! Validation functions used throughout view_orm to keep caller-supplied
//! names out of generated DDL unless they are plain SQL identifiers.
//!
//! Rules:
//! 1. **Whitelist, not blacklist**: only alphanumeric + underscore
//! 2. **Validate early**: names are checked when a [`View`](crate::View) or
//!    [`ViewConfig`](crate::config::ViewConfig) is built, before any
//!    statement generation
//! 3. **Fail with context**: errors carry the parameter name they came from

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ViewError, ViewResult};

/// Maximum identifier length (PostgreSQL's limit, the strictest of the
/// targeted dialects)
pub const MAX_IDENTIFIER_LEN: usize = 63;

static SELECT_SHAPE: Lazy<Regex> = Lazy::new(|| {
    // A definition must start with SELECT or a CTE prologue. Case-insensitive,
    // leading whitespace already trimmed by callers.
    Regex::new(r"(?i)^(SELECT|WITH)\b").expect("static regex is valid")
});

/// Validate a SQL identifier (view, column, or option-key name)
///
/// Allows alphanumeric characters and underscores, rejects everything else:
/// quotes, semicolons, dashes, spaces, a leading digit, over-length names.
///
/// # Arguments
///
/// * `identifier` - String to validate
/// * `param_name` - Parameter name for error messages
pub fn validate_identifier(identifier: &str, param_name: &str) -> ViewResult<()> {
    if identifier.is_empty() {
        return Err(ViewError::InvalidIdentifier {
            parameter: param_name.to_string(),
            value: identifier.to_string(),
            reason: "identifier cannot be empty".to_string(),
        });
    }

    if !identifier.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ViewError::InvalidIdentifier {
            parameter: param_name.to_string(),
            value: sanitize_for_message(identifier),
            reason: "identifier must contain only alphanumeric characters and underscores"
                .to_string(),
        });
    }

    // Identifiers can't start with a digit (unless quoted, which we don't do)
    if identifier.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return Err(ViewError::InvalidIdentifier {
            parameter: param_name.to_string(),
            value: sanitize_for_message(identifier),
            reason: "identifier cannot start with a digit".to_string(),
        });
    }

    if identifier.len() > MAX_IDENTIFIER_LEN {
        return Err(ViewError::InvalidIdentifier {
            parameter: param_name.to_string(),
            value: format!("{}... ({} chars)", &identifier[..20], identifier.len()),
            reason: format!("identifier too long (max {MAX_IDENTIFIER_LEN} characters)"),
        });
    }

    Ok(())
}

/// Validate that a raw SQL definition looks like a SELECT statement
///
/// This is a shape check, not a parse: the definition text itself is an
/// opaque expression owned by the caller's query layer.
pub fn validate_select_sql(sql: &str) -> ViewResult<()> {
    if sql.is_empty() {
        return Err(ViewError::InvalidDefinition {
            sql: sql.to_string(),
            reason: "definition cannot be empty".to_string(),
        });
    }

    if !SELECT_SHAPE.is_match(sql) {
        return Err(ViewError::InvalidDefinition {
            sql: sql.to_string(),
            reason: "expected a SELECT (or WITH ... SELECT) statement".to_string(),
        });
    }

    Ok(())
}

/// Truncate a value for inclusion in an error message
fn sanitize_for_message(s: &str) -> String {
    let max_len = 50;
    if s.len() > max_len {
        format!("{}...", &s[..max_len])
    } else {
        s.to_string()
    }
}
