use std::fmt;

/// Main error type for view_orm
///
/// Every variant corresponds to a configuration problem that is detectable
/// before any statement is handed to the caller. Execution-time SQL errors
/// (syntax, missing objects, permissions) belong to the execution layer;
/// this crate never runs a statement, so it never wraps them.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewError {
    // ============ Configuration Errors (42Pxx) ============
    /// Neither a static definition nor a definer callback was configured
    MissingDefinition {
        view: String,
    },

    // ============ Identifier Errors (42xxx) ============
    /// View, column, or option-key name failed identifier validation
    InvalidIdentifier {
        parameter: String,
        value: String,
        reason: String,
    },

    /// Raw SQL definition does not look like a SELECT statement
    InvalidDefinition {
        sql: String,
        reason: String,
    },

    // ============ Option Rendering Errors (22xxx) ============
    /// Option value could not be rendered as a SQL literal
    OptionSerialization {
        key: String,
        reason: String,
    },
}

impl ViewError {
    /// Get the PostgreSQL SQLSTATE code for this error
    pub fn sqlstate(&self) -> &'static str {
        use ViewError::*;
        match self {
            MissingDefinition { .. } => "42P16", // Invalid table definition
            InvalidIdentifier { .. } => "42602", // Invalid name
            InvalidDefinition { .. } => "42601", // Syntax error
            OptionSerialization { .. } => "22023", // Invalid parameter value
        }
    }
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ViewError::*;
        match self {
            MissingDefinition { view } => {
                write!(
                    f,
                    "View '{}' has neither a definition nor a definer; configure at least one",
                    view
                )
            }
            InvalidIdentifier { parameter, value, reason } => {
                write!(f, "Invalid identifier for '{}': {} (value: {})", parameter, reason, value)
            }
            InvalidDefinition { sql, reason } => {
                write!(f, "Invalid view definition: {}\nSQL: {}", reason,
                       if sql.len() > 100 { &sql[..100] } else { sql })
            }
            OptionSerialization { key, reason } => {
                write!(f, "Option '{}' cannot be rendered as a SQL literal: {}", key, reason)
            }
        }
    }
}

impl std::error::Error for ViewError {}

/// Result type for view operations
pub type ViewResult<T> = Result<T, ViewError>;

/// Convert serde_json::Error to ViewError
impl From<serde_json::Error> for ViewError {
    fn from(e: serde_json::Error) -> Self {
        ViewError::OptionSerialization {
            key: "unknown".to_string(),
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_definition_message() {
        let err = ViewError::MissingDefinition {
            view: "leaderboard".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("leaderboard"));
        assert!(msg.contains("definer"));
        assert_eq!(err.sqlstate(), "42P16");
    }

    #[test]
    fn test_invalid_identifier_message() {
        let err = ViewError::InvalidIdentifier {
            parameter: "view_name".to_string(),
            value: "users; DROP".to_string(),
            reason: "contains dangerous character ';'".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("view_name"));
        assert!(msg.contains("';'"));
        assert_eq!(err.sqlstate(), "42602");
    }

    #[test]
    fn test_invalid_definition_truncates_long_sql() {
        let long_sql = format!("SELECT {}", "x, ".repeat(100));
        let err = ViewError::InvalidDefinition {
            sql: long_sql,
            reason: "test".to_string(),
        };

        // Display must not dump the full statement
        assert!(err.to_string().len() < 250);
    }

    #[test]
    fn test_sqlstates_are_stable() {
        let errors = vec![
            ViewError::MissingDefinition { view: "v".to_string() },
            ViewError::InvalidIdentifier {
                parameter: "p".to_string(),
                value: "v".to_string(),
                reason: "r".to_string(),
            },
            ViewError::InvalidDefinition { sql: "s".to_string(), reason: "r".to_string() },
            ViewError::OptionSerialization { key: "k".to_string(), reason: "r".to_string() },
        ];

        for err in &errors {
            let state = err.sqlstate();
            assert_eq!(state.len(), 5, "SQLSTATE must be five characters: {state}");
        }
    }
}
