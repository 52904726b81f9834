//! View Definition Expressions
//!
//! The query that defines a view comes from an external query-building layer
//! and is treated as a renderable-to-SQL black box: this crate composes it
//! into DDL, it never parses it. [`ViewDefinition`] is that seam.
//!
//! Two ways to supply a definition on a [`ViewConfig`](crate::config::ViewConfig):
//! - a static expression, used as-is for every dialect,
//! - a definer callback that receives the target dialect's name and returns
//!   an expression, for views whose query must differ per engine.

use std::sync::Arc;

use crate::dialect::Dialect;
use crate::error::ViewResult;
use crate::validation::validate_select_sql;

/// A SELECT expression that can render itself for a target dialect
///
/// Implementations produced by query builders may branch on the dialect;
/// the rendered text is composed into DDL verbatim.
pub trait ViewDefinition: Send + Sync {
    fn to_sql(&self, dialect: &Dialect) -> String;
}

impl std::fmt::Debug for dyn ViewDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<dyn ViewDefinition>")
    }
}

/// Shared handle to a definition expression
pub type DefinitionRef = Arc<dyn ViewDefinition>;

/// Caller-supplied callback producing a definition for a dialect name
///
/// The dialect name string is passed through exactly as reported by
/// [`Dialect::name`]; whatever branching the callback does is opaque here.
pub type Definer = Arc<dyn Fn(&str) -> DefinitionRef + Send + Sync>;

/// A raw SQL SELECT used as a view definition
///
/// Validated at construction to look like a SELECT (or WITH) statement, so a
/// typo'd definition fails at configuration time rather than at execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSql {
    sql: String,
}

impl RawSql {
    pub fn new(sql: impl Into<String>) -> ViewResult<Self> {
        let sql = sql.into().trim().to_string();
        validate_select_sql(&sql)?;
        Ok(RawSql { sql })
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }
}

impl ViewDefinition for RawSql {
    fn to_sql(&self, _dialect: &Dialect) -> String {
        self.sql.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ViewError;

    #[test]
    fn test_raw_sql_accepts_select() {
        let def = RawSql::new("SELECT id, name FROM users WHERE active").unwrap();
        assert_eq!(def.sql(), "SELECT id, name FROM users WHERE active");
    }

    #[test]
    fn test_raw_sql_accepts_cte() {
        assert!(RawSql::new("WITH t AS (SELECT 1) SELECT * FROM t").is_ok());
    }

    #[test]
    fn test_raw_sql_trims_whitespace() {
        let def = RawSql::new("  SELECT 1\n").unwrap();
        assert_eq!(def.sql(), "SELECT 1");
    }

    #[test]
    fn test_raw_sql_rejects_non_select() {
        let result = RawSql::new("DROP TABLE users");
        match result.unwrap_err() {
            ViewError::InvalidDefinition { .. } => {}
            other => panic!("Wrong error type: {other:?}"),
        }
    }

    #[test]
    fn test_rendering_ignores_dialect() {
        let def = RawSql::new("SELECT 1").unwrap();
        assert_eq!(def.to_sql(&Dialect::new("postgresql")), def.to_sql(&Dialect::new("sqlite")));
    }
}
