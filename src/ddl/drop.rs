//! DROP statement generation
//!
//! One statement per view, matching the method the view was created with:
//!
//! ```sql
//! DROP VIEW [IF EXISTS] name [CASCADE]
//! DROP MATERIALIZED VIEW [IF EXISTS] name [CASCADE]
//! DROP TABLE [IF EXISTS] name
//! ```
//!
//! CASCADE is not applicable to the table simulation; the flag is ignored
//! there. Drop generation needs no definition, so it cannot fail.

use tracing::debug;

use super::{DropOptions, Statement, StatementKind};
use crate::method::ViewMethod;

/// Build the drop sequence for a resolved method
pub fn drop_statements(method: ViewMethod, name: &str, opts: &DropOptions) -> Vec<Statement> {
    let (kind, object) = match method {
        ViewMethod::Simple => (StatementKind::DropView, "VIEW"),
        ViewMethod::Materialized => (StatementKind::DropMaterializedView, "MATERIALIZED VIEW"),
        ViewMethod::Table => (StatementKind::DropTable, "TABLE"),
    };

    let mut sql = format!("DROP {object} ");
    if opts.if_exists {
        sql.push_str("IF EXISTS ");
    }
    sql.push_str(name);

    if opts.cascade && method != ViewMethod::Table {
        sql.push_str(" CASCADE");
    }

    debug!(view = name, method = method.as_str(), "generated drop statement");
    vec![Statement::new(kind, sql)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_simple() {
        let stmts = drop_statements(ViewMethod::Simple, "active_users", &DropOptions::default());
        assert_eq!(stmts.len(), 1);
        assert_eq!(stmts[0].kind(), StatementKind::DropView);
        assert_eq!(stmts[0].sql(), "DROP VIEW active_users");
    }

    #[test]
    fn test_drop_simple_if_exists_cascade() {
        let opts = DropOptions {
            if_exists: true,
            cascade: true,
        };
        let stmts = drop_statements(ViewMethod::Simple, "v", &opts);
        assert_eq!(stmts[0].sql(), "DROP VIEW IF EXISTS v CASCADE");
    }

    #[test]
    fn test_drop_materialized() {
        let opts = DropOptions {
            if_exists: true,
            cascade: false,
        };
        let stmts = drop_statements(ViewMethod::Materialized, "mv", &opts);
        assert_eq!(stmts[0].kind(), StatementKind::DropMaterializedView);
        assert_eq!(stmts[0].sql(), "DROP MATERIALIZED VIEW IF EXISTS mv");
    }

    #[test]
    fn test_drop_table_ignores_cascade() {
        let opts = DropOptions {
            if_exists: false,
            cascade: true,
        };
        let stmts = drop_statements(ViewMethod::Table, "leaderboard", &opts);
        assert_eq!(stmts[0].kind(), StatementKind::DropTable);
        assert_eq!(stmts[0].sql(), "DROP TABLE leaderboard");
    }
}
