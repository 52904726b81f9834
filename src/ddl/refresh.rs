//! REFRESH statement generation
//!
//! Simple views have no stored state: refresh is an empty sequence.
//!
//! Native materialized views refresh with a single statement; CONCURRENTLY
//! is emitted only when requested and the dialect supports it (it also
//! requires a unique index on the view, which is the caller's
//! responsibility; this crate does not create one).
//!
//! Table-simulated views refresh via full replacement:
//!
//! ```sql
//! DELETE FROM name;
//! INSERT INTO name (col, ...) <definition>;
//! ```
//!
//! The pair is NOT atomic by itself. A concurrent reader can observe the
//! transient empty state unless the caller wraps both statements in one
//! transaction with appropriate isolation.

use tracing::debug;

use super::{Statement, StatementKind};
use crate::dialect::Dialect;
use crate::method::ViewMethod;

/// Build the refresh sequence for a resolved method
///
/// `columns` is the declared column order, used only by the table
/// simulation's INSERT; `definition_sql` may be empty for the other methods.
pub fn refresh_statements(
    method: ViewMethod,
    name: &str,
    columns: &[String],
    definition_sql: &str,
    concurrently: bool,
    dialect: &Dialect,
) -> Vec<Statement> {
    match method {
        ViewMethod::Simple => Vec::new(),

        ViewMethod::Materialized => {
            let concurrent = concurrently && dialect.supports_concurrent_refresh();
            let sql = if concurrent {
                format!("REFRESH MATERIALIZED VIEW CONCURRENTLY {name}")
            } else {
                format!("REFRESH MATERIALIZED VIEW {name}")
            };
            debug!(view = name, concurrent, "generated refresh statement");
            vec![Statement::new(StatementKind::RefreshMaterializedView, sql)]
        }

        ViewMethod::Table => {
            // Full replace. Column order is the declared order; whether it
            // matches the definition's projection is checked by the engine,
            // not here.
            let insert = if columns.is_empty() {
                format!("INSERT INTO {name} {definition_sql}")
            } else {
                format!("INSERT INTO {name} ({}) {definition_sql}", columns.join(", "))
            };
            debug!(view = name, "generated table refresh pair");
            vec![
                Statement::new(StatementKind::DeleteRows, format!("DELETE FROM {name}")),
                Statement::new(StatementKind::InsertRows, insert),
            ]
        }
    }
}
