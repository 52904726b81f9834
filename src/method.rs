//! View Creation Method Resolution
//!
//! A view is created by one of three strategies:
//! - **Simple**: a plain `CREATE VIEW`, no stored state
//! - **Materialized**: a native `CREATE MATERIALIZED VIEW`
//! - **Table**: a plain table populated from the definition, simulating a
//!   materialized view on dialects that lack one
//!
//! Resolution never fails. A materialized request on a dialect without
//! native support and without the table-simulation opt-in degrades to a
//! simple view, so the same declarations work against the production engine
//! and an in-memory test engine. The degradation is logged at warn level.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::ViewConfig;
use crate::dialect::Dialect;

/// The strategy used to create (and later drop/refresh) a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMethod {
    Simple,
    Materialized,
    Table,
}

impl ViewMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMethod::Simple => "simple",
            ViewMethod::Materialized => "materialized",
            ViewMethod::Table => "table",
        }
    }

    /// Resolve the creation method for a view configuration on a dialect
    ///
    /// An explicit `method_override` always wins. Otherwise the materialized
    /// flag is honored where the dialect can materialize natively, simulated
    /// with a table where the config opted in, and silently degraded to a
    /// simple view as the last resort.
    ///
    /// Recomputed per call: the same view may be used against multiple
    /// engines, so nothing is cached across dialects.
    pub fn resolve(dialect: &Dialect, config: &ViewConfig) -> ViewMethod {
        if let Some(method) = config.method_override() {
            return method;
        }

        if !config.materialized() {
            return ViewMethod::Simple;
        }

        if dialect.supports_materialized_views() {
            return ViewMethod::Materialized;
        }

        if config.materialized_as_table() {
            return ViewMethod::Table;
        }

        warn!(
            dialect = dialect.name(),
            "materialized view requested but dialect cannot materialize and \
             materialized_as_table is off; degrading to a simple view"
        );
        ViewMethod::Simple
    }
}

impl std::fmt::Display for ViewMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
