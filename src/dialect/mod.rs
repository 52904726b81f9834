//! Dialect Identification and Capability Lookup
//!
//! Dialect-conditional behavior (materialization support, concurrent-refresh
//! support, options-clause support) is modeled as a static capability table
//! keyed by dialect name, not as scattered conditionals and not as runtime
//! probing. Adding a dialect is a data change in the capability table, not a
//! logic change anywhere else.
//!
//! Unknown dialect names resolve to an empty capability record, so a
//! materialized view request degrades gracefully instead of failing on an
//! engine this crate has never heard of.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// What a dialect can do, as far as view DDL is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DialectCapabilities {
    /// Native `CREATE MATERIALIZED VIEW` support
    pub materialized_views: bool,
    /// `REFRESH MATERIALIZED VIEW CONCURRENTLY` support
    pub concurrent_refresh: bool,
    /// Trailing `WITH (key = value, ...)` options clause on view creation
    pub view_options: bool,
}

impl DialectCapabilities {
    /// Conservative default for dialects not in the table
    pub const NONE: DialectCapabilities = DialectCapabilities {
        materialized_views: false,
        concurrent_refresh: false,
        view_options: false,
    };
}

/// Static capability table, keyed by the lowercase dialect name reported by
/// the caller's connection layer.
static CAPABILITY_TABLE: Lazy<HashMap<&'static str, DialectCapabilities>> = Lazy::new(|| {
    let mut table = HashMap::new();

    table.insert(
        "postgresql",
        DialectCapabilities {
            materialized_views: true,
            concurrent_refresh: true,
            view_options: true,
        },
    );
    // TimescaleDB is wire- and DDL-compatible with PostgreSQL
    table.insert(
        "timescaledb",
        DialectCapabilities {
            materialized_views: true,
            concurrent_refresh: true,
            view_options: true,
        },
    );
    table.insert(
        "oracle",
        DialectCapabilities {
            materialized_views: true,
            concurrent_refresh: false,
            view_options: false,
        },
    );
    for name in ["sqlite", "mysql", "mariadb", "mssql", "duckdb"] {
        table.insert(name, DialectCapabilities::NONE);
    }

    table
});

/// A target database dialect, identified by name
///
/// The name comes from the caller's connection abstraction (e.g.
/// `"postgresql"`, `"sqlite"`, `"mysql"`) and is normalized to lowercase so
/// lookups match however the driver spells it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialect {
    name: String,
}

impl Dialect {
    pub fn new(name: impl Into<String>) -> Self {
        Dialect {
            name: name.into().to_ascii_lowercase(),
        }
    }

    /// The normalized dialect name, passed verbatim to definer callbacks
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Capability record for this dialect; unknown dialects get
    /// [`DialectCapabilities::NONE`]
    pub fn capabilities(&self) -> DialectCapabilities {
        CAPABILITY_TABLE
            .get(self.name.as_str())
            .copied()
            .unwrap_or(DialectCapabilities::NONE)
    }

    pub fn supports_materialized_views(&self) -> bool {
        self.capabilities().materialized_views
    }

    pub fn supports_concurrent_refresh(&self) -> bool {
        self.capabilities().concurrent_refresh
    }

    pub fn supports_view_options(&self) -> bool {
        self.capabilities().view_options
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
