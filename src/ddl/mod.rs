//! DDL Generation: View Lifecycle Statements
//!
//! This module turns a resolved creation method plus view metadata into the
//! ordered SQL statement sequences for the three lifecycle operations:
//! - **Create**: `CREATE VIEW` / `CREATE MATERIALIZED VIEW` / `CREATE TABLE AS`
//! - **Drop**: the matching `DROP` statement
//! - **Refresh**: nothing for simple views, `REFRESH MATERIALIZED VIEW` for
//!   native materialization, a delete-then-insert pair for table simulation
//!
//! Generators are pure statement builders. They never execute anything;
//! sequences are finite `Vec`s and generating twice yields the same
//! statements. Execution order and transactional atomicity belong to the
//! caller; in particular the table-refresh pair is only atomic if the
//! caller wraps both statements in one transaction.

pub mod create;
pub mod drop;
pub mod refresh;

pub use create::create_statements;
pub use drop::drop_statements;
pub use refresh::refresh_statements;

use std::fmt;

use serde::Serialize;

/// What a generated statement does, for callers that want to route or log
/// statements without string-sniffing the SQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    CreateView,
    CreateMaterializedView,
    CreateTableAs,
    DropView,
    DropMaterializedView,
    DropTable,
    RefreshMaterializedView,
    DeleteRows,
    InsertRows,
}

/// An executable SQL statement, ready to be run by the caller's connection
/// layer inside a transaction of the caller's choosing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    kind: StatementKind,
    sql: String,
}

impl Statement {
    pub(crate) fn new(kind: StatementKind, sql: String) -> Self {
        Statement { kind, sql }
    }

    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

/// Flags for create-statement generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreateOptions {
    /// `CREATE OR REPLACE`. Honored for simple views only; no portable
    /// syntax exists for materialized views or tables, so it is ignored
    /// there rather than raised
    pub or_replace: bool,
    /// `IF NOT EXISTS`
    pub if_not_exists: bool,
}

/// Flags for drop-statement generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropOptions {
    /// `IF EXISTS`
    pub if_exists: bool,
    /// `CASCADE`. Applies to views and materialized views; not applicable
    /// to the table simulation and ignored there
    pub cascade: bool,
}
