//! # view_orm
//!
//! Declarative database views for ORM-mapped entities: simple, materialized,
//! and table-simulated, with dialect-aware DDL generation.
//!
//! A view is declared once (name, ordered columns, and a [`ViewConfig`]
//! carrying its query definition and materialization flags) and this crate
//! turns that declaration into the right SQL for whatever engine it is
//! pointed at:
//!
//! - dialects with native materialized views get `CREATE MATERIALIZED VIEW`
//!   and `REFRESH MATERIALIZED VIEW [CONCURRENTLY]`
//! - dialects without them can simulate one with a plain table, refreshed by
//!   full delete-and-reinsert
//! - everything else degrades to a plain `CREATE VIEW`
//!
//! The same declarations therefore work against the production engine and a
//! lightweight test engine without dialect checks in caller code.
//!
//! This crate only *builds* statements. Executing them, and wrapping the
//! multi-statement refresh of a table-simulated view in a transaction, is
//! the caller's responsibility.
//!
//! ```
//! use view_orm::{CreateOptions, Dialect, RawSql, View, ViewConfig};
//!
//! # fn main() -> Result<(), view_orm::ViewError> {
//! let config = ViewConfig::builder()
//!     .definition(RawSql::new("SELECT id, email FROM users WHERE active")?)
//!     .materialized(true)
//!     .materialized_as_table(true)
//!     .build()?;
//! let view = View::new("active_emails", ["id", "email"], config)?;
//!
//! let pg = Dialect::new("postgresql");
//! for stmt in view.create_statements(&pg, &CreateOptions::default())? {
//!     // hand stmt.sql() to your connection layer
//!     println!("{stmt}");
//! }
//! # Ok(()) }
//! ```

pub mod config;
pub mod ddl;
pub mod dialect;
pub mod definition;
pub mod error;
pub mod method;
pub mod registry;
pub mod validation;
pub mod view;

pub use config::{ViewConfig, ViewConfigBuilder};
pub use ddl::{CreateOptions, DropOptions, Statement, StatementKind};
pub use dialect::{Dialect, DialectCapabilities};
pub use definition::{Definer, DefinitionRef, RawSql, ViewDefinition};
pub use error::{ViewError, ViewResult};
pub use method::ViewMethod;
pub use registry::ViewRegistry;
pub use view::View;

/// Get the version of the view_orm crate
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
