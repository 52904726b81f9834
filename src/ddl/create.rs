//! CREATE statement generation
//!
//! One statement per view, shaped by the resolved method:
//!
//! ```sql
//! CREATE [OR REPLACE] VIEW [IF NOT EXISTS] name [WITH (...)] AS <definition>
//! CREATE MATERIALIZED VIEW [IF NOT EXISTS] name [WITH (...)] AS <definition>
//! CREATE TABLE [IF NOT EXISTS] name AS <definition>
//! ```
//!
//! `OR REPLACE` only exists for simple views; the flag is ignored elsewhere.
//! The options clause is rendered only where the dialect accepts one, and
//! never for the table simulation.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, warn};

use super::{CreateOptions, Statement, StatementKind};
use crate::dialect::Dialect;
use crate::error::{ViewError, ViewResult};
use crate::method::ViewMethod;

/// Build the create sequence for a resolved method
///
/// `definition_sql` is the rendered definition; `options` is the view's
/// creation-options map, rendered into a trailing clause where applicable.
pub fn create_statements(
    method: ViewMethod,
    name: &str,
    definition_sql: &str,
    options: &BTreeMap<String, Value>,
    opts: &CreateOptions,
    dialect: &Dialect,
) -> ViewResult<Vec<Statement>> {
    let with_clause = if method != ViewMethod::Table && dialect.supports_view_options() {
        render_options(options)?
    } else {
        if !options.is_empty() {
            debug!(
                view = name,
                dialect = dialect.name(),
                "creation options ignored: dialect or method does not accept an options clause"
            );
        }
        None
    };

    if opts.or_replace && method != ViewMethod::Simple {
        warn!(
            view = name,
            method = method.as_str(),
            "or_replace ignored: no portable OR REPLACE syntax for this method"
        );
    }

    let mut sql = String::from("CREATE ");

    match method {
        ViewMethod::Simple => {
            if opts.or_replace {
                sql.push_str("OR REPLACE ");
            }
            sql.push_str("VIEW ");
        }
        ViewMethod::Materialized => sql.push_str("MATERIALIZED VIEW "),
        ViewMethod::Table => sql.push_str("TABLE "),
    }

    if opts.if_not_exists {
        sql.push_str("IF NOT EXISTS ");
    }
    sql.push_str(name);

    if let Some(clause) = with_clause {
        sql.push(' ');
        sql.push_str(&clause);
    }

    sql.push_str(" AS ");
    sql.push_str(definition_sql);

    let kind = match method {
        ViewMethod::Simple => StatementKind::CreateView,
        ViewMethod::Materialized => StatementKind::CreateMaterializedView,
        ViewMethod::Table => StatementKind::CreateTableAs,
    };

    debug!(view = name, method = method.as_str(), "generated create statement");
    Ok(vec![Statement::new(kind, sql)])
}

/// Render the `WITH (key = value, ...)` options clause
fn render_options(options: &BTreeMap<String, Value>) -> ViewResult<Option<String>> {
    if options.is_empty() {
        return Ok(None);
    }

    let mut pairs = Vec::with_capacity(options.len());
    for (key, value) in options {
        pairs.push(format!("{} = {}", key, sql_literal(key, value)?));
    }

    Ok(Some(format!("WITH ({})", pairs.join(", "))))
}

/// Render a JSON scalar as a SQL literal
fn sql_literal(key: &str, value: &Value) -> ViewResult<String> {
    match value {
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(format!("'{}'", s.replace('\'', "''"))),
        Value::Null | Value::Array(_) | Value::Object(_) => {
            Err(ViewError::OptionSerialization {
                key: key.to_string(),
                reason: "only booleans, numbers, and strings are supported".to_string(),
            })
        }
    }
}
