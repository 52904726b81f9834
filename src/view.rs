//! Declared Views
//!
//! [`View`] is the per-view metadata record: the view's name, its ordered
//! declared column names (sourced from the caller's mapping layer), and its
//! [`ViewConfig`]. It exposes the lifecycle API: resolve the creation
//! method for a dialect and generate the create / drop / refresh statement
//! sequences.
//!
//! A `View` is built once at declaration time and is immutable afterwards.
//! Name and columns are validated at construction so malformed identifiers
//! never reach generated DDL.

use crate::config::ViewConfig;
use crate::ddl;
use crate::ddl::{CreateOptions, DropOptions, Statement};
use crate::dialect::Dialect;
use crate::error::ViewResult;
use crate::method::ViewMethod;
use crate::validation::validate_identifier;

/// A declared database view: name, ordered columns, configuration
#[derive(Debug, Clone)]
pub struct View {
    name: String,
    columns: Vec<String>,
    config: ViewConfig,
}

impl View {
    /// Declare a view
    ///
    /// `columns` is the ordered list of declared column names; the order is
    /// preserved and reused verbatim in the table-simulation refresh INSERT.
    ///
    /// # Errors
    ///
    /// [`ViewError::InvalidIdentifier`](crate::ViewError::InvalidIdentifier)
    /// if the view name or any column name is not a plain SQL identifier.
    pub fn new<I, S>(name: impl Into<String>, columns: I, config: ViewConfig) -> ViewResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        validate_identifier(&name, "view name")?;

        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        for column in &columns {
            validate_identifier(column, "column name")?;
        }

        Ok(View {
            name,
            columns,
            config,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared column names, in declaration order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// The creation method this view resolves to on a dialect
    ///
    /// Recomputed on every call; a view may be used against multiple
    /// engines in one process (e.g. SQLite in tests, PostgreSQL in
    /// production).
    pub fn method(&self, dialect: &Dialect) -> ViewMethod {
        ViewMethod::resolve(dialect, &self.config)
    }

    /// Generate the create statement sequence for a dialect
    ///
    /// # Errors
    ///
    /// Configuration errors (missing definition, unrenderable option value)
    /// surface here, before any statement is returned.
    pub fn create_statements(
        &self,
        dialect: &Dialect,
        opts: &CreateOptions,
    ) -> ViewResult<Vec<Statement>> {
        let method = self.method(dialect);
        let definition = self.config.resolve_definition(dialect, &self.name)?;
        let definition_sql = definition.to_sql(dialect);

        ddl::create_statements(
            method,
            &self.name,
            &definition_sql,
            self.config.options(),
            opts,
            dialect,
        )
    }

    /// Generate the drop statement sequence for a dialect
    ///
    /// Dropping needs no definition, so this cannot fail.
    pub fn drop_statements(&self, dialect: &Dialect, opts: &DropOptions) -> Vec<Statement> {
        let method = self.method(dialect);
        ddl::drop_statements(method, &self.name, opts)
    }

    /// Generate the refresh statement sequence for a dialect
    ///
    /// Empty for simple views; one `REFRESH MATERIALIZED VIEW` for native
    /// materialization; a delete-then-insert pair for the table simulation
    /// (only the latter needs the definition, so only a table-simulated view
    /// can fail here).
    pub fn refresh_statements(&self, dialect: &Dialect) -> ViewResult<Vec<Statement>> {
        let method = self.method(dialect);

        // Only the table simulation re-runs the definition on refresh
        let definition_sql = if method == ViewMethod::Table {
            self.config
                .resolve_definition(dialect, &self.name)?
                .to_sql(dialect)
        } else {
            String::new()
        };

        Ok(ddl::refresh_statements(
            method,
            &self.name,
            &self.columns,
            &definition_sql,
            self.config.concurrently(),
            dialect,
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::ddl::StatementKind;
    use crate::definition::{DefinitionRef, RawSql};
    use crate::error::ViewError;

    const DEF: &str = "SELECT id, name FROM users WHERE active";

    fn materialized_view() -> View {
        View::new(
            "user_sales",
            ["id", "name"],
            ViewConfig::builder()
                .definition(RawSql::new(DEF).unwrap())
                .materialized(true)
                .build()
                .unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_invalid_view_name_rejected() {
        let config = ViewConfig::builder().build().unwrap();
        assert!(View::new("bad name", Vec::<String>::new(), config).is_err());
    }

    #[test]
    fn test_invalid_column_name_rejected() {
        let config = ViewConfig::builder().build().unwrap();
        let result = View::new("v", ["id", "drop table"], config);
        match result.unwrap_err() {
            ViewError::InvalidIdentifier { parameter, .. } => {
                assert_eq!(parameter, "column name");
            }
            other => panic!("Wrong error type: {other:?}"),
        }
    }

    #[test]
    fn test_materialized_on_postgresql() {
        let view = materialized_view();
        let pg = Dialect::new("postgresql");

        assert_eq!(view.method(&pg), ViewMethod::Materialized);

        let create = view.create_statements(&pg, &CreateOptions::default()).unwrap();
        assert_eq!(create.len(), 1);
        assert_eq!(
            create[0].sql(),
            "CREATE MATERIALIZED VIEW user_sales AS SELECT id, name FROM users WHERE active"
        );

        let refresh = view.refresh_statements(&pg).unwrap();
        assert_eq!(refresh.len(), 1);
        assert_eq!(refresh[0].sql(), "REFRESH MATERIALIZED VIEW user_sales");
    }

    #[test]
    fn test_table_simulation_on_sqlite() {
        let view = View::new(
            "user_sales",
            ["id", "name"],
            ViewConfig::builder()
                .definition(RawSql::new(DEF).unwrap())
                .materialized(true)
                .materialized_as_table(true)
                .build()
                .unwrap(),
        )
        .unwrap();
        let sqlite = Dialect::new("sqlite");

        assert_eq!(view.method(&sqlite), ViewMethod::Table);

        let create = view.create_statements(&sqlite, &CreateOptions::default()).unwrap();
        assert_eq!(
            create[0].sql(),
            "CREATE TABLE user_sales AS SELECT id, name FROM users WHERE active"
        );

        let refresh = view.refresh_statements(&sqlite).unwrap();
        assert_eq!(refresh.len(), 2);
        assert_eq!(refresh[0].sql(), "DELETE FROM user_sales");
        assert_eq!(
            refresh[1].sql(),
            "INSERT INTO user_sales (id, name) SELECT id, name FROM users WHERE active"
        );
    }

    #[test]
    fn test_definer_branches_per_dialect() {
        let view = View::new(
            "ranked",
            ["id"],
            ViewConfig::builder()
                .definer(|dialect_name| {
                    let sql = if dialect_name == "postgresql" {
                        "SELECT id, rank() OVER (ORDER BY score) FROM scores"
                    } else {
                        "SELECT id, 0 FROM scores"
                    };
                    Arc::new(RawSql::new(sql).unwrap()) as DefinitionRef
                })
                .build()
                .unwrap(),
        )
        .unwrap();

        let pg_create = view
            .create_statements(&Dialect::new("postgresql"), &CreateOptions::default())
            .unwrap();
        let lite_create = view
            .create_statements(&Dialect::new("sqlite"), &CreateOptions::default())
            .unwrap();

        assert!(pg_create[0].sql().contains("rank() OVER"));
        assert!(lite_create[0].sql().contains("SELECT id, 0 FROM scores"));
    }

    #[test]
    fn test_missing_definition_fails_before_any_statement() {
        let view = View::new(
            "orphan",
            ["id"],
            ViewConfig::builder().build().unwrap(),
        )
        .unwrap();

        let result = view.create_statements(&Dialect::new("postgresql"), &CreateOptions::default());
        match result.unwrap_err() {
            ViewError::MissingDefinition { view } => assert_eq!(view, "orphan"),
            other => panic!("Wrong error type: {other:?}"),
        }
    }

    #[test]
    fn test_simple_refresh_needs_no_definition() {
        // A simple view with no definition can't be created, but refresh is
        // a no-op and must not raise
        let view = View::new("v", ["id"], ViewConfig::builder().build().unwrap()).unwrap();
        let refresh = view.refresh_statements(&Dialect::new("postgresql")).unwrap();
        assert!(refresh.is_empty());
    }

    #[test]
    fn test_drop_create_drop_round_trip_shape() {
        // Each method independently: drop, then create, then drop again
        let pg = Dialect::new("postgresql");
        let sqlite = Dialect::new("sqlite");
        let drop_opts = DropOptions {
            if_exists: true,
            cascade: false,
        };

        let simple = View::new(
            "v_simple",
            ["id"],
            ViewConfig::builder()
                .definition(RawSql::new(DEF).unwrap())
                .build()
                .unwrap(),
        )
        .unwrap();
        let cases: Vec<(View, &Dialect, StatementKind)> = vec![
            (simple, &pg, StatementKind::DropView),
            (materialized_view(), &pg, StatementKind::DropMaterializedView),
            (
                View::new(
                    "v_table",
                    ["id", "name"],
                    ViewConfig::builder()
                        .definition(RawSql::new(DEF).unwrap())
                        .materialized(true)
                        .materialized_as_table(true)
                        .build()
                        .unwrap(),
                )
                .unwrap(),
                &sqlite,
                StatementKind::DropTable,
            ),
        ];

        for (view, dialect, drop_kind) in cases {
            let before = view.drop_statements(dialect, &drop_opts);
            let create = view.create_statements(dialect, &CreateOptions::default()).unwrap();
            let after = view.drop_statements(dialect, &drop_opts);

            assert_eq!(before, after, "drop generation must be repeatable");
            assert_eq!(before[0].kind(), drop_kind);
            assert!(create[0].sql().starts_with("CREATE "));
            assert!(before[0].sql().starts_with("DROP "));
        }
    }

    #[test]
    fn test_generation_is_repeatable() {
        let view = materialized_view();
        let pg = Dialect::new("postgresql");
        let opts = CreateOptions::default();

        assert_eq!(
            view.create_statements(&pg, &opts).unwrap(),
            view.create_statements(&pg, &opts).unwrap()
        );
    }
}
