//! View Configuration
//!
//! [`ViewConfig`] is the immutable per-view settings object. It carries the
//! query definition (static or dialect-keyed definer), the materialization
//! flags, and any dialect-specific creation options. One config is attached
//! to each [`View`](crate::View) at declaration time and never mutated
//! afterwards.
//!
//! ## Definition resolution
//!
//! A config must provide at least one way to produce the view's query:
//! - `definer`: a callback receiving the dialect name, for views whose query
//!   differs per engine. Takes precedence when both are set.
//! - `definition`: a static expression used for every dialect.
//!
//! Absence of both is a configuration error, raised when statements are
//! generated (not at build time, so partially-declared views can exist while
//! a schema module is being assembled).

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::definition::{Definer, DefinitionRef, ViewDefinition};
use crate::dialect::Dialect;
use crate::error::{ViewError, ViewResult};
use crate::method::ViewMethod;
use crate::validation::validate_identifier;

/// Immutable per-view settings
///
/// Built via [`ViewConfig::builder`]; the builder validates option keys so a
/// bad key fails at declaration time, before it can reach generated DDL.
#[derive(Clone)]
pub struct ViewConfig {
    definition: Option<DefinitionRef>,
    definer: Option<Definer>,
    method_override: Option<ViewMethod>,
    materialized: bool,
    materialized_as_table: bool,
    concurrently: bool,
    options: BTreeMap<String, Value>,
}

impl ViewConfig {
    pub fn builder() -> ViewConfigBuilder {
        ViewConfigBuilder::default()
    }

    /// Resolve the view's query for a target dialect
    ///
    /// The definer callback wins over a static definition; it receives the
    /// dialect's name string exactly as reported and its return value is
    /// used without further inspection.
    ///
    /// # Errors
    ///
    /// [`ViewError::MissingDefinition`] when the config has neither a
    /// definition nor a definer. Raised here, synchronously, so an invalid
    /// config never yields a partial statement sequence.
    pub fn resolve_definition(&self, dialect: &Dialect, view: &str) -> ViewResult<DefinitionRef> {
        if let Some(definer) = &self.definer {
            return Ok(definer(dialect.name()));
        }
        if let Some(definition) = &self.definition {
            return Ok(Arc::clone(definition));
        }
        Err(ViewError::MissingDefinition {
            view: view.to_string(),
        })
    }

    pub fn method_override(&self) -> Option<ViewMethod> {
        self.method_override
    }

    pub fn materialized(&self) -> bool {
        self.materialized
    }

    pub fn materialized_as_table(&self) -> bool {
        self.materialized_as_table
    }

    pub fn concurrently(&self) -> bool {
        self.concurrently
    }

    /// Dialect-specific creation options, in key order
    pub fn options(&self) -> &BTreeMap<String, Value> {
        &self.options
    }
}

impl fmt::Debug for ViewConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewConfig")
            .field("definition", &self.definition.as_ref().map(|_| "<expr>"))
            .field("definer", &self.definer.as_ref().map(|_| "<fn>"))
            .field("method_override", &self.method_override)
            .field("materialized", &self.materialized)
            .field("materialized_as_table", &self.materialized_as_table)
            .field("concurrently", &self.concurrently)
            .field("options", &self.options)
            .finish()
    }
}

/// Builder for [`ViewConfig`]
#[derive(Default)]
pub struct ViewConfigBuilder {
    definition: Option<DefinitionRef>,
    definer: Option<Definer>,
    method_override: Option<ViewMethod>,
    materialized: bool,
    materialized_as_table: bool,
    concurrently: bool,
    options: BTreeMap<String, Value>,
}

impl ViewConfigBuilder {
    /// Static query expression used for every dialect
    pub fn definition(mut self, definition: impl ViewDefinition + 'static) -> Self {
        self.definition = Some(Arc::new(definition));
        self
    }

    /// Dialect-keyed definer callback; takes precedence over `definition`
    pub fn definer<F>(mut self, definer: F) -> Self
    where
        F: Fn(&str) -> DefinitionRef + Send + Sync + 'static,
    {
        self.definer = Some(Arc::new(definer));
        self
    }

    /// Explicit creation method, bypassing dialect resolution
    pub fn method_override(mut self, method: ViewMethod) -> Self {
        self.method_override = Some(method);
        self
    }

    /// Request a materialized view where the dialect supports one
    pub fn materialized(mut self, materialized: bool) -> Self {
        self.materialized = materialized;
        self
    }

    /// Simulate materialization with a plain table on dialects that cannot
    /// materialize natively
    pub fn materialized_as_table(mut self, as_table: bool) -> Self {
        self.materialized_as_table = as_table;
        self
    }

    /// Request concurrent refresh; ignored on dialects without support
    pub fn concurrently(mut self, concurrently: bool) -> Self {
        self.concurrently = concurrently;
        self
    }

    /// Add a dialect-specific creation option (rendered as a trailing
    /// `WITH (key = value)` clause on supporting dialects)
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// # Errors
    ///
    /// [`ViewError::InvalidIdentifier`] if an option key is not a plain SQL
    /// identifier.
    pub fn build(self) -> ViewResult<ViewConfig> {
        for key in self.options.keys() {
            validate_identifier(key, "option key")?;
        }

        Ok(ViewConfig {
            definition: self.definition,
            definer: self.definer,
            method_override: self.method_override,
            materialized: self.materialized,
            materialized_as_table: self.materialized_as_table,
            concurrently: self.concurrently,
            options: self.options,
        })
    }
}
