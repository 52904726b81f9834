//! View Registry
//!
//! [`ViewRegistry`] collects declared views so bulk lifecycle operations can
//! enumerate them: create everything at startup, refresh everything on a
//! schedule, drop everything in teardown.
//!
//! Registration is explicit (whichever module declares the views also
//! registers them) and the registry is owned by the caller, not by a
//! process-wide static. Append-only: views are enumerated in declaration
//! order and never removed.

use std::sync::Arc;

use crate::ddl::{CreateOptions, DropOptions, Statement};
use crate::dialect::Dialect;
use crate::error::ViewResult;
use crate::view::View;

/// Append-only collection of declared views
#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    views: Vec<Arc<View>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        ViewRegistry::default()
    }

    /// Register a declared view; returns a shared handle to it
    ///
    /// Registering the same view twice is not guarded against; declare each
    /// view once.
    pub fn register(&mut self, view: View) -> Arc<View> {
        let view = Arc::new(view);
        self.views.push(Arc::clone(&view));
        view
    }

    /// All registered views, in declaration order
    pub fn children(&self) -> impl Iterator<Item = &Arc<View>> {
        self.views.iter()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Create statements for every registered view, in declaration order
    ///
    /// Fail-fast: the first configuration error aborts the call and no
    /// statements are returned.
    pub fn create_all_statements(
        &self,
        dialect: &Dialect,
        opts: &CreateOptions,
    ) -> ViewResult<Vec<Statement>> {
        let mut statements = Vec::new();
        for view in &self.views {
            statements.extend(view.create_statements(dialect, opts)?);
        }
        Ok(statements)
    }

    /// Drop statements for every registered view, in reverse declaration
    /// order (later views may read from earlier ones)
    pub fn drop_all_statements(&self, dialect: &Dialect, opts: &DropOptions) -> Vec<Statement> {
        self.views
            .iter()
            .rev()
            .flat_map(|view| view.drop_statements(dialect, opts))
            .collect()
    }

    /// Refresh statements for every registered view, in declaration order
    ///
    /// Simple views contribute nothing; the result covers exactly the views
    /// with stored state on this dialect.
    pub fn refresh_all_statements(&self, dialect: &Dialect) -> ViewResult<Vec<Statement>> {
        let mut statements = Vec::new();
        for view in &self.views {
            statements.extend(view.refresh_statements(dialect)?);
        }
        Ok(statements)
    }
}
