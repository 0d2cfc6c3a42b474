//! Page state: every rendered table plus the page-wide selection mode.
//!
//! A `Page` is the single owner of all mutable view state. It only changes
//! through [`Page::dispatch`], which keeps the controllers free of globals.

pub mod store;

use crate::application::render::{RenderContext, render_record};
use crate::application::selection::SelectionController;
use crate::domain::{DiffRecord, DiffTable, Layout, RenderError, SelectionMode};

pub use store::{Action, Delta};

/// Index of a table within its page.
pub type TableIdx = usize;

#[derive(Debug, Clone)]
pub struct Page {
    tables: Vec<DiffTable>,
    selection: SelectionController,
    expand_all_enabled: bool,
    unify_enabled: bool,
}

impl Page {
    /// Renders every record with the configured layout.
    pub fn build<'r>(
        ctx: &RenderContext<'_>,
        records: impl IntoIterator<Item = &'r DiffRecord>,
    ) -> Result<Self, RenderError> {
        let tables = records
            .into_iter()
            .map(|record| render_record(ctx, record, ctx.options.layout))
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("built page with {} tables", tables.len());
        Ok(Self::from_tables(tables))
    }

    pub fn from_tables(tables: Vec<DiffTable>) -> Self {
        let unify_enabled = tables.iter().any(|table| table.layout == Layout::Split);
        Self {
            tables,
            selection: SelectionController::default(),
            expand_all_enabled: true,
            unify_enabled,
        }
    }

    pub fn tables(&self) -> &[DiffTable] {
        &self.tables
    }

    pub fn table(&self, idx: TableIdx) -> Option<&DiffTable> {
        self.tables.get(idx)
    }

    pub fn table_by_name(&self, name: &str) -> Option<(TableIdx, &DiffTable)> {
        self.tables
            .iter()
            .enumerate()
            .find(|(_, table)| table.name == name)
    }

    pub fn selection_mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    pub fn is_expand_all_enabled(&self) -> bool {
        self.expand_all_enabled
    }

    pub fn is_unify_enabled(&self) -> bool {
        self.unify_enabled
    }
}
