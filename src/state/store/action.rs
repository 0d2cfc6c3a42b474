use crate::domain::{Column, RowId, Side};
use crate::state::TableIdx;

/// Everything a user can do to a rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Expand the zipped block behind `header`.
    ExpandOne { table: TableIdx, header: RowId },
    /// Expand every zipped block of the page. Disables itself.
    ExpandAll,
    /// Convert every split table into the unified layout. Disables itself.
    ConvertToUnified,
    /// A pointer press landed on a cell.
    PressCell {
        table: TableIdx,
        row: RowId,
        column: Column,
    },
    /// Explicitly enable one column for text selection.
    Select(Side),
}

/// One observable change produced by an [`Action`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delta {
    RowHidden {
        table: TableIdx,
        row: RowId,
    },
    RowsRevealed {
        table: TableIdx,
        rows: Vec<RowId>,
    },
    /// The table was rebuilt in the unified layout.
    TableUnified {
        table: TableIdx,
    },
    ExpandAllDisabled,
    UnifyDisabled,
    SelectionChanged {
        enabled: Side,
        disabled: Side,
    },
    /// Any in-progress text selection must be dropped.
    TextSelectionCleared,
}
