use super::action::{Action, Delta};
use crate::application::{disclosure, transform};
use crate::domain::{Column, RowId, Side};
use crate::state::{Page, TableIdx};

pub fn reduce(page: &mut Page, action: Action) -> Vec<Delta> {
    match action {
        Action::ExpandOne { table, header } => reduce_expand_one(page, table, header),
        Action::ExpandAll => reduce_expand_all(page),
        Action::ConvertToUnified => reduce_unify(page),
        Action::PressCell { table, row, column } => reduce_press(page, table, row, column),
        Action::Select(side) => reduce_select(page, side),
    }
}

fn reduce_expand_one(page: &mut Page, table_idx: TableIdx, header: RowId) -> Vec<Delta> {
    let Some(table) = page.tables.get_mut(table_idx) else {
        log::warn!("expand requested for unknown table {table_idx}");
        return Vec::new();
    };
    let was_collapsed = table.row(header).is_some_and(|row| row.is_collapsed_header());
    let Some(revealed) = disclosure::expand_one(table, header) else {
        log::warn!("row {header} of table {table_idx} is not a zipped header");
        return Vec::new();
    };

    let mut deltas = Vec::new();
    if was_collapsed {
        deltas.push(Delta::RowHidden {
            table: table_idx,
            row: header,
        });
    }
    if !revealed.is_empty() {
        deltas.push(Delta::RowsRevealed {
            table: table_idx,
            rows: revealed,
        });
    }
    deltas
}

fn reduce_expand_all(page: &mut Page) -> Vec<Delta> {
    if !page.expand_all_enabled {
        return Vec::new();
    }

    let mut deltas = Vec::new();
    for (table_idx, table) in page.tables.iter_mut().enumerate() {
        for (header, revealed) in disclosure::expand_all(table) {
            deltas.push(Delta::RowHidden {
                table: table_idx,
                row: header,
            });
            if !revealed.is_empty() {
                deltas.push(Delta::RowsRevealed {
                    table: table_idx,
                    rows: revealed,
                });
            }
        }
    }
    page.expand_all_enabled = false;
    deltas.push(Delta::ExpandAllDisabled);
    deltas
}

fn reduce_unify(page: &mut Page) -> Vec<Delta> {
    if !page.unify_enabled {
        return Vec::new();
    }

    let mut deltas: Vec<Delta> = page
        .tables
        .iter_mut()
        .enumerate()
        .filter_map(|(table_idx, table)| {
            transform::unify(table).then_some(Delta::TableUnified { table: table_idx })
        })
        .collect();
    log::info!("converted {} tables to the unified layout", deltas.len());

    page.unify_enabled = false;
    deltas.push(Delta::UnifyDisabled);
    deltas
}

fn reduce_press(page: &mut Page, table_idx: TableIdx, row: RowId, column: Column) -> Vec<Delta> {
    let side = page
        .tables
        .get(table_idx)
        .and_then(|table| table.row(row))
        .and_then(|row| row.side_at(column));
    match side {
        Some(side) => reduce_select(page, side),
        None => Vec::new(),
    }
}

fn reduce_select(page: &mut Page, side: Side) -> Vec<Delta> {
    match page.selection.select(side) {
        Some(switch) => vec![
            Delta::SelectionChanged {
                enabled: switch.enabled,
                disabled: switch.disabled,
            },
            Delta::TextSelectionCleared,
        ],
        None => Vec::new(),
    }
}
