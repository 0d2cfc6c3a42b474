//! Split → unified conversion of an already rendered table.
//!
//! Works on the rows rather than on the record so that whatever disclosure
//! state the table is in carries over. There is no way back: a split view
//! has to be rendered again from the record.

use crate::domain::{DiffTable, DisplayRow, Layout, RowKind, RowLayout};

/// Rewrites `table` into the unified layout. Returns false when the table
/// was already unified.
///
/// Removed lines are emitted in place. Added lines are held back until the
/// next unchanged or zipped row (or the end of the table), so every run of
/// removals is directly followed by the matching insertions.
pub fn unify(table: &mut DiffTable) -> bool {
    if table.layout == Layout::Unified {
        return false;
    }

    let rows = std::mem::take(&mut table.rows);
    let mut out = Vec::with_capacity(rows.len() + rows.len() / 4);
    let mut added: Vec<DisplayRow> = Vec::new();

    for row in rows {
        match row.kind {
            RowKind::ZippedHeader(_) => {
                out.append(&mut added);
                out.push(row);
            }
            RowKind::Unchanged => {
                out.append(&mut added);
                out.push(DisplayRow {
                    layout: RowLayout::Unified,
                    ..row
                });
            }
            RowKind::Removed => out.push(half(row, RowKind::Removed)),
            RowKind::Added => added.push(half(row, RowKind::Added)),
            RowKind::Replaced => {
                let insertion = DisplayRow::new(
                    table.alloc_id(),
                    RowKind::Added,
                    RowLayout::Unified,
                    Vec::new(),
                    row.right.clone(),
                );
                out.push(half(row, RowKind::Removed));
                added.push(insertion);
            }
        }
    }
    out.append(&mut added);

    table.set_rows(out);
    table.layout = Layout::Unified;
    true
}

/// Keeps only the side of `row` that `kind` refers to.
fn half(row: DisplayRow, kind: RowKind) -> DisplayRow {
    let (left, right) = match kind {
        RowKind::Added => (Vec::new(), row.right),
        _ => (row.left, Vec::new()),
    };
    DisplayRow {
        id: row.id,
        kind,
        layout: RowLayout::Unified,
        visible: row.visible,
        left,
        right,
    }
}
