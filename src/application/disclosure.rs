//! Disclosure of zipped blocks.
//!
//! Expansion only flips visibility flags; rows are never re-rendered and a
//! block never collapses again.

use crate::domain::{DiffTable, RowId};

/// Expands the block behind `header`.
///
/// Hides the header and reveals every following row up to (not including)
/// the next row that is already visible. Member rows sit right after their
/// header, so this reveals exactly the block. Returns the revealed row ids,
/// or `None` when `header` is not a zipped header of this table.
pub fn expand_one(table: &mut DiffTable, header: RowId) -> Option<Vec<RowId>> {
    let start = table.position(header)?;
    if !table.rows[start].is_header() {
        return None;
    }
    table.rows[start].visible = false;

    let mut revealed = Vec::new();
    for row in table.rows[start + 1..].iter_mut() {
        if row.visible {
            break;
        }
        row.visible = true;
        revealed.push(row.id);
    }
    Some(revealed)
}

/// Expands every collapsed header in document order. Returns the
/// `(header, revealed rows)` pairs; calling it again returns nothing.
pub fn expand_all(table: &mut DiffTable) -> Vec<(RowId, Vec<RowId>)> {
    let collapsed: Vec<RowId> = table
        .rows
        .iter()
        .filter(|row| row.is_collapsed_header())
        .map(|row| row.id)
        .collect();

    collapsed
        .into_iter()
        .filter_map(|header| expand_one(table, header).map(|revealed| (header, revealed)))
        .collect()
}
