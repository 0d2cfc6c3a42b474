use super::{Action, Delta};
use crate::application::render::{RenderContext, RenderOptions};
use crate::domain::{Column, DiffRecord, EditOp, Layout, LinePool, RowId, RowKind, SelectionMode, Side};
use crate::state::Page;

fn pool() -> LinePool {
    LinePool::from_dense(["same", "old", "new", "A", "B", "C", "X"])
}

fn records() -> Vec<DiffRecord> {
    vec![
        DiffRecord::new(
            "zipped",
            vec![0, 0, 0, 0, 0, 1],
            vec![0, 0, 0, 0, 0, 2],
            vec![EditOp::keep(5), EditOp::new(1, 1, 0)],
        ),
        DiffRecord::new(
            "abc",
            vec![3, 4, 5],
            vec![3, 6, 5],
            vec![EditOp::keep(1), EditOp::new(1, 1, 0), EditOp::keep(1)],
        ),
    ]
}

fn page() -> Page {
    let pool = pool();
    let options = RenderOptions::default();
    let ctx = RenderContext::new(&pool, &options);
    Page::build(&ctx, &records()).unwrap()
}

fn header_of(page: &Page, table: usize) -> RowId {
    page.table(table).unwrap().headers().next().unwrap().id
}

#[test]
fn test_expand_one_reports_hidden_header_and_revealed_rows() {
    let mut page = page();
    let header = header_of(&page, 0);

    let deltas = page.dispatch(Action::ExpandOne { table: 0, header });

    assert_eq!(deltas.len(), 2);
    assert_eq!(deltas[0], Delta::RowHidden { table: 0, row: header });
    let Delta::RowsRevealed { table, rows } = &deltas[1] else {
        panic!("expected revealed rows, got {:?}", deltas[1]);
    };
    assert_eq!(*table, 0);
    assert_eq!(rows.len(), 5);

    assert!(page.dispatch(Action::ExpandOne { table: 0, header }).is_empty());
}

#[test]
fn test_expand_one_ignores_unknown_targets() {
    let mut page = page();
    assert!(page
        .dispatch(Action::ExpandOne {
            table: 7,
            header: RowId(0)
        })
        .is_empty());
    assert!(page
        .dispatch(Action::ExpandOne {
            table: 1,
            header: RowId(0)
        })
        .is_empty());
}

#[test]
fn test_expand_all_disables_itself() {
    let mut page = page();
    let deltas = page.dispatch(Action::ExpandAll);

    assert_eq!(deltas.last(), Some(&Delta::ExpandAllDisabled));
    assert!(!page.is_expand_all_enabled());
    assert!(page
        .tables()
        .iter()
        .flat_map(|table| table.rows.iter())
        .all(|row| row.visible != row.is_header()));

    let before: Vec<_> = page.tables().to_vec();
    assert!(page.dispatch(Action::ExpandAll).is_empty());
    assert_eq!(page.tables(), before.as_slice());
}

#[test]
fn test_convert_to_unified_touches_every_split_table_once() {
    let mut page = page();
    assert!(page.is_unify_enabled());

    let deltas = page.dispatch(Action::ConvertToUnified);
    assert_eq!(
        deltas,
        vec![
            Delta::TableUnified { table: 0 },
            Delta::TableUnified { table: 1 },
            Delta::UnifyDisabled,
        ]
    );
    assert!(page.tables().iter().all(|t| t.layout == Layout::Unified));

    let (_, abc) = page.table_by_name("abc").unwrap();
    let kinds: Vec<_> = abc.rows.iter().map(|row| row.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            RowKind::Unchanged,
            RowKind::Removed,
            RowKind::Added,
            RowKind::Unchanged
        ]
    );

    assert!(page.dispatch(Action::ConvertToUnified).is_empty());
}

#[test]
fn test_convert_keeps_expanded_blocks_expanded() {
    let mut page = page();
    let header = header_of(&page, 0);
    page.dispatch(Action::ExpandOne { table: 0, header });
    page.dispatch(Action::ConvertToUnified);

    let table = page.table(0).unwrap();
    assert!(!table.row(header).unwrap().visible);
    assert!(table.rows.iter().filter(|row| row.is_unchanged()).all(|row| row.visible));
}

#[test]
fn test_cell_presses_drive_selection_mode() {
    let mut page = page();
    assert_eq!(page.selection_mode(), SelectionMode::RightEnabled);
    let (idx, table) = page.table_by_name("abc").unwrap();
    let row = table.rows[1].id;

    // Right column is already enabled.
    assert!(page
        .dispatch(Action::PressCell {
            table: idx,
            row,
            column: Column::RightText
        })
        .is_empty());

    let deltas = page.dispatch(Action::PressCell {
        table: idx,
        row,
        column: Column::LeftText,
    });
    assert_eq!(
        deltas,
        vec![
            Delta::SelectionChanged {
                enabled: Side::Left,
                disabled: Side::Right
            },
            Delta::TextSelectionCleared,
        ]
    );
    assert_eq!(page.selection_mode(), SelectionMode::LeftEnabled);

    // Number cells carry no side marker.
    assert!(page
        .dispatch(Action::PressCell {
            table: idx,
            row,
            column: Column::RightNumber
        })
        .is_empty());
    assert_eq!(page.selection_mode(), SelectionMode::LeftEnabled);
}

#[test]
fn test_unified_cells_are_side_neutral() {
    let mut page = page();
    page.dispatch(Action::ConvertToUnified);
    let row = page.table(1).unwrap().rows[0].id;

    assert!(page
        .dispatch(Action::PressCell {
            table: 1,
            row,
            column: Column::LeftText
        })
        .is_empty());
    assert_eq!(page.selection_mode(), SelectionMode::RightEnabled);
}

#[test]
fn test_select_same_side_twice_is_noop() {
    let mut page = page();
    assert_eq!(page.dispatch(Action::Select(Side::Left)).len(), 2);
    assert!(page.dispatch(Action::Select(Side::Left)).is_empty());
    assert_eq!(page.dispatch(Action::Select(Side::Right)).len(), 2);
    assert!(page.dispatch(Action::Select(Side::Right)).is_empty());
}
