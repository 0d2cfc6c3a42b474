//! Domain types for diffview.
//! Defines the input records, the line pool and the rendered row model.

pub mod error;
pub mod line;
pub mod record;
pub mod row;
pub mod selection;

pub use error::*;
pub use line::*;
pub use record::*;
pub use row::*;
pub use selection::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_edit_op_serializes_as_triple() {
        let op = EditOp::new(1, 2, 3);
        assert_eq!(serde_json::to_string(&op).unwrap(), "[1,2,3]");
        let parsed: Vec<EditOp> = serde_json::from_str("[[0,0,4],[2,1,0]]").unwrap();
        assert_eq!(parsed, vec![EditOp::keep(4), EditOp::new(2, 1, 0)]);
        assert_eq!(parsed[1].common(), 1);
        assert!(EditOp::default().is_noop());
    }

    #[test]
    fn test_line_pool_dense_and_sparse() {
        let dense: LinePool = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(dense.get(1), Some("b"));
        assert_eq!(dense.len(), 2);

        let sparse: LinePool = serde_json::from_str(r#"{"0": "a", "7": "seven"}"#).unwrap();
        assert_eq!(sparse.get(7), Some("seven"));
        assert!(!sparse.contains(3));
        assert_eq!(sparse.max_line_len(), 5);

        assert!(serde_json::from_str::<LinePool>(r#"{"x": "a"}"#).is_err());
    }

    #[test]
    fn test_pool_builder_sorts_and_dedups() {
        let mut builder = PoolBuilder::new();
        builder.add(TextRecord {
            name: "greeting".into(),
            comment: None,
            lt: vec!["zeta".into(), "alpha".into()],
            rt: vec!["alpha".into(), "mid".into()],
            ops: vec![EditOp::new(1, 0, 1), EditOp::new(0, 1, 0)],
        });
        let (pool, records) = builder.finish();

        assert_eq!(pool.len(), 3);
        assert_eq!(pool.get(0), Some("alpha"));
        assert_eq!(pool.get(1), Some("mid"));
        assert_eq!(pool.get(2), Some("zeta"));
        assert_eq!(records[0].lt, vec![2, 0]);
        assert_eq!(records[0].rt, vec![0, 1]);
    }

    #[test]
    fn test_side_and_selection_mode() {
        assert_eq!(Side::from_str("LEFT").unwrap(), Side::Left);
        assert!(Side::from_str("middle").is_err());
        assert_eq!(Side::Left.other(), Side::Right);
        assert_eq!(SelectionMode::default(), SelectionMode::RightEnabled);
        assert!(SelectionMode::for_side(Side::Left).allows(Side::Left));
        assert!(!SelectionMode::LeftEnabled.allows(Side::Right));
    }

    #[test]
    fn test_layout_display_parse() {
        assert_eq!(Layout::Unified.to_string(), "unified");
        assert_eq!(Layout::from_str("Side-By-Side").unwrap(), Layout::Split);
        assert!(Layout::from_str("columns").is_err());
    }

    #[test]
    fn test_zipped_block_label() {
        let block = ZippedBlock {
            members: vec![RowId(1), RowId(2)],
            heading: Some("fn main() {".into()),
        };
        assert_eq!(block.label(), "@@ 2 common lines @@ fn main() {");
        let single = ZippedBlock {
            members: vec![RowId(4)],
            heading: None,
        };
        assert_eq!(single.label(), "@@ 1 common line @@");
    }
}
