use serde::{Deserialize, Serialize};

use super::{LineId, LinePool};

/// One run of the edit script: delete `del` left lines, add `add` right
/// lines, then keep `keep` lines that are equal on both sides.
///
/// Serialized as a `[del, add, keep]` triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(usize, usize, usize)", into = "(usize, usize, usize)")]
pub struct EditOp {
    pub del: usize,
    pub add: usize,
    pub keep: usize,
}

impl EditOp {
    pub fn new(del: usize, add: usize, keep: usize) -> Self {
        Self { del, add, keep }
    }

    pub fn keep(keep: usize) -> Self {
        Self::new(0, 0, keep)
    }

    /// Number of lines that are aligned into a replaced row.
    pub fn common(&self) -> usize {
        self.del.min(self.add)
    }

    pub fn is_noop(&self) -> bool {
        self.del == 0 && self.add == 0 && self.keep == 0
    }
}

impl From<(usize, usize, usize)> for EditOp {
    fn from((del, add, keep): (usize, usize, usize)) -> Self {
        Self { del, add, keep }
    }
}

impl From<EditOp> for (usize, usize, usize) {
    fn from(op: EditOp) -> Self {
        (op.del, op.add, op.keep)
    }
}

/// A precomputed diff between two line sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffRecord {
    /// Unique key within a record set.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Line ids of the "before" side.
    #[serde(default)]
    pub lt: Vec<LineId>,
    /// Line ids of the "after" side.
    #[serde(default)]
    pub rt: Vec<LineId>,
    #[serde(default)]
    pub ops: Vec<EditOp>,
}

impl DiffRecord {
    pub fn new(
        name: impl Into<String>,
        lt: Vec<LineId>,
        rt: Vec<LineId>,
        ops: Vec<EditOp>,
    ) -> Self {
        Self {
            name: name.into(),
            comment: None,
            lt,
            rt,
            ops,
        }
    }
}

/// An ordered, named partition of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub records: Vec<DiffRecord>,
}

/// The full input of one page: the shared pool and the records grouped in
/// buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet {
    pub pool: LinePool,
    pub buckets: Vec<Bucket>,
}

impl RecordSet {
    pub fn records(&self) -> impl Iterator<Item = &DiffRecord> {
        self.buckets.iter().flat_map(|bucket| bucket.records.iter())
    }

    pub fn record(&self, name: &str) -> Option<&DiffRecord> {
        self.records().find(|record| record.name == name)
    }

    pub fn record_count(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.records.len()).sum()
    }
}
