use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::{DiffRecord, EditOp};

/// Stable identifier of a line inside a [`LinePool`].
pub type LineId = usize;

/// Read-only collection of text lines addressed by id.
///
/// The pool accepts both a dense array (`["a", "b"]`, ids are the indexes)
/// and a sparse map (`{"0": "a", "7": "b"}`) on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PoolRepr", into = "BTreeMap<LineId, String>")]
pub struct LinePool {
    lines: BTreeMap<LineId, String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PoolRepr {
    Dense(Vec<String>),
    Sparse(BTreeMap<String, String>),
}

impl TryFrom<PoolRepr> for LinePool {
    type Error = String;

    fn try_from(repr: PoolRepr) -> Result<Self, Self::Error> {
        match repr {
            PoolRepr::Dense(lines) => Ok(Self::from_dense(lines)),
            PoolRepr::Sparse(lines) => lines
                .into_iter()
                .map(|(key, text)| {
                    key.parse::<LineId>()
                        .map(|id| (id, text))
                        .map_err(|_| format!("line id {key:?} is not a non-negative integer"))
                })
                .collect::<Result<_, _>>()
                .map(|lines| Self { lines }),
        }
    }
}

impl From<LinePool> for BTreeMap<LineId, String> {
    fn from(pool: LinePool) -> Self {
        pool.lines
    }
}

impl LinePool {
    pub fn from_dense<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).enumerate().collect(),
        }
    }

    pub fn get(&self, id: LineId) -> Option<&str> {
        self.lines.get(&id).map(String::as_str)
    }

    pub fn contains(&self, id: LineId) -> bool {
        self.lines.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Byte length of the longest line, used to size the text columns.
    pub fn max_line_len(&self) -> usize {
        self.lines.values().map(String::len).max().unwrap_or(0)
    }
}

/// A record whose sides are still plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRecord {
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub lt: Vec<String>,
    #[serde(default)]
    pub rt: Vec<String>,
    #[serde(default)]
    pub ops: Vec<EditOp>,
}

/// Interns the lines of [`TextRecord`]s into one shared [`LinePool`].
///
/// Unique lines are sorted and numbered in sorted order, so the same set of
/// records always produces the same pool regardless of insertion order.
#[derive(Debug, Default)]
pub struct PoolBuilder {
    lines: BTreeSet<String>,
    records: Vec<TextRecord>,
}

impl PoolBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: TextRecord) {
        self.lines.extend(record.lt.iter().cloned());
        self.lines.extend(record.rt.iter().cloned());
        self.records.push(record);
    }

    pub fn finish(self) -> (LinePool, Vec<DiffRecord>) {
        let index: HashMap<&str, LineId> = self
            .lines
            .iter()
            .enumerate()
            .map(|(id, line)| (line.as_str(), id))
            .collect();
        let ids = |side: &[String]| -> Vec<LineId> {
            side.iter().map(|line| index[line.as_str()]).collect()
        };

        let records = self
            .records
            .iter()
            .map(|record| DiffRecord {
                name: record.name.clone(),
                comment: record.comment.clone(),
                lt: ids(&record.lt),
                rt: ids(&record.rt),
                ops: record.ops.clone(),
            })
            .collect();

        (LinePool::from_dense(self.lines.iter().cloned()), records)
    }
}
