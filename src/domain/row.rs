use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{LineId, Side};

/// Identifier of a row, unique within its table.
///
/// Ids survive disclosure and the split-to-unified transform, so they can be
/// used to address rows from outside (e.g. an expand button).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(pub u32);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// Table layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    #[default]
    Split,
    Unified,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Layout::Split => "split",
            Layout::Unified => "unified",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "split" | "side-by-side" => Ok(Layout::Split),
            "unified" => Ok(Layout::Unified),
            _ => Err(format!("Invalid layout: {s}")),
        }
    }
}

/// Shape tag of a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowLayout {
    /// Two columns, left (before) and right (after).
    Split,
    /// One full-width content column with both line numbers.
    Unified,
    /// A single spanning cell standing in for a collapsed block.
    Zipped,
}

/// Reference to one line of a record, as shown in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRef {
    pub id: LineId,
    /// 1-based position of the line in its side of the record.
    pub number: usize,
}

/// The collapsed run behind a zipped header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZippedBlock {
    /// Member rows, in table order.
    pub members: Vec<RowId>,
    /// Context line the block lives under, if one could be found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
}

impl ZippedBlock {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn label(&self) -> String {
        let noun = if self.len() == 1 { "line" } else { "lines" };
        match &self.heading {
            Some(heading) => format!("@@ {} common {noun} @@ {heading}", self.len()),
            None => format!("@@ {} common {noun} @@", self.len()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    /// Both sides hold the same single line.
    Unchanged,
    /// Lines only present on the left side.
    Removed,
    /// Lines only present on the right side.
    Added,
    /// Aligned deletion/insertion pair of equal length.
    Replaced,
    ZippedHeader(ZippedBlock),
}

/// Cell position inside a row, used to route pointer presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    LeftNumber,
    LeftText,
    RightNumber,
    RightText,
    UnifiedText,
    Header,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRow {
    pub id: RowId,
    pub kind: RowKind,
    pub layout: RowLayout,
    pub visible: bool,
    /// Lines on the before side; empty when the row has none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub left: Vec<LineRef>,
    /// Lines on the after side; empty when the row has none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub right: Vec<LineRef>,
}

impl DisplayRow {
    pub fn new(
        id: RowId,
        kind: RowKind,
        layout: RowLayout,
        left: Vec<LineRef>,
        right: Vec<LineRef>,
    ) -> Self {
        Self {
            id,
            kind,
            layout,
            visible: true,
            left,
            right,
        }
    }

    pub fn zipped_header(id: RowId, block: ZippedBlock) -> Self {
        Self::new(
            id,
            RowKind::ZippedHeader(block),
            RowLayout::Zipped,
            Vec::new(),
            Vec::new(),
        )
    }

    pub fn is_header(&self) -> bool {
        matches!(self.kind, RowKind::ZippedHeader(_))
    }

    pub fn block(&self) -> Option<&ZippedBlock> {
        match &self.kind {
            RowKind::ZippedHeader(block) => Some(block),
            _ => None,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        self.kind == RowKind::Unchanged
    }

    /// A header that still hides its members.
    pub fn is_collapsed_header(&self) -> bool {
        self.is_header() && self.visible
    }

    /// The side marker of a cell, if it carries one.
    ///
    /// Only the text cells of split rows are side-selectable; number cells,
    /// unified text and zipped headers are neutral.
    pub fn side_at(&self, column: Column) -> Option<Side> {
        match (self.layout, column) {
            (RowLayout::Split, Column::LeftText) => Some(Side::Left),
            (RowLayout::Split, Column::RightText) => Some(Side::Right),
            _ => None,
        }
    }
}

/// The rendered rows of one diff record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffTable {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub layout: Layout,
    pub rows: Vec<DisplayRow>,
    #[serde(skip)]
    next_id: u32,
}

impl DiffTable {
    pub fn new(name: impl Into<String>, layout: Layout) -> Self {
        Self {
            name: name.into(),
            comment: None,
            layout,
            rows: Vec::new(),
            next_id: 0,
        }
    }

    /// Hands out a fresh row id.
    pub fn alloc_id(&mut self) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Makes sure ids allocated later do not clash with `rows`.
    pub fn set_rows(&mut self, rows: Vec<DisplayRow>) {
        let max = rows.iter().map(|row| row.id.0 + 1).max().unwrap_or(0);
        self.next_id = self.next_id.max(max);
        self.rows = rows;
    }

    pub fn position(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }

    pub fn row(&self, id: RowId) -> Option<&DisplayRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn headers(&self) -> impl Iterator<Item = &DisplayRow> {
        self.rows.iter().filter(|row| row.is_header())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Left line ids in row order, skipping headers.
    pub fn left_ids(&self) -> Vec<LineId> {
        self.rows
            .iter()
            .flat_map(|row| row.left.iter().map(|line| line.id))
            .collect()
    }

    /// Right line ids in row order, skipping headers.
    pub fn right_ids(&self) -> Vec<LineId> {
        self.rows
            .iter()
            .flat_map(|row| row.right.iter().map(|line| line.id))
            .collect()
    }
}
