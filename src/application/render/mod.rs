//! Row renderer: turns one diff record into the rows of a diff table.
//!
//! The split walk is the single source of truth. The unified layout is the
//! split table run through [`crate::application::transform::unify`], so a
//! table rendered unified and a split table converted later always agree.

mod heading;
mod zip;


use serde::{Deserialize, Serialize};

use crate::application::transform;
use crate::domain::{
    DiffRecord, DiffTable, DisplayRow, Layout, LineId, LinePool, LineRef, RenderError, RowKind,
    RowLayout, Side,
};

pub use heading::HeadingTracker;

/// Knobs of the row renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Layout used when a caller does not ask for one explicitly.
    pub layout: Layout,
    /// Minimum length of an unchanged run that gets zipped. 0 disables zipping.
    pub zip_threshold: usize,
    /// Unchanged rows kept visible next to a change on each side of a zipped block.
    pub context_lines: usize,
    /// Render the first zipped block of each record expanded.
    pub expand_first_block: bool,
    /// Context lines around changes in the terminal text format.
    pub text_context_lines: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            layout: Layout::Split,
            zip_threshold: 4,
            context_lines: 0,
            expand_first_block: false,
            text_context_lines: 3,
        }
    }
}

/// Everything the renderer reads: the shared line pool and the options.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub pool: &'a LinePool,
    pub options: &'a RenderOptions,
}

impl<'a> RenderContext<'a> {
    pub fn new(pool: &'a LinePool, options: &'a RenderOptions) -> Self {
        Self { pool, options }
    }

    /// Text of a line already validated by the renderer.
    pub(crate) fn text(&self, id: LineId) -> &'a str {
        self.pool.get(id).unwrap_or_default()
    }
}

/// Renders `record` in the given layout.
pub fn render_record(
    ctx: &RenderContext<'_>,
    record: &DiffRecord,
    layout: Layout,
) -> Result<DiffTable, RenderError> {
    let mut table = DiffTable::new(record.name.clone(), Layout::Split);
    table.comment = record.comment.clone();

    let rows = split_rows(ctx, record, &mut table)?;
    let rows = zip::zip_unchanged_runs(ctx, rows, &mut table);
    table.set_rows(rows);

    if layout == Layout::Unified {
        transform::unify(&mut table);
    }

    log::debug!(
        "rendered {:?} as {} table with {} rows",
        record.name,
        layout,
        table.rows.len()
    );
    Ok(table)
}

/// Renders every record in order using the configured default layout.
pub fn render_all<'r>(
    ctx: &RenderContext<'_>,
    records: impl IntoIterator<Item = &'r DiffRecord>,
) -> Result<Vec<DiffTable>, RenderError> {
    records
        .into_iter()
        .map(|record| render_record(ctx, record, ctx.options.layout))
        .collect()
}

/// Cursor into one side of a record.
struct SideCursor<'r> {
    record: &'r DiffRecord,
    pool: &'r LinePool,
    side: Side,
    ids: &'r [LineId],
    pos: usize,
}

impl<'r> SideCursor<'r> {
    fn new(record: &'r DiffRecord, pool: &'r LinePool, side: Side) -> Self {
        let ids = match side {
            Side::Left => record.lt.as_slice(),
            Side::Right => record.rt.as_slice(),
        };
        Self {
            record,
            pool,
            side,
            ids,
            pos: 0,
        }
    }

    /// Consumes the next `n` line ids, checking each one against the pool.
    fn advance(&mut self, n: usize) -> Result<&'r [LineId], RenderError> {
        let all = self.ids;
        let Some(ids) = self.pos.checked_add(n).and_then(|end| all.get(self.pos..end)) else {
            return Err(RenderError::ScriptOverrun {
                record: self.record.name.clone(),
                side: self.side,
                needed: self.pos.saturating_add(n),
                len: all.len(),
            });
        };
        if let Some(&id) = ids.iter().find(|&&id| !self.pool.contains(id)) {
            return Err(RenderError::MissingLine {
                record: self.record.name.clone(),
                id,
            });
        }
        self.pos += n;
        Ok(ids)
    }

    /// Consumes the next `n` lines as numbered references.
    fn take(&mut self, n: usize) -> Result<Vec<LineRef>, RenderError> {
        let start = self.pos;
        let ids = self.advance(n)?;
        Ok(ids
            .iter()
            .enumerate()
            .map(|(offset, &id)| LineRef {
                id,
                number: start + offset + 1,
            })
            .collect())
    }

    fn is_exhausted(&self) -> bool {
        self.pos == self.ids.len()
    }
}

fn ensure_exhausted(
    record: &DiffRecord,
    left: &SideCursor<'_>,
    right: &SideCursor<'_>,
) -> Result<(), RenderError> {
    if left.is_exhausted() && right.is_exhausted() {
        return Ok(());
    }
    Err(RenderError::ScriptUnderrun {
        record: record.name.clone(),
        left_used: left.pos,
        left_len: record.lt.len(),
        right_used: right.pos,
        right_len: record.rt.len(),
    })
}

/// Checks that the edit script of `record` consumes both sides exactly and
/// that every line it touches is in the pool.
///
/// Once this passes, every cursor sum over the script stays within the
/// lengths of `lt` and `rt`.
pub fn check_script(pool: &LinePool, record: &DiffRecord) -> Result<(), RenderError> {
    let mut left = SideCursor::new(record, pool, Side::Left);
    let mut right = SideCursor::new(record, pool, Side::Right);
    for op in &record.ops {
        left.advance(op.del)?;
        right.advance(op.add)?;
        left.advance(op.keep)?;
        right.advance(op.keep)?;
    }
    ensure_exhausted(record, &left, &right)
}

/// Walks the edit script and emits one split row per aligned replace block,
/// per excess removal or addition, and per kept line.
fn split_rows(
    ctx: &RenderContext<'_>,
    record: &DiffRecord,
    table: &mut DiffTable,
) -> Result<Vec<DisplayRow>, RenderError> {
    let mut left = SideCursor::new(record, ctx.pool, Side::Left);
    let mut right = SideCursor::new(record, ctx.pool, Side::Right);
    let mut rows = Vec::with_capacity(record.lt.len().max(record.rt.len()));

    for op in &record.ops {
        let common = op.common();
        if common > 0 {
            let (l, r) = (left.take(common)?, right.take(common)?);
            rows.push(split_row(table, RowKind::Replaced, l, r));
        }
        if op.del > common {
            let l = left.take(op.del - common)?;
            rows.push(split_row(table, RowKind::Removed, l, Vec::new()));
        }
        if op.add > common {
            let r = right.take(op.add - common)?;
            rows.push(split_row(table, RowKind::Added, Vec::new(), r));
        }
        for _ in 0..op.keep {
            let (l, r) = (left.take(1)?, right.take(1)?);
            rows.push(split_row(table, RowKind::Unchanged, l, r));
        }
    }

    ensure_exhausted(record, &left, &right)?;
    Ok(rows)
}

fn split_row(
    table: &mut DiffTable,
    kind: RowKind,
    left: Vec<LineRef>,
    right: Vec<LineRef>,
) -> DisplayRow {
    DisplayRow::new(table.alloc_id(), kind, RowLayout::Split, left, right)
}
