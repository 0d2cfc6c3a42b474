use super::{HeadingTracker, RenderContext};
use crate::domain::{DiffTable, DisplayRow, ZippedBlock};

/// Collapses long runs of unchanged rows behind a zipped header row.
///
/// Member rows stay in the table right after their header, hidden, so that
/// disclosure only has to flip visibility flags.
pub(super) fn zip_unchanged_runs(
    ctx: &RenderContext<'_>,
    rows: Vec<DisplayRow>,
    table: &mut DiffTable,
) -> Vec<DisplayRow> {
    if ctx.options.zip_threshold == 0 {
        return rows;
    }

    let mut zipper = Zipper {
        ctx,
        table,
        out: Vec::with_capacity(rows.len() + 4),
        heading: HeadingTracker::new(),
        blocks: 0,
    };
    let mut run = Vec::new();
    for row in rows {
        if row.is_unchanged() {
            run.push(row);
            continue;
        }
        zipper.flush(std::mem::take(&mut run), true);
        zipper.push(row);
    }
    zipper.flush(run, false);
    zipper.out
}

struct Zipper<'c, 'p, 't> {
    ctx: &'c RenderContext<'p>,
    table: &'t mut DiffTable,
    out: Vec<DisplayRow>,
    heading: HeadingTracker,
    blocks: usize,
}

impl Zipper<'_, '_, '_> {
    fn push(&mut self, row: DisplayRow) {
        for line in &row.left {
            self.heading.observe(self.ctx.text(line.id));
        }
        self.out.push(row);
    }

    /// Emits one maximal unchanged run. `change_follows` is false for the run
    /// that ends the table.
    fn flush(&mut self, run: Vec<DisplayRow>, change_follows: bool) {
        if run.is_empty() {
            return;
        }
        let options = self.ctx.options;
        let lead = if self.out.is_empty() { 0 } else { options.context_lines };
        let trail = if change_follows { options.context_lines } else { 0 };
        let zipped = run.len().saturating_sub(lead + trail);
        if zipped == 0 || zipped < options.zip_threshold {
            run.into_iter().for_each(|row| self.push(row));
            return;
        }

        let mut rows = run.into_iter();
        rows.by_ref().take(lead).for_each(|row| self.push(row));

        let members: Vec<DisplayRow> = rows.by_ref().take(zipped).collect();
        let ctx = self.ctx;
        let heading = self.heading.heading(
            members
                .iter()
                .flat_map(|row| row.left.iter().map(move |line| ctx.text(line.id))),
        );
        let expanded = options.expand_first_block && self.blocks == 0;
        self.blocks += 1;

        let mut header = DisplayRow::zipped_header(
            self.table.alloc_id(),
            ZippedBlock {
                members: members.iter().map(|row| row.id).collect(),
                heading,
            },
        );
        header.visible = !expanded;
        self.out.push(header);
        for mut row in members {
            row.visible = expanded;
            self.push(row);
        }

        rows.for_each(|row| self.push(row));
    }
}
