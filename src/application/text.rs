//! Plain-text unified diff for terminals.
//!
//! Long runs of common lines are replaced with `@@ N common lines @@`
//! markers, keeping `text_context_lines` lines of context around changes.

use crate::application::render::{RenderContext, check_script};
use crate::domain::{DiffRecord, RenderError, Side};

/// Formats one record as ` `/`-`/`+` prefixed lines.
pub fn unified_text(ctx: &RenderContext<'_>, record: &DiffRecord) -> Result<String, RenderError> {
    check_script(ctx.pool, record)?;

    let context = ctx.options.text_context_lines;
    // Longest common run printed in full at an edge, and between two changes.
    let edge_run = context.saturating_add(3);
    let middle_run = context.saturating_mul(2).saturating_add(3);
    let lines = Lines { ctx, record };
    let mut out = String::with_capacity(256);

    let mut ops = record.ops.as_slice();
    let (mut xi, mut yi, mut keep) = (0, 0, 0);
    if let Some(first) = ops.first()
        && first.del == 0
        && first.add == 0
        && first.keep > edge_run
    {
        marker(&mut out, first.keep - context);
        xi = first.keep - context;
        yi = xi;
        keep = context;
        ops = &ops[1..];
    }

    for op in ops {
        if keep > middle_run {
            for i in 0..context {
                lines.push(&mut out, ' ', Side::Left, xi + i)?;
            }
            marker(&mut out, keep - context.saturating_mul(2));
            xi += keep - context;
            yi += keep - context;
            keep = context;
        }
        for _ in 0..keep {
            lines.push(&mut out, ' ', Side::Left, xi)?;
            xi += 1;
        }
        yi += keep;
        keep = op.keep;
        for _ in 0..op.del {
            lines.push(&mut out, '-', Side::Left, xi)?;
            xi += 1;
        }
        for _ in 0..op.add {
            lines.push(&mut out, '+', Side::Right, yi)?;
            yi += 1;
        }
    }

    let mut common = 0;
    if keep > edge_run {
        common = keep - context;
        keep = context;
    }
    for _ in 0..keep {
        lines.push(&mut out, ' ', Side::Left, xi)?;
        xi += 1;
    }
    if common > 0 {
        marker(&mut out, common);
    }
    Ok(out)
}

/// Formats many records, each under a `=== name` line with its body
/// indented by a tab. Records without changes are listed with an empty body.
pub fn unified_report<'r>(
    ctx: &RenderContext<'_>,
    records: impl IntoIterator<Item = &'r DiffRecord>,
) -> Result<String, RenderError> {
    let mut out = String::new();
    for record in records {
        out.push_str(&format!("=== {}\n", record.name));
        for line in unified_text(ctx, record)?.lines() {
            out.push_str(&format!("\t{line}\n"));
        }
    }
    Ok(out)
}

fn marker(out: &mut String, common: usize) {
    out.push_str(&format!("@@ {common} common lines @@\n"));
}

struct Lines<'a, 'p> {
    ctx: &'a RenderContext<'p>,
    record: &'a DiffRecord,
}

impl Lines<'_, '_> {
    fn push(
        &self,
        out: &mut String,
        prefix: char,
        side: Side,
        index: usize,
    ) -> Result<(), RenderError> {
        let ids = match side {
            Side::Left => &self.record.lt,
            Side::Right => &self.record.rt,
        };
        let Some(&id) = ids.get(index) else {
            return Err(RenderError::ScriptOverrun {
                record: self.record.name.clone(),
                side,
                needed: index + 1,
                len: ids.len(),
            });
        };
        let Some(text) = self.ctx.pool.get(id) else {
            return Err(RenderError::MissingLine {
                record: self.record.name.clone(),
                id,
            });
        };
        out.push(prefix);
        out.push_str(text);
        out.push('\n');
        Ok(())
    }
}
