//! HTML serialization of rendered tables.
//!
//! Row markup is a pure function of row state. The page wrapper is a
//! Handlebars template; styling and scripts are left to whoever embeds it.

use handlebars::{Handlebars, html_escape};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;

use crate::domain::{DiffTable, DisplayRow, Layout, LinePool, LineRef, RowKind};
use crate::state::Page;

static TEMPLATES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("page", include_str!("page.hbs"));
    m
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlOptions {
    pub title: String,
    /// Lower bound of the text column width, in characters.
    pub min_width: usize,
    /// Upper bound of the text column width, in characters.
    pub max_width: usize,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            title: "diffview".to_string(),
            min_width: 40,
            max_width: 120,
        }
    }
}

impl HtmlOptions {
    /// Width of one text column: the longest line, clamped, plus room for
    /// the cell padding.
    pub fn text_width(&self, pool: &LinePool) -> usize {
        pool.max_line_len().max(self.min_width).min(self.max_width) + 2
    }
}

/// Renders the whole page through the `page` template.
pub fn render_page(page: &Page, pool: &LinePool, options: &HtmlOptions) -> anyhow::Result<String> {
    let tables: Vec<_> = page
        .tables()
        .iter()
        .enumerate()
        .map(|(idx, table)| {
            json!({
                "anchor": format!("t{idx}"),
                "name": table.name,
                "comment": table.comment.clone().unwrap_or_default(),
                "markup": render_table(pool, table),
            })
        })
        .collect();
    let ctx = json!({
        "title": options.title,
        "width": options.text_width(pool),
        "expand_all_enabled": page.is_expand_all_enabled(),
        "unify_enabled": page.is_unify_enabled(),
        "selection": page.selection_mode().enabled().to_string(),
        "tables": tables,
    });

    render_template("page", &ctx)
}

fn render_template(name: &str, ctx: &serde_json::Value) -> anyhow::Result<String> {
    let template = TEMPLATES
        .get(name)
        .ok_or_else(|| anyhow::anyhow!("unknown template '{name}'"))?;

    let mut hb = Handlebars::new();
    hb.set_strict_mode(true);

    hb.render_template(template, ctx)
        .map_err(|e| anyhow::anyhow!("rendering template '{name}' failed: {e}"))
}

/// Renders one table as a `<table>` element.
pub fn render_table(pool: &LinePool, table: &DiffTable) -> String {
    let class = match table.layout {
        Layout::Split => "cSplit",
        Layout::Unified => "cUnifiedTable",
    };
    let mut out = format!("<table class={class}><tbody>\n");
    for row in &table.rows {
        render_row(&mut out, pool, table.layout, row);
        out.push('\n');
    }
    out.push_str("</tbody></table>");
    out
}

fn render_row(out: &mut String, pool: &LinePool, layout: Layout, row: &DisplayRow) {
    let hidden = if row.visible { "" } else { " hidden" };
    out.push_str(&format!("<tr data-row={}{hidden}>", row.id));

    if let RowKind::ZippedHeader(block) = &row.kind {
        let span = match layout {
            Layout::Split => 4,
            Layout::Unified => 3,
        };
        out.push_str(&format!(
            "<td colspan={span} class=\"cZipped cfgNeutral\"><button data-expand={}>{}</button>",
            row.id,
            html_escape(&block.label())
        ));
        return;
    }

    let left_numbers = numbers(&row.left);
    let right_numbers = numbers(&row.right);
    match layout {
        Layout::Split => {
            let (left_bg, right_bg) = match row.kind {
                RowKind::Removed => (" cbgNegative", ""),
                RowKind::Added => ("", " cbgPositive"),
                RowKind::Replaced => (" cbgNegative", " cbgPositive"),
                _ => ("", ""),
            };
            out.push_str(&format!(
                "<td class=cNum>{left_numbers}<td class=\"cLeft{left_bg}\">{}\
                 <td class=cNum>{right_numbers}<td class=\"cRight{right_bg}\">{}",
                text(pool, &row.left),
                text(pool, &row.right)
            ));
        }
        Layout::Unified => {
            let (bg, body) = match row.kind {
                RowKind::Removed => (" cbgNegative", text(pool, &row.left)),
                RowKind::Added => (" cbgPositive", text(pool, &row.right)),
                _ => ("", text(pool, &row.left)),
            };
            out.push_str(&format!(
                "<td class=\"cNum{bg}\">{left_numbers}<td class=\"cNum{bg}\">{right_numbers}\
                 <td class=\"cUnified{bg}\">{body}"
            ));
        }
    }
}

fn numbers(lines: &[LineRef]) -> String {
    lines
        .iter()
        .map(|line| line.number.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn text(pool: &LinePool, lines: &[LineRef]) -> String {
    lines
        .iter()
        .map(|line| html_escape(pool.get(line.id).unwrap_or_default()))
        .collect::<Vec<_>>()
        .join("\n")
}
