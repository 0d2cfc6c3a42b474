//! diffview CLI entry point.
//!
//! Reads a JSON document of precomputed diffs and prints it as an HTML page,
//! terminal text, a JSON row dump or change buckets.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use diffview::application::bucket::bucket_by_change;
use diffview::application::render::{RenderContext, render_all};
use diffview::application::text::unified_report;
use diffview::infra::app_config::load_config;
use diffview::infra::html::render_page;
use diffview::infra::input::load_document;
use diffview::state::{Action, Page};

#[derive(Parser, Debug)]
#[command(name = "diffview")]
#[command(version)]
#[command(about = "Render precomputed line diffs for review", long_about = None)]
struct Args {
    /// Input document (`-` for stdin)
    input: PathBuf,

    /// Config file to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write an HTML page with one table per record
    Html {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Convert every table to the unified layout
        #[arg(long)]
        unified: bool,

        /// Expand every zipped block
        #[arg(long)]
        expand_all: bool,
    },

    /// Print a unified text diff of every record
    Text,

    /// Dump the rendered tables as JSON
    Rows,

    /// Group records that carry the same change
    Buckets,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(args.config.as_deref());
    let set = load_document(&args.input)?;
    let ctx = RenderContext::new(&set.pool, &config.render);

    let output = match args.command {
        Commands::Html {
            output,
            unified,
            expand_all,
        } => {
            let mut page = Page::build(&ctx, set.records()).context("Failed to render records")?;
            if unified {
                page.dispatch(Action::ConvertToUnified);
            }
            if expand_all {
                page.dispatch(Action::ExpandAll);
            }
            let html = render_page(&page, &set.pool, &config.html)?;
            if let Some(path) = output {
                std::fs::write(&path, html)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                log::info!("wrote {}", path.display());
                return Ok(());
            }
            html
        }
        Commands::Text => unified_report(&ctx, set.records()).context("Failed to format records")?,
        Commands::Rows => {
            let tables = render_all(&ctx, set.records()).context("Failed to render records")?;
            serde_json::to_string_pretty(&tables).context("Failed to serialize rows")? + "\n"
        }
        Commands::Buckets => {
            let buckets = bucket_by_change(&set.pool, set.records().cloned())
                .context("Failed to group records")?;
            let mut out = String::new();
            for bucket in buckets {
                let names: Vec<&str> = bucket.records.iter().map(|r| r.name.as_str()).collect();
                out.push_str(&format!("{} {}\n", bucket.name, names.join(" ")));
            }
            out
        }
    };

    std::io::stdout()
        .write_all(output.as_bytes())
        .context("Failed to write output")
}
