//! JSON input documents.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use crate::domain::{Bucket, DiffRecord, InputError, LinePool, PoolBuilder, RecordSet, TextRecord};

/// Either a pool-backed document (`lines` + `records`/`buckets`) or a text
/// document (`entries`).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Document {
    lines: Option<LinePool>,
    records: Vec<DiffRecord>,
    buckets: Vec<Bucket>,
    entries: Vec<TextRecord>,
}

/// Parses an input document.
///
/// Loose `records` become a leading bucket with an empty name. Text entries
/// are interned into a fresh pool.
pub fn parse_document(json: &str) -> Result<RecordSet, InputError> {
    let doc: Document = serde_json::from_str(json)?;

    let set = if !doc.entries.is_empty() {
        if doc.lines.is_some() || !doc.records.is_empty() || !doc.buckets.is_empty() {
            return Err(InputError::MixedDocument);
        }
        let mut builder = PoolBuilder::new();
        doc.entries.into_iter().for_each(|entry| builder.add(entry));
        let (pool, records) = builder.finish();
        RecordSet {
            pool,
            buckets: vec![Bucket {
                name: String::new(),
                records,
            }],
        }
    } else {
        if doc.records.is_empty() && doc.buckets.is_empty() {
            return Err(InputError::Empty);
        }
        let mut buckets = Vec::with_capacity(doc.buckets.len() + 1);
        if !doc.records.is_empty() {
            buckets.push(Bucket {
                name: String::new(),
                records: doc.records,
            });
        }
        buckets.extend(doc.buckets);
        RecordSet {
            pool: doc.lines.unwrap_or_default(),
            buckets,
        }
    };

    let mut seen = HashSet::new();
    if let Some(dup) = set.records().find(|record| !seen.insert(record.name.as_str())) {
        return Err(InputError::DuplicateRecord {
            name: dup.name.clone(),
        });
    }

    log::debug!(
        "parsed {} records in {} buckets over {} lines",
        set.record_count(),
        set.buckets.len(),
        set.pool.len()
    );
    Ok(set)
}

/// Reads and parses a document from `path`, or from stdin when `path` is `-`.
pub fn load_document(path: &Path) -> Result<RecordSet> {
    let json = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read input document from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input document {}", path.display()))?
    };

    parse_document(&json).with_context(|| format!("Invalid input document {}", path.display()))
}
