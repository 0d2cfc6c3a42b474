//! Domain error types for diffview.
//!
//! These errors describe input that breaks the contract between the diff
//! producer and the renderer. The renderer never tries to repair such input:
//! a misaligned table is worse for a reviewer than a visible failure.

use thiserror::Error;

use super::{LineId, Side};

/// Errors raised while turning a diff record into rows or text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error(
        "edit script of {record:?} overruns the {side} side: needs {needed} lines, only {len} available"
    )]
    ScriptOverrun {
        record: String,
        side: Side,
        needed: usize,
        len: usize,
    },

    #[error(
        "edit script of {record:?} leaves lines unconsumed: left {left_used}/{left_len}, right {right_used}/{right_len}"
    )]
    ScriptUnderrun {
        record: String,
        left_used: usize,
        left_len: usize,
        right_used: usize,
        right_len: usize,
    },

    #[error("record {record:?} references line {id} which is missing from the line pool")]
    MissingLine { record: String, id: LineId },
}

/// Errors raised while reading an input document.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("duplicate record name {name:?}")]
    DuplicateRecord { name: String },

    #[error("input document has neither records, buckets nor entries")]
    Empty,

    #[error("text entries cannot be mixed with lines, records or buckets")]
    MixedDocument,

    #[error("malformed input document: {0}")]
    Malformed(#[from] serde_json::Error),
}
