//! Application layer (use-cases, policies).
//!
//! Turns records into tables and implements the view operations on them,
//! without depending on any output format or storage.

pub mod bucket;
pub mod disclosure;
pub mod render;
pub mod selection;
pub mod text;
pub mod transform;
