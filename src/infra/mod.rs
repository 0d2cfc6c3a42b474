//! Infrastructure layer (adapters/implementations).
//!
//! This module contains the IO-facing pieces: configuration, input documents,
//! HTML output and hashing.

pub mod app_config;
pub mod hash;
pub mod html;
pub mod input;
