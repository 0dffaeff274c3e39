//! Word-level random-text generation library.
//!
//! This crate builds a statistical model of word sequences from plain text
//! and generates new text that locally resembles the input's word order:
//! - Suffix model mapping fixed-length word prefixes to observed successors
//! - Incremental ingestion from any byte stream
//! - Random-walk generation with an injectable random source
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core suffix model and generation logic.
///
/// This module exposes the high-level model and generator interface while
/// keeping the internal prefix representation private.
pub mod model;
