//! Top-level module for the random-text generation system.
//!
//! This crate provides a word-level suffix model and a generator, including:
//! - The prefix-to-successors model (`SuffixModel`)
//! - Internal sliding-window management (`Prefix`)
//! - A generation interface sampling the model (`Generator`)

/// Interface for generating word sequences from a populated model.
///
/// Exposes bounded random-walk generation with either the process
/// random source or an injected one.
pub mod generator;

/// Word-level suffix model.
///
/// Handles stream ingestion, successor accumulation,
/// and read-only introspection of the learned table.
pub mod suffix_model;

/// Internal representation of the sliding prefix window.
///
/// Tracks the most recently seen words and derives the canonical
/// lookup key. This module is not exposed publicly.
mod prefix;
