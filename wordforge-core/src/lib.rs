//! Targeted password wordlist generation library.
//!
//! This crate provides a deterministic, rule-based candidate generator including:
//! - Token family derivation (name casings, leet forms, numbers, dates, symbols, words)
//! - An enumerated library of composition templates
//! - Streaming composition with set-based deduplication
//! - Length filtering and lexicographically sorted output
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse. The crate
//! performs no file or console I/O; boundary crates own that.

/// Core token derivation, composition and orchestration logic.
///
/// This module exposes the high-level generator interface while keeping
/// internal template representations private.
pub mod engine;

/// Error taxonomy shared by the engine and its boundary crates.
pub mod error;
