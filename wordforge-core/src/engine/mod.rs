//! Top-level module for the wordlist generation system.
//!
//! This crate generates candidate passwords for one or more target names,
//! including:
//! - Token set derivation (`tokens`)
//! - Validated per-target parameters (`generation_input`)
//! - A deduplicating accumulator and length filter (`candidate_set`)
//! - A high-level generation interface (`generator`)

/// Deduplicating candidate accumulator and the optional length filter.
///
/// Insertion is idempotent and merging two sets is duplicate-safe, which
/// allows independent per-target pipelines to be unioned at the end.
pub mod candidate_set;

/// Validated per-target generation parameters.
///
/// Covers the target name, an optional date of birth, an optional year
/// range and optional length bounds. All validation happens here, before
/// any generation work starts.
pub mod generation_input;

/// High-level interface for generating candidate wordlists.
///
/// Exposes single-target generation, parallel batch generation and the
/// expansion estimate used to bound oversized configurations.
pub mod generator;

/// Token family derivation and the generation profile.
///
/// Builds the numeric, date, symbol and common-word token sets, plus the
/// casing and leet variants of a target name.
pub mod tokens;

/// Internal composition template library.
///
/// Each template is a pure rule combining a name variant with tokens into
/// candidate strings. This module is not exposed publicly.
mod template;
