//! Core extraction pipeline.
//!
//! Leaf-first:
//!
//! - `classify`: technical-string classifier
//! - `spacing`: spacing and suffix analysis
//! - `key_gen`: collision-free key generation
//! - `accumulator`: multi-line statement state machine
//! - `engine`: per-file orchestration and run state
//!
//! Supporting modules hold the record types (`data`), the static pattern
//! tables (`patterns`), advisory rewrite expressions (`replacement`) and the
//! source tree walk (`file_scanner`).

pub mod accumulator;
pub mod classify;
pub mod data;
pub mod engine;
pub mod file_scanner;
pub mod key_gen;
pub mod patterns;
pub mod replacement;
pub mod spacing;

pub use data::{
    ConcatMembership, EXISTING_LOC_PATTERN, ExtractedString, ExtractionResult, ExtractionStats,
    FileWarning, SpacingMetadata,
};
pub use engine::{ExtractOptions, Extractor};
