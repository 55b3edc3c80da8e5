//! lrloc - localizable string extractor for Lightroom Classic plugins
//!
//! lrloc is a CLI tool and library that scans a plugin's Lua sources for
//! hard-coded, user-visible strings and proposes `LOC "$$$/..."` keys for
//! them. It writes a key file, a replacement map, a spacing/suffix
//! side-table and a human-readable report; source files are never modified.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction pipeline (classifier, spacing analysis, key
//!   generation, statement accumulation, engine)
//! - `output`: Emitters for the generated artefacts
//! - `utils`: Shared Lua source helpers

pub mod cli;
pub mod config;
pub mod core;
pub mod output;
pub mod utils;
