//! `spacing_metadata.json`: the spacing/suffix side-table, keyed by
//! translation key, used to re-inject formatting after translation.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{ExtractionResult, SpacingMetadata};
use crate::output::OutputContext;

#[derive(Debug, Serialize)]
struct SpacingDocument<'a> {
    generated: String,
    total_keys_with_spacing: usize,
    metadata: &'a BTreeMap<String, SpacingMetadata>,
    text_to_key: &'a BTreeMap<String, String>,
}

pub fn render_spacing_metadata(result: &ExtractionResult, ctx: &OutputContext) -> Result<String> {
    let document = SpacingDocument {
        generated: ctx.generated_iso(),
        total_keys_with_spacing: result.spacing_metadata.len(),
        metadata: &result.spacing_metadata,
        text_to_key: &result.text_to_key,
    };
    serde_json::to_string_pretty(&document).context("Failed to serialize spacing metadata")
}
