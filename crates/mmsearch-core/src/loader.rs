//! Corpus loading: a JSON array of `{id, title, description}` records.
//!
//! The file order is the corpus order; downstream ranking relies on it
//! for its stable-index tie-break.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::types::Document;

pub fn load_documents(path: &Path) -> Result<Vec<Document>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus file {}", path.display()))?;
    let documents: Vec<Document> = serde_json::from_str(&raw)
        .with_context(|| format!("Corpus file {} is not a JSON document array", path.display()))?;
    Ok(documents)
}
