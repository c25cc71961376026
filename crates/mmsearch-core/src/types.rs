//! Domain types shared by the corpus, embedder, and ranking engine.

use serde::{Deserialize, Serialize};

pub type DocId = String;

/// A point in the shared text/image embedding space.
///
/// Every embedding compared in one search must have the same length;
/// a mismatch is a contract violation, not a recoverable state.
pub type Embedding = Vec<f32>;

/// A searchable document as supplied by the corpus loader.
///
/// Immutable once loaded; owned by the corpus for its entire lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub title: String,
    pub description: String,
}

/// A raw image query: the undecoded payload plus its MIME type.
#[derive(Debug, Clone)]
pub struct ImageInput {
    pub bytes: Vec<u8>,
    pub mime: String,
}

impl ImageInput {
    pub fn new(bytes: Vec<u8>, mime: impl Into<String>) -> Self {
        Self { bytes, mime: mime.into() }
    }
}

/// How many characters of the description a result snippet carries.
pub const SNIPPET_CHARS: usize = 100;

/// One ranked hit returned by a search.
///
/// `score` is the raw cosine similarity from the ranker, unrounded;
/// display precision is a presentation concern. `snippet` holds the
/// first [`SNIPPET_CHARS`] characters of the description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub doc_id: DocId,
    pub title: String,
    pub snippet: String,
    pub score: f32,
}

/// Truncate `text` to its first `max_chars` characters.
///
/// Character-based, never splitting a multi-byte UTF-8 sequence and
/// never respecting word boundaries.
pub fn snippet(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
