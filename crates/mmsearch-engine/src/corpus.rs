//! Corpus construction: documents paired with their text embeddings.

use std::time::Instant;

use mmsearch_core::error::{Error, Result};
use mmsearch_core::traits::Embedder;
use mmsearch_core::types::{Document, Embedding};

/// An ordered, read-only collection of documents and their embeddings.
///
/// The embedding at position `i` always belongs to the document at
/// position `i`; nothing mutates either list after construction, so
/// concurrent readers need no locking.
pub struct Corpus {
    documents: Vec<Document>,
    embeddings: Vec<Embedding>,
    dim: usize,
}

impl Corpus {
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Embedding dimensionality the corpus was built with.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Document at `index`. Indices come from ranking over
    /// `embeddings()`, so an out-of-range index is a bug; this panics
    /// rather than papering over a broken pairing.
    pub fn document(&self, index: usize) -> &Document {
        &self.documents[index]
    }

    pub fn embeddings(&self) -> &[Embedding] {
        &self.embeddings
    }
}

/// Text that gets embedded for a document.
fn embedding_text(doc: &Document) -> String {
    format!("{}: {}", doc.title, doc.description)
}

/// Build a corpus by embedding every document's `"title: description"`
/// text in one batch call.
///
/// Pure with respect to the embedder: no model lifecycle is managed
/// here, so corpus cost is testable with a fixture embedder. An empty
/// document list produces a fresh empty corpus, never shared state.
pub fn build_corpus(documents: Vec<Document>, embedder: &dyn Embedder) -> Result<Corpus> {
    let dim = embedder.dim();
    let started = Instant::now();

    let texts: Vec<String> = documents.iter().map(embedding_text).collect();
    let embeddings = embedder.encode_text(&texts).map_err(Error::EmbeddingFailed)?;

    if embeddings.len() != documents.len() {
        return Err(Error::EmbeddingFailed(anyhow::anyhow!(
            "embedder returned {} vectors for {} documents",
            embeddings.len(),
            documents.len()
        )));
    }
    for embedding in &embeddings {
        if embedding.len() != dim {
            return Err(Error::DimensionMismatch { expected: dim, actual: embedding.len() });
        }
    }

    tracing::debug!(
        documents = documents.len(),
        dim,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "corpus built"
    );
    Ok(Corpus { documents, embeddings, dim })
}
