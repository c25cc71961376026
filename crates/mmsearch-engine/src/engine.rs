//! The multimodal search engine: image query in, ranked documents out.

use std::time::Instant;

use mmsearch_core::error::{Error, Result};
use mmsearch_core::traits::Embedder;
use mmsearch_core::types::{snippet, Document, Embedding, ImageInput, SearchResult, SNIPPET_CHARS};

use crate::corpus::{build_corpus, Corpus};
use crate::rank::rank;

/// Default number of results when the caller does not say otherwise.
pub const DEFAULT_LIMIT: usize = 5;

/// Image-to-text search over a fixed corpus.
///
/// The engine has two states: without a corpus it is unready and
/// `search_with_image` fails with `NotInitialized`; once a corpus is
/// attached it stays ready, and every search is independent. The
/// embedder is an injected capability, never a concrete model.
pub struct MultimodalSearch {
    embedder: Box<dyn Embedder>,
    corpus: Option<Corpus>,
}

impl MultimodalSearch {
    /// An unready engine: embedder reachable, no corpus yet.
    pub fn new(embedder: Box<dyn Embedder>) -> Self {
        Self { embedder, corpus: None }
    }

    /// A ready engine over an already-built corpus.
    pub fn with_corpus(embedder: Box<dyn Embedder>, corpus: Corpus) -> Self {
        Self { embedder, corpus: Some(corpus) }
    }

    /// Build the corpus from `documents` and move to the ready state.
    pub fn load_corpus(&mut self, documents: Vec<Document>) -> Result<()> {
        self.corpus = Some(build_corpus(documents, self.embedder.as_ref())?);
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.corpus.is_some()
    }

    /// Embed an image query into the shared space.
    pub fn embed_image(&self, image: &ImageInput) -> Result<Embedding> {
        self.embedder.encode_image(image).map_err(Error::EmbeddingFailed)
    }

    /// Diagnostic: report the dimensionality the embedder produces for
    /// `image`. No ranking behavior; works with or without a corpus.
    pub fn embedding_dim(&self, image: &ImageInput) -> Result<usize> {
        Ok(self.embed_image(image)?.len())
    }

    /// Rank the corpus against an image query and return the top
    /// `limit` documents as fresh `SearchResult` values.
    ///
    /// An empty corpus yields an empty list, mirroring the ranker's
    /// empty-candidates policy.
    pub fn search_with_image(&self, image: &ImageInput, limit: usize) -> Result<Vec<SearchResult>> {
        let corpus = self.corpus.as_ref().ok_or(Error::NotInitialized)?;
        let started = Instant::now();

        let query = self.embed_image(image)?;

        // Empty corpus falls through as empty candidates, which rank
        // resolves to an empty list rather than an error.
        let top = rank(&query, corpus.embeddings(), limit)?;

        let mut results = Vec::with_capacity(top.len());
        for (idx, score) in top {
            let doc = corpus.document(idx);
            results.push(SearchResult {
                doc_id: doc.id.clone(),
                title: doc.title.clone(),
                snippet: snippet(&doc.description, SNIPPET_CHARS),
                score,
            });
        }

        tracing::debug!(
            corpus = corpus.len(),
            returned = results.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "image search completed"
        );
        Ok(results)
    }
}
