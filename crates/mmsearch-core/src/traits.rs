use crate::types::{Embedding, ImageInput};

/// The embedding capability injected into the search engine.
///
/// Text and image outputs share the same dimensionality `dim()` and the
/// same comparable vector space; how the vectors are computed is the
/// implementation's business.
pub trait Embedder: Send + Sync {
    fn dim(&self) -> usize;
    fn encode_text(&self, texts: &[String]) -> anyhow::Result<Vec<Embedding>>;
    fn encode_image(&self, image: &ImageInput) -> anyhow::Result<Embedding>;
}
