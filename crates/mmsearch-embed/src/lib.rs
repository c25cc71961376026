//! Embedder implementations behind the `mmsearch_core::traits::Embedder`
//! capability.
//!
//! The real multimodal model lives outside this workspace; what ships here
//! is a deterministic hash embedder so the CLI and the test suites run
//! without loading any model weights. Text tokens and image byte windows
//! hash into buckets of a fixed-width vector which is then L2-normalized,
//! giving stable, comparable unit vectors for both modalities.

use std::hash::{Hash, Hasher};

use anyhow::Result;
use mmsearch_core::traits::Embedder;
use mmsearch_core::types::{Embedding, ImageInput};
use twox_hash::XxHash64;

/// Width of CLIP ViT-B/32 outputs, the model the corpus was built for.
pub const DEFAULT_DIM: usize = 512;

/// Deterministic feature-hashing embedder.
///
/// Not semantically meaningful, but dimensionally faithful: same input,
/// same vector, unit L2 norm, shared width for text and images.
pub struct HashEmbedder {
    dim: usize,
}

impl HashEmbedder {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }

    fn bucket<T: Hash>(&self, token: T, seed: u64) -> (usize, f32) {
        let mut hasher = XxHash64::with_seed(seed);
        token.hash(&mut hasher);
        let h = hasher.finish();
        let idx = (h as usize) % self.dim;
        let val = (((h >> 32) as u32) as f32) / (u32::MAX as f32);
        (idx, val)
    }

    fn normalize(&self, mut v: Vec<f32>) -> Embedding {
        let norm = (v.iter().map(|x| x * x).sum::<f32>()).sqrt().max(1e-6);
        for x in &mut v {
            *x /= norm;
        }
        v
    }

    fn embed_one_text(&self, text: &str) -> Embedding {
        let mut v = vec![0f32; self.dim];
        for (i, token) in text.split_whitespace().enumerate() {
            let (idx, val) = self.bucket(token, 0);
            v[idx] += val + (i as f32 % 3.0) * 0.01;
        }
        self.normalize(v)
    }
}

impl Embedder for HashEmbedder {
    fn dim(&self) -> usize {
        self.dim
    }

    fn encode_text(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        Ok(texts.iter().map(|t| self.embed_one_text(t)).collect())
    }

    fn encode_image(&self, image: &ImageInput) -> Result<Embedding> {
        // Seed on the mime so a PNG and a JPEG of identical bytes land
        // in different regions, as a decoding model would separate them.
        let mut seed_hasher = XxHash64::with_seed(0);
        image.mime.hash(&mut seed_hasher);
        let seed = seed_hasher.finish();

        let mut v = vec![0f32; self.dim];
        for window in image.bytes.chunks(16) {
            let (idx, val) = self.bucket(window, seed);
            v[idx] += val;
        }
        Ok(self.normalize(v))
    }
}

/// Pick the embedder for this process.
///
/// Today that is always the hash embedder; `APP_EMBEDDING_DIM` overrides
/// its width for corpora built against a different model.
pub fn get_default_embedder() -> Result<Box<dyn Embedder>> {
    let dim = std::env::var("APP_EMBEDDING_DIM")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(DEFAULT_DIM);
    tracing::debug!(dim, "using hash embedder");
    Ok(Box::new(HashEmbedder::new(dim)))
}
