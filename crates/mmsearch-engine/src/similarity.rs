//! Cosine similarity over the shared embedding space.

use mmsearch_core::error::{Error, Result};

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Cosine similarity between two equal-length embeddings.
///
/// Returns `DimensionMismatch` when the lengths differ. When either
/// vector has zero norm the similarity is defined as `0.0`: a zero
/// vector has no direction, so it is equally (un)like everything.
///
/// Well-defined results land in [-1, 1]; float rounding may overshoot
/// that range slightly and callers must tolerate it.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch { expected: a.len(), actual: b.len() });
    }

    let denom = l2_norm(a) * l2_norm(b);
    if denom == 0.0 {
        return Ok(0.0);
    }
    Ok(dot(a, b) / denom)
}
