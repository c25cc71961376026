//! Exact brute-force top-K selection over candidate embeddings.

use mmsearch_core::error::{Error, Result};
use mmsearch_core::types::Embedding;

use crate::similarity::cosine_similarity;

/// Score every candidate against `query` and return the top `k` as
/// `(original_index, score)` pairs, best first.
///
/// Ties keep the original candidate order (the sort is stable), which
/// makes output reproducible run to run. An empty candidate slice is a
/// valid input and yields an empty result; `k == 0` is a caller error.
pub fn rank(query: &[f32], candidates: &[Embedding], k: usize) -> Result<Vec<(usize, f32)>> {
    if k == 0 {
        return Err(Error::InvalidLimit);
    }

    let mut scored = Vec::with_capacity(candidates.len());
    for (idx, candidate) in candidates.iter().enumerate() {
        let score = cosine_similarity(query, candidate)?;
        scored.push((idx, score));
    }

    // Stable sort: equal scores stay in candidate order.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(k);
    Ok(scored)
}
