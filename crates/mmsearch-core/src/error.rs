use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Result limit must be at least 1")]
    InvalidLimit,

    #[error("Search engine not initialized: corpus has not been built")]
    NotInitialized,

    #[error("Embedding failed: {0}")]
    EmbeddingFailed(anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
