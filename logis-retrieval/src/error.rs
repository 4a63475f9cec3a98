use logis_core::{EmbeddingError, StoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("document id {0:?} cannot be blank")]
    InvalidId(String),
    #[error("embedder returned {embeddings} vectors for {docs} documents")]
    BatchMismatch { docs: usize, embeddings: usize },
    #[error("embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),
    #[error("vector index failed: {0}")]
    Store(#[from] StoreError),
}

pub type RetrievalResult<T> = Result<T, RetrievalError>;
