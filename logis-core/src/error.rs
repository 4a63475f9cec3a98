use thiserror::Error;

/// Failure of a generation call.
#[derive(Debug, Error)]
pub enum LogisError {
    #[error("generation provider error: {0}")]
    LlmProvider(String),
}

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding provider returned an invalid response: {0}")]
    InvalidResponse(String),
    #[error("embedding provider unavailable: {0}")]
    Provider(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("invalid document id: {0:?}")]
    InvalidId(String),
    #[error("document '{0}' has no embedding")]
    MissingEmbedding(String),
    #[error("index io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("index file is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
    #[error("unsupported index format version {0}")]
    UnsupportedVersion(u32),
}
