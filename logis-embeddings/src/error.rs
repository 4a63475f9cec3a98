use logis_core::EmbeddingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbeddingProviderError {
    #[error("ollama request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("ollama returned {got} vectors for {expected} inputs")]
    CountMismatch { expected: usize, got: usize },
    #[error("ollama returned a {got}-dimensional vector, expected {expected}")]
    Dimension { expected: usize, got: usize },
}

impl From<EmbeddingProviderError> for EmbeddingError {
    fn from(error: EmbeddingProviderError) -> Self {
        match error {
            EmbeddingProviderError::Request { .. } => EmbeddingError::Provider(error.to_string()),
            EmbeddingProviderError::CountMismatch { .. }
            | EmbeddingProviderError::Dimension { .. } => {
                EmbeddingError::InvalidResponse(error.to_string())
            }
        }
    }
}
