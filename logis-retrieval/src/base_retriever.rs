use async_trait::async_trait;
use logis_core::SearchResult;

use crate::RetrievalError;

/// Turns a question into the documents most relevant to it.
#[async_trait]
pub trait BaseRetriever: Send + Sync {
    /// At most `top_k` results, most relevant first. A store holding fewer
    /// documents returns all of them.
    async fn retrieve(&self, query: &str, top_k: usize)
        -> Result<Vec<SearchResult>, RetrievalError>;
}
