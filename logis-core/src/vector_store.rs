use async_trait::async_trait;

use crate::{Document, StoreError};

/// A document returned by a similarity search, with its cosine score.
#[derive(Clone, Debug)]
pub struct SearchResult {
    pub document: Document,
    pub score: f32,
}

#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Inserts embedded documents. A document whose id is already present
    /// replaces the previous one in place.
    async fn add(&self, docs: Vec<Document>) -> Result<(), StoreError>;

    /// At most `top_k` documents, most similar first.
    async fn search(&self, query: &[f32], top_k: usize) -> Result<Vec<SearchResult>, StoreError>;
}
