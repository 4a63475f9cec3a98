use async_trait::async_trait;
use logis_core::{Embedding, SearchResult, VectorStore};

use crate::{BaseRetriever, RetrievalError};

/// Embeds the query with the same model that indexed the store, then runs a
/// similarity search.
pub struct Retriever<E, S> {
    embedder: E,
    store: S,
}

impl<E: Embedding, S: VectorStore> Retriever<E, S> {
    pub fn new(embedder: E, store: S) -> Self {
        Self { embedder, store }
    }
}

#[async_trait]
impl<E: Embedding, S: VectorStore> BaseRetriever for Retriever<E, S> {
    async fn retrieve(
        &self,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<SearchResult>, RetrievalError> {
        let query_embedding = self.embedder.embed(query).await?;
        Ok(self.store.search(&query_embedding, top_k).await?)
    }
}
