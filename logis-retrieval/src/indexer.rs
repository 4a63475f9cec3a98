use logis_core::{Document, Embedding, VectorStore};

use crate::{RetrievalError, RetrievalResult};

/// Embeds documents and loads them into a vector store.
pub struct Indexer<E, S> {
    embedder: E,
    store: S,
}

impl<E: Embedding, S: VectorStore> Indexer<E, S> {
    pub fn new(embedder: E, store: S) -> Self {
        Self { embedder, store }
    }

    /// One `embed_batch` call for the whole list; documents keep their order.
    /// Nothing is written to the store unless every document got a vector.
    pub async fn add_documents(&self, mut docs: Vec<Document>) -> RetrievalResult<()> {
        if let Some(doc) = docs.iter().find(|doc| doc.id.trim().is_empty()) {
            return Err(RetrievalError::InvalidId(doc.id.clone()));
        }

        let texts: Vec<String> = docs.iter().map(|doc| doc.content.clone()).collect();
        let embeddings = self.embedder.embed_batch(&texts).await?;
        if embeddings.len() != docs.len() {
            return Err(RetrievalError::BatchMismatch {
                docs: docs.len(),
                embeddings: embeddings.len(),
            });
        }

        for (doc, embedding) in docs.iter_mut().zip(embeddings) {
            doc.embedding = Some(embedding);
        }
        self.store.add(docs).await?;
        Ok(())
    }
}
