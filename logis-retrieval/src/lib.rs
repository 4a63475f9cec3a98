mod base_retriever;
mod error;
mod hash_embedder;
mod in_memory;
mod indexer;
mod retriever;

use std::path::Path;

use logis_core::{Document, Embedding};

pub use base_retriever::BaseRetriever;
pub use error::{RetrievalError, RetrievalResult};
pub use hash_embedder::HashEmbedder;
pub use in_memory::{InMemoryVectorStore, INDEX_FILE};
pub use indexer::Indexer;
pub use retriever::Retriever;

/// Embeds `docs` into a fresh store and, when `persist_dir` is set, writes the
/// index there, replacing any previous one.
pub async fn build_index<E>(
    embedder: E,
    docs: Vec<Document>,
    persist_dir: Option<&Path>,
) -> Result<InMemoryVectorStore, RetrievalError>
where
    E: Embedding,
{
    let store = InMemoryVectorStore::new();
    let count = docs.len();
    Indexer::new(embedder, store.clone())
        .add_documents(docs)
        .await?;

    if let Some(dir) = persist_dir {
        store.persist(dir).await?;
        tracing::info!(documents = count, path = %dir.display(), "vector index persisted");
    } else {
        tracing::info!(documents = count, "vector index built in memory");
    }
    Ok(store)
}
