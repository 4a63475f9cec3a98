use async_trait::async_trait;
use logis_core::{Document, Embedding, EmbeddingError, StoreError};
use logis_retrieval::{
    build_index, HashEmbedder, Indexer, InMemoryVectorStore, RetrievalError, INDEX_FILE,
};

struct ShortBatchEmbedder;

#[async_trait]
impl Embedding for ShortBatchEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(vec![1.0])
    }

    async fn embed_batch(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Ok(vec![vec![1.0]])
    }

    fn dimension(&self) -> usize {
        1
    }
}

#[tokio::test]
async fn indexer_rejects_blank_ids() {
    let indexer = Indexer::new(HashEmbedder::new(4), InMemoryVectorStore::new());
    let err = indexer
        .add_documents(vec![Document::new("  ", "text")])
        .await
        .unwrap_err();
    assert!(matches!(err, RetrievalError::InvalidId(_)));
}

#[tokio::test]
async fn indexer_detects_missing_embeddings_in_batch() {
    let indexer = Indexer::new(ShortBatchEmbedder, InMemoryVectorStore::new());
    let err = indexer
        .add_documents(vec![Document::new("a", "a"), Document::new("b", "b")])
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RetrievalError::BatchMismatch {
            docs: 2,
            embeddings: 1
        }
    ));
}

#[tokio::test]
async fn build_index_persists_and_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let index_dir = dir.path().join("index_logements");
    let docs = vec![
        Document::new("statistiques", "Nombre total de chambres: 70")
            .with_metadata("total", 70u64),
        Document::new("chambre-102-0", "Chambre numéro 102").with_metadata("occupant", "Dupont"),
    ];

    let store = build_index(HashEmbedder::new(8), docs, Some(&index_dir))
        .await
        .unwrap();
    assert_eq!(store.len().await, 2);
    assert!(index_dir.join(INDEX_FILE).exists());

    let reloaded = InMemoryVectorStore::load(&index_dir).await.unwrap();
    assert_eq!(reloaded.len().await, 2);
}

#[tokio::test]
async fn rebuilding_replaces_the_persisted_index() {
    let dir = tempfile::tempdir().unwrap();

    build_index(
        HashEmbedder::new(4),
        vec![Document::new("a", "a"), Document::new("b", "b")],
        Some(dir.path()),
    )
    .await
    .unwrap();
    build_index(
        HashEmbedder::new(4),
        vec![Document::new("c", "c")],
        Some(dir.path()),
    )
    .await
    .unwrap();

    let reloaded = InMemoryVectorStore::load(dir.path()).await.unwrap();
    assert_eq!(reloaded.len().await, 1);
}

#[tokio::test]
async fn unreadable_index_files_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(INDEX_FILE);

    std::fs::write(&path, r#"{"version": 99, "entries": []}"#).unwrap();
    let err = InMemoryVectorStore::load(dir.path()).await.err().unwrap();
    assert!(matches!(err, StoreError::UnsupportedVersion(99)));

    std::fs::write(&path, "{ not json").unwrap();
    let err = InMemoryVectorStore::load(dir.path()).await.err().unwrap();
    assert!(matches!(err, StoreError::Format(_)));
}
