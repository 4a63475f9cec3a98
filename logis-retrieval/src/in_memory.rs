use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use logis_core::{Document, SearchResult, StoreError, VectorStore};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// File name of the persisted index inside the index directory.
pub const INDEX_FILE: &str = "index.json";

const INDEX_FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct Entry {
    document: Document,
    embedding: Vec<f32>,
}

#[derive(Default)]
struct Index {
    entries: Vec<Entry>,
    positions: HashMap<String, usize>,
    dimension: Option<usize>,
}

impl Index {
    fn insert(&mut self, mut document: Document) -> Result<(), StoreError> {
        if document.id.trim().is_empty() {
            return Err(StoreError::InvalidId(document.id));
        }
        let embedding = document
            .embedding
            .take()
            .ok_or_else(|| StoreError::MissingEmbedding(document.id.clone()))?;

        let expected = *self.dimension.get_or_insert(embedding.len());
        if embedding.len() != expected {
            return Err(StoreError::DimensionMismatch {
                expected,
                got: embedding.len(),
            });
        }

        let entry = Entry {
            document,
            embedding,
        };
        match self.positions.get(&entry.document.id) {
            Some(&position) => self.entries[position] = entry,
            None => {
                self.positions
                    .insert(entry.document.id.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct Snapshot<'a> {
    version: u32,
    dimension: Option<usize>,
    entries: &'a [Entry],
}

#[derive(Deserialize)]
struct Persisted {
    version: u32,
    entries: Vec<Entry>,
}

/// Cosine-similarity index held in memory. Clones share the same index.
#[derive(Clone, Default)]
pub struct InMemoryVectorStore {
    index: Arc<RwLock<Index>>,
}

impl InMemoryVectorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.index.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Writes the index to `dir/index.json`, creating `dir` if needed. The
    /// file is replaced atomically.
    pub async fn persist(&self, dir: &Path) -> Result<(), StoreError> {
        let bytes = {
            let index = self.index.read().await;
            serde_json::to_vec(&Snapshot {
                version: INDEX_FORMAT_VERSION,
                dimension: index.dimension,
                entries: &index.entries,
            })?
        };

        tokio::fs::create_dir_all(dir).await?;
        let staging = dir.join(format!("{INDEX_FILE}.tmp"));
        tokio::fs::write(&staging, bytes).await?;
        tokio::fs::rename(&staging, dir.join(INDEX_FILE)).await?;
        Ok(())
    }

    /// Restores a store previously written by [`persist`](Self::persist).
    pub async fn load(dir: &Path) -> Result<Self, StoreError> {
        let bytes = tokio::fs::read(dir.join(INDEX_FILE)).await?;
        let persisted: Persisted = serde_json::from_slice(&bytes)?;
        if persisted.version != INDEX_FORMAT_VERSION {
            return Err(StoreError::UnsupportedVersion(persisted.version));
        }

        let mut index = Index::default();
        for Entry {
            mut document,
            embedding,
        } in persisted.entries
        {
            document.embedding = Some(embedding);
            index.insert(document)?;
        }
        Ok(Self {
            index: Arc::new(RwLock::new(index)),
        })
    }
}

#[async_trait::async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn add(&self, docs: Vec<Document>) -> Result<(), StoreError> {
        let mut index = self.index.write().await;
        for doc in docs {
            index.insert(doc)?;
        }
        Ok(())
    }

    async fn search(&self, query: &[f32], top_k: usize) -> Result<Vec<SearchResult>, StoreError> {
        let index = self.index.read().await;
        if let Some(expected) = index.dimension.filter(|&dim| dim != query.len()) {
            return Err(StoreError::DimensionMismatch {
                expected,
                got: query.len(),
            });
        }

        let mut scored: Vec<(f32, &Entry)> = index
            .entries
            .iter()
            .map(|entry| {
                let score = cosine_similarity(query, &entry.embedding);
                (if score.is_nan() { f32::NEG_INFINITY } else { score }, entry)
            })
            .collect();

        // stable: equal scores keep insertion order
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        Ok(scored
            .into_iter()
            .take(top_k)
            .map(|(score, entry)| SearchResult {
                document: entry.document.clone(),
                score,
            })
            .collect())
    }
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let (dot, norm_a, norm_b) = a
        .iter()
        .zip(b)
        .fold((0.0, 0.0, 0.0), |(dot, na, nb), (x, y)| {
            (dot + x * y, na + x * x, nb + y * y)
        });
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (f32::sqrt(norm_a) * f32::sqrt(norm_b))
}
