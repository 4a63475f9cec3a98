#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use logis_core::{Document, Embedding, EmbeddingError, Llm, LogisError};
use logis_retrieval::HashEmbedder;
use logis_server::{build_context, AppContext};

/// Answers with a fixed text and counts calls.
pub struct ScriptedLlm {
    answer: String,
    pub calls: AtomicUsize,
}

impl ScriptedLlm {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Llm for ScriptedLlm {
    async fn generate(&self, _prompt: &str) -> Result<String, LogisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.answer.clone())
    }

    fn model(&self) -> &str {
        "scripted"
    }
}

/// Fails every call the way a quota-exhausted provider does.
pub struct FailingLlm;

#[async_trait]
impl Llm for FailingLlm {
    async fn generate(&self, _prompt: &str) -> Result<String, LogisError> {
        Err(LogisError::LlmProvider("quota exceeded".to_string()))
    }

    fn model(&self) -> &str {
        "failing"
    }
}

/// Indexes like `HashEmbedder` but cannot embed questions, as when the
/// embedding server goes away after startup.
pub struct UnreachableQueryEmbedder(HashEmbedder);

impl UnreachableQueryEmbedder {
    pub fn new() -> Self {
        Self(HashEmbedder::new(32))
    }
}

#[async_trait]
impl Embedding for UnreachableQueryEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Err(EmbeddingError::Provider("ollama unreachable".to_string()))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        self.0.embed_batch(texts).await
    }

    fn dimension(&self) -> usize {
        self.0.dimension()
    }
}

pub fn corpus() -> Vec<Document> {
    vec![
        Document::new("statistiques", "Il y a 20 chambres disponibles sur 70."),
        Document::new("chambre-102-1", "Chambre 102 occupée par Dupont."),
        Document::new("chambre-101-0", "Chambre 101 disponible."),
    ]
}

pub async fn context(llm: Arc<dyn Llm>) -> Arc<AppContext> {
    context_with(Arc::new(HashEmbedder::new(32)), llm).await
}

pub async fn context_with(embedder: Arc<dyn Embedding>, llm: Arc<dyn Llm>) -> Arc<AppContext> {
    let ctx = build_context(corpus(), embedder, llm, 70, None)
        .await
        .unwrap();
    Arc::new(ctx)
}
