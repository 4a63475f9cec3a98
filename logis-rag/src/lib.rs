use std::sync::Arc;

use logis_core::{Document, Llm, LogisError};
use logis_prompt::QaPrompt;
use logis_retrieval::{BaseRetriever, RetrievalError};

/// Number of documents placed in the prompt context.
pub const DEFAULT_TOP_K: usize = 70;

#[derive(Debug, thiserror::Error)]
pub enum RagError {
    #[error("retrieval failed: {0}")]
    Retrieval(#[from] RetrievalError),
    #[error("generation failed: {0}")]
    Generation(#[from] LogisError),
}

/// Retrieve, compose, generate. Each call is independent; the chain holds no
/// per-question state.
#[derive(Clone)]
pub struct RagChain {
    retriever: Arc<dyn BaseRetriever>,
    prompt: QaPrompt,
    llm: Arc<dyn Llm>,
    top_k: usize,
}

impl RagChain {
    pub fn new(retriever: Arc<dyn BaseRetriever>, llm: Arc<dyn Llm>) -> Self {
        Self {
            retriever,
            prompt: QaPrompt::default(),
            llm,
            top_k: DEFAULT_TOP_K,
        }
    }

    pub fn with_prompt(mut self, prompt: QaPrompt) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn model(&self) -> &str {
        self.llm.model()
    }

    /// The `top_k` most similar documents, most similar first.
    pub async fn retrieve(&self, question: &str) -> Result<Vec<Document>, RagError> {
        let results = self.retriever.retrieve(question, self.top_k).await?;
        Ok(results.into_iter().map(|result| result.document).collect())
    }

    /// The prompt that [`invoke`](Self::invoke) would send for `question`.
    pub async fn prepare(&self, question: &str) -> Result<String, RagError> {
        let docs = self.retrieve(question).await?;
        tracing::debug!(documents = docs.len(), "context retrieved");
        Ok(self.prompt.compose(&docs, question))
    }

    pub async fn invoke(&self, question: &str) -> Result<String, RagError> {
        let prompt = self.prepare(question).await?;
        let answer = self.llm.generate(&prompt).await?;
        Ok(answer)
    }
}
