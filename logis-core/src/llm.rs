use std::sync::Arc;

use async_trait::async_trait;

use crate::LogisError;

/// A hosted text-generation model.
#[async_trait]
pub trait Llm: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LogisError>;

    /// Model identifier reported to clients.
    fn model(&self) -> &str;
}

#[async_trait]
impl<T> Llm for Arc<T>
where
    T: Llm + ?Sized,
{
    async fn generate(&self, prompt: &str) -> Result<String, LogisError> {
        (**self).generate(prompt).await
    }

    fn model(&self) -> &str {
        (**self).model()
    }
}
