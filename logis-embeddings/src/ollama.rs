use async_trait::async_trait;
use logis_core::{Embedding, EmbeddingError};
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::EmbeddingProviderError;

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Embeddings computed by a local Ollama server. Every vector is checked
/// against the configured dimension.
#[derive(Clone)]
pub struct OllamaEmbedding {
    base_url: String,
    model: String,
    dimension: usize,
    http: Client,
}

#[derive(Serialize)]
struct SingleRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Deserialize)]
struct SingleResponse {
    embedding: Vec<f32>,
}

#[derive(Serialize)]
struct BatchRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct BatchResponse {
    embeddings: Vec<Vec<f32>>,
}

impl OllamaEmbedding {
    pub fn new(base_url: String, model: String, dimension: usize) -> Self {
        Self {
            base_url,
            model,
            dimension,
            http: Client::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, EmbeddingProviderError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        let request_error = |source| EmbeddingProviderError::Request {
            url: url.clone(),
            source,
        };
        self.http
            .post(&url)
            .json(body)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(request_error)?
            .json()
            .await
            .map_err(request_error)
    }

    fn checked(&self, embedding: Vec<f32>) -> Result<Vec<f32>, EmbeddingProviderError> {
        if embedding.len() != self.dimension {
            return Err(EmbeddingProviderError::Dimension {
                expected: self.dimension,
                got: embedding.len(),
            });
        }
        Ok(embedding)
    }
}

#[async_trait]
impl Embedding for OllamaEmbedding {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let request = SingleRequest {
            model: &self.model,
            prompt: text,
        };
        let response: SingleResponse = self.post("/api/embeddings", &request).await?;
        Ok(self.checked(response.embedding)?)
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let request = BatchRequest {
            model: &self.model,
            input: texts,
        };
        let response: BatchResponse = self.post("/api/embed", &request).await?;
        if response.embeddings.len() != texts.len() {
            return Err(EmbeddingProviderError::CountMismatch {
                expected: texts.len(),
                got: response.embeddings.len(),
            }
            .into());
        }

        let vectors = response
            .embeddings
            .into_iter()
            .map(|embedding| self.checked(embedding))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(vectors)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
