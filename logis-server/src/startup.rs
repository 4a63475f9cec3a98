use std::path::Path;
use std::sync::Arc;

use logis_core::{Document, Embedding, Llm};
use logis_embeddings::OllamaEmbedding;
use logis_housing::HousingClient;
use logis_llm::GoogleClient;
use logis_rag::RagChain;
use logis_retrieval::{build_index, Retriever};

use crate::{AppConfig, AppContext, StartupError};

/// Fetches the housing data, indexes it and wires the question-answering
/// chain. Any failure here is fatal.
pub async fn initialize(config: &AppConfig) -> Result<AppContext, StartupError> {
    config.validate()?;

    let housing = HousingClient::builder()
        .base_url(config.housing_api_url.clone())
        .timeout(config.fetch_timeout())
        .strict_payloads(config.strict_payloads)
        .build()?;
    let documents = load_documents(&housing).await?;

    let embedder = OllamaEmbedding::new(
        config.ollama_url.clone(),
        config.embedding_model.clone(),
        config.embedding_dimension,
    );
    tracing::info!(
        url = %config.ollama_url,
        model = embedder.model(),
        "embedding documents"
    );

    let llm = GoogleClient::new(config.gemini_api_key.clone(), config.gemini_model.clone())
        .with_base_url(config.gemini_base_url.clone())
        .with_temperature(config.temperature);
    tracing::info!(
        model = %config.gemini_model,
        temperature = config.temperature,
        "generation model ready"
    );

    build_context(
        documents,
        Arc::new(embedder),
        Arc::new(llm),
        config.top_k,
        Some(config.index_dir.as_path()),
    )
    .await
}

pub async fn load_documents(housing: &HousingClient) -> Result<Vec<Document>, StartupError> {
    let documents = housing.fetch_all().await?;
    if documents.is_empty() {
        return Err(StartupError::EmptyCorpus);
    }
    tracing::info!(documents = documents.len(), "housing documents loaded");
    Ok(documents)
}

/// Indexes `documents` with `embedder` (persisting under `index_dir` when set)
/// and builds the context served to requests.
pub async fn build_context(
    documents: Vec<Document>,
    embedder: Arc<dyn Embedding>,
    llm: Arc<dyn Llm>,
    top_k: usize,
    index_dir: Option<&Path>,
) -> Result<AppContext, StartupError> {
    let documents_loaded = documents.len();
    let store = build_index(embedder.clone(), documents, index_dir).await?;
    let retriever = Retriever::new(embedder, store);
    let chain = RagChain::new(Arc::new(retriever), llm).with_top_k(top_k);
    Ok(AppContext::new(chain, documents_loaded))
}
