use logis_rag::RagChain;

/// Everything a request needs, built once by startup and shared read-only.
#[derive(Clone)]
pub struct AppContext {
    chain: RagChain,
    documents_loaded: usize,
}

impl AppContext {
    pub fn new(chain: RagChain, documents_loaded: usize) -> Self {
        Self {
            chain,
            documents_loaded,
        }
    }

    pub fn chain(&self) -> &RagChain {
        &self.chain
    }

    pub fn documents_loaded(&self) -> usize {
        self.documents_loaded
    }

    pub fn model(&self) -> &str {
        self.chain.model()
    }
}
