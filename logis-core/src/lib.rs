mod document;
mod embedding;
mod error;
mod llm;
mod value;
mod vector_store;

pub use document::Document;
pub use embedding::Embedding;
pub use error::{EmbeddingError, LogisError, StoreError};
pub use llm::Llm;
pub use value::Value;
pub use vector_store::{SearchResult, VectorStore};
