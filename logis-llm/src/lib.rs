//! Hosted LLM clients.

mod google;

pub use google::{GoogleClient, DEFAULT_TEMPERATURE, GEMINI_BASE_URL};
pub use logis_core::Llm;
