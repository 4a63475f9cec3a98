mod qa;
mod template;

pub use qa::{format_docs, QaPrompt, CONTEXT_SEPARATOR, QA_TEMPLATE};
pub use template::PromptTemplate;
