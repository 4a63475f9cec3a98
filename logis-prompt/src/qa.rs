use std::collections::HashMap;

use logis_core::{Document, Value};

use crate::PromptTemplate;

pub const CONTEXT_SEPARATOR: &str = "\n\n---\n\n";

pub const QA_TEMPLATE: &str = "Vous êtes un assistant IA spécialisé dans la gestion des logements étudiants.
Répondez à la question en vous basant sur le contexte suivant et aussi sur d'autres connaissances générales si nécessaire.

Soyez précis, concis et professionnel. Si vous ne trouvez pas l'information, dites-le clairement.

CONTEXTE:
{{context}}

QUESTION:
{{question}}

RÉPONSE:
";

/// Joins document texts in order with [`CONTEXT_SEPARATOR`].
pub fn format_docs(docs: &[Document]) -> String {
    docs.iter()
        .map(|doc| doc.content.as_str())
        .collect::<Vec<_>>()
        .join(CONTEXT_SEPARATOR)
}

/// The question-answering prompt: retrieved context plus the user question.
#[derive(Debug, Clone)]
pub struct QaPrompt {
    template: PromptTemplate,
}

impl Default for QaPrompt {
    fn default() -> Self {
        Self::new(PromptTemplate::new(QA_TEMPLATE))
    }
}

impl QaPrompt {
    /// `template` must use the `context` and `question` placeholders.
    pub fn new(template: PromptTemplate) -> Self {
        Self { template }
    }

    pub fn compose(&self, docs: &[Document], question: &str) -> String {
        let vars = HashMap::from([
            ("context".to_string(), Value::String(format_docs(docs))),
            ("question".to_string(), Value::String(question.to_string())),
        ]);
        self.template.render(&vars)
    }
}
