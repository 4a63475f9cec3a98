use logis_core::Document;
use logis_prompt::{format_docs, QaPrompt, QA_TEMPLATE};

fn docs() -> Vec<Document> {
    vec![
        Document::new("statistiques", "Nombre total des chambres disponibles: 20"),
        Document::new("chambre-102-0", "Chambre numéro 102:\n- Occupant: Dupont"),
    ]
}

#[test]
fn format_docs_joins_in_retrieval_order() {
    assert_eq!(
        format_docs(&docs()),
        "Nombre total des chambres disponibles: 20\n\n---\n\nChambre numéro 102:\n- Occupant: Dupont"
    );
    assert_eq!(format_docs(&[]), "");
}

#[test]
fn compose_fills_context_and_question_sections() {
    let prompt = QaPrompt::default().compose(&docs(), "Qui occupe la chambre 102 ?");

    let context_at = prompt.find("CONTEXTE:\n").unwrap();
    let question_at = prompt.find("QUESTION:\nQui occupe la chambre 102 ?").unwrap();
    let answer_at = prompt.find("RÉPONSE:").unwrap();
    assert!(context_at < question_at && question_at < answer_at);
    assert!(prompt.contains(&format_docs(&docs())));
    assert!(prompt.ends_with("RÉPONSE:\n"));
}

#[test]
fn compose_is_deterministic() {
    let prompt = QaPrompt::default();
    let first = prompt.compose(&docs(), "Combien de chambres sont disponibles ?");
    let second = prompt.compose(&docs(), "Combien de chambres sont disponibles ?");
    assert_eq!(first, second);
    assert!(QA_TEMPLATE.contains("{{context}}"));
}
