use std::collections::HashMap;

use logis_prompt::PromptTemplate;
use serde_json::json;

#[test]
fn prompt_template_renders_string_and_number_values() {
    let template = PromptTemplate::new("Chambre {{ numero }} au bâtiment {{batiment}}");
    let vars = HashMap::from([
        ("numero".to_string(), json!(102)),
        ("batiment".to_string(), json!("D")),
    ]);
    assert_eq!(template.render(&vars), "Chambre 102 au bâtiment D");
}

#[test]
fn prompt_template_missing_variables_render_empty() {
    let template = PromptTemplate::new("[{{ absent }}]");
    assert_eq!(template.render(&HashMap::new()), "[]");
}

#[test]
fn prompt_template_does_not_expand_substituted_values() {
    let template = PromptTemplate::new("{{a}} / {{b}}");
    let vars = HashMap::from([
        ("a".to_string(), json!("{{b}}")),
        ("b".to_string(), json!("B")),
    ]);
    assert_eq!(template.render(&vars), "{{b}} / B");
}
