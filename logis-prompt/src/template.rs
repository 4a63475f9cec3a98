use std::collections::HashMap;
use std::sync::LazyLock;

use logis_core::Value;
use regex::Regex;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*(\w+)\s*\}\}").expect("placeholder pattern is valid")
});

#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Substitutes `{{ name }}` placeholders in one pass. Substituted values
    /// are never scanned again; unknown names render as the empty string.
    pub fn render(&self, vars: &HashMap<String, Value>) -> String {
        PLACEHOLDER
            .replace_all(&self.template, |caps: &regex::Captures<'_>| {
                match vars.get(&caps[1]) {
                    Some(Value::String(text)) => text.clone(),
                    Some(value) => value.to_string(),
                    None => String::new(),
                }
            })
            .into_owned()
    }
}
