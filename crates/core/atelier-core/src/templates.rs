//! Template engine for prompt generation

use crate::{AtelierError, Result};
use handlebars::Handlebars;
use std::collections::HashMap;

/// Template engine wrapper
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Create a new template engine
    ///
    /// Prompts are plain text, so HTML escaping is disabled.
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.register_escape_fn(handlebars::no_escape);
        Self { handlebars }
    }

    /// Render a template with data
    pub fn render(
        &self,
        template: &str,
        data: &HashMap<String, serde_json::Value>,
    ) -> Result<String> {
        self.handlebars
            .render_template(template, data)
            .map_err(|e| AtelierError::template(e.to_string()))
    }

    /// Register a template
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| AtelierError::template(e.to_string()))?;
        Ok(())
    }

    /// Render a registered template
    pub fn render_named(
        &self,
        name: &str,
        data: &HashMap<String, serde_json::Value>,
    ) -> Result<String> {
        self.handlebars
            .render(name, data)
            .map_err(|e| AtelierError::template(e.to_string()))
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_does_not_escape() {
        let engine = TemplateEngine::new();
        let mut data = HashMap::new();
        data.insert(
            "question".to_string(),
            serde_json::json!("Does <this> & that work?"),
        );
        let out = engine.render("Q: {{question}}", &data).unwrap();
        assert_eq!(out, "Q: Does <this> & that work?");
    }

    #[test]
    fn test_register_and_render_named() {
        let mut engine = TemplateEngine::new();
        engine.register_template("greet", "Hi {{name}}").unwrap();
        let mut data = HashMap::new();
        data.insert("name".to_string(), serde_json::json!("Ana"));
        assert_eq!(engine.render_named("greet", &data).unwrap(), "Hi Ana");
    }

    #[test]
    fn test_missing_value_renders_empty() {
        let engine = TemplateEngine::new();
        let out = engine.render("[{{missing}}]", &HashMap::new()).unwrap();
        assert_eq!(out, "[]");
    }
}
