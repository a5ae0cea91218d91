//! Stylist prompt sent alongside uploaded images

use atelier_core::{Result, TemplateEngine};
use std::collections::HashMap;

/// Question used when the user attached images without any text
pub const DEFAULT_QUESTION: &str = "Does this look good together?";

const STYLIST_TEMPLATE_NAME: &str = "stylist";

const STYLIST_TEMPLATE: &str = "You are a professional fashion stylist. Analyze these clothing items and provide detailed recommendations.

User's question: {{question}}

Provide:
1. **Item Description**: What items do you see?
2. **Color Analysis**: Do the colors work together?
3. **Styling Verdict**: Overall rating and compatibility
4. **How to Style**: Specific styling instructions
5. **Complete the Look**: Shoes, accessories, etc.
6. **Occasion**: Where to wear this
7. **Pro Tips**: Quick styling hacks

Be enthusiastic and helpful!";

/// Renders the stylist prompt
pub struct StylistPrompt {
    engine: TemplateEngine,
}

impl StylistPrompt {
    /// Compile the prompt template
    pub fn new() -> Result<Self> {
        let mut engine = TemplateEngine::new();
        engine.register_template(STYLIST_TEMPLATE_NAME, STYLIST_TEMPLATE)?;
        Ok(Self { engine })
    }

    /// Prompt for `question`, falling back to the default question when blank
    pub fn render(&self, question: &str) -> Result<String> {
        let question = match question.trim() {
            "" => DEFAULT_QUESTION,
            q => q,
        };
        let mut data = HashMap::new();
        data.insert("question".to_string(), serde_json::json!(question));
        self.engine.render_named(STYLIST_TEMPLATE_NAME, &data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_question() {
        let prompt = StylistPrompt::new().unwrap();
        let out = prompt.render("Is this <b>too</b> bold?").unwrap();
        assert!(out.starts_with("You are a professional fashion stylist."));
        assert!(out.contains("User's question: Is this <b>too</b> bold?\n"));
        assert!(out.ends_with("Be enthusiastic and helpful!"));
    }

    #[test]
    fn test_blank_question_uses_default() {
        let prompt = StylistPrompt::new().unwrap();
        let out = prompt.render("   ").unwrap();
        assert!(out.contains("User's question: Does this look good together?"));
    }
}
