//! Message rendering for the chat widget

use once_cell::sync::Lazy;
use regex::Regex;

static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[-*] ").expect("valid regex"));
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid regex"));
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").expect("valid regex"));

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render advice text as HTML
///
/// Text is escaped first, so only the markup produced here reaches the page.
pub fn format_message(text: &str) -> String {
    let text = escape_html(text);
    let text = BULLET.replace_all(&text, "• ");
    let text = BOLD.replace_all(&text, "<strong>$1</strong>");
    let text = ITALIC.replace_all(&text, "<em>$1</em>");
    text.replace("\n\n", "<br><br>").replace('\n', "<br>")
}
