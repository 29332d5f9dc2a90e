//! Text-to-markup transform applied to answers before they are displayed.
//!
//! The pipeline runs in a fixed order: escape, bold pass, bullet pass, list
//! wrap, card wrap. The bullet pass sees the output of the bold pass, so
//! `**x**` is always consumed as bold before single asterisks are matched.

use once_cell::sync::Lazy;
use regex::Regex;

pub const ANSWER_CARD_OPEN: &str = "<div class=\"answer-card\">";
pub const ANSWER_CARD_CLOSE: &str = "</div>";

// Spans never cross a line terminator: \n, \r, U+2028 or U+2029.
static RE_BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^\n\r\x{2028}\x{2029}]*?)\*\*").unwrap());
static RE_BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^\n\r\x{2028}\x{2029}]*?)\*").unwrap());

/// Escapes characters that would otherwise be interpreted as HTML.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// `**X**` -> `<strong>X</strong>`, every non-overlapping match left to right.
pub fn apply_bold(text: &str) -> String {
    RE_BOLD.replace_all(text, "<strong>${1}</strong>").into_owned()
}

/// `*X*` -> `<li>X</li>`, every non-overlapping match left to right.
pub fn apply_bullets(text: &str) -> String {
    RE_BULLET.replace_all(text, "<li>${1}</li>").into_owned()
}

/// Wraps the text in a `<ul>` when it contains at least one list item.
pub fn wrap_list(text: String) -> String {
    if text.contains("<li>") {
        format!("<ul>{}</ul>", text)
    } else {
        text
    }
}

pub fn wrap_card(text: &str) -> String {
    format!("{}{}{}", ANSWER_CARD_OPEN, text, ANSWER_CARD_CLOSE)
}

/// Runs the full pipeline and returns the answer card markup.
pub fn render_answer(answer: &str) -> String {
    let escaped = escape_html(answer);
    let bold = apply_bold(&escaped);
    let bullets = apply_bullets(&bold);
    wrap_card(&wrap_list(bullets))
}
