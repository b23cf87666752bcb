//! Rendering of the suggestion list.

use crate::search::{Suggestion, Suggestions};
use std::fmt::Write as _;

const NO_RESULTS: &str = "No results found";

/// Render the dropdown contents as an HTML fragment.
///
/// `highlighted` marks the row under the keyboard cursor with the `active` class.
pub fn render_html(suggestions: &Suggestions<'_>, highlighted: Option<usize>) -> String {
    if suggestions.is_empty() {
        return format!("<div class=\"search-no-results\">{NO_RESULTS}</div>");
    }

    let mut html = String::new();
    for (idx, item) in suggestions.iter().enumerate() {
        let class = if highlighted == Some(idx) {
            "search-suggestion-item active"
        } else {
            "search-suggestion-item"
        };
        let data = match item {
            Suggestion::Player(p) => format!("data-type=\"player\" data-id=\"{}\"", escape(&p.id)),
            Suggestion::Team(t) => format!("data-type=\"team\" data-name=\"{}\"", escape(&t.name)),
        };
        let _ = write!(
            html,
            "<div class=\"{class}\" {data}>{}<span class=\"search-suggestion-type\">{}</span></div>",
            escape(item.label()),
            item.kind()
        );
    }
    html
}

/// Render the dropdown contents for a terminal.
pub fn render_text(suggestions: &Suggestions<'_>, highlighted: Option<usize>) -> String {
    if suggestions.is_empty() {
        return NO_RESULTS.to_string();
    }

    let mut out = String::new();
    for (idx, item) in suggestions.iter().enumerate() {
        let marker = if highlighted == Some(idx) { '>' } else { ' ' };
        let _ = writeln!(out, "{marker} {}. {} [{}]", idx + 1, item.label(), item.kind());
    }
    out.truncate(out.trim_end().len());
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
