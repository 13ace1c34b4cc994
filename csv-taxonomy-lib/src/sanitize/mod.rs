use std::sync::OnceLock;

use regex::Regex;

fn markup_regex() -> &'static Regex {
    static MARKUP: OnceLock<Regex> = OnceLock::new();
    MARKUP.get_or_init(|| Regex::new(r"<[^>]*>").expect("markup pattern is valid"))
}

/// Derive a URL-safe slug from free text
///
/// Lowercases the input and keeps only ASCII alphanumerics; everything else
/// collapses to single hyphens with none leading or trailing.
pub fn slugify(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .replace(|c: char| !c.is_ascii_alphanumeric() && c != '-', "-") // Replace invalid chars with '-'
        .split('-') // Prevent multiple consecutive dashes
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Reduce free text to safe plain text
///
/// Strips markup tags and control characters, then collapses runs of
/// whitespace to single spaces.
pub fn sanitize_text(text: &str) -> String {
    let stripped = markup_regex().replace_all(text, "");
    stripped
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
