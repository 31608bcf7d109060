//! HTML escaping and file-name slugs.
//!
//! Content strings are free-form and may come from a YAML file, so every
//! piece of content goes through [`escape`] before landing in markup.

/// Escapes text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape(text: &str) -> String {
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

/// Converts a page id into a safe file stem.
///
/// Keeps `[A-Za-z0-9_-]` (ids are case-sensitive, so case is preserved),
/// replaces anything else with `_`, and falls back to `page` when nothing
/// is left.
#[must_use]
pub fn file_stem(page_id: &str) -> String {
    let stem: String = page_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if stem.trim_matches('_').is_empty() {
        "page".to_string()
    } else {
        stem
    }
}
