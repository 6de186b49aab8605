//! HTML building blocks - layout primitives and result rendering

pub mod layout;
pub mod results;

/// Escapes text for interpolation into HTML content or attribute values.
///
/// Everything user-controlled (queries, provider titles and snippets) goes
/// through here before being formatted into a fragment.
pub fn escape_html(text: &str) -> String {
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
