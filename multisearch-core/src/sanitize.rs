//! Naive HTML cleanup for provider snippets.
//!
//! Providers return body text and snippets with inline markup. The mappers
//! only need readable plain text, so this is a tag-removal pass, not a
//! sanitizer: well-formed `<...>` runs are deleted, everything else is left
//! alone. A dangling `<` with no closing `>` survives untouched.

use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));

/// Removes well-formed HTML tags from `html`.
///
/// Idempotent on already-stripped text and tolerant of malformed or nested
/// tag sequences; never panics on any input.
pub fn strip_html_tags(html: &str) -> String {
    TAG.replace_all(html, "").into_owned()
}

/// Truncates `text` to at most `max_chars` characters, appending an ellipsis.
///
/// Operates on characters rather than bytes so multi-byte text is never split
/// mid-scalar. The ellipsis is appended unconditionally, matching the
/// provider card style of always trailing off a body excerpt.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn strips_simple_tags() {
        assert_eq!(strip_html_tags("<b>bold</b> text"), "bold text");
        assert_eq!(
            strip_html_tags(r#"<a href="/x">link</a>"#),
            "link"
        );
    }

    #[test]
    fn dangling_open_bracket_survives() {
        assert_eq!(strip_html_tags("<b>bold<"), "bold<");
    }

    #[test]
    fn tolerates_nested_and_malformed_tags() {
        assert_eq!(strip_html_tags("<div <span>>x"), ">x");
        assert_eq!(strip_html_tags("<<b>>y<</b>>"), ">y>");
        assert_eq!(strip_html_tags(""), "");
    }

    #[test]
    fn excerpt_counts_characters_not_bytes() {
        let text = "é".repeat(300);
        let cut = excerpt(&text, 200);
        assert_eq!(cut.chars().count(), 203);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn excerpt_of_short_text_keeps_everything() {
        assert_eq!(excerpt("short", 200), "short...");
    }

    proptest! {
        #[test]
        fn stripping_never_panics(input in ".*") {
            let _ = strip_html_tags(&input);
        }

        #[test]
        fn stripping_is_idempotent(input in ".*") {
            let once = strip_html_tags(&input);
            prop_assert_eq!(strip_html_tags(&once), once);
        }
    }
}
