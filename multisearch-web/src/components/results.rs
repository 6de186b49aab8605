//! Result list rendering - one fragment per lifecycle view

use multisearch_core::{SearchResult, SessionView};

use super::escape_html;

/// Renders the fragment for the current session view.
///
/// Exactly one of the prompt, loading, error, empty, or populated fragments
/// is produced; the session state machine guarantees the views are mutually
/// exclusive.
pub fn render_view(view: &SessionView<'_>) -> String {
    match view {
        SessionView::Prompt => message("Enter a search term and select a source to get started."),
        SessionView::Loading { source } => loading_message(source.as_str()),
        SessionView::Error { message: text } => message(&escape_html(text)),
        SessionView::NoResults => message("No results found. Try a different search term."),
        SessionView::Results(results) => results_list(results),
    }
}

/// Renders a centered status message.
fn message(text: &str) -> String {
    format!(r#"<div class="text-center text-gray-400 my-8">{text}</div>"#)
}

/// Renders the spinner and per-source loading message.
pub fn loading_message(source: &str) -> String {
    format!(
        r#"<div class="text-center text-gray-400 my-8">
            <div class="inline-block w-8 h-8 border-4 border-sky-500 border-t-transparent rounded-full animate-spin"></div>
            <p class="mt-3">Searching {source}...</p>
        </div>"#
    )
}

/// Renders the populated result list.
fn results_list(results: &[SearchResult]) -> String {
    results.iter().map(result_card).collect()
}

/// Renders one result as a card: outbound title link, optional description,
/// optional image. Links open in a new tab without leaking opener or
/// referrer.
pub fn result_card(result: &SearchResult) -> String {
    let title = escape_html(&result.title);
    let link = escape_html(&result.link);

    let description_html = result
        .description
        .as_deref()
        .map(|d| format!(r#"<p class="text-gray-300 mt-2">{}</p>"#, escape_html(d)))
        .unwrap_or_default();

    let image_html = result
        .image
        .as_deref()
        .map(|i| {
            format!(
                r#"<img src="{}" alt="{title}" class="mt-3 max-w-full h-auto rounded" />"#,
                escape_html(i)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="bg-gray-800 border border-gray-700 rounded-lg p-4 mb-4">
            <h3 class="text-lg font-semibold">
                <a href="{link}" target="_blank" rel="noopener noreferrer"
                   class="text-sky-400 hover:text-sky-300 hover:underline">{title}</a>
            </h3>
            {description_html}
            {image_html}
        </div>"#
    )
}

#[cfg(test)]
mod tests {
    use multisearch_core::SearchSource;

    use super::*;

    fn sample(description: Option<&str>, image: Option<&str>) -> SearchResult {
        SearchResult {
            title: "A result".to_string(),
            link: "https://example.com/a".to_string(),
            description: description.map(str::to_string),
            image: image.map(str::to_string),
        }
    }

    #[test]
    fn card_link_opens_safely_in_new_tab() {
        let html = result_card(&sample(None, None));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains("https://example.com/a"));
    }

    #[test]
    fn card_omits_absent_description_and_image() {
        let html = result_card(&sample(None, None));
        assert!(!html.contains("<p"));
        assert!(!html.contains("<img"));

        let html = result_card(&sample(Some("body text"), Some("https://example.com/i.png")));
        assert!(html.contains("body text"));
        assert!(html.contains(r#"src="https://example.com/i.png""#));
    }

    #[test]
    fn card_escapes_provider_controlled_text() {
        let mut result = sample(Some("<img src=x onerror=alert(1)>"), None);
        result.title = "<b>bold</b>".to_string();
        let html = result_card(&result);
        assert!(!html.contains("<b>bold</b>"));
        assert!(!html.contains("<img src=x"));
    }

    #[test]
    fn loading_view_names_the_source() {
        let html = render_view(&SessionView::Loading {
            source: SearchSource::StackOverflow,
        });
        assert!(html.contains("Searching stackoverflow..."));
        assert!(html.contains("animate-spin"));
    }

    #[test]
    fn prompt_empty_and_error_views_render_their_messages() {
        assert!(render_view(&SessionView::Prompt).contains("get started"));
        assert!(render_view(&SessionView::NoResults).contains("No results found"));
        assert!(
            render_view(&SessionView::Error {
                message: "An error occurred while searching. Please try again."
            })
            .contains("An error occurred while searching")
        );
    }
}
