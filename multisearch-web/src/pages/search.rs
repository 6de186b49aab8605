//! Search page - query input, source selector, and the results region

use axum::extract::State;
use axum::response::Html;

use crate::components::{layout, results};
use crate::server::AppState;

/// Renders the search page with the session's current view in the results
/// region.
pub async fn search_page(State(state): State<AppState>) -> Html<String> {
    let session = state.session.read().await;

    // The inline handler mirrors the server-side empty-query guard and fills
    // the indicator with the selected source name before the request fires.
    let search_form = format!(
        r##"<form hx-post="/htmx/search" hx-target="#results" hx-swap="innerHTML"
                 hx-disabled-elt="#search-button" hx-indicator="#search-indicator"
                 hx-on::before-request="if (!this.query.value.trim()) {{ event.preventDefault(); }} else {{ document.getElementById('indicator-source').textContent = this.source.value; document.getElementById('results').innerHTML = ''; }}">
            <div class="flex space-x-4">
                {}
                {}
                {}
            </div>
        </form>
        <div id="search-indicator" class="htmx-indicator text-center text-gray-400 mt-6">
            <div class="inline-block w-8 h-8 border-4 border-sky-500 border-t-transparent rounded-full animate-spin"></div>
            <p class="mt-3">Searching <span id="indicator-source">{}</span>...</p>
        </div>"##,
        layout::search_input(session.query()),
        layout::source_select(session.source()),
        layout::search_button(),
        session.source().as_str()
    );

    let content = format!(
        r#"{}

        {}

        <div id="results" class="max-w-2xl mx-auto">
            {}
        </div>"#,
        layout::page_header(
            "Multisearch",
            Some("Search Stack Overflow, Wikipedia, or Spotify")
        ),
        layout::card(&search_form),
        results::render_view(&session.view())
    );

    render_page("Search", &content)
}

/// Renders a full page with the base template.
pub fn render_page(title: &str, content: &str) -> Html<String> {
    let html = format!(
        r#"<!DOCTYPE html>
        <html lang="en">
        <head>
            <title>{title} - Multisearch</title>
            <meta charset="utf-8">
            <meta name="viewport" content="width=device-width, initial-scale=1">
            <script src="https://cdn.tailwindcss.com"></script>
            <script src="https://unpkg.com/htmx.org@1.9.10"></script>
            <style>
                .htmx-indicator {{ display: none; }}
                .htmx-request .htmx-indicator {{ display: block; }}
                .htmx-request.htmx-indicator {{ display: block; }}
            </style>
        </head>
        <body class="bg-gray-900 text-white min-h-screen font-sans">
            <main class="max-w-3xl mx-auto px-4 py-12">
                {content}
            </main>
        </body>
        </html>"#
    );

    Html(html)
}
