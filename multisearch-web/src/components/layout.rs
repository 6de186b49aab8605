//! Layout components - header, cards, form controls

use multisearch_core::SearchSource;

use super::escape_html;

/// Renders a page header with title and optional subtitle.
pub fn page_header(title: &str, subtitle: Option<&str>) -> String {
    let subtitle_html = subtitle
        .map(|s| format!(r#"<p class="text-gray-400 mt-2">{s}</p>"#))
        .unwrap_or_default();

    format!(
        r#"<div class="text-center mb-8">
            <h1 class="text-3xl font-bold text-white">{title}</h1>
            {subtitle_html}
        </div>"#
    )
}

/// Renders a card container with the given content.
pub fn card(content: &str) -> String {
    format!(
        r#"<div class="bg-gray-800 border border-gray-700 rounded-lg p-6 mb-6">
            {content}
        </div>"#
    )
}

/// Renders the search text input, pre-filled with the current query.
pub fn search_input(value: &str) -> String {
    format!(
        r#"<input type="text" name="query" placeholder="Search..." value="{}"
                  class="flex-1 px-4 py-2 bg-gray-700 border border-gray-600 rounded-lg text-white placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-sky-500 focus:border-transparent" />"#,
        escape_html(value)
    )
}

/// Renders the three-way source selector with the current source selected.
pub fn source_select(selected: SearchSource) -> String {
    let options: String = SearchSource::all()
        .iter()
        .map(|source| {
            let selected_attr = if *source == selected { " selected" } else { "" };
            format!(
                r#"<option value="{}"{selected_attr}>{}</option>"#,
                source.as_str(),
                source.label()
            )
        })
        .collect();

    format!(
        r#"<select name="source"
                   class="px-4 py-2 bg-gray-700 border border-gray-600 rounded-lg text-white focus:outline-none focus:ring-2 focus:ring-sky-500">
            {options}
        </select>"#
    )
}

/// Renders the submit button. HTMX disables it while a request is in flight.
pub fn search_button() -> String {
    r#"<button type="submit" id="search-button"
               class="px-6 py-2 rounded-lg font-medium bg-sky-600 hover:bg-sky-500 text-white transition-colors disabled:bg-gray-600 disabled:cursor-not-allowed">
            Search
        </button>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_input_escapes_the_query_value() {
        let html = search_input(r#""><script>"#);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn source_select_marks_the_current_source() {
        let html = source_select(SearchSource::Wikipedia);
        assert!(html.contains(r#"value="wikipedia" selected"#));
        assert!(!html.contains(r#"value="spotify" selected"#));
        for source in SearchSource::all() {
            assert!(html.contains(source.label()));
        }
    }
}
