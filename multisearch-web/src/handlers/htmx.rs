//! HTMX fragment handlers driving the search session

use axum::extract::{Form, State};
use axum::response::Html;
use multisearch_core::{SearchError, SearchSource};
use serde::Deserialize;

use crate::components::results::render_view;
use crate::server::AppState;

/// Form data for a search submission.
#[derive(Deserialize)]
pub struct SearchForm {
    /// Raw query text; trimming happens in the session.
    pub query: String,
    /// Wire name of the selected source.
    pub source: String,
}

/// Handles a search submission and returns the results fragment.
///
/// Both the button and the Enter key submit the same form, so both paths go
/// through the session's single admission guard. An ignored submission
/// (empty query, search already pending) re-renders the current view
/// unchanged. The session lock is released while the provider call is in
/// flight, so concurrent page loads observe the loading state.
pub async fn submit_search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Html<String> {
    let source = match form.source.parse::<SearchSource>() {
        Ok(source) => source,
        Err(error) => {
            // Unreachable through the UI's selector; fail explicitly rather
            // than falling back to some default source.
            tracing::warn!(%error, "rejecting submission with unknown source");
            return Html(render_view(&multisearch_core::SessionView::Error {
                message: SearchError::USER_MESSAGE,
            }));
        }
    };

    let (ticket, query) = {
        let mut session = state.session.write().await;
        match session.begin(&form.query, source) {
            Some(ticket) => (ticket, session.query().to_string()),
            None => return Html(render_view(&session.view())),
        }
    };

    let outcome = state.search.search(&query, source).await;

    let mut session = state.session.write().await;
    session.complete(ticket, outcome);
    Html(render_view(&session.view()))
}

/// Returns the fragment for the session's current view without changing it.
pub async fn results_fragment(State(state): State<AppState>) -> Html<String> {
    let session = state.session.read().await;
    Html(render_view(&session.view()))
}
