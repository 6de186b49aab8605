//! HTMX + Tailwind web server for Multisearch
//!
//! Provides the search page, HTMX partial updates, and a JSON API endpoint.
//! All pages use server-side rendering.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use multisearch_core::{SearchService, SearchSession};
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

use crate::handlers::{api_search, results_fragment, submit_search};
use crate::pages::search_page;

/// Shared application state: the dispatching service plus one ephemeral
/// search session. Nothing here persists across server restarts.
#[derive(Clone)]
pub struct AppState {
    /// Source dispatch service.
    pub search: Arc<SearchService>,
    /// Ephemeral session driving the page's render state.
    pub session: Arc<RwLock<SearchSession>>,
}

impl AppState {
    /// Creates state wired to the real providers.
    pub fn new() -> Self {
        Self::with_service(SearchService::new())
    }

    /// Creates state around an explicit service, used by tests with mock
    /// providers.
    pub fn with_service(search: SearchService) -> Self {
        Self {
            search: Arc::new(search),
            session: Arc::new(RwLock::new(SearchSession::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Main page
        .route("/", get(search_page))
        // HTMX partial update endpoints
        .route("/htmx/search", post(submit_search))
        .route("/htmx/results", get(results_fragment))
        // JSON API endpoint (for external clients)
        .route("/api/search", get(api_search))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds the listener and serves the application until shutdown.
pub async fn run_server() -> Result<(), Box<dyn std::error::Error>> {
    let app = router(AppState::new());

    println!("Multisearch running on http://127.0.0.1:3000");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    axum::serve(listener, app).await?;
    Ok(())
}
