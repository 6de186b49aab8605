//! JSON API handler for external clients

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use multisearch_core::{SearchError, SearchSource};
use serde::Deserialize;
use serde_json::json;

use crate::server::AppState;

/// Query parameters for `GET /api/search`.
#[derive(Deserialize)]
pub struct SearchParams {
    /// Free-text query.
    pub query: String,
    /// Wire name of the source to search.
    pub source: String,
}

/// Searches one source and returns normalized results as JSON.
///
/// Stateless: API calls do not touch the page session. Empty queries and
/// unknown sources are client errors; provider failures map to 502 with the
/// generic message, the cause going to the log only.
pub async fn api_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    if params.query.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "query must not be empty"})),
        ));
    }

    let source: SearchSource = params.source.parse().map_err(|e: SearchError| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": e.to_string()})),
        )
    })?;

    match state.search.search(params.query.trim(), source).await {
        Ok(results) => {
            let total = results.len();
            Ok(Json(json!({
                "results": results,
                "total": total,
            })))
        }
        Err(error) => {
            tracing::warn!(source = %source, query = %params.query, %error, "api search failed");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(json!({"error": SearchError::USER_MESSAGE})),
            ))
        }
    }
}
