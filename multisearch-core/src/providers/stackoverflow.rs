//! Stack Overflow search via the Stack Exchange advanced search API.

use async_trait::async_trait;
use serde::Deserialize;

use super::SearchProvider;
use crate::errors::SearchError;
use crate::sanitize::{excerpt, strip_html_tags};
use crate::types::SearchResult;

/// Number of characters of stripped question body kept as the description.
const EXCERPT_CHARS: usize = 200;

/// Stack Overflow provider using the public Stack Exchange API.
///
/// Issues one GET per search against `/2.3/search/advanced`, limited to 10
/// results sorted by relevance, with question bodies included so the result
/// cards can show an excerpt.
#[derive(Debug)]
pub struct StackOverflowProvider {
    client: reqwest::Client,
    base_url: String,
}

/// Response envelope from the search endpoint.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Vec<Question>,
}

/// Single question item from the search endpoint.
#[derive(Debug, Deserialize)]
struct Question {
    title: String,
    link: String,
    body: Option<String>,
}

impl StackOverflowProvider {
    /// Create a provider against the public Stack Exchange API.
    pub fn new() -> Self {
        Self::with_base_url("https://api.stackexchange.com".to_string())
    }

    /// Create a provider against a custom API origin.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Map one question into the common result record.
    fn map_question(question: Question) -> SearchResult {
        let body = question.body.as_deref().unwrap_or("");
        SearchResult {
            title: question.title,
            link: question.link,
            description: Some(excerpt(&strip_html_tags(body), EXCERPT_CHARS)),
            image: None,
        }
    }
}

impl Default for StackOverflowProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchProvider for StackOverflowProvider {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let url = format!("{}/2.3/search/advanced", self.base_url);
        let params = [
            ("q", query),
            ("site", "stackoverflow"),
            ("order", "desc"),
            ("sort", "relevance"),
            ("pagesize", "10"),
            ("filter", "withbody"),
        ];

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| SearchError::Network {
                reason: format!("stack exchange request failed: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(SearchError::SearchFailed {
                query: query.to_string(),
                reason: format!("stack exchange HTTP {}", response.status()),
            });
        }

        let payload: SearchResponse =
            response.json().await.map_err(|e| SearchError::Parse {
                reason: format!("stack exchange JSON decoding failed: {e}"),
            })?;

        Ok(payload.items.into_iter().map(Self::map_question).collect())
    }
}
