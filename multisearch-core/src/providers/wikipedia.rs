//! Wikipedia search via the public MediaWiki API.

use async_trait::async_trait;
use serde::Deserialize;

use super::SearchProvider;
use crate::errors::SearchError;
use crate::sanitize::strip_html_tags;
use crate::types::SearchResult;

/// Wikipedia provider using the MediaWiki search API.
///
/// Issues one GET per search against `/w/api.php` with `origin=*` so the
/// endpoint answers without CORS preflight, and reconstructs each canonical
/// article URL from the page title.
#[derive(Debug)]
pub struct WikipediaProvider {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    query: QueryBody,
}

#[derive(Debug, Deserialize)]
struct QueryBody {
    search: Vec<Page>,
}

/// Single page hit from the search list.
#[derive(Debug, Deserialize)]
struct Page {
    title: String,
    snippet: Option<String>,
}

impl WikipediaProvider {
    /// Create a provider against the English Wikipedia.
    pub fn new() -> Self {
        Self::with_base_url("https://en.wikipedia.org".to_string())
    }

    /// Create a provider against a custom wiki origin.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Canonical article URL for a page title: spaces become underscores,
    /// then the whole segment is percent-encoded.
    fn article_url(base_url: &str, title: &str) -> String {
        let segment = urlencoding::encode(&title.replace(' ', "_")).into_owned();
        format!("{base_url}/wiki/{segment}")
    }

    /// Map one page hit into the common result record.
    fn map_page(base_url: &str, page: Page) -> SearchResult {
        let snippet = page.snippet.as_deref().unwrap_or("");
        SearchResult {
            link: Self::article_url(base_url, &page.title),
            description: Some(strip_html_tags(snippet)),
            title: page.title,
            image: None,
        }
    }
}

impl Default for WikipediaProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchProvider for WikipediaProvider {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let url = format!("{}/w/api.php", self.base_url);
        let params = [
            ("action", "query"),
            ("list", "search"),
            ("srsearch", query),
            ("format", "json"),
            ("origin", "*"),
            ("srlimit", "10"),
        ];

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| SearchError::Network {
                reason: format!("wikipedia request failed: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(SearchError::SearchFailed {
                query: query.to_string(),
                reason: format!("wikipedia HTTP {}", response.status()),
            });
        }

        let payload: QueryResponse =
            response.json().await.map_err(|e| SearchError::Parse {
                reason: format!("wikipedia JSON decoding failed: {e}"),
            })?;

        Ok(payload
            .query
            .search
            .into_iter()
            .map(|page| Self::map_page(&self.base_url, page))
            .collect())
    }
}
