//! Mock provider implementation for testing.

use async_trait::async_trait;

use super::SearchProvider;
use crate::errors::SearchError;
use crate::types::SearchResult;

/// Mock provider returning canned results tagged with its name.
#[derive(Debug)]
pub struct MockProvider {
    name: &'static str,
    fail: bool,
}

impl MockProvider {
    /// Creates a mock that answers with one result naming itself.
    pub fn new(name: &'static str) -> Self {
        Self { name, fail: false }
    }

    /// Creates a mock whose every search fails.
    pub fn failing(name: &'static str) -> Self {
        Self { name, fail: true }
    }
}

#[async_trait]
impl SearchProvider for MockProvider {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        if self.fail {
            return Err(SearchError::SearchFailed {
                query: query.to_string(),
                reason: format!("{} is down", self.name),
            });
        }

        Ok(vec![SearchResult {
            title: format!("{}: {query}", self.name),
            link: format!("https://example.com/{}", self.name),
            description: None,
            image: None,
        }])
    }
}
