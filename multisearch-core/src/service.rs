//! Query dispatch across the selectable sources.

use crate::errors::SearchError;
use crate::providers::{
    SearchProvider, SpotifyProvider, StackOverflowProvider, WikipediaProvider,
};
use crate::types::{SearchResult, SearchSource};

/// Search service routing a (query, source) pair to the matching provider.
///
/// Dispatch is a plain match on [`SearchSource`], one provider per variant.
/// Each search is a single fire-and-forget request; the service keeps no
/// state between calls.
#[derive(Debug)]
pub struct SearchService {
    stackoverflow: Box<dyn SearchProvider>,
    wikipedia: Box<dyn SearchProvider>,
    spotify: Box<dyn SearchProvider>,
}

impl SearchService {
    /// Creates a service wired to the real providers.
    pub fn new() -> Self {
        Self::with_providers(
            Box::new(StackOverflowProvider::new()),
            Box::new(WikipediaProvider::new()),
            Box::new(SpotifyProvider::new()),
        )
    }

    /// Creates a service from explicit provider implementations.
    ///
    /// Used by tests to substitute mock providers and by deployments pointing
    /// at alternate API origins.
    pub fn with_providers(
        stackoverflow: Box<dyn SearchProvider>,
        wikipedia: Box<dyn SearchProvider>,
        spotify: Box<dyn SearchProvider>,
    ) -> Self {
        Self {
            stackoverflow,
            wikipedia,
            spotify,
        }
    }

    /// Searches `source` for `query` and returns normalized results.
    ///
    /// The query is passed through untrimmed; filtering empty submissions is
    /// the session's responsibility.
    ///
    /// # Errors
    /// - `SearchError::Network` - Outbound request could not be sent
    /// - `SearchError::SearchFailed` - Source answered with a non-success status
    /// - `SearchError::Parse` - Response body did not match the expected shape
    pub async fn search(
        &self,
        query: &str,
        source: SearchSource,
    ) -> Result<Vec<SearchResult>, SearchError> {
        tracing::debug!(source = %source, query, "dispatching search");

        let provider = match source {
            SearchSource::StackOverflow => &self.stackoverflow,
            SearchSource::Wikipedia => &self.wikipedia,
            SearchSource::Spotify => &self.spotify,
        };

        provider.search(query).await
    }
}

impl Default for SearchService {
    fn default() -> Self {
        Self::new()
    }
}
