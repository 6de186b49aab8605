//! Provider implementations for the selectable search sources.

use async_trait::async_trait;

use crate::errors::SearchError;
use crate::types::SearchResult;

pub mod spotify;
pub mod stackoverflow;
pub mod wikipedia;

#[cfg(test)]
pub mod mock;

#[cfg(test)]
pub use mock::MockProvider;
pub use spotify::SpotifyProvider;
pub use stackoverflow::StackOverflowProvider;
pub use wikipedia::WikipediaProvider;

/// Trait for source-specific search fetchers.
///
/// Each implementation performs at most one outbound call per invocation and
/// reshapes the provider's payload into the common [`SearchResult`] record.
/// Input trimming and empty-query filtering are the caller's job; providers
/// search for whatever string they are handed.
#[async_trait]
pub trait SearchProvider: Send + Sync + std::fmt::Debug {
    /// Search the source for `query`, normalizing the response.
    ///
    /// # Errors
    /// - `SearchError::Network` - Outbound request could not be sent
    /// - `SearchError::SearchFailed` - Source answered with a non-success status
    /// - `SearchError::Parse` - Response body did not match the expected shape
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError>;
}
