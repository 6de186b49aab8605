//! Placeholder Spotify provider.
//!
//! Spotify exposes no unauthenticated search API, so this provider performs
//! no network call at all: it waits a fixed delay to mimic request latency,
//! then synthesizes three deterministic results pointing at the public web
//! player's search page.

use std::time::Duration;

use async_trait::async_trait;

use super::SearchProvider;
use crate::errors::SearchError;
use crate::types::SearchResult;

/// Simulated request latency before results are produced.
const SIMULATED_DELAY: Duration = Duration::from_millis(800);

/// Simulated Spotify provider returning deterministic placeholder results.
#[derive(Debug)]
pub struct SpotifyProvider {
    delay: Duration,
}

impl SpotifyProvider {
    /// Create a provider with the standard simulated delay.
    pub fn new() -> Self {
        Self {
            delay: SIMULATED_DELAY,
        }
    }
}

impl Default for SpotifyProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchProvider for SpotifyProvider {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        tokio::time::sleep(self.delay).await;

        let link = format!(
            "https://open.spotify.com/search/{}",
            urlencoding::encode(query)
        );

        Ok(vec![
            SearchResult {
                title: format!("{query} - Top Track"),
                link: link.clone(),
                description: Some(format!(
                    "This is a simulated result for \"{query}\" on Spotify."
                )),
                image: None,
            },
            SearchResult {
                title: format!("{query} - Popular Artist"),
                link: link.clone(),
                description: Some("Simulated popular artist result.".to_string()),
                image: None,
            },
            SearchResult {
                title: format!("{query} - Album"),
                link,
                description: Some("Simulated album result.".to_string()),
                image: None,
            },
        ])
    }
}
