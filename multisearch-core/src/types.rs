//! Data types shared across the search pipeline.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SearchError;

/// Normalized search result, common to every source.
///
/// Produced fresh for each search and discarded when the next search
/// completes; nothing holds onto results across submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Result headline shown as the card title.
    pub title: String,
    /// Absolute URL the title links out to.
    pub link: String,
    /// Optional body text, already HTML-stripped by the adapter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Selectable search source. Picks the adapter branch; no other semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchSource {
    /// Stack Exchange advanced search, site `stackoverflow`.
    StackOverflow,
    /// MediaWiki search API on the English Wikipedia.
    Wikipedia,
    /// Simulated provider; Spotify has no public unauthenticated search API.
    Spotify,
}

impl SearchSource {
    /// All sources in UI selector order.
    pub fn all() -> [SearchSource; 3] {
        [
            SearchSource::StackOverflow,
            SearchSource::Wikipedia,
            SearchSource::Spotify,
        ]
    }

    /// Human-readable name for the selector label.
    pub fn label(&self) -> &'static str {
        match self {
            SearchSource::StackOverflow => "Stack Overflow",
            SearchSource::Wikipedia => "Wikipedia",
            SearchSource::Spotify => "Spotify",
        }
    }

    /// Lowercase wire name used in forms, query strings and log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchSource::StackOverflow => "stackoverflow",
            SearchSource::Wikipedia => "wikipedia",
            SearchSource::Spotify => "spotify",
        }
    }
}

impl fmt::Display for SearchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchSource {
    type Err = SearchError;

    /// Parses a wire name, failing fast on anything unrecognized rather than
    /// silently falling back to a default source.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stackoverflow" => Ok(SearchSource::StackOverflow),
            "wikipedia" => Ok(SearchSource::Wikipedia),
            "spotify" => Ok(SearchSource::Spotify),
            other => Err(SearchError::UnsupportedSource {
                name: other.to_string(),
            }),
        }
    }
}
