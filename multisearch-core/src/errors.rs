//! Error types for search operations.
//!
//! The UI collapses every variant into one generic "search failed" message;
//! the variants exist so the concrete cause can be logged for diagnostics.

use thiserror::Error;

/// Errors that can occur while dispatching a search to a source.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Source rejected the query or returned a non-success status.
    #[error("search failed for query '{query}': {reason}")]
    SearchFailed {
        /// The search query that failed
        query: String,
        /// The reason for the failure
        reason: String,
    },

    /// Network communication error occurred during the outbound request.
    #[error("network error: {reason}")]
    Network {
        /// The reason for the network error
        reason: String,
    },

    /// Response body could not be decoded into the expected payload shape.
    #[error("parse error: {reason}")]
    Parse {
        /// The reason for the parse error
        reason: String,
    },

    /// A wire string named a source outside the supported set.
    #[error("unsupported search source: {name}")]
    UnsupportedSource {
        /// The unrecognized source name
        name: String,
    },
}

impl SearchError {
    /// The single message shown to users, regardless of cause.
    pub const USER_MESSAGE: &'static str =
        "An error occurred while searching. Please try again.";
}
