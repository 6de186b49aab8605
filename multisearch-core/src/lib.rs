//! Multisearch Core - query dispatch and result normalization

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Routes a free-text query to one of several external sources and reshapes
//! each provider's response into a common result record. Also owns the
//! search-session state machine that the presentation layer renders from.

pub mod errors;
pub mod providers;
pub mod sanitize;
pub mod service;
pub mod session;
pub mod types;

// Re-export main types
pub use errors::SearchError;
pub use service::SearchService;
pub use session::{SearchSession, SearchTicket, SessionView};
pub use types::{SearchResult, SearchSource};

/// Convenience type alias for Results with SearchError.
pub type Result<T> = std::result::Result<T, SearchError>;
