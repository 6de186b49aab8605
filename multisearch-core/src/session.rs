//! Search session state machine.
//!
//! The session replaces the loose loading/error/has-searched flag trio with a
//! single closed state value, so invalid flag combinations (loading with an
//! error set, results alongside an error) are unrepresentable. Every
//! submission path funnels through [`SearchSession::begin`], which applies
//! one guard for empty queries and in-flight searches alike; completions are
//! fenced by a monotonically increasing sequence number so a superseded
//! response can never overwrite newer state.

use crate::errors::SearchError;
use crate::types::{SearchResult, SearchSource};

/// Lifecycle of the current search, one variant per observable render state.
#[derive(Debug)]
enum SearchLifecycle {
    /// No search has been started yet.
    Idle,
    /// A search is in flight; `seq` identifies the outstanding ticket.
    Loading { seq: u64 },
    /// The last search failed; only the generic message is kept.
    Failed { message: String },
    /// The last search completed, possibly with an empty result list.
    Loaded { results: Vec<SearchResult> },
}

/// Proof that a search was admitted by [`SearchSession::begin`].
///
/// Consumed by [`SearchSession::complete`]; a ticket whose sequence number
/// has been superseded is discarded there.
#[derive(Debug)]
#[must_use = "a begun search must be completed with its ticket"]
pub struct SearchTicket {
    seq: u64,
}

/// One view the presentation layer renders, projected from session state.
#[derive(Debug, PartialEq)]
pub enum SessionView<'a> {
    /// Initial prompt; the user has not searched yet.
    Prompt,
    /// Search in flight against `source`.
    Loading {
        /// Source being searched.
        source: SearchSource,
    },
    /// Last search failed with the generic message.
    Error {
        /// User-facing error message.
        message: &'a str,
    },
    /// Last search succeeded but matched nothing.
    NoResults,
    /// Last search succeeded with results to render.
    Results(&'a [SearchResult]),
}

/// Ephemeral per-session search state: current query text, selected source,
/// and the lifecycle of the most recent submission.
#[derive(Debug)]
pub struct SearchSession {
    query: String,
    source: SearchSource,
    state: SearchLifecycle,
    has_searched: bool,
    current_seq: u64,
}

impl SearchSession {
    /// Creates an idle session with the default source selected.
    pub fn new() -> Self {
        Self {
            query: String::new(),
            source: SearchSource::StackOverflow,
            state: SearchLifecycle::Idle,
            has_searched: false,
            current_seq: 0,
        }
    }

    /// Admits a submission, entering `Loading` and returning a ticket.
    ///
    /// Returns `None` without touching any state when the trimmed query is
    /// empty or a search is already in flight. Both the button and the
    /// Enter-key path call this, so they are gated identically.
    pub fn begin(&mut self, query: &str, source: SearchSource) -> Option<SearchTicket> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }
        if matches!(self.state, SearchLifecycle::Loading { .. }) {
            tracing::debug!(query = trimmed, "submission ignored, search already in flight");
            return None;
        }

        self.query = trimmed.to_string();
        self.source = source;
        self.has_searched = true;
        self.current_seq += 1;
        self.state = SearchLifecycle::Loading {
            seq: self.current_seq,
        };

        Some(SearchTicket {
            seq: self.current_seq,
        })
    }

    /// Applies a search outcome for the given ticket.
    ///
    /// A ticket that is no longer current is discarded without changing
    /// state. On failure the concrete cause is logged and only the generic
    /// message is retained; prior results are gone either way.
    pub fn complete(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<Vec<SearchResult>, SearchError>,
    ) {
        if ticket.seq != self.current_seq {
            tracing::debug!(
                stale = ticket.seq,
                current = self.current_seq,
                "discarding superseded search response"
            );
            return;
        }

        self.state = match outcome {
            Ok(results) => SearchLifecycle::Loaded { results },
            Err(error) => {
                tracing::warn!(source = %self.source, query = %self.query, %error, "search failed");
                SearchLifecycle::Failed {
                    message: SearchError::USER_MESSAGE.to_string(),
                }
            }
        };
    }

    /// Projects the state into exactly one renderable view.
    pub fn view(&self) -> SessionView<'_> {
        match &self.state {
            SearchLifecycle::Idle => SessionView::Prompt,
            SearchLifecycle::Loading { .. } => SessionView::Loading {
                source: self.source,
            },
            SearchLifecycle::Failed { message } => SessionView::Error { message },
            SearchLifecycle::Loaded { results } if results.is_empty() => SessionView::NoResults,
            SearchLifecycle::Loaded { results } => SessionView::Results(results),
        }
    }

    /// Current query text, trimmed at submission time.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Currently selected source.
    pub fn source(&self) -> SearchSource {
        self.source
    }

    /// Whether a search is currently in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, SearchLifecycle::Loading { .. })
    }

    /// Whether the session has ever left the idle state.
    pub fn has_searched(&self) -> bool {
        self.has_searched
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(title: &str) -> SearchResult {
        SearchResult {
            title: title.to_string(),
            link: "https://example.com".to_string(),
            description: None,
            image: None,
        }
    }

    #[test]
    fn starts_idle_showing_the_prompt() {
        let session = SearchSession::new();
        assert_eq!(session.view(), SessionView::Prompt);
        assert!(!session.has_searched());
    }

    #[test]
    fn empty_and_whitespace_queries_are_ignored() {
        let mut session = SearchSession::new();
        assert!(session.begin("", SearchSource::Wikipedia).is_none());
        assert!(session.begin("   \t", SearchSource::Wikipedia).is_none());
        assert_eq!(session.view(), SessionView::Prompt);
        assert!(!session.has_searched());
    }

    #[test]
    fn begin_trims_and_enters_loading() {
        let mut session = SearchSession::new();
        let ticket = session.begin("  react hooks  ", SearchSource::StackOverflow);
        assert!(ticket.is_some());
        assert_eq!(session.query(), "react hooks");
        assert!(session.is_loading());
        assert!(session.has_searched());
        assert_eq!(
            session.view(),
            SessionView::Loading {
                source: SearchSource::StackOverflow
            }
        );
        session.complete(ticket.unwrap(), Ok(vec![]));
    }

    #[test]
    fn submission_during_loading_is_ignored() {
        let mut session = SearchSession::new();
        let ticket = session.begin("first", SearchSource::Spotify).unwrap();

        assert!(session.begin("second", SearchSource::Wikipedia).is_none());
        assert_eq!(session.query(), "first");
        assert_eq!(session.source(), SearchSource::Spotify);

        session.complete(ticket, Ok(vec![result("a")]));
    }

    #[test]
    fn success_with_results_renders_them() {
        let mut session = SearchSession::new();
        let ticket = session.begin("q", SearchSource::Wikipedia).unwrap();
        session.complete(ticket, Ok(vec![result("a"), result("b")]));

        match session.view() {
            SessionView::Results(results) => assert_eq!(results.len(), 2),
            other => panic!("expected results view, got {other:?}"),
        }
    }

    #[test]
    fn success_with_no_results_renders_the_empty_view() {
        let mut session = SearchSession::new();
        let ticket = session.begin("q", SearchSource::Wikipedia).unwrap();
        session.complete(ticket, Ok(vec![]));
        assert_eq!(session.view(), SessionView::NoResults);
    }

    #[test]
    fn failure_shows_generic_message_and_clears_results() {
        let mut session = SearchSession::new();
        let ticket = session.begin("q", SearchSource::StackOverflow).unwrap();
        session.complete(ticket, Ok(vec![result("a")]));

        let ticket = session.begin("q2", SearchSource::StackOverflow).unwrap();
        session.complete(
            ticket,
            Err(SearchError::Network {
                reason: "connection refused".to_string(),
            }),
        );

        assert_eq!(
            session.view(),
            SessionView::Error {
                message: SearchError::USER_MESSAGE
            }
        );
    }

    #[test]
    fn next_successful_search_clears_a_prior_error() {
        let mut session = SearchSession::new();
        let ticket = session.begin("q", SearchSource::Wikipedia).unwrap();
        session.complete(
            ticket,
            Err(SearchError::Parse {
                reason: "bad json".to_string(),
            }),
        );
        assert!(matches!(session.view(), SessionView::Error { .. }));

        let ticket = session.begin("q", SearchSource::Wikipedia).unwrap();
        session.complete(ticket, Ok(vec![result("a")]));
        assert!(matches!(session.view(), SessionView::Results(_)));
    }

    #[test]
    fn superseded_ticket_is_discarded() {
        let mut session = SearchSession::new();
        let ticket = session.begin("current", SearchSource::Wikipedia).unwrap();

        let stale = SearchTicket {
            seq: ticket.seq - 1,
        };
        session.complete(stale, Ok(vec![result("stale")]));
        assert!(session.is_loading());

        session.complete(ticket, Ok(vec![result("fresh")]));
        match session.view() {
            SessionView::Results(results) => assert_eq!(results[0].title, "fresh"),
            other => panic!("expected results view, got {other:?}"),
        }
    }
}
