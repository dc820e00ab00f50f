//! View state published by a search session.

use serde::Serialize;

use crate::errors::SearchError;
use crate::messages::{Localizer, MessageKey};
use crate::pagination::{self, PageWindow};
use crate::types::{SearchQuery, SearchResult};

/// What a search view should currently show.
///
/// Every state can be re-entered; a new term or page always moves to
/// `Loading` and clearing the term always returns to `Idle`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ViewState {
    /// No term entered.
    Idle,
    /// A fetch for `query` is in flight.
    Loading {
        /// Query being fetched
        query: SearchQuery,
    },
    /// The latest fetch returned items.
    Loaded {
        /// The fetched page
        result: SearchResult,
        /// Pagination derived from the page and reported total
        window: PageWindow,
    },
    /// The latest fetch returned no items.
    Empty {
        /// Query that matched nothing
        query: SearchQuery,
        /// Total reported alongside the empty page, if any
        total_count: Option<u32>,
    },
    /// The latest fetch failed.
    Error {
        /// Query that failed
        query: SearchQuery,
        /// Localized message to show instead of results
        message: String,
    },
}

impl ViewState {
    /// State reached once the fetch for `query` settles with `outcome`.
    ///
    /// A blank query is `Idle` whatever the outcome. Failures keep only the
    /// localized message; the cause is for logs.
    pub fn settle(
        query: SearchQuery,
        outcome: Result<SearchResult, SearchError>,
        localizer: &dyn Localizer,
    ) -> Self {
        if query.is_blank() {
            return ViewState::Idle;
        }

        match outcome {
            Ok(result) if result.is_empty() => ViewState::Empty {
                query,
                total_count: result.total_count,
            },
            Ok(result) => {
                let window = pagination::window(query.page, result.total_count);
                ViewState::Loaded { result, window }
            }
            Err(_) => ViewState::Error {
                query,
                message: localizer.text(MessageKey::ErrorFetchingData),
            },
        }
    }

    /// Query this state belongs to; `None` while idle.
    pub fn query(&self) -> Option<&SearchQuery> {
        match self {
            ViewState::Idle => None,
            ViewState::Loading { query }
            | ViewState::Empty { query, .. }
            | ViewState::Error { query, .. } => Some(query),
            ViewState::Loaded { result, .. } => Some(&result.query),
        }
    }

    /// Short name of the state, as used in logs and the JSON API.
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::Loading { .. } => "loading",
            ViewState::Loaded { .. } => "loaded",
            ViewState::Empty { .. } => "empty",
            ViewState::Error { .. } => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::MessageCatalog;
    use crate::providers::mock::movies;

    fn result(query: &SearchQuery, count: usize, total: Option<u32>) -> SearchResult {
        SearchResult {
            items: movies(&query.term, count),
            total_count: total,
            ..SearchResult::empty(query.clone())
        }
    }

    #[test]
    fn test_settle_loaded_with_window() {
        let query = SearchQuery::new("batman", 1);
        let state = ViewState::settle(
            query.clone(),
            Ok(result(&query, 10, Some(57))),
            &MessageCatalog::english(),
        );

        let ViewState::Loaded { result, window } = state else {
            panic!("expected loaded state");
        };
        assert_eq!(result.items.len(), 10);
        assert_eq!(window.total_pages, 6);
        assert_eq!(window.range, Some((1, 10)));
    }

    #[test]
    fn test_settle_empty_despite_total() {
        let query = SearchQuery::new("batman", 2);
        let state = ViewState::settle(
            query.clone(),
            Ok(result(&query, 0, Some(57))),
            &MessageCatalog::english(),
        );

        assert_eq!(
            state,
            ViewState::Empty {
                query,
                total_count: Some(57)
            }
        );
    }

    #[test]
    fn test_settle_error_uses_localized_message() {
        let query = SearchQuery::new("batman", 1);
        let catalog = MessageCatalog::from_json(r#"{"error_fetching_data": "Hoppsan"}"#).unwrap();
        let state = ViewState::settle(
            query.clone(),
            Err(SearchError::Status { status: 503 }),
            &catalog,
        );

        assert_eq!(
            state,
            ViewState::Error {
                query,
                message: "Hoppsan".to_string()
            }
        );
        assert_eq!(state.name(), "error");
    }

    #[test]
    fn test_settle_blank_query_is_idle() {
        let query = SearchQuery::new("  ", 1);
        let state = ViewState::settle(
            query.clone(),
            Ok(SearchResult::empty(query)),
            &MessageCatalog::english(),
        );
        assert_eq!(state, ViewState::Idle);
        assert!(state.query().is_none());
    }
}
