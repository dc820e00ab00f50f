//! HTTP request handlers organized by response format

pub mod api;
pub mod htmx;

use std::collections::HashMap;

use marquee_search::{SearchQuery, ViewState};

use crate::server::AppState;

// Re-export handler functions
pub use api::api_search;
pub use htmx::search_results;

/// Reads `term` and `page` from the query string.
///
/// A missing or unparsable page falls back to 1, like a missing term falls
/// back to the blank term.
pub fn requested_query(params: &HashMap<String, String>) -> SearchQuery {
    let term = params.get("term").map(String::as_str).unwrap_or_default();
    let page = params
        .get("page")
        .and_then(|p| p.trim().parse().ok())
        .unwrap_or(1);

    SearchQuery::new(term, page)
}

/// Runs `query` through the shared service and settles it into a view state.
pub async fn resolve_view(state: &AppState, query: SearchQuery) -> ViewState {
    let outcome = state.search_service.search(&query).await;
    ViewState::settle(query, outcome, state.localizer.as_ref())
}
