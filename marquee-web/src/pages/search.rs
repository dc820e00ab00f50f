//! Search page - the single view of the application

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::response::Html;
use marquee_search::{MessageKey, ViewModel, ViewState};

use crate::components::{card, loading_panel, page_header, results_panel, search_input};
use crate::handlers::{requested_query, resolve_view};
use crate::pages::render_page;
use crate::server::AppState;

/// Renders the search page.
///
/// A `term` in the query string is searched server-side so the page can be
/// bookmarked; otherwise the results panel starts idle.
pub async fn search_page(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Html<String> {
    let query = requested_query(&params);
    let view_state = if query.is_blank() {
        ViewState::Idle
    } else {
        resolve_view(&state, query.clone()).await
    };

    let view = ViewModel::build(
        &view_state,
        state.localizer.as_ref(),
        state.session.placeholder_tiles,
    );

    let loading = ViewModel::build(
        &ViewState::Loading {
            query: query.clone(),
        },
        state.localizer.as_ref(),
        state.session.placeholder_tiles,
    );

    let content = format!(
        r#"{}
        {}
        {}
        <section id="results">{}</section>"#,
        page_header("Marquee", None),
        card(
            None,
            &search_input(
                &state.localizer.text(MessageKey::SearchForAMovie),
                &query.term,
                state.session.debounce.as_millis(),
            ),
        ),
        loading_panel(&loading),
        results_panel(&view, &query.term),
    );

    render_page("Search", &content)
}
