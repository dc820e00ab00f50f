//! HTMX partial update handlers

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::response::Html;
use marquee_search::ViewModel;

use super::{requested_query, resolve_view};
use crate::components::results_panel;
use crate::server::AppState;

/// Renders the `#results` fragment for `term` and `page`.
pub async fn search_results(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Html<String> {
    let query = requested_query(&params);
    let view_state = resolve_view(&state, query.clone()).await;

    tracing::debug!(query = %query, state = view_state.name(), "Rendering results fragment");

    let view = ViewModel::build(
        &view_state,
        state.localizer.as_ref(),
        state.session.placeholder_tiles,
    );
    Html(results_panel(&view, &query.term))
}
