//! JSON API handlers

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use marquee_search::{MovieSummary, PageWindow, ViewState};
use serde::Serialize;

use super::{requested_query, resolve_view};
use crate::server::AppState;

/// Body of `GET /api/search`.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// `idle`, `loaded`, `empty` or `error`
    pub state: &'static str,
    /// Hits on the requested page
    pub items: Vec<MovieSummary>,
    /// Total reported by the upstream API, when known
    pub total_count: Option<u32>,
    /// Pagination for loaded pages
    pub pagination: Option<PageWindow>,
    /// Localized error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<ViewState> for SearchResponse {
    fn from(view_state: ViewState) -> Self {
        let state = view_state.name();
        let mut response = Self {
            state,
            items: Vec::new(),
            total_count: None,
            pagination: None,
            message: None,
        };

        match view_state {
            ViewState::Idle | ViewState::Loading { .. } => {}
            ViewState::Loaded { result, window } => {
                response.items = result.items;
                response.total_count = result.total_count;
                response.pagination = Some(window);
            }
            ViewState::Empty { total_count, .. } => response.total_count = total_count,
            ViewState::Error { message, .. } => response.message = Some(message),
        }

        response
    }
}

/// Searches `term` on `page`; upstream failures answer 502.
pub async fn api_search(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<SearchResponse>) {
    let view_state = resolve_view(&state, requested_query(&params)).await;

    let status = if matches!(view_state, ViewState::Error { .. }) {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };

    (status, Json(view_state.into()))
}
