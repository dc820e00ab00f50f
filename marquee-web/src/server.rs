//! HTMX + Tailwind web server for Marquee
//!
//! Serves the search page, the HTMX results fragment and the JSON API.
//! Each request is answered independently from the shared search service;
//! debouncing and "latest request wins" happen in the browser through
//! `hx-trigger` delays and a single `hx-sync` scope on `#results`.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use marquee_core::{MarqueeError, SessionConfig, WebConfig};
use marquee_search::{Localizer, SearchService};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{api_search, search_results};
use crate::pages::search_page;

/// Shared state of every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Caching search service
    pub search_service: Arc<SearchService>,
    /// User-facing strings
    pub localizer: Arc<dyn Localizer>,
    /// Debounce and placeholder settings rendered into the page
    pub session: SessionConfig,
}

impl AppState {
    /// Bundles the service, strings and session settings.
    pub fn new(
        search_service: Arc<SearchService>,
        localizer: Arc<dyn Localizer>,
        session: SessionConfig,
    ) -> Self {
        Self {
            search_service,
            localizer,
            session,
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(search_page))
        // HTMX partial update endpoint
        .route("/search", get(search_results))
        // JSON API endpoint
        .route("/api/search", get(api_search))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds `config.host:config.port` and serves until the process ends.
///
/// # Errors
///
/// - `MarqueeError::Io` - Address could not be bound or the server failed
pub async fn run_server(config: &WebConfig, state: AppState) -> Result<(), MarqueeError> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!("Marquee search running on http://{local_addr}");

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use marquee_search::{
        DevelopmentProvider, MessageCatalog, MovieSearchProvider, SearchError, SearchQuery,
        SearchResult,
    };
    use tower::ServiceExt;

    use super::*;

    #[derive(Debug)]
    struct UnreachableUpstream;

    #[async_trait]
    impl MovieSearchProvider for UnreachableUpstream {
        async fn search(&self, _query: &SearchQuery) -> Result<SearchResult, SearchError> {
            Err(SearchError::Network {
                reason: "connection refused".to_string(),
            })
        }
    }

    fn app_with(provider: Arc<dyn MovieSearchProvider>) -> Router {
        let service = SearchService::new(provider, NonZeroUsize::new(8).unwrap());
        router(AppState::new(
            Arc::new(service),
            Arc::new(MessageCatalog::english()),
            SessionConfig::default(),
        ))
    }

    fn app() -> Router {
        app_with(Arc::new(DevelopmentProvider::new()))
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_index_page_renders_idle_view() {
        let (status, body) = get_body(app(), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<!DOCTYPE html>"));
        assert!(body.contains(r#"placeholder="Search for a movie""#));
        assert!(body.contains("delay:800ms"));
        // Idle results plus the hidden loading panel
        assert_eq!(body.matches("placeholder-tile").count(), 18);
        assert!(body.contains(r#"<div id="loading">"#));
        assert!(body.contains("spinner"));
    }

    #[tokio::test]
    async fn test_index_page_with_term_prefills_results() {
        let (status, body) = get_body(app(), "/?term=matrix").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"value="matrix""#));
        assert!(body.contains("movie-tile"));
    }

    #[tokio::test]
    async fn test_results_fragment_has_tiles_and_pager() {
        let (status, body) = get_body(app(), "/search?term=batman").await;

        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains("<!DOCTYPE html>"));
        assert_eq!(body.matches("movie-tile").count(), 10);
        assert!(body.contains("page 1 - entries 1 - 10 out of 14"));
        assert!(body.contains("/search?term=batman&amp;page=2"));
    }

    #[tokio::test]
    async fn test_results_fragment_for_blank_term_is_idle() {
        let (status, body) = get_body(app(), "/search?term=%20%20").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches("placeholder-tile").count(), 9);
        assert!(body.contains("No movies found, change the search"));
    }

    #[tokio::test]
    async fn test_results_fragment_shows_error_only() {
        let app = app_with(Arc::new(UnreachableUpstream));

        let (status, body) = get_body(app, "/search?term=batman").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Error fetching data"));
        assert!(!body.contains("placeholder-tile"));
        assert!(!body.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_api_search_returns_loaded_page() {
        let (status, body) = get_body(app(), "/api/search?term=batman&page=2").await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["state"], "loaded");
        assert_eq!(json["items"].as_array().unwrap().len(), 4);
        assert_eq!(json["total_count"], 14);
        assert_eq!(json["pagination"]["page"], 2);
        assert_eq!(json["pagination"]["total_pages"], 2);
    }

    #[tokio::test]
    async fn test_api_search_empty_and_idle() {
        let (_, body) = get_body(app(), "/api/search?term=zzzzzz").await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["state"], "empty");
        assert!(json["pagination"].is_null());

        let (_, body) = get_body(app(), "/api/search").await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["state"], "idle");
    }

    #[tokio::test]
    async fn test_api_search_failure_is_bad_gateway() {
        let app = app_with(Arc::new(UnreachableUpstream));

        let (status, body) = get_body(app, "/api/search?term=batman").await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["state"], "error");
        assert_eq!(json["message"], "Error fetching data");
    }
}
