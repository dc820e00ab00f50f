//! OMDb search provider.

use async_trait::async_trait;
use marquee_core::{MarqueeError, SearchConfig};
use serde::Deserialize;
use url::Url;

use super::MovieSearchProvider;
use crate::errors::SearchError;
use crate::pagination::parse_total;
use crate::types::{MediaKind, MovieSummary, SearchQuery, SearchResult};

/// Provider querying an OMDb-compatible `?s=` search endpoint.
#[derive(Debug, Clone)]
pub struct OmdbProvider {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
}

/// Top-level body of an OMDb search response.
///
/// Fields stay loosely typed so an unexpected shape degrades to "no results"
/// instead of failing the whole fetch.
#[derive(Debug, Deserialize)]
struct OmdbSearchResponse {
    #[serde(rename = "Search")]
    search: Option<serde_json::Value>,
    #[serde(rename = "totalResults")]
    total_results: Option<serde_json::Value>,
    #[serde(rename = "Response")]
    response: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

/// One entry of the `Search` array.
#[derive(Debug, Deserialize)]
struct OmdbMovie {
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "imdbID")]
    imdb_id: Option<String>,
    #[serde(rename = "Type")]
    media_type: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
}

impl OmdbProvider {
    /// Creates a provider for `endpoint` authenticated with `api_key`.
    ///
    /// # Errors
    ///
    /// - `SearchError::Network` - HTTP client could not be constructed
    pub fn new(
        endpoint: Url,
        api_key: impl Into<String>,
        timeout: std::time::Duration,
        user_agent: &str,
    ) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| SearchError::Network {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.into(),
        })
    }

    /// Creates a provider from search configuration.
    ///
    /// # Errors
    ///
    /// - `MarqueeError::Configuration` - Invalid endpoint, missing API key, or
    ///   the HTTP client could not be built
    pub fn from_config(config: &SearchConfig) -> Result<Self, MarqueeError> {
        let endpoint = config.endpoint()?;
        let api_key = config.require_api_key()?;

        Self::new(endpoint, api_key, config.request_timeout, config.user_agent).map_err(|e| {
            MarqueeError::Configuration {
                reason: e.to_string(),
            }
        })
    }

    fn parse_response(query: &SearchQuery, body: OmdbSearchResponse) -> SearchResult {
        let total_count = body.total_results.as_ref().and_then(parse_total);

        if body.response.as_deref() == Some("False") {
            // OMDb reports "Movie not found!" and "Too many results." this way
            tracing::debug!(
                query = %query,
                reason = body.error.as_deref().unwrap_or("unspecified"),
                "OMDb returned no results"
            );
            return SearchResult {
                total_count,
                ..SearchResult::empty(query.clone())
            };
        }

        let items = match body.search {
            Some(raw) => match serde_json::from_value::<Vec<OmdbMovie>>(raw) {
                Ok(movies) => movies.into_iter().filter_map(to_summary).collect(),
                Err(e) => {
                    tracing::warn!(query = %query, "Malformed Search list in OMDb response: {e}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        SearchResult {
            query: query.clone(),
            items,
            total_count,
            fetched_at: chrono::Utc::now(),
        }
    }
}

/// Converts an API entry, dropping entries without a title.
fn to_summary(movie: OmdbMovie) -> Option<MovieSummary> {
    let title = movie.title.filter(|t| !t.trim().is_empty())?;

    Some(MovieSummary {
        title,
        year: movie.year.filter(|y| y != "N/A"),
        imdb_id: movie.imdb_id.unwrap_or_default(),
        kind: movie
            .media_type
            .as_deref()
            .map_or(MediaKind::Other, MediaKind::from_api),
        poster_url: movie.poster.filter(|p| p != "N/A" && !p.is_empty()),
    })
}

#[async_trait]
impl MovieSearchProvider for OmdbProvider {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResult, SearchError> {
        let page = query.page.to_string();

        tracing::debug!(query = %query, endpoint = %self.endpoint, "Sending OMDb search");

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("s", query.term.as_str()),
                ("page", page.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let text = response.text().await?;
        let body: OmdbSearchResponse =
            serde_json::from_str(&text).map_err(|e| SearchError::Parse {
                reason: format!("JSON parsing failed: {e}"),
            })?;

        Ok(Self::parse_response(query, body))
    }
}
