//! Data types for movie search.

use serde::{Deserialize, Serialize};

/// A (term, page) pair identifying one search request.
///
/// Doubles as the query key for cache lookups and stale-response checks, so
/// the term is stored trimmed and the page is never below 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Trimmed search term
    pub term: String,
    /// One-based page number
    pub page: u32,
}

impl SearchQuery {
    /// Creates a query, trimming the term and clamping the page to 1.
    pub fn new(term: impl AsRef<str>, page: u32) -> Self {
        Self {
            term: term.as_ref().trim().to_string(),
            page: page.max(1),
        }
    }

    /// Whether this query would be skipped instead of fetched.
    pub fn is_blank(&self) -> bool {
        self.term.is_empty()
    }

    /// The same term on another page.
    pub fn with_page(&self, page: u32) -> Self {
        Self::new(&self.term, page)
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' page {}", self.term, self.page)
    }
}

/// One completed fetch: a page of summaries plus the reported total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Query this result answers
    pub query: SearchQuery,
    /// Summaries on the requested page, in API order
    pub items: Vec<MovieSummary>,
    /// Total matches across all pages; `None` when missing or malformed
    pub total_count: Option<u32>,
    /// When the result was produced
    pub fetched_at: chrono::DateTime<chrono::Utc>,
}

impl SearchResult {
    /// Result for a query that matched nothing (or was never sent).
    pub fn empty(query: SearchQuery) -> Self {
        Self {
            query,
            items: Vec::new(),
            total_count: None,
            fetched_at: chrono::Utc::now(),
        }
    }

    /// Whether the page carries no items, regardless of the reported total.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Movie (or series) summary as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Display title
    pub title: String,
    /// Release year, kept verbatim ("1999", "2008–2013")
    pub year: Option<String>,
    /// IMDb identifier
    pub imdb_id: String,
    /// Kind of title
    pub kind: MediaKind,
    /// Poster image URL, absent when the API reports "N/A"
    pub poster_url: Option<String>,
}

/// Title kinds reported by the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Feature film
    Movie,
    /// TV series
    Series,
    /// Single TV episode
    Episode,
    /// Video game
    Game,
    /// Anything else
    Other,
}

impl MediaKind {
    /// Maps the API's `Type` field.
    pub fn from_api(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "movie" => MediaKind::Movie,
            "series" => MediaKind::Series,
            "episode" => MediaKind::Episode,
            "game" => MediaKind::Game,
            _ => MediaKind::Other,
        }
    }
}
