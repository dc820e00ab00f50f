//! Offline provider backed by a built-in catalog.

use std::time::Duration;

use async_trait::async_trait;

use super::MovieSearchProvider;
use crate::errors::SearchError;
use crate::pagination::PAGE_SIZE;
use crate::types::{MediaKind, MovieSummary, SearchQuery, SearchResult};

/// (title, year, imdb id, kind)
const CATALOG: &[(&str, &str, &str, MediaKind)] = &[
    ("Batman", "1989", "tt0096895", MediaKind::Movie),
    ("Batman Returns", "1992", "tt0103776", MediaKind::Movie),
    ("Batman Forever", "1995", "tt0112462", MediaKind::Movie),
    ("Batman & Robin", "1997", "tt0118688", MediaKind::Movie),
    ("Batman Begins", "2005", "tt0372784", MediaKind::Movie),
    ("Batman v Superman: Dawn of Justice", "2016", "tt2975590", MediaKind::Movie),
    ("The Batman", "2022", "tt1877830", MediaKind::Movie),
    ("Batman: The Animated Series", "1992–1995", "tt0103359", MediaKind::Series),
    ("Batman: Mask of the Phantasm", "1993", "tt0106364", MediaKind::Movie),
    ("Batman: Under the Red Hood", "2010", "tt1569923", MediaKind::Movie),
    ("Batman: Year One", "2011", "tt1672723", MediaKind::Movie),
    ("Batman: The Killing Joke", "2016", "tt4853102", MediaKind::Movie),
    ("The Lego Batman Movie", "2017", "tt4116284", MediaKind::Movie),
    ("Batman: Arkham City", "2011", "tt1568322", MediaKind::Game),
    ("The Dark Knight", "2008", "tt0468569", MediaKind::Movie),
    ("The Dark Knight Rises", "2012", "tt1345836", MediaKind::Movie),
    ("The Matrix", "1999", "tt0133093", MediaKind::Movie),
    ("The Matrix Reloaded", "2003", "tt0234215", MediaKind::Movie),
    ("The Matrix Revolutions", "2003", "tt0242653", MediaKind::Movie),
    ("The Matrix Resurrections", "2021", "tt10838180", MediaKind::Movie),
    ("Alien", "1979", "tt0078748", MediaKind::Movie),
    ("Aliens", "1986", "tt0090605", MediaKind::Movie),
    ("Alien³", "1992", "tt0103644", MediaKind::Movie),
    ("Blade Runner", "1982", "tt0083658", MediaKind::Movie),
    ("Blade Runner 2049", "2017", "tt1856101", MediaKind::Movie),
    ("Inception", "2010", "tt1375666", MediaKind::Movie),
    ("Interstellar", "2014", "tt0816692", MediaKind::Movie),
    ("Breaking Bad", "2008–2013", "tt0903747", MediaKind::Series),
];

/// Development provider for offline use and demos.
///
/// Matches titles case-insensitively by substring and pages them like the
/// real endpoint. An optional artificial latency makes the loading state
/// visible in interactive runs.
#[derive(Debug, Clone)]
pub struct DevelopmentProvider {
    latency: Duration,
}

impl Default for DevelopmentProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DevelopmentProvider {
    /// Creates a provider answering immediately.
    pub fn new() -> Self {
        Self {
            latency: Duration::ZERO,
        }
    }

    /// Creates a provider that waits `latency` before every answer.
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    fn matches(term: &str) -> Vec<MovieSummary> {
        let needle = term.to_lowercase();

        CATALOG
            .iter()
            .filter(|(title, ..)| title.to_lowercase().contains(&needle))
            .map(|&(title, year, imdb_id, kind)| MovieSummary {
                title: title.to_string(),
                year: Some(year.to_string()),
                imdb_id: imdb_id.to_string(),
                kind,
                poster_url: None,
            })
            .collect()
    }
}

#[async_trait]
impl MovieSearchProvider for DevelopmentProvider {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResult, SearchError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let matches = Self::matches(&query.term);
        let total = u32::try_from(matches.len()).unwrap_or(u32::MAX);
        let skip = query.page.saturating_sub(1).saturating_mul(PAGE_SIZE) as usize;

        // The real endpoint answers "not found" without a total when nothing matches
        let total_count = (total > 0).then_some(total);

        Ok(SearchResult {
            query: query.clone(),
            items: matches
                .into_iter()
                .skip(skip)
                .take(PAGE_SIZE as usize)
                .collect(),
            total_count,
            fetched_at: chrono::Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pages_through_matches() {
        let provider = DevelopmentProvider::new();

        let first = provider.search(&SearchQuery::new("batman", 1)).await.unwrap();
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total_count, Some(14));
        assert_eq!(first.items[0].title, "Batman");

        let second = provider.search(&SearchQuery::new("batman", 2)).await.unwrap();
        assert_eq!(second.items.len(), 4);
        assert_eq!(second.total_count, Some(14));
    }

    #[tokio::test]
    async fn test_case_insensitive_match() {
        let provider = DevelopmentProvider::new();
        let result = provider.search(&SearchQuery::new("MATRIX", 1)).await.unwrap();
        assert_eq!(result.items.len(), 4);
    }

    #[tokio::test]
    async fn test_no_match_has_unknown_total() {
        let provider = DevelopmentProvider::new();
        let result = provider.search(&SearchQuery::new("zzzz", 1)).await.unwrap();
        assert!(result.is_empty());
        assert_eq!(result.total_count, None);
    }
}
