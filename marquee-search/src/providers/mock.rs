//! Scripted provider for tests.

#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::time::Duration;

#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use parking_lot::Mutex;

#[cfg(test)]
use super::MovieSearchProvider;
#[cfg(test)]
use crate::errors::SearchError;
#[cfg(test)]
use crate::types::{MediaKind, MovieSummary, SearchQuery, SearchResult};

/// One scripted answer.
#[cfg(test)]
#[derive(Debug, Clone)]
struct Scripted {
    delay: Duration,
    outcome: Result<(Vec<MovieSummary>, Option<u32>), SearchError>,
}

/// Provider answering from a script keyed by query, recording every call.
///
/// Unscripted queries answer with an empty page after no delay.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockProvider {
    script: Mutex<HashMap<SearchQuery, Scripted>>,
    calls: Mutex<Vec<SearchQuery>>,
}

#[cfg(test)]
impl MockProvider {
    /// Creates a provider with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `query` with `count` generated summaries and `total`.
    pub fn respond(self, query: SearchQuery, count: usize, total: Option<u32>) -> Self {
        self.respond_after(query, count, total, Duration::ZERO)
    }

    /// Like [`MockProvider::respond`], resolving only after `delay`.
    pub fn respond_after(
        self,
        query: SearchQuery,
        count: usize,
        total: Option<u32>,
        delay: Duration,
    ) -> Self {
        let items = movies(&query.term, count);
        self.script.lock().insert(
            query,
            Scripted {
                delay,
                outcome: Ok((items, total)),
            },
        );
        self
    }

    /// Fails `query` with `error`.
    pub fn fail(self, query: SearchQuery, error: SearchError) -> Self {
        self.fail_after(query, error, Duration::ZERO)
    }

    /// Like [`MockProvider::fail`], failing only after `delay`.
    pub fn fail_after(self, query: SearchQuery, error: SearchError, delay: Duration) -> Self {
        self.script.lock().insert(
            query,
            Scripted {
                delay,
                outcome: Err(error),
            },
        );
        self
    }

    /// Queries received so far, in call order.
    pub fn calls(&self) -> Vec<SearchQuery> {
        self.calls.lock().clone()
    }
}

/// Generates `count` distinct summaries for `term`.
#[cfg(test)]
pub fn movies(term: &str, count: usize) -> Vec<MovieSummary> {
    (1..=count)
        .map(|i| MovieSummary {
            title: format!("{term} {i}"),
            year: Some("2024".to_string()),
            imdb_id: format!("tt{i:07}"),
            kind: MediaKind::Movie,
            poster_url: None,
        })
        .collect()
}

#[cfg(test)]
#[async_trait]
impl MovieSearchProvider for MockProvider {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResult, SearchError> {
        self.calls.lock().push(query.clone());
        let scripted = self.script.lock().get(query).cloned();

        let Some(scripted) = scripted else {
            return Ok(SearchResult::empty(query.clone()));
        };

        if !scripted.delay.is_zero() {
            tokio::time::sleep(scripted.delay).await;
        }

        let (items, total_count) = scripted.outcome?;
        Ok(SearchResult {
            query: query.clone(),
            items,
            total_count,
            fetched_at: chrono::Utc::now(),
        })
    }
}
