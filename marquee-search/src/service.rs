//! Caching search service.
//!
//! Sits between callers and a [`MovieSearchProvider`]: blank terms are
//! answered locally, concurrent callers for the same query key share one
//! fetch and successful results are remembered per query key for the
//! lifetime of the service.

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use marquee_core::{MarqueeError, SearchConfig};
use parking_lot::Mutex;
use tokio::sync::broadcast;

use crate::errors::SearchError;
use crate::providers::{DevelopmentProvider, MovieSearchProvider, OmdbProvider};
use crate::types::{SearchQuery, SearchResult};

/// Search entry point shared by the session actor and the web handlers.
#[derive(Debug)]
pub struct SearchService {
    provider: Arc<dyn MovieSearchProvider>,
    cache: Mutex<CacheState>,
}

type FetchOutcome = Result<SearchResult, SearchError>;

/// Settled results plus fetches still in flight, under one lock.
#[derive(Debug)]
struct CacheState {
    settled: LruCache<SearchQuery, SearchResult>,
    in_flight: HashMap<SearchQuery, broadcast::Sender<FetchOutcome>>,
}

/// What a caller does after consulting the cache.
enum Lookup {
    Hit(SearchResult),
    Join(broadcast::Receiver<FetchOutcome>),
    Lead(broadcast::Sender<FetchOutcome>),
}

/// Clears the in-flight entry if the leading fetch is dropped before it settles.
struct InFlightGuard<'a> {
    cache: &'a Mutex<CacheState>,
    query: &'a SearchQuery,
    armed: bool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.cache.lock().in_flight.remove(self.query);
        }
    }
}

impl SearchService {
    /// Creates a service over `provider` remembering up to `capacity` query keys.
    pub fn new(provider: Arc<dyn MovieSearchProvider>, capacity: NonZeroUsize) -> Self {
        Self {
            provider,
            cache: Mutex::new(CacheState {
                settled: LruCache::new(capacity),
                in_flight: HashMap::new(),
            }),
        }
    }

    /// Builds the service described by `config`.
    ///
    /// Uses the development catalog when enabled, OMDb otherwise.
    ///
    /// # Errors
    ///
    /// - `MarqueeError::Configuration` - Zero cache capacity or invalid OMDb settings
    pub fn from_config(config: &SearchConfig) -> Result<Self, MarqueeError> {
        let capacity =
            NonZeroUsize::new(config.cache_capacity).ok_or_else(|| MarqueeError::Configuration {
                reason: "cache capacity must be at least 1".to_string(),
            })?;

        let provider: Arc<dyn MovieSearchProvider> = if config.development_catalog {
            tracing::info!("Using development catalog for searches");
            Arc::new(DevelopmentProvider::with_latency(
                std::time::Duration::from_millis(300),
            ))
        } else {
            Arc::new(OmdbProvider::from_config(config)?)
        };

        Ok(Self::new(provider, capacity))
    }

    /// Runs `query`, short-circuiting blank terms and serving repeats from cache.
    ///
    /// A caller arriving while the same query is already being fetched waits
    /// for that fetch instead of issuing its own. Failures are returned as-is
    /// and never cached.
    ///
    /// # Errors
    /// - `SearchError::Network` - Transport failure
    /// - `SearchError::Status` - Non-success HTTP status
    /// - `SearchError::Parse` - Body is not a JSON document
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResult, SearchError> {
        if query.is_blank() {
            tracing::trace!("Skipping fetch for blank term");
            return Ok(SearchResult::empty(query.clone()));
        }

        match self.lookup(query) {
            Lookup::Hit(hit) => {
                tracing::debug!(query = %query, "Search cache hit");
                Ok(hit)
            }
            Lookup::Join(mut receiver) => {
                tracing::debug!(query = %query, "Joining in-flight search");
                match receiver.recv().await {
                    Ok(outcome) => outcome,
                    // Leading fetch was dropped before settling
                    Err(_) => self.fetch(query).await,
                }
            }
            Lookup::Lead(sender) => {
                let mut guard = InFlightGuard {
                    cache: &self.cache,
                    query,
                    armed: true,
                };
                let outcome = self.fetch(query).await;

                {
                    let mut cache = self.cache.lock();
                    cache.in_flight.remove(query);
                    if let Ok(result) = &outcome {
                        cache.settled.put(query.clone(), result.clone());
                    }
                }
                guard.armed = false;

                // No receivers is fine: nobody joined
                let _ = sender.send(outcome.clone());
                outcome
            }
        }
    }

    fn lookup(&self, query: &SearchQuery) -> Lookup {
        let mut cache = self.cache.lock();

        if let Some(hit) = cache.settled.get(query) {
            return Lookup::Hit(hit.clone());
        }
        if let Some(sender) = cache.in_flight.get(query) {
            return Lookup::Join(sender.subscribe());
        }

        let (sender, _) = broadcast::channel(1);
        cache.in_flight.insert(query.clone(), sender.clone());
        Lookup::Lead(sender)
    }

    async fn fetch(&self, query: &SearchQuery) -> FetchOutcome {
        let result = self.provider.search(query).await.inspect_err(|e| {
            tracing::warn!(query = %query, "Search failed: {e}");
        })?;

        tracing::debug!(
            query = %query,
            items = result.items.len(),
            total = ?result.total_count,
            "Search completed"
        );

        Ok(result)
    }

    /// Cached result for `query`, if any.
    pub fn cached(&self, query: &SearchQuery) -> Option<SearchResult> {
        self.cache.lock().settled.get(query).cloned()
    }

    /// Number of cached query keys.
    pub fn cache_len(&self) -> usize {
        self.cache.lock().settled.len()
    }

    /// Drops every cached result.
    pub fn clear_cache(&self) {
        self.cache.lock().settled.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockProvider;

    fn service(provider: MockProvider, capacity: usize) -> (SearchService, Arc<MockProvider>) {
        let provider = Arc::new(provider);
        let capacity = NonZeroUsize::new(capacity).unwrap();
        (SearchService::new(provider.clone(), capacity), provider)
    }

    #[tokio::test]
    async fn test_blank_term_skips_provider() {
        let (service, provider) = service(MockProvider::new(), 4);

        let result = service.search(&SearchQuery::new("   ", 1)).await.unwrap();

        assert!(result.is_empty());
        assert_eq!(result.total_count, None);
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_repeated_query_hits_cache() {
        let query = SearchQuery::new("batman", 1);
        let (service, provider) =
            service(MockProvider::new().respond(query.clone(), 10, Some(57)), 4);

        let first = service.search(&query).await.unwrap();
        let second = service.search(&SearchQuery::new(" batman ", 1)).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(provider.calls().len(), 1);
        assert_eq!(service.cache_len(), 1);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let query = SearchQuery::new("batman", 1);
        let error = SearchError::Network {
            reason: "connection refused".to_string(),
        };
        let (service, provider) = service(MockProvider::new().fail(query.clone(), error.clone()), 4);

        assert_eq!(service.search(&query).await, Err(error.clone()));
        assert_eq!(service.search(&query).await, Err(error));
        assert_eq!(provider.calls().len(), 2);
        assert_eq!(service.cache_len(), 0);
    }

    #[tokio::test]
    async fn test_cache_evicts_least_recent() {
        let (service, provider) = service(MockProvider::new(), 2);

        for term in ["a", "b", "c"] {
            service.search(&SearchQuery::new(term, 1)).await.unwrap();
        }
        service.search(&SearchQuery::new("a", 1)).await.unwrap();

        assert_eq!(provider.calls().len(), 4);
        assert_eq!(service.cache_len(), 2);
        assert!(service.cached(&SearchQuery::new("b", 1)).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_identical_queries_share_one_fetch() {
        let query = SearchQuery::new("batman", 2);
        let provider = MockProvider::new().respond_after(
            query.clone(),
            10,
            Some(57),
            std::time::Duration::from_millis(500),
        );
        let (service, provider) = service(provider, 4);

        let (first, second) = tokio::join!(service.search(&query), service.search(&query));

        assert_eq!(first.unwrap(), second.unwrap());
        assert_eq!(provider.calls(), vec![query]);
        assert_eq!(service.cache_len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_failure_reaches_every_caller() {
        let query = SearchQuery::new("batman", 1);
        let error = SearchError::Status { status: 503 };
        let provider = MockProvider::new().fail_after(
            query.clone(),
            error.clone(),
            std::time::Duration::from_millis(500),
        );
        let (service, provider) = service(provider, 4);

        let (first, second) = tokio::join!(service.search(&query), service.search(&query));

        assert_eq!(first, Err(error.clone()));
        assert_eq!(second, Err(error));
        assert_eq!(provider.calls().len(), 1);
        assert_eq!(service.cache_len(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_leader_does_not_block_later_callers() {
        let query = SearchQuery::new("batman", 1);
        let provider = MockProvider::new().respond_after(
            query.clone(),
            10,
            Some(57),
            std::time::Duration::from_millis(500),
        );
        let (service, provider) = service(provider, 4);

        let abandoned = tokio::time::timeout(
            std::time::Duration::from_millis(100),
            service.search(&query),
        )
        .await;
        assert!(abandoned.is_err());

        let result = service.search(&query).await.unwrap();
        assert_eq!(result.items.len(), 10);
        assert_eq!(provider.calls().len(), 2);
    }

    #[test]
    fn test_from_config_rejects_zero_capacity() {
        let config = SearchConfig {
            cache_capacity: 0,
            development_catalog: true,
            ..SearchConfig::default()
        };
        assert!(SearchService::from_config(&config).is_err());
    }
}
