//! Search provider implementations.

use async_trait::async_trait;

use crate::errors::SearchError;
use crate::types::{SearchQuery, SearchResult};

pub mod development;
pub mod mock;
pub mod omdb;

pub use development::DevelopmentProvider;
#[cfg(test)]
pub use mock::MockProvider;
pub use omdb::OmdbProvider;

/// Backend able to answer one (term, page) query.
///
/// Implementations never see blank terms; [`crate::SearchService`] filters
/// those out before calling.
#[async_trait]
pub trait MovieSearchProvider: Send + Sync + std::fmt::Debug {
    /// Fetches a single page of results.
    ///
    /// # Errors
    /// - `SearchError::Network` - Transport failure
    /// - `SearchError::Status` - Non-success HTTP status
    /// - `SearchError::Parse` - Body is not a JSON document
    async fn search(&self, query: &SearchQuery) -> Result<SearchResult, SearchError>;
}
