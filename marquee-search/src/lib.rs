//! Marquee Search - Debounced movie search
//!
//! Turns raw keystrokes into debounced queries against an OMDb-compatible
//! search API, caches results per query key, derives pagination and exposes
//! the resulting view state through a session actor.

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]

pub mod debounce;
pub mod errors;
pub mod messages;
pub mod pagination;
pub mod providers;
pub mod service;
pub mod session;
pub mod types;
pub mod view;

// Re-export main types
pub use debounce::Debouncer;
pub use errors::SearchError;
pub use messages::{Localizer, MessageCatalog, MessageKey};
pub use pagination::{PAGE_SIZE, PageWindow};
pub use providers::{DevelopmentProvider, MovieSearchProvider, OmdbProvider};
pub use service::SearchService;
pub use session::{SessionError, SessionHandle, ViewState, spawn_search_session};
pub use types::{MediaKind, MovieSummary, SearchQuery, SearchResult};
pub use view::{Overlay, PagerView, Tile, ViewModel};

/// Convenience type alias for Results with SearchError.
pub type Result<T> = std::result::Result<T, SearchError>;
