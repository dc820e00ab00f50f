//! Error types for movie search.

use thiserror::Error;

/// Errors that can occur while fetching search results.
///
/// None of these are retried; the session turns any of them into the
/// localized `error_fetching_data` message and waits for new input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// Transport failure: connection refused, timeout, TLS, etc.
    #[error("Network error: {reason}")]
    Network {
        /// The reason for the network error
        reason: String,
    },

    /// The search endpoint answered with a non-success status.
    #[error("Search endpoint returned HTTP {status}")]
    Status {
        /// HTTP status code of the response
        status: u16,
    },

    /// The response body was not JSON at all.
    #[error("Parse error: {reason}")]
    Parse {
        /// The reason for the parse error
        reason: String,
    },
}

impl From<reqwest::Error> for SearchError {
    fn from(error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            SearchError::Status {
                status: status.as_u16(),
            }
        } else if error.is_decode() {
            SearchError::Parse {
                reason: error.to_string(),
            }
        } else {
            SearchError::Network {
                reason: error.to_string(),
            }
        }
    }
}
