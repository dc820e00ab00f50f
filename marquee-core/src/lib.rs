//! Marquee Core - Shared configuration and process setup
//!
//! Holds the pieces every Marquee crate needs regardless of surface:
//! centralized configuration, tracing initialization and the top-level
//! error type used during startup.

#![warn(missing_docs)]

pub mod config;
pub mod tracing_setup;

pub use config::{MarqueeConfig, SearchConfig, SessionConfig, WebConfig};

/// Errors raised while assembling a Marquee process.
///
/// Search and session failures have their own types in `marquee-search`;
/// this covers what can go wrong before a search is ever issued.
#[derive(Debug, thiserror::Error)]
pub enum MarqueeError {
    /// A setting is missing or invalid.
    #[error("Configuration error: {reason}")]
    Configuration {
        /// What is wrong with the setting
        reason: String,
    },

    /// Reading a file or binding a socket failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MarqueeError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            MarqueeError::Configuration { reason } => format!("Invalid configuration: {reason}"),
            MarqueeError::Io(_) => "File system error occurred".to_string(),
        }
    }
}

/// Convenience type alias for Results with MarqueeError.
pub type Result<T> = std::result::Result<T, MarqueeError>;
