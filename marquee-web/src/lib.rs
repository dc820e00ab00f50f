//! Marquee Web - HTMX search view and JSON API
//!
//! Server-rendered search page whose results fragment is refreshed by HTMX
//! as the user types, plus a JSON endpoint returning the same view state.

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]

pub mod components;
pub mod handlers;
pub mod pages;
pub mod server;

// Re-export main types
pub use server::{AppState, router, run_server};
