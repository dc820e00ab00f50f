//! Reusable HTML components for the HTMX + Tailwind UI
//!
//! Components are server-rendered HTML fragments shared by the full page and
//! the HTMX results endpoint. All styling uses Tailwind CSS.

pub mod layout;
pub mod movie;

// Re-export main component functions
pub use layout::{card, page_header, search_input};
pub use movie::{loading_panel, movie_tile, overlay, pager, placeholder_tile, results_panel};

/// `hx-sync` shared by every element that swaps `#results`, so a newer
/// request from any of them replaces an older one still in flight.
pub const RESULTS_SYNC: &str = "#results:replace";

/// Element revealed while a results request is in flight.
pub const LOADING_INDICATOR: &str = "#loading";

/// Escapes text for use in HTML bodies and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
