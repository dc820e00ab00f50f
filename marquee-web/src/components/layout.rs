//! Layout components - headers, cards, search field

use super::{LOADING_INDICATOR, RESULTS_SYNC, escape_html};

/// Renders a page header with title and optional subtitle.
pub fn page_header(title: &str, subtitle: Option<&str>) -> String {
    let subtitle_html = subtitle
        .map(|s| format!(r#"<p class="text-gray-400 mt-2">{s}</p>"#))
        .unwrap_or_default();

    format!(
        r#"<div class="mb-8">
            <h1 class="text-3xl font-bold text-white">{title}</h1>
            {subtitle_html}
        </div>"#
    )
}

/// Renders a card container with optional header.
pub fn card(title: Option<&str>, content: &str) -> String {
    let header_html = title
        .map(|t| format!(r#"<h3 class="text-lg font-semibold text-white mb-6">{t}</h3>"#))
        .unwrap_or_default();

    format!(
        r#"<div class="bg-gray-800 border border-gray-700 rounded-lg p-6 mb-6">
            {header_html}
            {content}
        </div>"#
    )
}

/// Renders the search field.
///
/// Typing issues `GET /search` once the field has been quiet for
/// `debounce_ms`. It shares [`RESULTS_SYNC`] with the pager, so whichever
/// request was issued last is the one that updates `#results`.
pub fn search_input(placeholder: &str, value: &str, debounce_ms: u128) -> String {
    let placeholder = escape_html(placeholder);
    let value = escape_html(value);

    format!(
        r##"<input type="search" name="term" value="{value}" placeholder="{placeholder}" autocomplete="off"
                  class="w-full px-4 py-2 bg-gray-700 border border-gray-600 rounded-lg text-white placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-marquee-500 focus:border-transparent"
                  hx-get="/search"
                  hx-trigger="input changed delay:{debounce_ms}ms, search"
                  hx-target="#results"
                  hx-sync="{RESULTS_SYNC}"
                  hx-indicator="{LOADING_INDICATOR}" />"##
    )
}
