//! Movie grid components - tiles, overlay, pager

use marquee_search::{MovieSummary, Overlay, PagerView, Tile, ViewModel};

use super::{LOADING_INDICATOR, RESULTS_SYNC, escape_html};

/// Renders one search hit as a poster card.
pub fn movie_tile(movie: &MovieSummary) -> String {
    let title = escape_html(&movie.title);
    let year = movie.year.as_deref().map(escape_html).unwrap_or_default();

    let poster_html = match movie.poster_url.as_deref() {
        Some(url) => format!(
            r#"<img src="{}" alt="{title}" loading="lazy" class="w-full h-64 object-cover rounded-t-lg">"#,
            escape_html(url)
        ),
        None => r#"<div class="w-full h-64 bg-gray-700 rounded-t-lg flex items-center justify-center text-4xl">🎬</div>"#
            .to_string(),
    };

    format!(
        r#"<div class="movie-tile bg-gray-800 border border-gray-700 rounded-lg" data-imdb-id="{}">
            {poster_html}
            <div class="p-3">
                <div class="font-medium text-white truncate" title="{title}">{title}</div>
                <div class="text-sm text-gray-400">{year}</div>
            </div>
        </div>"#,
        escape_html(&movie.imdb_id)
    )
}

/// Renders an empty card keeping the grid shape.
pub fn placeholder_tile() -> String {
    r#"<div class="placeholder-tile bg-gray-800 border border-gray-700 rounded-lg h-80 animate-pulse"></div>"#
        .to_string()
}

/// Renders the layer drawn over placeholder tiles.
pub fn overlay(overlay: &Overlay) -> String {
    let inner = match overlay {
        Overlay::Spinner => {
            r#"<div class="spinner w-10 h-10 border-4 border-gray-600 border-t-marquee-500 rounded-full animate-spin"></div>"#
                .to_string()
        }
        Overlay::Message(message) => format!(
            r#"<p class="overlay-message text-lg text-gray-300">{}</p>"#,
            escape_html(message)
        ),
    };

    format!(r#"<div class="absolute inset-0 flex items-center justify-center">{inner}</div>"#)
}

/// Renders the pager; buttons re-request the fragment for the adjacent page.
pub fn pager(pager: &PagerView, term: &str) -> String {
    let term = urlencoding::encode(term);
    let button = |label: &str, enabled: bool, page: u32| {
        let label = escape_html(label);
        if enabled {
            format!(
                r##"<button class="px-4 py-2 rounded-lg bg-gray-700 hover:bg-gray-600 text-white"
                        hx-get="/search?term={term}&amp;page={page}" hx-target="#results" hx-sync="{RESULTS_SYNC}" hx-indicator="{LOADING_INDICATOR}">{label}</button>"##
            )
        } else {
            format!(
                r#"<button class="px-4 py-2 rounded-lg bg-gray-800 text-gray-500 cursor-not-allowed" disabled>{label}</button>"#
            )
        }
    };

    let text_html = pager
        .text
        .as_deref()
        .map(|t| format!(r#"<span class="pager-text text-gray-400">{}</span>"#, escape_html(t)))
        .unwrap_or_default();

    format!(
        r#"<div class="pager flex items-center justify-between mt-6">
            {}
            {text_html}
            {}
        </div>"#,
        button(&pager.prev_label, pager.has_prev, pager.page.saturating_sub(1)),
        button(&pager.next_label, pager.has_next, pager.page.saturating_add(1)),
    )
}

/// Renders the hidden `#loading` panel shown in place of `#results` while a
/// request is in flight; `view` is the loading view model.
pub fn loading_panel(view: &ViewModel) -> String {
    format!(r#"<div id="loading">{}</div>"#, results_panel(view, ""))
}

/// Renders the contents of `#results` for a view model.
pub fn results_panel(view: &ViewModel, term: &str) -> String {
    if let Some(error) = &view.error {
        return format!(
            r#"<div class="search-error text-center py-12 text-red-400">{}</div>"#,
            escape_html(error)
        );
    }

    let tiles: String = view
        .tiles
        .iter()
        .map(|tile| match tile {
            Tile::Placeholder => placeholder_tile(),
            Tile::Movie(movie) => movie_tile(movie),
        })
        .collect();

    let overlay_html = view.overlay.as_ref().map(overlay).unwrap_or_default();
    let pager_html = view
        .pager
        .as_ref()
        .map(|p| pager(p, term))
        .unwrap_or_default();

    format!(
        r#"<div class="relative">
            <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-5 gap-6">{tiles}</div>
            {overlay_html}
        </div>
        {pager_html}"#
    )
}
