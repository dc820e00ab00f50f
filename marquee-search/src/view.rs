//! View model derived from [`ViewState`].
//!
//! Surfaces render a [`ViewModel`] rather than matching on states
//! themselves, so placeholder, overlay and pager rules live in one place.

use serde::Serialize;

use crate::messages::{Localizer, MessageKey};
use crate::pagination::PageWindow;
use crate::session::ViewState;
use crate::types::MovieSummary;

/// One grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Tile {
    /// Empty card shown while there is nothing to display
    Placeholder,
    /// A search hit
    Movie(MovieSummary),
}

/// Layer drawn over placeholder tiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Overlay {
    /// Fetch in flight
    Spinner,
    /// Informational text, e.g. no results
    Message(String),
}

/// Pager controls under a loaded grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagerView {
    /// Current page
    pub page: u32,
    /// Previous-page button label
    pub prev_label: String,
    /// Next-page button label
    pub next_label: String,
    /// "page 1 - entries 1 - 10 out of 57"; absent while the total is unknown
    pub text: Option<String>,
    /// Whether the previous button leads anywhere
    pub has_prev: bool,
    /// Whether the next button leads anywhere
    pub has_next: bool,
}

/// Everything a surface needs to draw the search view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    /// Placeholder text of the search field
    pub search_placeholder: String,
    /// Grid contents; empty in the error state
    pub tiles: Vec<Tile>,
    /// Overlay over placeholder tiles
    pub overlay: Option<Overlay>,
    /// Pager, only with loaded results
    pub pager: Option<PagerView>,
    /// Error text shown instead of the grid
    pub error: Option<String>,
}

impl ViewModel {
    /// Derives the view for `state`.
    ///
    /// Idle, loading and empty states show `placeholder_tiles` placeholders
    /// under an overlay; loaded states show the hits and a pager; errors show
    /// only the message.
    pub fn build(state: &ViewState, localizer: &dyn Localizer, placeholder_tiles: usize) -> Self {
        let placeholders = || vec![Tile::Placeholder; placeholder_tiles];
        let no_results = || Some(Overlay::Message(localizer.text(MessageKey::NoMoviesFound)));

        let (tiles, overlay, pager, error) = match state {
            ViewState::Idle | ViewState::Empty { .. } => (placeholders(), no_results(), None, None),
            ViewState::Loading { .. } => (placeholders(), Some(Overlay::Spinner), None, None),
            ViewState::Loaded { result, window } => (
                result.items.iter().cloned().map(Tile::Movie).collect(),
                None,
                Some(pager(window, localizer)),
                None,
            ),
            ViewState::Error { message, .. } => (Vec::new(), None, None, Some(message.clone())),
        };

        Self {
            search_placeholder: localizer.text(MessageKey::SearchForAMovie),
            tiles,
            overlay,
            pager,
            error,
        }
    }

    /// Plain-text rendering for terminals.
    pub fn render_text(&self) -> String {
        if let Some(error) = &self.error {
            return format!("{error}\n");
        }

        let mut out = String::new();
        let movies: Vec<&MovieSummary> = self
            .tiles
            .iter()
            .filter_map(|tile| match tile {
                Tile::Movie(movie) => Some(movie),
                Tile::Placeholder => None,
            })
            .collect();

        if movies.is_empty() {
            out.push_str(&"[ ] ".repeat(self.tiles.len()));
            out.push('\n');
        }

        for (i, movie) in movies.iter().enumerate() {
            let year = movie.year.as_deref().unwrap_or("????");
            out.push_str(&format!("{:>3}. {} ({year}) {}\n", i + 1, movie.title, movie.imdb_id));
        }

        match &self.overlay {
            Some(Overlay::Spinner) => out.push_str("    ...\n"),
            Some(Overlay::Message(message)) => out.push_str(&format!("    {message}\n")),
            None => {}
        }

        if let Some(pager) = &self.pager {
            let prev = if pager.has_prev { "<" } else { " " };
            let next = if pager.has_next { ">" } else { " " };
            out.push_str(&format!(
                "{prev} {} | {} | {} {next}\n",
                pager.prev_label,
                pager.text.as_deref().unwrap_or_default(),
                pager.next_label
            ));
        }

        out
    }
}

fn pager(window: &PageWindow, localizer: &dyn Localizer) -> PagerView {
    PagerView {
        page: window.page,
        prev_label: localizer.text(MessageKey::PrevPage),
        next_label: localizer.text(MessageKey::NextPage),
        text: pager_text(window, localizer),
        has_prev: window.has_prev(),
        has_next: window.has_next(),
    }
}

/// Localized "page P - entries S - E out of T", once the total is known.
pub fn pager_text(window: &PageWindow, localizer: &dyn Localizer) -> Option<String> {
    let (start, end) = window.range?;
    let total = window.total_count?;

    Some(format!(
        "{} {} - {} {start} - {end} {} {total}",
        localizer.text(MessageKey::Page),
        window.page,
        localizer.text(MessageKey::Entries),
        localizer.text(MessageKey::OutOf),
    ))
}
