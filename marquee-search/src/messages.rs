//! User-facing message lookup.
//!
//! Strings are addressed by [`MessageKey`] and resolved through a
//! [`Localizer`]. [`MessageCatalog`] ships English defaults and can be
//! overlaid with a flat JSON object of `"key": "text"` pairs.

use std::collections::HashMap;
use std::path::Path;

use marquee_core::MarqueeError;

/// Identifiers for every user-visible string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// Shown instead of results when a fetch fails
    ErrorFetchingData,
    /// Previous-page button label
    PrevPage,
    /// Next-page button label
    NextPage,
    /// "page" label in the pager text
    Page,
    /// "entries" label in the pager text
    Entries,
    /// "out of" label in the pager text
    OutOf,
    /// Overlay text when nothing matched
    NoMoviesFound,
    /// Search input placeholder
    SearchForAMovie,
}

impl MessageKey {
    /// Every key, in a stable order.
    pub const ALL: [MessageKey; 8] = [
        MessageKey::ErrorFetchingData,
        MessageKey::PrevPage,
        MessageKey::NextPage,
        MessageKey::Page,
        MessageKey::Entries,
        MessageKey::OutOf,
        MessageKey::NoMoviesFound,
        MessageKey::SearchForAMovie,
    ];

    /// String identifier used in locale files.
    pub fn id(self) -> &'static str {
        match self {
            MessageKey::ErrorFetchingData => "error_fetching_data",
            MessageKey::PrevPage => "prev_page",
            MessageKey::NextPage => "next_page",
            MessageKey::Page => "page",
            MessageKey::Entries => "entries",
            MessageKey::OutOf => "out_of",
            MessageKey::NoMoviesFound => "no_movies_found_change_the_search",
            MessageKey::SearchForAMovie => "search_for_a_movie",
        }
    }

    /// Looks a key up by its identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.id() == id)
    }

    fn english(self) -> &'static str {
        match self {
            MessageKey::ErrorFetchingData => "Error fetching data",
            MessageKey::PrevPage => "Previous",
            MessageKey::NextPage => "Next",
            MessageKey::Page => "page",
            MessageKey::Entries => "entries",
            MessageKey::OutOf => "out of",
            MessageKey::NoMoviesFound => "No movies found, change the search",
            MessageKey::SearchForAMovie => "Search for a movie",
        }
    }
}

/// Resolves message keys to display text.
pub trait Localizer: Send + Sync + std::fmt::Debug {
    /// Text for `key` in the active language.
    fn text(&self, key: MessageKey) -> String;
}

/// Message table with English fallbacks.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    overrides: HashMap<MessageKey, String>,
}

impl MessageCatalog {
    /// English-only catalog.
    pub fn english() -> Self {
        Self::default()
    }

    /// Builds a catalog from a JSON object of `"key": "text"` pairs.
    ///
    /// Unknown keys are ignored with a warning; missing keys fall back to
    /// English.
    ///
    /// # Errors
    ///
    /// - `MarqueeError::Configuration` - Input is not a JSON object of strings
    pub fn from_json(json: &str) -> Result<Self, MarqueeError> {
        let entries: HashMap<String, String> =
            serde_json::from_str(json).map_err(|e| MarqueeError::Configuration {
                reason: format!("invalid locale file: {e}"),
            })?;

        let mut overrides = HashMap::new();
        for (id, text) in entries {
            match MessageKey::from_id(&id) {
                Some(key) => {
                    overrides.insert(key, text);
                }
                None => tracing::warn!(key = %id, "Ignoring unknown message key"),
            }
        }

        Ok(Self { overrides })
    }

    /// Loads a catalog from a locale file on disk.
    ///
    /// # Errors
    ///
    /// - `MarqueeError::Io` - File could not be read
    /// - `MarqueeError::Configuration` - File is not a JSON object of strings
    pub fn from_file(path: &Path) -> Result<Self, MarqueeError> {
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&contents)?;
        tracing::debug!(
            path = %path.display(),
            overrides = catalog.overrides.len(),
            "Loaded locale file"
        );
        Ok(catalog)
    }
}

impl Localizer for MessageCatalog {
    fn text(&self, key: MessageKey) -> String {
        self.overrides
            .get(&key)
            .cloned()
            .unwrap_or_else(|| key.english().to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_english_defaults() {
        let catalog = MessageCatalog::english();
        assert_eq!(catalog.text(MessageKey::Page), "page");
        assert_eq!(catalog.text(MessageKey::OutOf), "out of");
        assert_eq!(
            catalog.text(MessageKey::NoMoviesFound),
            "No movies found, change the search"
        );
    }

    #[test]
    fn test_key_ids_round_trip() {
        for key in MessageKey::ALL {
            assert_eq!(MessageKey::from_id(key.id()), Some(key));
        }
        assert_eq!(MessageKey::from_id("unknown"), None);
    }

    #[test]
    fn test_overrides_with_fallback() {
        let catalog =
            MessageCatalog::from_json(r#"{"page": "sida", "out_of": "av", "bogus": "x"}"#)
                .unwrap();

        assert_eq!(catalog.text(MessageKey::Page), "sida");
        assert_eq!(catalog.text(MessageKey::OutOf), "av");
        assert_eq!(catalog.text(MessageKey::NextPage), "Next");
    }

    #[test]
    fn test_invalid_json_is_configuration_error() {
        let result = MessageCatalog::from_json(r#"["page"]"#);
        assert!(matches!(result, Err(MarqueeError::Configuration { .. })));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"error_fetching_data": "Fel vid hämtning"}}"#).unwrap();

        let catalog = MessageCatalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.text(MessageKey::ErrorFetchingData), "Fel vid hämtning");

        let missing = MessageCatalog::from_file(Path::new("/nonexistent/locale.json"));
        assert!(matches!(missing, Err(MarqueeError::Io(_))));
    }
}
