use serde::{Deserialize, Serialize};

/// Favorites is a fixed-length list; anything else on disk is treated as absent.
pub const FAVORITES_LEN: usize = 30;

/// Factory default favorites. The final slot ships empty on purpose.
pub const DEFAULT_FAVORITES: [&str; FAVORITES_LEN] = [
    "☻", "★", "☆", "❛", "❜", "☥", "☩", "≠", "☐", "☒", "☜", "♱", "⚚", "♚", "☭", "∞", "‽", "✭",
    "☤", "⚘", "❀", "❃", "☙", "➢", "➠", "➳", "♟", "♞", "♝", "",
];

#[must_use]
pub fn default_favorites() -> Vec<String> {
    DEFAULT_FAVORITES.iter().map(|g| (*g).to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersistedPrefs {
    pub is_favorites: bool,
    pub block_number: usize,
    pub favorites: Vec<String>,
    pub scroll_offset: f32,
    pub dark_theme_enabled: bool,
}

impl Default for PersistedPrefs {
    fn default() -> Self {
        Self {
            is_favorites: true,
            block_number: 0,
            favorites: default_favorites(),
            scroll_offset: 0.0,
            dark_theme_enabled: false,
        }
    }
}

impl PersistedPrefs {
    /// Replaces a wrong-length favorites list wholesale with the factory
    /// default. No partial repair.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        if self.favorites.len() != FAVORITES_LEN {
            self.favorites = default_favorites();
        }
        self
    }
}
