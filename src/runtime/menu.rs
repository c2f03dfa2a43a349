//! Quick-jump section menu opened by long-pressing the sections control.

use crate::core::catalog::{block_count, SectionSelector, BLOCKS};
use crate::core::favorites::FavoritesStore;
use crate::core::glyphs::GlyphSetProvider;

/// Overlay state: closed, or open with one representative glyph per section.
/// While open the glyph keys and the sections control are inert; the host
/// dims them and routes taps back in as pointer events.
#[derive(Debug, Default)]
pub struct SectionMenu {
    entries: Option<Vec<String>>,
}

impl SectionMenu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.entries.is_some()
    }

    #[must_use]
    pub fn entries(&self) -> Option<&[String]> {
        self.entries.as_deref()
    }

    pub fn open(&mut self, entries: Vec<String>) {
        self.entries = Some(entries);
    }

    pub fn dismiss(&mut self) {
        self.entries = None;
    }

    /// Resolves a menu entry to its section and closes the menu. Entry 0 is
    /// Favorites; entry `k > 0` is `Block(k - 1)`.
    pub fn select(&mut self, index: usize) -> Option<SectionSelector> {
        if !self.is_open() {
            return None;
        }
        let selector = if index == 0 {
            SectionSelector::Favorites
        } else if index - 1 < block_count() {
            SectionSelector::Block(index - 1)
        } else {
            return None;
        };
        self.entries = None;
        Some(selector)
    }
}

/// One representative glyph per section, in menu order: the first favorite,
/// then the first glyph each block contributes (spliced codepoint and oracle
/// filter applied). A fully filtered block falls back to its raw range start
/// so every section keeps a menu entry.
#[must_use]
pub fn section_representatives(
    provider: &GlyphSetProvider,
    favorites: &FavoritesStore,
) -> Vec<String> {
    let mut entries = Vec::with_capacity(block_count() + 1);
    entries.push(favorites.get(0).unwrap_or_default().to_string());
    for block in &BLOCKS {
        let glyph = provider
            .block_glyphs(block)
            .into_iter()
            .next()
            .or_else(|| char::from_u32(block.first).map(|ch| ch.to_string()))
            .unwrap_or_default();
        entries.push(glyph);
    }
    entries
}
