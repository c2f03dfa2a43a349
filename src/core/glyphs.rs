//! Derives the visible glyph set for the current section.

use crate::core::catalog::{SectionSelector, UnicodeBlock, BLOCKS};
use crate::core::display::DisplayabilityOracle;
use crate::core::favorites::FavoritesStore;

/// The grid always lays glyphs out in three rows.
pub const GRID_ROWS: usize = 3;
/// Minimum column count, also the fixed favorites grid width.
pub const MIN_COLUMNS: usize = 10;

pub struct GlyphSetProvider {
    oracle: Box<dyn DisplayabilityOracle>,
}

impl GlyphSetProvider {
    #[must_use]
    pub fn new(oracle: Box<dyn DisplayabilityOracle>) -> Self {
        Self { oracle }
    }

    /// Ordered glyphs for the selector. Favorites come back verbatim
    /// (order-significant, duplicates allowed); blocks iterate their range
    /// ascending with undisplayable codepoints silently dropped.
    #[must_use]
    pub fn current_glyphs(&self, selector: SectionSelector, favorites: &FavoritesStore) -> Vec<String> {
        match selector {
            SectionSelector::Favorites => favorites.to_vec(),
            SectionSelector::Block(index) => {
                let Some(block) = BLOCKS.get(index) else {
                    return Vec::new();
                };
                self.block_glyphs(block)
            }
        }
    }

    /// Glyphs contributed by one block. The spliced codepoint replaces its
    /// range position outright and skips the oracle, as the shipping table
    /// always has.
    #[must_use]
    pub fn block_glyphs(&self, block: &UnicodeBlock) -> Vec<String> {
        let mut glyphs = Vec::new();
        for codepoint in block.codepoints() {
            if let Some(inserted) = block.inserted {
                if inserted.at == codepoint {
                    glyphs.push(inserted.glyph.to_string());
                    continue;
                }
            }
            let Some(ch) = char::from_u32(codepoint) else {
                continue;
            };
            if self.oracle.can_display(ch) {
                glyphs.push(ch.to_string());
            }
        }
        glyphs
    }

    /// Cyclic successor: Favorites -> Block(0) -> ... -> Block(n-1) -> Favorites.
    #[must_use]
    pub fn advance(selector: SectionSelector) -> SectionSelector {
        match selector {
            SectionSelector::Favorites => SectionSelector::Block(0),
            SectionSelector::Block(index) if index + 1 < BLOCKS.len() => {
                SectionSelector::Block(index + 1)
            }
            SectionSelector::Block(_) => SectionSelector::Favorites,
        }
    }

    /// Columns for a three-row grid, never fewer than the favorites width.
    #[must_use]
    pub fn column_count(glyph_count: usize) -> usize {
        glyph_count.div_ceil(GRID_ROWS).max(MIN_COLUMNS)
    }

    /// Human-readable section name, shown on the status label.
    #[must_use]
    pub fn section_name(selector: SectionSelector) -> &'static str {
        match selector {
            SectionSelector::Favorites => "Favorites",
            SectionSelector::Block(index) => BLOCKS.get(index).map_or("", |block| block.name),
        }
    }
}
