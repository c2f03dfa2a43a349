//! Static Unicode block catalog and the section selector.

use prefs_store::PersistedPrefs;

/// A codepoint spliced into a block's iteration in place of one of its range
/// positions. The Mathematical Operators block reserves its first position
/// (one below the block's true start) for "±"; keeping this explicit avoids
/// depending on the range arithmetic lining up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertedCodepoint {
    pub at: u32,
    pub glyph: char,
}

/// Named inclusive codepoint range, fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnicodeBlock {
    pub name: &'static str,
    pub first: u32,
    pub last: u32,
    pub inserted: Option<InsertedCodepoint>,
}

impl UnicodeBlock {
    #[must_use]
    pub fn codepoints(&self) -> std::ops::RangeInclusive<u32> {
        self.first..=self.last
    }
}

pub const BLOCKS: [UnicodeBlock; 7] = [
    UnicodeBlock {
        name: "Letterlike Symbols",
        first: 0x2100,
        last: 0x214f,
        inserted: None,
    },
    UnicodeBlock {
        name: "Mathematical Operators",
        // Starts one below the block proper; that slot carries the splice.
        first: 0x21ff,
        last: 0x22ff,
        inserted: Some(InsertedCodepoint {
            at: 0x21ff,
            glyph: '±',
        }),
    },
    UnicodeBlock {
        name: "Miscellaneous Technical",
        first: 0x2300,
        last: 0x243f,
        inserted: None,
    },
    UnicodeBlock {
        name: "Geometric Shapes",
        first: 0x2500,
        last: 0x25ff,
        inserted: None,
    },
    UnicodeBlock {
        name: "Miscellaneous Symbols",
        first: 0x2600,
        last: 0x26ff,
        inserted: None,
    },
    UnicodeBlock {
        name: "Dingbats",
        first: 0x2700,
        last: 0x27bf,
        inserted: None,
    },
    UnicodeBlock {
        name: "Arrows",
        first: 0x2190,
        last: 0x21ff,
        inserted: None,
    },
];

#[must_use]
pub fn block_count() -> usize {
    BLOCKS.len()
}

/// Which section the keyboard currently shows. Exactly one is current at a
/// time; `Block` indexes into [`BLOCKS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionSelector {
    Favorites,
    Block(usize),
}

impl SectionSelector {
    /// Reconstructs the selector from the persisted flag/number pair. An
    /// out-of-range block number falls back to the first block rather than
    /// propagating a bad index into the catalog.
    #[must_use]
    pub fn from_persisted(prefs: &PersistedPrefs) -> Self {
        if prefs.is_favorites {
            Self::Favorites
        } else if prefs.block_number < BLOCKS.len() {
            Self::Block(prefs.block_number)
        } else {
            Self::Block(0)
        }
    }

    /// The persisted `(is_favorites, block_number)` pair for this selector.
    /// Favorites keeps block number zero, matching first-run defaults.
    #[must_use]
    pub fn to_persisted(self) -> (bool, usize) {
        match self {
            Self::Favorites => (true, 0),
            Self::Block(index) => (false, index),
        }
    }

    #[must_use]
    pub fn is_favorites(self) -> bool {
        matches!(self, Self::Favorites)
    }
}
