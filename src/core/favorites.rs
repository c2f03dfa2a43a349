//! Fixed-length ordered favorites list.

use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

pub use prefs_store::FAVORITES_LEN;
use prefs_store::{default_favorites, DEFAULT_FAVORITES};

/// A favorites index outside `0..30`. Callers are expected to clamp before
/// touching the store; reaching this is a contract violation, not a
/// user-recoverable condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("favorites index {0} out of range 0..{FAVORITES_LEN}")]
pub struct IndexError(pub usize);

/// Owner of the favorites sequence. Always exactly [`FAVORITES_LEN`] slots;
/// no operation changes the length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoritesStore {
    slots: Vec<String>,
}

impl Default for FavoritesStore {
    fn default() -> Self {
        Self {
            slots: default_favorites(),
        }
    }
}

impl FavoritesStore {
    /// Builds a store from persisted entries. Returns `None` when the list
    /// is not usable as-is (wrong length, or an entry that isn't a single
    /// glyph); callers fall back to the factory default wholesale.
    #[must_use]
    pub fn from_persisted(entries: Vec<String>) -> Option<Self> {
        if entries.len() != FAVORITES_LEN {
            return None;
        }
        if !entries.iter().all(|entry| is_single_glyph(entry)) {
            return None;
        }
        Some(Self { slots: entries })
    }

    pub fn get(&self, index: usize) -> Result<&str, IndexError> {
        self.slots
            .get(index)
            .map(String::as_str)
            .ok_or(IndexError(index))
    }

    pub fn set(&mut self, index: usize, glyph: impl Into<String>) -> Result<(), IndexError> {
        let slot = self.slots.get_mut(index).ok_or(IndexError(index))?;
        *slot = glyph.into();
        Ok(())
    }

    /// Atomically removes the entry at `from` and reinserts it at `to`,
    /// shifting the entries in between. Length is preserved.
    pub fn remove_and_reinsert(&mut self, from: usize, to: usize) -> Result<(), IndexError> {
        if from >= FAVORITES_LEN {
            return Err(IndexError(from));
        }
        if to >= FAVORITES_LEN {
            return Err(IndexError(to));
        }
        let glyph = self.slots.remove(from);
        self.slots.insert(to, glyph);
        Ok(())
    }

    /// The factory default glyph for a slot.
    pub fn default_for(index: usize) -> Result<&'static str, IndexError> {
        DEFAULT_FAVORITES.get(index).copied().ok_or(IndexError(index))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.slots
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.slots.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        FAVORITES_LEN
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// True when `text` is empty or one grapheme cluster. The factory default
/// list legitimately contains an empty slot.
#[must_use]
pub fn is_single_glyph(text: &str) -> bool {
    let mut graphemes = text.graphemes(true);
    graphemes.next();
    graphemes.next().is_none()
}
