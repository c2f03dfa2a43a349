//! Glyph keyboard core.
//!
//! Invariant: all session state changes flow through
//! [`KeyboardSession::handle_event`]; hosts execute the returned effects in
//! order on the same event loop and feed timer fires back in as events.
//!
//! # Public API Overview
//! - Drive the keyboard with [`KeyboardSession`] and the [`Event`] /
//!   [`Effect`] vocabulary.
//! - Back persistence with any [`PrefsGateway`] (file-based and in-memory
//!   gateways ship in `prefs_store`).
//! - Supply displayability via [`DisplayabilityOracle`]; plain `Fn(char) ->
//!   bool` closures work for scripted oracles.

pub mod config;
pub mod logging;

pub mod core;
pub mod runtime;

/// Section catalog and selector.
pub use crate::core::catalog::{
    block_count, InsertedCodepoint, SectionSelector, UnicodeBlock, BLOCKS,
};

/// Displayability oracle trait and the built-in heuristic.
pub use crate::core::display::{DisplayabilityOracle, HeuristicDisplayability};

/// Favorites storage.
pub use crate::core::favorites::{is_single_glyph, FavoritesStore, IndexError, FAVORITES_LEN};

/// Glyph set derivation and grid sizing.
pub use crate::core::glyphs::{GlyphSetProvider, GRID_ROWS, MIN_COLUMNS};

/// Timing knobs.
pub use crate::config::TimingConfig;

/// Drag/reorder state machine surface.
pub use crate::runtime::drag::{DragSession, GridMetrics};

/// Event and effect vocabulary.
pub use crate::runtime::event::{Effect, Event, KeyIdentity, Point, TimerKind};

/// Section quick-jump menu state.
pub use crate::runtime::menu::{section_representatives, SectionMenu};

/// The session reducer.
pub use crate::runtime::session::{KeyboardSession, StatusLabel};

/// Persistence gateway types, re-exported from the store crate.
pub use prefs_store::{
    FilePrefsStore, MemoryPrefsStore, PersistedPrefs, PrefsGateway, PrefsStoreError,
};
