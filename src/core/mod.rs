//! Domain leaves: catalog, displayability, favorites, glyph sets.

pub mod catalog;
pub mod display;
pub mod favorites;
pub mod glyphs;
