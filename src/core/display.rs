//! Displayability oracle: distinguishes real glyphs from fallback rendering.

use unicode_width::UnicodeWidthChar;

/// Capability test for a single codepoint.
///
/// Hosts back this with their font cascade; the contract is "renders as a
/// real glyph in the active fonts", where emoji/fallback-font substitution
/// counts as not displayable.
pub trait DisplayabilityOracle {
    fn can_display(&self, codepoint: char) -> bool;
}

/// Host-independent approximation of the font-cascade test.
///
/// Rejects codepoints with no column width (controls, combining marks) and
/// codepoints the Unicode emoji data claims for itself, which on most
/// platforms only resolve through a color emoji font.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicDisplayability;

impl DisplayabilityOracle for HeuristicDisplayability {
    fn can_display(&self, codepoint: char) -> bool {
        match codepoint.width() {
            None | Some(0) => false,
            Some(_) => {
                let mut buf = [0u8; 4];
                emojis::get(codepoint.encode_utf8(&mut buf)).is_none()
            }
        }
    }
}

impl<F> DisplayabilityOracle for F
where
    F: Fn(char) -> bool,
{
    fn can_display(&self, codepoint: char) -> bool {
        self(codepoint)
    }
}
