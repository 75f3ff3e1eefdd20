//! 8×8 glyph lookup
//!
//! Glyphs follow the `font8x8` convention: eight bytes, one per row from top
//! to bottom, least significant bit = leftmost pixel.

use font8x8::{BASIC_FONTS, UnicodeFonts};

/// Width and height of a glyph cell in pixels
pub const GLYPH_SIZE: u16 = 8;

/// The blank glyph used for characters a font does not cover
pub const BLANK_GLYPH: [u8; 8] = [0; 8];

/// Source of 8×8 glyphs
///
/// Lookup is total: characters without a glyph must map to a fallback
/// (usually [`BLANK_GLYPH`]).
pub trait Font {
    /// Glyph rows for `c`, top row first, bit 0 = leftmost column
    fn glyph(&self, c: char) -> [u8; 8];
}

/// Printable ASCII from `font8x8`, blank for everything else
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BasicFont;

impl Font for BasicFont {
    fn glyph(&self, c: char) -> [u8; 8] {
        BASIC_FONTS.get(c).unwrap_or(BLANK_GLYPH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_is_blank() {
        assert_eq!(BasicFont.glyph(' '), BLANK_GLYPH);
    }

    #[test]
    fn test_digits_have_ink() {
        for c in '0'..='9' {
            assert!(BasicFont.glyph(c).iter().any(|row| *row != 0), "{c}");
        }
        assert!(BasicFont.glyph('-').iter().any(|row| *row != 0));
        assert!(BasicFont.glyph('.').iter().any(|row| *row != 0));
    }

    #[test]
    fn test_unsupported_falls_back_to_blank() {
        assert_eq!(BasicFont.glyph('\u{1F980}'), BLANK_GLYPH);
    }
}
