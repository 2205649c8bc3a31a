use std::ops::RangeInclusive;

// Character-set constants
pub(crate) const ALPHABET_SIZE: usize = 26;
pub(crate) const UPPERCASE_ALPHABET: RangeInclusive<u8> = b'A'..=b'Z';
pub(crate) const LETTERS: &[u8; ALPHABET_SIZE] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Glyph written into unused cells in dots mode.
pub const PLACEHOLDER: u8 = b'.';

pub(crate) trait GridLetter {
    /// Letters that may appear in a normalized word (A-Z only).
    fn is_grid_letter(&self) -> bool;
    /// What a finished grid may hold: a grid letter or the placeholder.
    fn is_fill_glyph(&self) -> bool;
}

impl GridLetter for u8 {
    fn is_grid_letter(&self) -> bool {
        UPPERCASE_ALPHABET.contains(self)
    }
    fn is_fill_glyph(&self) -> bool {
        self.is_grid_letter() || *self == PLACEHOLDER
    }
}

impl GridLetter for char {
    fn is_grid_letter(&self) -> bool {
        u8::try_from(*self).is_ok_and(|b| b.is_grid_letter())
    }
    fn is_fill_glyph(&self) -> bool {
        self.is_grid_letter() || *self == PLACEHOLDER as char
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_grid_letter() {
        assert!(b'A'.is_grid_letter());
        assert!(b'Z'.is_grid_letter());
        assert!('M'.is_grid_letter());
    }

    #[test]
    fn test_is_not_grid_letter() {
        assert!(!b'a'.is_grid_letter()); // lowercase
        assert!(!b'1'.is_grid_letter());
        assert!(!b'.'.is_grid_letter());
        assert!(!'É'.is_grid_letter());
    }

    #[test]
    fn test_fill_glyphs() {
        for c in UPPERCASE_ALPHABET {
            assert!(c.is_fill_glyph());
        }
        assert!(PLACEHOLDER.is_fill_glyph());
        assert!(!b' '.is_fill_glyph());
        assert!(!0u8.is_fill_glyph());
    }

    #[test]
    fn test_alphabet_constants() {
        assert_eq!(ALPHABET_SIZE, 26);
        assert_eq!(LETTERS.len(), 26);
        assert!(LETTERS.iter().copied().eq(UPPERCASE_ALPHABET));
    }
}
