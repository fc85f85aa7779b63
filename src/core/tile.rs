//! Grid tile markers
//!
//! Each letter cell of the share grid is one of three tiles. The start row
//! uses `Blocked` filler because its non-matches carry no feedback; every
//! later row uses `Unguessed` filler.

use std::fmt;

/// One cell of the share grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    /// Letter matches the target at this position
    Matched,
    /// Guessed letter that does not match the target
    Unguessed,
    /// Start-row filler; the start row shows no partial matches
    Blocked,
}

impl Tile {
    /// The emoji glyph for this tile
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Matched => '🟩',
            Self::Unguessed => '⬜',
            Self::Blocked => '⬛',
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_symbols() {
        assert_eq!(Tile::Matched.symbol(), '🟩');
        assert_eq!(Tile::Unguessed.symbol(), '⬜');
        assert_eq!(Tile::Blocked.symbol(), '⬛');
    }

    #[test]
    fn tile_display() {
        assert_eq!(format!("{}", Tile::Matched), "🟩");
    }
}
