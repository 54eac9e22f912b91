//! Player colors.

use std::fmt;
use std::ops::Not;

use crate::geometry::Direction;
use crate::rank::Rank;

/// The side a piece belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Total number of colors.
    pub const COUNT: usize = 2;

    /// Both colors, white first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Return the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposing color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// The direction this side's pawns advance in.
    #[inline]
    pub const fn forward(self) -> Direction {
        match self {
            Color::White => Direction::North,
            Color::Black => Direction::South,
        }
    }

    /// The rank the king and rooks start on.
    #[inline]
    pub const fn home_rank(self) -> Rank {
        match self {
            Color::White => Rank::Rank1,
            Color::Black => Rank::Rank8,
        }
    }

    /// The rank pawns start on, from which a double push is allowed.
    #[inline]
    pub const fn pawn_rank(self) -> Rank {
        match self {
            Color::White => Rank::Rank2,
            Color::Black => Rank::Rank7,
        }
    }

    /// The far rank on which this side's pawns promote.
    #[inline]
    pub const fn promotion_rank(self) -> Rank {
        match self {
            Color::White => Rank::Rank8,
            Color::Black => Rank::Rank1,
        }
    }

    /// FEN letter for the side to move field.
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;
    use crate::geometry::Direction;
    use crate::rank::Rank;

    #[test]
    fn flip_and_not() {
        assert_eq!(Color::White.flip(), Color::Black);
        assert_eq!(!Color::Black, Color::White);
        assert_eq!(!!Color::White, Color::White);
    }

    #[test]
    fn pawn_geometry_per_side() {
        assert_eq!(Color::White.forward(), Direction::North);
        assert_eq!(Color::Black.forward(), Direction::South);
        assert_eq!(Color::White.pawn_rank(), Rank::Rank2);
        assert_eq!(Color::Black.pawn_rank(), Rank::Rank7);
        assert_eq!(Color::White.promotion_rank(), Rank::Rank8);
        assert_eq!(Color::Black.promotion_rank(), Rank::Rank1);
    }

    #[test]
    fn home_ranks() {
        assert_eq!(Color::White.home_rank(), Rank::Rank1);
        assert_eq!(Color::Black.home_rank(), Rank::Rank8);
    }

    #[test]
    fn display() {
        assert_eq!(Color::White.to_string(), "white");
        assert_eq!(Color::Black.fen_char(), 'b');
    }
}
