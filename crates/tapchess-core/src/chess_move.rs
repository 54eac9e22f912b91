//! Moves: an origin, a destination, and whatever else the move drags along.

use std::fmt;
use std::str::FromStr;

use crate::castle_rights::CastleSide;
use crate::color::Color;
use crate::error::MoveParseError;
use crate::file::File;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A second piece relocation performed by the same move (the castling rook).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairedMove {
    pub from: Square,
    pub to: Square,
}

/// Data carried by a move beyond its origin and destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Auxiliary {
    #[default]
    None,
    /// The pawn arriving on `to` becomes this kind.
    Promotion(PieceKind),
    /// Another piece moves at the same time.
    Paired(PairedMove),
}

/// A move from one square to another.
///
/// Equality is structural and includes [`Auxiliary`]; use
/// [`Move::same_primary`] to compare origin and destination only.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub aux: Auxiliary,
}

impl Move {
    /// A plain move with no auxiliary data.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            aux: Auxiliary::None,
        }
    }

    /// A pawn move that promotes on arrival.
    #[inline]
    pub const fn promotion(from: Square, to: Square, kind: PieceKind) -> Move {
        Move {
            from,
            to,
            aux: Auxiliary::Promotion(kind),
        }
    }

    /// The castling move for `color` towards `side`: the king travels two
    /// files from e, and the rook jumps to the square the king crossed.
    pub fn castle(color: Color, side: CastleSide) -> Move {
        let rank = color.home_rank();
        let (king_to, rook_from, rook_to) = match side {
            CastleSide::KingSide => (File::FileG, File::FileH, File::FileF),
            CastleSide::QueenSide => (File::FileC, File::FileA, File::FileD),
        };
        Move {
            from: Square::new(File::FileE, rank),
            to: Square::new(king_to, rank),
            aux: Auxiliary::Paired(PairedMove {
                from: Square::new(rook_from, rank),
                to: Square::new(rook_to, rank),
            }),
        }
    }

    /// Return `true` if origin and destination match, whatever the auxiliary data.
    #[inline]
    pub fn same_primary(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to
    }

    /// The same origin and destination with the auxiliary data dropped.
    #[inline]
    pub const fn primary(self) -> Move {
        Move::new(self.from, self.to)
    }

    /// Return `true` for a degenerate move that goes nowhere.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.from == self.to
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        matches!(self.aux, Auxiliary::Paired(_))
    }

    #[inline]
    pub fn promotion_kind(&self) -> Option<PieceKind> {
        match self.aux {
            Auxiliary::Promotion(kind) => Some(kind),
            _ => None,
        }
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse a four-character square pair such as `"e2e4"`.
    fn from_str(code: &str) -> Result<Move, MoveParseError> {
        let err = || MoveParseError {
            code: code.to_string(),
        };
        if !code.is_ascii() || code.len() != 4 {
            return Err(err());
        }
        let from = Square::from_algebraic(&code[..2]).ok_or_else(err)?;
        let to = Square::from_algebraic(&code[2..]).ok_or_else(err)?;
        Ok(Move::new(from, to))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.aux {
            Auxiliary::None => write!(f, "Move({self})"),
            Auxiliary::Promotion(kind) => write!(f, "Move({self}={kind})"),
            Auxiliary::Paired(rook) => write!(f, "Move({self} with {}{})", rook.from, rook.to),
        }
    }
}
