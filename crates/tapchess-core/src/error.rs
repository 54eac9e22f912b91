//! Error types for position setup and move-code parsing.
//!
//! Rejected moves are not errors: the validator answers `None` for them.

use crate::color::Color;

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// Fewer than the four leading fields (placement, side, castling, en passant).
    #[error("expected at least 4 FEN fields, found {found}")]
    MissingFields {
        /// Number of fields found.
        found: usize,
    },
    /// More than the six standard fields.
    #[error("expected at most 6 FEN fields, found {found}")]
    TooManyFields {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement does not describe exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank} describes {length} squares, expected 8")]
    BadRankLength {
        /// Rank number as printed on the board (1..=8).
        rank: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The side to move is not "w" or "b".
    #[error("invalid active color: \"{found}\"")]
    InvalidColor {
        /// The invalid field.
        found: String,
    },
    /// An unrecognized character in the castling field.
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
    /// The en passant field is neither "-" nor a square.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant {
        /// The invalid field.
        found: String,
    },
    /// A move counter is not a number.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter {
        /// "halfmove clock" or "fullmove number".
        field: &'static str,
        /// The invalid field.
        found: String,
    },
    /// The position parsed but is not a usable chess position.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying structural problem.
        #[from]
        source: BoardError,
    },
}

/// Structural problems with a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: usize,
    },
    /// Pawns stand on the first or eighth rank.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
    /// The side not to move is in check, so its king could be captured.
    #[error("{color} is in check but it is not {color}'s turn")]
    OpponentInCheck {
        /// The side that is in check.
        color: Color,
    },
}

/// A move code that is not four characters of file-rank-file-rank.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid move code \"{code}\": expected a square pair such as e2e4")]
pub struct MoveParseError {
    /// The rejected input.
    pub code: String,
}
