//! The chess position: what stands where, whose turn it is, and who may still castle.

use std::fmt;

use crate::castle_rights::CastleRights;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::BoardError;
use crate::file::File;
use crate::movegen::is_square_attacked;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

/// An immutable-by-convention snapshot of a position.
///
/// `Board` is `Copy`; every rule query works on its own copy, and moves
/// produce a new board through [`Board::make_move`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Occupant of each square, indexed by [`Square::index`].
    squares: [Option<Piece>; Square::COUNT],
    /// Which side moves next.
    side_to_move: Color,
    /// Remaining castling permissions.
    castling: CastleRights,
    /// The move that produced this position, for display only.
    last_move: Option<Move>,
}

impl Board {
    /// A board with no pieces, White to move and no castling rights.
    pub const fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
            side_to_move: Color::White,
            castling: CastleRights::NONE,
            last_move: None,
        }
    }

    /// The standard starting position.
    pub fn starting_position() -> Board {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::empty();
        for (file, kind) in File::ALL.into_iter().zip(BACK_RANK) {
            for color in Color::ALL {
                board.set_piece(Square::new(file, color.home_rank()), Some(Piece::new(color, kind)));
                board.set_piece(
                    Square::new(file, color.pawn_rank()),
                    Some(Piece::new(color, PieceKind::Pawn)),
                );
            }
        }
        board.castling = CastleRights::ALL;
        board
    }

    /// The piece on `sq`, if any.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Put `piece` on `sq`, or clear it with `None`.
    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    /// Return `true` if something stands on `sq`.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// The color of whatever stands on `sq`.
    #[inline]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_on(sq).map(|piece| piece.color)
    }

    /// Every square holding a piece equal to `piece`.
    pub fn squares_with(&self, piece: Piece) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| self.piece_on(sq) == Some(piece))
    }

    /// Every `(square, piece)` belonging to `color`, in square order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_on(sq) {
            Some(piece) if piece.color == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// The square of `color`'s king, or `None` if it has none.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_on(sq).is_some_and(|piece| piece.is_king_of(color)))
    }

    /// The square of `color`'s king.
    ///
    /// # Panics
    ///
    /// Panics if `color` has no king. Rule queries need both kings; a board
    /// without one is not a chess position and is never reached by applying
    /// legal moves to one.
    pub fn king_square(&self, color: Color) -> Square {
        self.find_king(color)
            .expect("board must have a king for each side")
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// The move that produced this position, if it came from [`Board::make_move`].
    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Return this board with `color` to move.
    pub fn with_side_to_move(mut self, color: Color) -> Board {
        self.side_to_move = color;
        self
    }

    /// Return this board with the given castling rights.
    pub fn with_castling(mut self, castling: CastleRights) -> Board {
        self.castling = castling;
        self
    }

    /// Return this board with `piece` placed on `sq`.
    pub fn with_piece(mut self, sq: Square, piece: Piece) -> Board {
        self.set_piece(sq, Some(piece));
        self
    }

    #[inline]
    pub(crate) fn castling_mut(&mut self) -> &mut CastleRights {
        &mut self.castling
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub(crate) fn set_last_move(&mut self, mv: Option<Move>) {
        self.last_move = mv;
    }

    /// Check that this is a usable chess position.
    ///
    /// Rule queries assume a valid board and never call this; it guards
    /// positions coming from outside, such as FEN input.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self.squares_with(Piece::new(color, PieceKind::King)).count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }

        let pawn_on_back_rank = Square::all().any(|sq| {
            matches!(sq.rank(), Rank::Rank1 | Rank::Rank8)
                && self.piece_on(sq).is_some_and(|piece| piece.kind == PieceKind::Pawn)
        });
        if pawn_on_back_rank {
            return Err(BoardError::PawnsOnBackRank);
        }

        let waiting = self.side_to_move.flip();
        if is_square_attacked(self, self.king_square(waiting), self.side_to_move) {
            return Err(BoardError::OpponentInCheck { color: waiting });
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{self}\")")
    }
}

/// Wrapper for printing a board as an 8x8 grid, rank 8 on top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            write!(f, "{rank}  ")?;
            for file in File::ALL {
                let c = self
                    .0
                    .piece_on(Square::new(file, rank))
                    .map_or('.', Piece::fen_char);
                if file == File::FileH {
                    writeln!(f, "{c}")?;
                } else {
                    write!(f, "{c} ")?;
                }
            }
        }
        write!(f, "   a b c d e f g h")
    }
}
