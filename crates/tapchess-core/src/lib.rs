//! Core chess rules: board representation, legal move generation, move
//! validation and application.

mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod file;
mod geometry;
mod make_move;
mod movegen;
mod piece;
mod piece_kind;
mod rank;
mod square;
mod square_set;
mod validate;

pub mod perft;

pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide, SideRights};
pub use chess_move::{Auxiliary, Move, PairedMove};
pub use color::Color;
pub use error::{BoardError, FenError, MoveParseError};
pub use fen::STARTING_FEN;
pub use file::File;
pub use geometry::Direction;
pub use make_move::apply;
pub use movegen::{
    attacks_of, is_in_check, is_legal, is_square_attacked, legal_moves, pseudo_moves, pseudo_moves_for,
};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use rank::Rank;
pub use square::Square;
pub use square_set::SquareSet;
pub use validate::{is_valid, validate};
