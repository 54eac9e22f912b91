//! FEN parsing and printing for [`Board`].
//!
//! Boards carry no en passant target or move counters. Those fields are
//! accepted when present and checked for shape, then dropped; printing
//! emits the first four fields with `-` for en passant.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::file::File;
use crate::piece::Piece;
use crate::rank::Rank;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl FromStr for Board {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Board, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(FenError::MissingFields {
                found: fields.len(),
            });
        }
        if fields.len() > 6 {
            return Err(FenError::TooManyFields {
                found: fields.len(),
            });
        }

        let mut board = parse_placement(fields[0])?;

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };
        board = board
            .with_side_to_move(side_to_move)
            .with_castling(CastleRights::from_fen(fields[2])?);

        if fields[3] != "-" && Square::from_algebraic(fields[3]).is_none() {
            return Err(FenError::InvalidEnPassant {
                found: fields[3].to_string(),
            });
        }

        for (field, value) in ["halfmove clock", "fullmove number"].into_iter().zip(&fields[4..]) {
            value
                .parse::<u16>()
                .map_err(|_| FenError::InvalidMoveCounter {
                    field,
                    found: value.to_string(),
                })?;
        }

        board.validate()?;
        Ok(board)
    }
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != Rank::COUNT {
        return Err(FenError::WrongRankCount { found: rows.len() });
    }

    let mut board = Board::empty();
    // FEN lists rank 8 first.
    for (row, rank) in rows.iter().zip(Rank::ALL.into_iter().rev()) {
        let mut file_index = 0usize;
        for c in row.chars() {
            if let Some(run) = c.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                file_index += run as usize;
                continue;
            }
            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
            let file = File::from_index(file_index as u8).ok_or(FenError::BadRankLength {
                rank: rank.index() + 1,
                length: file_index + 1,
            })?;
            board.set_piece(Square::new(file, rank), Some(piece));
            file_index += 1;
        }
        if file_index != File::COUNT {
            return Err(FenError::BadRankLength {
                rank: rank.index() + 1,
                length: file_index,
            });
        }
    }
    Ok(board)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            let mut empty_run = 0;
            for file in File::ALL {
                match self.piece_on(Square::new(file, rank)) {
                    Some(piece) => {
                        if empty_run > 0 {
                            write!(f, "{empty_run}")?;
                            empty_run = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                write!(f, "{empty_run}")?;
            }
            if rank != Rank::Rank1 {
                write!(f, "/")?;
            }
        }
        write!(
            f,
            " {} {} -",
            self.side_to_move().fen_char(),
            self.castling()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_FEN;
    use crate::board::Board;
    use crate::castle_rights::{CastleRights, CastleSide};
    use crate::color::Color;
    use crate::error::{BoardError, FenError};
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn starting_fen_matches_constructor() {
        let parsed: Board = STARTING_FEN.parse().unwrap();
        assert_eq!(parsed, Board::starting_position());
    }

    #[test]
    fn prints_four_fields() {
        assert_eq!(
            Board::starting_position().to_string(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -"
        );
    }

    #[test]
    fn reparse_printed_board() {
        for fen in [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -",
            "4k3/8/8/8/8/8/8/4K3 b Kq -",
        ] {
            let board: Board = fen.parse().unwrap();
            assert_eq!(board.to_string(), fen);
        }
    }

    #[test]
    fn fields_land_in_the_board() {
        let board: Board = "4k3/4P3/8/8/8/8/8/R3K3 b Q e3 12 40".parse().unwrap();
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.piece_on(Square::E7), Some(Piece::WHITE_PAWN));
        assert_eq!(board.piece_on(Square::A1), Some(Piece::WHITE_ROOK));
        assert!(board.castling().has(Color::White, CastleSide::QueenSide));
        assert!(!board.castling().has(Color::White, CastleSide::KingSide));
        assert_ne!(board.castling(), CastleRights::ALL);
    }

    #[test]
    fn errors() {
        let cases = [
            "e4 e5",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq -",
            "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR w KQkq -",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq -",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq -",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - abc 1",
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 extra",
        ];
        for fen in cases {
            assert!(fen.parse::<Board>().is_err(), "accepted {fen:?}");
        }
    }

    #[test]
    fn structural_errors_surface() {
        let err = "8/8/8/8/8/8/8/4K3 w - -".parse::<Board>().unwrap_err();
        assert_eq!(
            err,
            FenError::InvalidBoard {
                source: BoardError::InvalidKingCount {
                    color: Color::Black,
                    count: 0
                }
            }
        );

        let err = "4k3/8/8/8/8/8/8/4K2r b - -".parse::<Board>().unwrap_err();
        assert_eq!(
            err,
            FenError::InvalidBoard {
                source: BoardError::OpponentInCheck { color: Color::White }
            }
        );
    }
}
