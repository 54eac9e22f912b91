//! Session command parsing.

use tapchess_core::{Board, Move, Square, validate};

use crate::error::PlayError;

/// A position to set up: a starting board and the canonical moves played from it.
#[derive(Debug, Clone)]
pub struct PositionInfo {
    /// The board before any listed move.
    pub start: Board,
    /// Moves after `moves`, already validated and canonical.
    pub moves: Vec<Move>,
}

/// A session option changed through `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOption {
    /// `echo-board`: print the board after every applied move.
    EchoBoard(bool),
    /// `show-moves`: print the reply's legal moves after every applied move.
    ShowMoves(bool),
}

/// A parsed session command.
#[derive(Debug)]
pub enum Command {
    /// `new` -- back to the starting position.
    New,
    /// `position` -- set up a board position with optional moves applied.
    Position(PositionInfo),
    /// `move` -- validate a from/to proposal and apply it.
    Move(Move),
    /// `select` -- tap a square.
    Select(Square),
    /// `moves` -- list the legal moves.
    Moves,
    /// `board` -- print the current board.
    Board,
    /// `history` -- list the moves played so far.
    History,
    /// `undo` -- take back the last move.
    Undo,
    /// `set` -- change a session option.
    Set(PlayOption),
    /// `quit` -- end the session.
    Quit,
    /// Blank line.
    Empty,
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, PlayError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&word, args)) = tokens.split_first() else {
        return Ok(Command::Empty);
    };

    match word {
        "new" => Ok(Command::New),
        "moves" => Ok(Command::Moves),
        "board" => Ok(Command::Board),
        "history" => Ok(Command::History),
        "undo" => Ok(Command::Undo),
        "quit" => Ok(Command::Quit),
        "position" => parse_position(args),
        "move" => {
            let code = args.first().ok_or(PlayError::MissingArgument {
                command: "move",
                what: "move code",
            })?;
            Ok(Command::Move(code.parse()?))
        }
        "select" => {
            let name = args.first().ok_or(PlayError::MissingArgument {
                command: "select",
                what: "square",
            })?;
            Ok(Command::Select(parse_square(name)?))
        }
        "set" => parse_set(args),
        _ => Err(PlayError::UnknownCommand {
            command: word.to_string(),
        }),
    }
}

/// Parse a square name such as `e4`.
pub fn parse_square(name: &str) -> Result<Square, PlayError> {
    Square::from_algebraic(name).ok_or_else(|| PlayError::InvalidSquare {
        square: name.to_string(),
    })
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [moves e2e4 e7e5 ...]`
/// - `position fen <fen-string> [moves e2e4 e7e5 ...]`
///
/// The FEN runs up to the `moves` keyword or the end of the line. Every
/// listed move must be legal in turn.
fn parse_position(tokens: &[&str]) -> Result<Command, PlayError> {
    let Some((&kind, rest)) = tokens.split_first() else {
        return Err(PlayError::MalformedPosition);
    };

    let split = rest.iter().position(|&t| t == "moves").unwrap_or(rest.len());
    let (setup, listed) = rest.split_at(split);

    let start = match kind {
        "startpos" if setup.is_empty() => Board::starting_position(),
        "fen" => {
            let fen = setup.join(" ");
            fen.parse::<Board>()
                .map_err(|source| PlayError::InvalidFen { fen, source })?
        }
        _ => return Err(PlayError::MalformedPosition),
    };

    let mut board = start;
    let mut moves = Vec::new();
    for code in listed.iter().skip(1) {
        let proposed: Move = code.parse()?;
        let mv = validate(&board, proposed).ok_or_else(|| PlayError::IllegalMove {
            code: code.to_string(),
        })?;
        board = board.make_move(mv);
        moves.push(mv);
    }

    Ok(Command::Position(PositionInfo { start, moves }))
}

/// Parse `set <name> <true|false>`.
fn parse_set(tokens: &[&str]) -> Result<Command, PlayError> {
    let (Some(&name), Some(&value)) = (tokens.first(), tokens.get(1)) else {
        return Err(PlayError::MissingArgument {
            command: "set",
            what: "option name and value",
        });
    };

    let flag: bool = value.parse().map_err(|_| PlayError::InvalidOptionValue {
        name: name.to_string(),
        value: value.to_string(),
    })?;

    let option = match name {
        "echo-board" => PlayOption::EchoBoard(flag),
        "show-moves" => PlayOption::ShowMoves(flag),
        _ => {
            return Err(PlayError::UnknownOption {
                name: name.to_string(),
            });
        }
    };
    Ok(Command::Set(option))
}
