//! The play session: a game in progress and the line-oriented loop that drives it.
//!
//! Every change to the game goes through [`Session::play`], which validates
//! a bare from/to proposal against the legal moves and applies the canonical
//! result. Taps on squares ([`Session::select`]) end up there too.

use std::fmt;
use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use tapchess_core::{Auxiliary, Board, Move, Square, is_in_check, legal_moves, validate};

use crate::command::{Command, PlayOption, PositionInfo, parse_command};
use crate::error::PlayError;

/// Options adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayConfig {
    /// Print the board after every applied move.
    pub echo_board: bool,
    /// Print the legal replies after every applied move.
    pub show_moves: bool,
}

/// Where the side to move stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ongoing,
    Check,
    Checkmate,
    /// Not in check and nothing to play. No draw is declared.
    NoLegalMoves,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Status::Ongoing => "ongoing",
            Status::Check => "check",
            Status::Checkmate => "checkmate",
            Status::NoLegalMoves => "no legal moves",
        };
        f.write_str(text)
    }
}

/// What a tap on a square did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The square now holds the selection.
    Selected(Square),
    /// The selected square was tapped again.
    Cleared,
    /// Nothing was selected and the square holds no piece of the side to move.
    Ignored,
    /// The tap completed a legal move, which was applied.
    Played(Move),
    /// The tap completed a move that is not legal.
    Rejected(Move),
}

/// One applied move and the board it was played on.
#[derive(Debug, Clone, Copy)]
struct Ply {
    before: Board,
    mv: Move,
}

/// A game in progress.
pub struct Session {
    board: Board,
    history: Vec<Ply>,
    selected: Option<Square>,
    config: PlayConfig,
}

impl Session {
    /// Create a new session with the starting position.
    pub fn new() -> Self {
        Self::with_config(PlayConfig::default())
    }

    pub fn with_config(config: PlayConfig) -> Self {
        Self {
            board: Board::starting_position(),
            history: Vec::new(),
            selected: None,
            config,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn config(&self) -> PlayConfig {
        self.config
    }

    /// The moves applied so far, oldest first.
    pub fn history(&self) -> impl Iterator<Item = Move> + '_ {
        self.history.iter().map(|ply| ply.mv)
    }

    /// Back to the starting position with no history and no selection.
    pub fn reset(&mut self) {
        self.load(Board::starting_position(), &[]);
    }

    /// Replace the game with `start` followed by `moves`.
    ///
    /// The moves are applied as given; callers pass canonical legal moves.
    pub fn load(&mut self, start: Board, moves: &[Move]) {
        self.board = start;
        self.history.clear();
        self.selected = None;
        for &mv in moves {
            self.push(mv);
        }
    }

    /// Validate `proposed` and, if a legal move matches, apply it.
    ///
    /// Returns the canonical move that was played. An illegal proposal
    /// changes nothing. Either way the selection is cleared.
    pub fn play(&mut self, proposed: Move) -> Option<Move> {
        self.selected = None;
        let mv = validate(&self.board, proposed)?;
        self.push(mv);
        debug!(mv = %mv, ply = self.history.len(), "applied move");
        Some(mv)
    }

    /// Tap `sq`.
    ///
    /// With nothing selected, a square holding a piece of the side to move
    /// becomes the selection. Tapping the selection again clears it. Any
    /// other square completes a move from the selection, which is played
    /// if legal. After a rejected move, a tap on another piece of the side
    /// to move selects that piece instead.
    pub fn select(&mut self, sq: Square) -> Selection {
        let us = self.board.side_to_move();
        match self.selected {
            Some(from) if from == sq => {
                self.selected = None;
                Selection::Cleared
            }
            Some(from) => {
                let proposed = Move::new(from, sq);
                if let Some(mv) = self.play(proposed) {
                    return Selection::Played(mv);
                }
                if self.board.color_on(sq) == Some(us) {
                    self.selected = Some(sq);
                }
                Selection::Rejected(proposed)
            }
            None if self.board.color_on(sq) == Some(us) => {
                self.selected = Some(sq);
                Selection::Selected(sq)
            }
            None => Selection::Ignored,
        }
    }

    /// Take back the last move, returning it.
    pub fn undo(&mut self) -> Option<Move> {
        let ply = self.history.pop()?;
        self.board = ply.before;
        self.selected = None;
        Some(ply.mv)
    }

    /// Check, checkmate or stalemate-like standstill for the side to move.
    pub fn status(&self) -> Status {
        let in_check = is_in_check(&self.board, self.board.side_to_move());
        let stuck = legal_moves(&self.board).is_empty();
        match (in_check, stuck) {
            (true, true) => Status::Checkmate,
            (true, false) => Status::Check,
            (false, true) => Status::NoLegalMoves,
            (false, false) => Status::Ongoing,
        }
    }

    pub fn set_option(&mut self, option: PlayOption) {
        match option {
            PlayOption::EchoBoard(on) => self.config.echo_board = on,
            PlayOption::ShowMoves(on) => self.config.show_moves = on,
        }
    }

    fn push(&mut self, mv: Move) {
        self.history.push(Ply {
            before: self.board,
            mv,
        });
        self.board = self.board.make_move(mv);
    }

    /// Read commands from `input` until `quit` or end of input, writing replies to `out`.
    ///
    /// Malformed lines are answered with `error: ...` and the loop carries on.
    /// Only I/O failures end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<(), PlayError> {
        info!("session started");
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.handle(cmd, &mut out)?,
                Err(e) => {
                    warn!(error = %e, "command rejected");
                    writeln!(out, "error: {e}")?;
                }
            }
            out.flush()?;
        }
        info!(plies = self.history.len(), "session finished");
        Ok(())
    }

    fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<(), PlayError> {
        match cmd {
            Command::New => {
                self.reset();
                writeln!(out, "ok")?;
            }
            Command::Position(PositionInfo { start, moves }) => {
                self.load(start, &moves);
                writeln!(out, "ok")?;
            }
            Command::Move(proposed) => match self.play(proposed) {
                Some(mv) => self.report_played(mv, out)?,
                None => writeln!(out, "illegal move {proposed}")?,
            },
            Command::Select(sq) => match self.select(sq) {
                Selection::Selected(sq) => writeln!(out, "selected {sq}")?,
                Selection::Cleared => writeln!(out, "cleared")?,
                Selection::Ignored => writeln!(out, "nothing to select on {sq}")?,
                Selection::Played(mv) => self.report_played(mv, out)?,
                Selection::Rejected(mv) => writeln!(out, "illegal move {mv}")?,
            },
            Command::Moves => self.write_moves(out)?,
            Command::Board => self.write_board(out)?,
            Command::History => {
                let played: Vec<String> = self.history().map(|mv| mv.to_string()).collect();
                if played.is_empty() {
                    writeln!(out, "history: (empty)")?;
                } else {
                    writeln!(out, "history: {}", played.join(" "))?;
                }
            }
            Command::Undo => match self.undo() {
                Some(mv) => writeln!(out, "undone {mv}")?,
                None => writeln!(out, "nothing to undo")?,
            },
            Command::Set(option) => {
                self.set_option(option);
                writeln!(out, "ok")?;
            }
            Command::Quit | Command::Empty => {}
        }
        Ok(())
    }

    fn report_played<W: Write>(&self, mv: Move, out: &mut W) -> Result<(), PlayError> {
        writeln!(out, "played {}", describe(mv))?;
        let status = self.status();
        if status != Status::Ongoing {
            writeln!(out, "{status}")?;
        }
        if self.config.echo_board {
            self.write_board(out)?;
        }
        if self.config.show_moves {
            self.write_moves(out)?;
        }
        Ok(())
    }

    fn write_moves<W: Write>(&self, out: &mut W) -> Result<(), PlayError> {
        let moves: Vec<String> = legal_moves(&self.board).into_iter().map(describe).collect();
        if moves.is_empty() {
            writeln!(out, "moves: (none)")?;
        } else {
            writeln!(out, "moves: {}", moves.join(" "))?;
        }
        Ok(())
    }

    fn write_board<W: Write>(&self, out: &mut W) -> Result<(), PlayError> {
        writeln!(out, "{}", self.board.pretty())?;
        writeln!(out, "side: {}", self.board.side_to_move())?;
        writeln!(out, "castling: {}", self.board.castling())?;
        if let Some(sq) = self.selected {
            writeln!(out, "selected: {sq}")?;
        }
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Move code with its auxiliary data spelled out: `e7e8=queen`, `e1g1+h1f1`.
fn describe(mv: Move) -> String {
    match mv.aux {
        Auxiliary::None => mv.to_string(),
        Auxiliary::Promotion(kind) => format!("{mv}={kind}"),
        Auxiliary::Paired(paired) => format!("{mv}+{}{}", paired.from, paired.to),
    }
}
