//! Play session errors.

use tapchess_core::{FenError, MoveParseError};

/// Errors that can occur while reading and running session commands.
///
/// An illegal `move` is not an error: it is answered with `illegal move`
/// and leaves the game untouched.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    /// The command word is not one the session understands.
    #[error("unknown command: {command}")]
    UnknownCommand {
        /// The first token of the line.
        command: String,
    },

    /// A command was given without a required argument.
    #[error("{command}: missing {what}")]
    MissingArgument {
        /// The command word.
        command: &'static str,
        /// Description of what was expected.
        what: &'static str,
    },

    /// The `position` command is missing the `startpos` or `fen` keyword.
    #[error("malformed position command: missing startpos or fen keyword")]
    MalformedPosition,

    /// Failed to parse a FEN string.
    #[error("invalid FEN '{fen}': {source}")]
    InvalidFen {
        /// The FEN string that failed to parse.
        fen: String,
        /// Why it failed.
        source: FenError,
    },

    /// A square name could not be parsed.
    #[error("invalid square: {square}")]
    InvalidSquare {
        /// The offending token.
        square: String,
    },

    /// A move code could not be parsed.
    #[error(transparent)]
    InvalidMove(#[from] MoveParseError),

    /// A move listed after `position ... moves` is not legal where it is played.
    #[error("illegal move in position command: {code}")]
    IllegalMove {
        /// The move code as given.
        code: String,
    },

    /// `set` named an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as given.
        name: String,
    },

    /// `set` gave an option a value it cannot take.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// An I/O error occurred while reading commands or writing replies.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
