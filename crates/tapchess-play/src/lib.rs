//! Interactive play over the tapchess rules: a game session driven by a
//! line protocol on stdin/stdout.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, PlayOption, PositionInfo, parse_command};
pub use error::PlayError;
pub use session::{PlayConfig, Selection, Session, Status};
