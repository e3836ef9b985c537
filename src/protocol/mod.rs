//! Text protocol handling.
//!
//! This module implements the textual surfaces of the engine: the board
//! renderer and its inverse parser, the score summary (plain text and
//! JSON), and the command parser for the main loop.

pub mod parser;
pub mod render;
pub mod score;

pub use parser::{parse_command, Command};
pub use render::{parse_board, render_board, BoardLayout, BoardParseError};
pub use score::{PlayerScore, Scoreboard};
