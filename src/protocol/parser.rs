//! Command parser for the main loop.
//!
//! Parses incoming protocol commands from raw text into structured
//! `Command` variants that the session loop can dispatch on.

use crate::board::player::PlayerId;

/// A parsed command for the engine session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a fresh game: `new <width> <height> <players> <areas>`.
    New {
        width: u32,
        height: u32,
        players: u32,
        areas: u32,
    },

    /// Place a marker: `move <player> <x> <y>`.
    Move { player: PlayerId, x: u32, y: u32 },

    /// Print the board text.
    Board,

    /// Print the plain-text score summary.
    Score,

    /// Print the score summary as JSON.
    ScoreJson,

    /// Advance to the next player able to move.
    Next,

    /// Terminate the session.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to
/// stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "new" => parse_new(&tokens),
        "move" => parse_move(&tokens),
        "board" => Some(Command::Board),
        "score" => match tokens.get(1) {
            Some(&"json") => Some(Command::ScoreJson),
            Some(other) => {
                eprintln!("malformed score: unexpected argument '{}'", other);
                None
            }
            None => Some(Command::Score),
        },
        "next" => Some(Command::Next),
        "quit" => Some(Command::Quit),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `new <width> <height> <players> <areas>`.
fn parse_new(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 5 {
        eprintln!("malformed new: expected 'new <width> <height> <players> <areas>'");
        return None;
    }
    match (
        tokens[1].parse::<u32>(),
        tokens[2].parse::<u32>(),
        tokens[3].parse::<u32>(),
        tokens[4].parse::<u32>(),
    ) {
        (Ok(width), Ok(height), Ok(players), Ok(areas)) => Some(Command::New {
            width,
            height,
            players,
            areas,
        }),
        _ => {
            eprintln!("malformed new: arguments must be non-negative integers");
            None
        }
    }
}

/// Parses `move <player> <x> <y>`.
fn parse_move(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 4 {
        eprintln!("malformed move: expected 'move <player> <x> <y>'");
        return None;
    }
    match (
        tokens[1].parse::<u32>(),
        tokens[2].parse::<u32>(),
        tokens[3].parse::<u32>(),
    ) {
        (Ok(player), Ok(x), Ok(y)) => Some(Command::Move { player, x, y }),
        _ => {
            eprintln!("malformed move: arguments must be non-negative integers");
            None
        }
    }
}
