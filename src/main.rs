//! Landgrab -- a territory-claiming board game engine.
//!
//! This binary reads commands from stdin and writes responses to stdout:
//! `new`, `move`, `board`, `score [json]`, `next`, `quit`.

use std::io::{self, BufRead, Write};

use landgrab::protocol::parser::{parse_command, Command};
use landgrab::session::Session;

/// Runs the main protocol loop, reading commands from stdin and writing
/// responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut session = Session::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::New {
                width,
                height,
                players,
                areas,
            } => {
                session.handle_new(&mut out, width, height, players, areas);
            }
            Command::Move { player, x, y } => {
                session.handle_move(&mut out, player, x, y);
            }
            Command::Board => {
                session.handle_board(&mut out);
            }
            Command::Score => {
                session.handle_score(&mut out, false);
            }
            Command::ScoreJson => {
                session.handle_score(&mut out, true);
            }
            Command::Next => {
                session.handle_next(&mut out);
            }
            Command::Quit => {
                break;
            }
        }
        out.flush().unwrap();
    }
}
