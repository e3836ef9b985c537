//! Session state for the protocol loop.
//!
//! Holds the current game (if any) and whose turn it is, and dispatches
//! parsed commands, writing responses to any `Write` sink so tests can
//! capture them.

use std::io::Write;

use crate::board::player::PlayerId;
use crate::game::Game;
use crate::protocol::render::render_board;
use crate::protocol::score::Scoreboard;

/// Holds the mutable state of a protocol session between commands.
pub struct Session {
    pub game: Option<Game>,
    pub current: PlayerId,
}

impl Session {
    /// Creates a session with no game in progress.
    pub fn new() -> Self {
        Session {
            game: None,
            current: 0,
        }
    }

    /// Starts a fresh game, replacing any game in progress. Player 1
    /// moves first.
    pub fn handle_new<W: Write>(
        &mut self,
        out: &mut W,
        width: u32,
        height: u32,
        players: u32,
        areas: u32,
    ) {
        match Game::new(width, height, players, areas) {
            Ok(game) => {
                self.game = Some(game);
                self.current = 1;
                writeln!(out, "ok").unwrap();
            }
            Err(e) => {
                writeln!(out, "error {}", e).unwrap();
            }
        }
    }

    /// Applies a move, replying `ok` or `illegal`.
    pub fn handle_move<W: Write>(&mut self, out: &mut W, player: PlayerId, x: u32, y: u32) {
        let Some(game) = self.game.as_mut() else {
            writeln!(out, "error no game in progress").unwrap();
            return;
        };
        if game.apply_move(player, x, y) {
            writeln!(out, "ok").unwrap();
        } else {
            writeln!(out, "illegal").unwrap();
        }
    }

    /// Prints the board text.
    pub fn handle_board<W: Write>(&self, out: &mut W) {
        match &self.game {
            Some(game) => write!(out, "{}", render_board(game)).unwrap(),
            None => writeln!(out, "error no game in progress").unwrap(),
        }
    }

    /// Prints the score summary, as JSON when `json` is set.
    pub fn handle_score<W: Write>(&self, out: &mut W, json: bool) {
        let Some(game) = self.game.as_ref() else {
            writeln!(out, "error no game in progress").unwrap();
            return;
        };
        let scoreboard = Scoreboard::of(game);
        if json {
            writeln!(out, "{}", serde_json::to_string(&scoreboard).unwrap()).unwrap();
        } else {
            write!(out, "{}", scoreboard).unwrap();
        }
    }

    /// Advances the turn to the next player able to move, replying
    /// `player <id>`, or `gameover` when nobody can move.
    pub fn handle_next<W: Write>(&mut self, out: &mut W) {
        let Some(game) = self.game.as_ref() else {
            writeln!(out, "error no game in progress").unwrap();
            return;
        };
        match game.next_player(self.current) {
            Some(next) => {
                self.current = next;
                writeln!(out, "player {}", next).unwrap();
            }
            None => {
                writeln!(out, "gameover").unwrap();
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_of(f: impl FnOnce(&mut Session, &mut Vec<u8>)) -> String {
        let mut session = Session::new();
        let mut out = Vec::new();
        f(&mut session, &mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn new_session_has_no_game() {
        let session = Session::new();
        assert!(session.game.is_none());
        assert_eq!(session.current, 0);
    }

    #[test]
    fn handle_new_starts_player_one() {
        let mut session = Session::new();
        let mut out = Vec::new();
        session.handle_new(&mut out, 3, 3, 2, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "ok\n");
        assert!(session.game.is_some());
        assert_eq!(session.current, 1);
    }

    #[test]
    fn handle_new_reports_construction_errors() {
        let text = output_of(|s, out| s.handle_new(out, 0, 3, 2, 2));
        assert!(text.starts_with("error "));
        assert!(text.contains("width"));
    }

    #[test]
    fn commands_without_a_game_report_errors() {
        let text = output_of(|s, out| {
            s.handle_move(out, 1, 0, 0);
            s.handle_board(out);
            s.handle_score(out, false);
            s.handle_next(out);
        });
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().all(|l| l == "error no game in progress"));
    }

    #[test]
    fn moves_and_board_flow() {
        let text = output_of(|s, out| {
            s.handle_new(out, 3, 2, 2, 2);
            s.handle_move(out, 1, 0, 0);
            s.handle_move(out, 2, 0, 0);
            s.handle_board(out);
        });
        assert_eq!(text, "ok\nok\nillegal\n...\n1..\n");
    }

    #[test]
    fn next_advances_and_detects_game_over() {
        let text = output_of(|s, out| {
            s.handle_new(out, 1, 2, 2, 1);
            s.handle_move(out, 1, 0, 0);
            s.handle_next(out);
            s.handle_move(out, 2, 0, 1);
            s.handle_next(out);
        });
        assert_eq!(text, "ok\nok\nplayer 2\nok\ngameover\n");
    }

    #[test]
    fn score_json_is_parseable() {
        let text = output_of(|s, out| {
            s.handle_new(out, 2, 2, 2, 1);
            s.handle_move(out, 1, 0, 0);
            s.handle_score(out, true);
        });
        let json_line = text.lines().last().unwrap();
        let scoreboard: Scoreboard = serde_json::from_str(json_line).unwrap();
        assert_eq!(scoreboard.scores.len(), 2);
        assert_eq!(scoreboard.scores[0].busy_fields, 1);
    }
}
