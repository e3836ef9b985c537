//! Per-player score summary.
//!
//! Built from the query API only; the `Display` form is the end-of-game
//! text summary, the serde derives feed the `score json` protocol output.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::player::PlayerId;
use crate::game::Game;

/// One player's final tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub player: PlayerId,
    pub symbol: char,
    pub busy_fields: u64,
    pub busy_areas: u32,
}

/// Score summary for every player in the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub width: u32,
    pub height: u32,
    pub scores: Vec<PlayerScore>,
}

impl Scoreboard {
    /// Captures the current standings of `game`.
    pub fn of(game: &Game) -> Scoreboard {
        let scores = (1..=game.player_count())
            .map(|player| PlayerScore {
                player,
                symbol: game.symbol(player),
                busy_fields: game.busy_fields(player),
                busy_areas: game.busy_areas(player),
            })
            .collect();
        Scoreboard {
            width: game.width(),
            height: game.height(),
            scores,
        }
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for score in &self.scores {
            writeln!(
                f,
                "player {} ({}): {} fields, {} areas",
                score.player, score.symbol, score.busy_fields, score.busy_areas
            )?;
        }
        Ok(())
    }
}
