//! Game state, construction, and the read-only query surface.
//!
//! A [`Game`] owns its grid, its player registry, and a per-instance tag
//! counter, so independent games never share state. All mutation goes
//! through [`Game::apply_move`] in the `moves` submodule; everything here
//! is construction and queries.

use std::collections::TryReserveError;

use crate::board::grid::Grid;
use crate::board::player::{symbol_for_index, Player, PlayerId, MAX_PLAYERS};

mod moves;
mod neighbors;
mod recolor;

/// Errors from [`Game::new`]. No partial instance is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("board width must be positive")]
    ZeroWidth,

    #[error("board height must be positive")]
    ZeroHeight,

    #[error("player count must be positive")]
    ZeroPlayers,

    #[error("area cap must be positive")]
    ZeroAreas,

    #[error("player count {0} exceeds the supported maximum of {MAX_PLAYERS}")]
    TooManyPlayers(u32),

    #[error("failed to allocate board storage")]
    OutOfMemory(#[from] TryReserveError),
}

/// A territory-claiming game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    players: Vec<Player>,
    max_areas: u32,
    free_cells: u64,
    /// Source of fresh component tags, scoped to this instance.
    tag_counter: u64,
}

impl Game {
    /// Creates a game with every cell free and all counters at zero.
    ///
    /// Fails when any parameter is zero, when `players` exceeds
    /// [`MAX_PLAYERS`], or when the board storage cannot be allocated.
    pub fn new(width: u32, height: u32, players: u32, max_areas: u32) -> Result<Game, GameError> {
        if width == 0 {
            return Err(GameError::ZeroWidth);
        }
        if height == 0 {
            return Err(GameError::ZeroHeight);
        }
        if players == 0 {
            return Err(GameError::ZeroPlayers);
        }
        if max_areas == 0 {
            return Err(GameError::ZeroAreas);
        }
        if players > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers(players));
        }

        let grid = Grid::new(width, height)?;
        let players = (0..players)
            .map(|index| Player::new(symbol_for_index(index)))
            .collect();

        Ok(Game {
            grid,
            players,
            max_areas,
            free_cells: width as u64 * height as u64,
            tag_counter: 1,
        })
    }

    /// Board width in cells.
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    /// Board height in cells.
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Per-player cap on the number of disjoint areas.
    pub fn max_areas(&self) -> u32 {
        self.max_areas
    }

    /// Number of players in the game.
    pub fn player_count(&self) -> u32 {
        self.players.len() as u32
    }

    /// Number of free cells on the whole board.
    pub fn total_free_fields(&self) -> u64 {
        self.free_cells
    }

    fn player(&self, id: PlayerId) -> Option<&Player> {
        if id == 0 {
            return None;
        }
        self.players.get((id - 1) as usize)
    }

    fn valid_player(&self, id: PlayerId) -> bool {
        self.player(id).is_some()
    }

    /// Number of cells owned by the player, or 0 for an invalid id.
    pub fn busy_fields(&self, player: PlayerId) -> u64 {
        self.player(player).map_or(0, |p| p.busy_fields)
    }

    /// Number of disjoint areas owned by the player, or 0 for an invalid id.
    pub fn busy_areas(&self, player: PlayerId) -> u32 {
        self.player(player).map_or(0, |p| p.busy_areas)
    }

    /// Number of free cells adjacent to at least one of the player's areas,
    /// or 0 for an invalid id.
    pub fn boundary_length(&self, player: PlayerId) -> u64 {
        self.player(player).map_or(0, |p| p.boundary_length)
    }

    /// Number of cells the player could legally claim next.
    ///
    /// A player who has not used up the area cap may start a new area on
    /// any free cell; one who has may only extend existing areas, so the
    /// count collapses to the boundary length. Returns 0 for an invalid id.
    pub fn free_fields(&self, player: PlayerId) -> u64 {
        match self.player(player) {
            Some(p) if p.busy_areas == self.max_areas => p.boundary_length,
            Some(_) => self.free_cells,
            None => 0,
        }
    }

    /// Board symbol of the player, or `.` for an invalid id.
    pub fn symbol(&self, player: PlayerId) -> char {
        self.player(player).map_or('.', |p| p.symbol)
    }

    /// Owner of the cell at (x, y), or `None` for a free or out-of-bounds
    /// coordinate.
    pub fn owner(&self, x: u32, y: u32) -> Option<PlayerId> {
        self.grid.owner(x, y)
    }

    /// Finds the next player able to move, scanning ids after `current`
    /// and wrapping around; `current` itself is checked last.
    ///
    /// Returns `None` when no player can move (the game is over) or when
    /// `current` is not a valid player id.
    pub fn next_player(&self, current: PlayerId) -> Option<PlayerId> {
        let count = self.player_count();
        if !self.valid_player(current) {
            return None;
        }
        (1..=count)
            .map(|step| (current - 1 + step) % count + 1)
            .find(|&candidate| self.free_fields(candidate) > 0)
    }

    /// Mints a fresh component tag, unique within this game.
    fn mint_tag(&mut self) -> u64 {
        let tag = self.tag_counter;
        self.tag_counter += 1;
        tag
    }
}
