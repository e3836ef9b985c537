//! Board representation: the cell grid and the player registry.
//!
//! Contains the dense cell storage and the per-player counter records
//! that the move machinery in `game` keeps up to date.

pub mod grid;
pub mod player;

pub use grid::{Cell, Grid, DIRECTIONS};
pub use player::{player_for_symbol, symbol_for_index, Player, PlayerId, MAX_PLAYERS};
