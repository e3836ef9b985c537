//! Incremental move application.
//!
//! This is the heart of the engine: a single placement updates every
//! per-player counter exactly, without rescanning the board. The only
//! non-constant work is the flood-fill retag after a merge, bounded by
//! the size of the merged region.

use crate::board::player::PlayerId;
use crate::game::neighbors::{indirect_boundary_credit, NeighborSummary};
use crate::game::recolor::recolor;
use crate::game::Game;

impl Game {
    /// Places `player`'s marker at (x, y).
    ///
    /// Returns `false` and leaves the game untouched when the player id is
    /// invalid, the coordinate is out of bounds, the cell is occupied, or
    /// the placement would start a new area while the player is already at
    /// the area cap. Otherwise applies the move and returns `true`.
    pub fn apply_move(&mut self, player: PlayerId, x: u32, y: u32) -> bool {
        if !self.valid_player(player) || !self.grid.in_bounds(x, y) || !self.grid.is_free(x, y) {
            return false;
        }

        let summary = NeighborSummary::scan(&self.grid, x, y);
        // Must run against the pre-move board: a free neighbor that can
        // already reach one of the player's areas some other way is
        // counted in boundary_length once and must stay counted once.
        let credit = indirect_boundary_credit(&self.grid, x, y, player);

        let me = (player - 1) as usize;
        let merged = summary.canonical_tag(player);

        let tag = match merged {
            Some(canonical) => {
                // Welding 1-4 previously disjoint fragments into one area.
                let fragments = summary.fragment_count(player);
                self.players[me].busy_areas -= fragments - 1;
                canonical
            }
            None => {
                if self.players[me].busy_areas == self.max_areas {
                    return false;
                }
                self.players[me].busy_areas += 1;
                self.mint_tag()
            }
        };

        self.players[me].busy_fields += 1;
        self.players[me].boundary_length += summary.potential - summary.occupied - credit;

        self.grid.place(x, y, player, tag);
        self.free_cells -= 1;

        // The claimed cell was a boundary cell of every owner it touches,
        // the mover included when this is a merge. One decrement per
        // distinct owner, however many sides that owner covers.
        for &owner in summary.owners() {
            self.players[(owner - 1) as usize].boundary_length -= 1;
        }

        if merged.is_some() {
            let seeds: Vec<(u32, u32)> = self.grid.neighbors(x, y).collect();
            recolor(&mut self.grid, seeds, player, tag);
        }

        true
    }
}
