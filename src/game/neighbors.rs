//! Neighbor analysis for a prospective placement.
//!
//! Everything here is computed fresh per move from the ≤4 direct neighbors
//! of the target cell; no scratch state survives between calls.

use crate::board::grid::{Grid, DIRECTIONS};
use crate::board::player::PlayerId;

/// Summary of the direct neighborhood of a target cell.
///
/// `fragments` holds the deduplicated `(owner, tag)` pairs observed among
/// occupied neighbors and `owners` the deduplicated owners alone; both are
/// fixed four-slot arrays since a cell has at most four neighbors.
#[derive(Debug, Default)]
pub(crate) struct NeighborSummary {
    /// In-bounds neighbor coordinates.
    pub potential: u64,
    /// Occupied in-bounds neighbors.
    pub occupied: u64,
    fragments: [(PlayerId, u64); 4],
    fragment_len: usize,
    owners: [PlayerId; 4],
    owner_len: usize,
}

impl NeighborSummary {
    /// Examines the four direct neighbors of (x, y).
    pub fn scan(grid: &Grid, x: u32, y: u32) -> NeighborSummary {
        let mut summary = NeighborSummary::default();
        for (dx, dy) in DIRECTIONS {
            let Some((nx, ny)) = grid.offset(x, y, dx, dy) else {
                continue;
            };
            summary.potential += 1;
            let cell = grid.cell(nx, ny);
            if let Some(owner) = cell.owner {
                summary.occupied += 1;
                summary.record(owner, cell.tag);
            }
        }
        summary
    }

    fn record(&mut self, owner: PlayerId, tag: u64) {
        if self.fragments[..self.fragment_len].contains(&(owner, tag)) {
            return;
        }
        self.fragments[self.fragment_len] = (owner, tag);
        self.fragment_len += 1;

        if !self.owners[..self.owner_len].contains(&owner) {
            self.owners[self.owner_len] = owner;
            self.owner_len += 1;
        }
    }

    /// Number of distinct fragments of `player` adjacent to the target.
    ///
    /// Distinct tags mean distinct components: before the move those
    /// fragments were necessarily disjoint.
    pub fn fragment_count(&self, player: PlayerId) -> u32 {
        self.fragments[..self.fragment_len]
            .iter()
            .filter(|&&(owner, _)| owner == player)
            .count() as u32
    }

    /// Minimum tag among the fragments of `player` adjacent to the target,
    /// or `None` if the placement would not touch any of them.
    pub fn canonical_tag(&self, player: PlayerId) -> Option<u64> {
        self.fragments[..self.fragment_len]
            .iter()
            .filter(|&&(owner, _)| owner == player)
            .map(|&(_, tag)| tag)
            .min()
    }

    /// Distinct owners among occupied direct neighbors.
    pub fn owners(&self) -> &[PlayerId] {
        &self.owners[..self.owner_len]
    }
}

/// Counts free direct neighbors of (x, y) that already border a cell of
/// `player` through some path other than (x, y) itself.
///
/// For each free neighbor the inspected cells are its two side neighbors
/// and the far cell along the same axis. Such a neighbor is already part
/// of the player's boundary, so the boundary delta for placing at (x, y)
/// must not count it a second time. Call this before placing the marker.
pub(crate) fn indirect_boundary_credit(grid: &Grid, x: u32, y: u32, player: PlayerId) -> u64 {
    let mut credit = 0;
    for (dx, dy) in DIRECTIONS {
        let Some((nx, ny)) = grid.offset(x, y, dx, dy) else {
            continue;
        };
        if !grid.is_free(nx, ny) {
            continue;
        }
        let reachable_elsewhere = DIRECTIONS.iter().any(|&(ex, ey)| {
            match grid.offset(nx, ny, ex, ey) {
                Some((mx, my)) if (mx, my) != (x, y) => grid.owner(mx, my) == Some(player),
                _ => false,
            }
        });
        if reachable_elsewhere {
            credit += 1;
        }
    }
    credit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_counts_potential_neighbors() {
        let grid = Grid::new(3, 3).unwrap();
        assert_eq!(NeighborSummary::scan(&grid, 1, 1).potential, 4);
        assert_eq!(NeighborSummary::scan(&grid, 0, 0).potential, 2);
        assert_eq!(NeighborSummary::scan(&grid, 1, 0).potential, 3);
    }

    #[test]
    fn scan_counts_occupied_neighbors() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.place(0, 1, 1, 10);
        grid.place(2, 1, 2, 11);
        let summary = NeighborSummary::scan(&grid, 1, 1);
        assert_eq!(summary.potential, 4);
        assert_eq!(summary.occupied, 2);
        // Scan order is right, left, down, up.
        assert_eq!(summary.owners(), &[2, 1]);
    }

    #[test]
    fn fragments_deduplicate_by_owner_and_tag() {
        let mut grid = Grid::new(3, 3).unwrap();
        // Same fragment of player 1 touches (1,1) from two sides.
        grid.place(0, 1, 1, 10);
        grid.place(1, 0, 1, 10);
        // A second, separate fragment of player 1.
        grid.place(2, 1, 1, 20);
        let summary = NeighborSummary::scan(&grid, 1, 1);
        assert_eq!(summary.occupied, 3);
        assert_eq!(summary.fragment_count(1), 2);
        assert_eq!(summary.owners(), &[1]);
    }

    #[test]
    fn canonical_tag_is_minimum_of_touched_fragments() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.place(0, 1, 1, 30);
        grid.place(2, 1, 1, 7);
        grid.place(1, 0, 2, 3);
        let summary = NeighborSummary::scan(&grid, 1, 1);
        assert_eq!(summary.canonical_tag(1), Some(7));
        assert_eq!(summary.canonical_tag(2), Some(3));
        assert_eq!(summary.canonical_tag(3), None);
    }

    #[test]
    fn four_distinct_fragments_fill_the_summary() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.place(0, 1, 1, 1);
        grid.place(2, 1, 1, 2);
        grid.place(1, 0, 1, 3);
        grid.place(1, 2, 1, 4);
        let summary = NeighborSummary::scan(&grid, 1, 1);
        assert_eq!(summary.fragment_count(1), 4);
        assert_eq!(summary.canonical_tag(1), Some(1));
    }

    #[test]
    fn indirect_credit_sees_around_the_corner() {
        // Player 1 owns (0,0). Placing at (1,1): the free neighbor (0,1)
        // touches (0,0) via its side cell, and so does (1,0). Both are
        // already boundary cells of player 1.
        let mut grid = Grid::new(3, 3).unwrap();
        grid.place(0, 0, 1, 1);
        assert_eq!(indirect_boundary_credit(&grid, 1, 1, 1), 2);
    }

    #[test]
    fn indirect_credit_sees_the_far_cell() {
        // Player 1 owns (3,1). Placing at (1,1): the free neighbor (2,1)
        // touches (3,1) along the same axis.
        let mut grid = Grid::new(4, 3).unwrap();
        grid.place(3, 1, 1, 1);
        assert_eq!(indirect_boundary_credit(&grid, 1, 1, 1), 1);
    }

    #[test]
    fn diagonal_contact_earns_no_credit() {
        // (0,1) is occupied but only diagonally adjacent to the free
        // neighbors of (1,1); none of them borders player 1 directly.
        let mut grid = Grid::new(3, 3).unwrap();
        grid.place(0, 1, 1, 1);
        assert_eq!(indirect_boundary_credit(&grid, 1, 1, 1), 0);
    }

    #[test]
    fn indirect_credit_ignores_other_players() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.place(0, 0, 2, 1);
        assert_eq!(indirect_boundary_credit(&grid, 1, 1, 1), 0);
    }

    #[test]
    fn indirect_credit_counts_each_free_neighbor_once() {
        // The free neighbor (1,0) of target (1,1) touches player 1 both
        // at (0,0) and (2,0); it still yields a single unit of credit.
        let mut grid = Grid::new(3, 3).unwrap();
        grid.place(0, 0, 1, 1);
        grid.place(2, 0, 1, 2);
        // (0,1) also borders (0,0); (2,1) also borders (2,0).
        assert_eq!(indirect_boundary_credit(&grid, 1, 1, 1), 3);
    }

    #[test]
    fn occupied_neighbors_earn_no_indirect_credit() {
        // (1,0) is an occupied neighbor of the target, so it is skipped;
        // only the free neighbor (2,1) borders player 1 at (2,0).
        let mut grid = Grid::new(3, 3).unwrap();
        grid.place(1, 0, 1, 1);
        grid.place(2, 0, 1, 1);
        assert_eq!(indirect_boundary_credit(&grid, 1, 1, 1), 1);
    }
}
