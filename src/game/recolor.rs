//! Flood-fill retagging of merged regions.
//!
//! When a placement welds several fragments of one player together, every
//! cell of the merged region must end up carrying the canonical tag so
//! that later merge decisions stay local. The traversal uses an explicit
//! work stack: depth never scales with region size, only the stack length
//! does, and that is bounded by the board area.

use crate::board::grid::{Grid, DIRECTIONS};
use crate::board::player::PlayerId;

/// Retags every cell of `player` reachable from the seed coordinates whose
/// tag differs from `canonical`.
///
/// Seeds must be in-bounds. Cells already carrying the canonical tag are
/// not revisited, which is what terminates the traversal.
pub(crate) fn recolor(
    grid: &mut Grid,
    seeds: impl IntoIterator<Item = (u32, u32)>,
    player: PlayerId,
    canonical: u64,
) {
    let mut stack: Vec<(u32, u32)> = seeds.into_iter().collect();

    while let Some((x, y)) = stack.pop() {
        let cell = grid.cell(x, y);
        if cell.owner != Some(player) || cell.tag == canonical {
            continue;
        }
        grid.set_tag(x, y, canonical);
        for (dx, dy) in DIRECTIONS {
            if let Some(next) = grid.offset(x, y, dx, dy) {
                stack.push(next);
            }
        }
    }
}
