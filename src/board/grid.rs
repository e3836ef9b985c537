//! Dense cell storage for the game board.
//!
//! Cells live in one owned flat buffer indexed by `y * width + x`, so the
//! grid has a single allocation and no pointer arithmetic. A cell records
//! its owner (if any) and the connected-component tag it carried the last
//! time it was touched; tags are meaningful only for occupied cells.

use std::collections::TryReserveError;

use super::player::PlayerId;

/// The four axis-aligned neighbor offsets: right, left, down, up.
pub const DIRECTIONS: [(i64, i64); 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];

/// One cell of the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    /// Owning player, or `None` for a free cell.
    pub owner: Option<PlayerId>,
    /// Connected-component tag; meaningful only when `owner` is set.
    pub tag: u64,
}

/// Dense rectangular cell storage with fixed dimensions.
#[derive(Debug, Clone)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocates a grid of free cells.
    ///
    /// Allocation is fallible so that construction of an oversized board
    /// reports failure instead of aborting the process.
    pub fn new(width: u32, height: u32) -> Result<Grid, TryReserveError> {
        let len = width as u64 * height as u64;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len as usize)?;
        cells.resize(len as usize, Cell::default());
        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    /// Board width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Board height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns true if (x, y) is a valid cell coordinate.
    pub fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    fn idx(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Reads the cell at (x, y). The coordinate must be in bounds.
    pub fn cell(&self, x: u32, y: u32) -> Cell {
        self.cells[self.idx(x, y)]
    }

    /// Owner of the cell at (x, y), or `None` for a free or out-of-bounds
    /// coordinate.
    pub fn owner(&self, x: u32, y: u32) -> Option<PlayerId> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.cells[self.idx(x, y)].owner
    }

    /// Returns true if the in-bounds cell at (x, y) has no owner.
    pub fn is_free(&self, x: u32, y: u32) -> bool {
        self.cells[self.idx(x, y)].owner.is_none()
    }

    /// Places a marker: sets both owner and tag. The coordinate must be in
    /// bounds.
    pub fn place(&mut self, x: u32, y: u32, owner: PlayerId, tag: u64) {
        let idx = self.idx(x, y);
        self.cells[idx] = Cell {
            owner: Some(owner),
            tag,
        };
    }

    /// Rewrites the component tag of an occupied cell.
    pub fn set_tag(&mut self, x: u32, y: u32, tag: u64) {
        let idx = self.idx(x, y);
        self.cells[idx].tag = tag;
    }

    /// Applies a direction offset to (x, y) with bounds checking.
    pub fn offset(&self, x: u32, y: u32, dx: i64, dy: i64) -> Option<(u32, u32)> {
        let nx = x as i64 + dx;
        let ny = y as i64 + dy;
        if nx < 0 || ny < 0 || nx >= self.width as i64 || ny >= self.height as i64 {
            return None;
        }
        Some((nx as u32, ny as u32))
    }

    /// Iterates over the in-bounds direct neighbors of (x, y).
    pub fn neighbors(&self, x: u32, y: u32) -> impl Iterator<Item = (u32, u32)> + '_ {
        DIRECTIONS
            .iter()
            .filter_map(move |&(dx, dy)| self.offset(x, y, dx, dy))
    }
}
