//! Board text rendering and its inverse parser.
//!
//! The rendered form lists rows from the top row (y = height - 1) down to
//! y = 0, columns left to right, `.` for a free cell and the owner's
//! symbol otherwise, one `\n` after every row. The parser reads the same
//! format back into an owner layout using the shared symbol table, which
//! is what makes render/parse round trips exact.

use crate::board::player::{player_for_symbol, PlayerId};
use crate::game::Game;

/// Errors from [`parse_board`].
#[derive(Debug, thiserror::Error)]
pub enum BoardParseError {
    #[error("board text is empty")]
    Empty,

    #[error("row {row} has width {got}, expected {expected}")]
    RaggedRow {
        row: usize,
        got: usize,
        expected: usize,
    },

    #[error("unknown cell symbol: '{0}'")]
    UnknownSymbol(char),
}

/// Owner layout recovered from rendered board text.
///
/// Coordinates follow the game's convention: (0, 0) is the bottom-left
/// cell, so the first text row lands at y = height - 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    width: u32,
    height: u32,
    owners: Vec<Option<PlayerId>>,
}

impl BoardLayout {
    /// Layout width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Layout height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Owner of the cell at (x, y), or `None` for a free or out-of-bounds
    /// coordinate.
    pub fn owner(&self, x: u32, y: u32) -> Option<PlayerId> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.owners[(y * self.width + x) as usize]
    }
}

/// Renders the current board as text.
pub fn render_board(game: &Game) -> String {
    let width = game.width();
    let height = game.height();
    let mut out = String::with_capacity(((width as u64 + 1) * height as u64) as usize);

    for y in (0..height).rev() {
        for x in 0..width {
            out.push(match game.owner(x, y) {
                Some(player) => game.symbol(player),
                None => '.',
            });
        }
        out.push('\n');
    }
    out
}

/// Parses text produced by [`render_board`] back into an owner layout.
///
/// All rows must have the width of the first row, and every non-`.`
/// character must come from the player symbol table.
pub fn parse_board(text: &str) -> Result<BoardLayout, BoardParseError> {
    let rows: Vec<&str> = text.lines().collect();
    if rows.is_empty() || rows[0].is_empty() {
        return Err(BoardParseError::Empty);
    }

    let width = rows[0].chars().count();
    let height = rows.len();
    let mut owners = vec![None; width * height];

    for (i, row) in rows.iter().enumerate() {
        let got = row.chars().count();
        if got != width {
            return Err(BoardParseError::RaggedRow {
                row: i,
                got,
                expected: width,
            });
        }

        let y = height - 1 - i;
        for (x, symbol) in row.chars().enumerate() {
            owners[y * width + x] = match symbol {
                '.' => None,
                _ => match player_for_symbol(symbol) {
                    Some(player) => Some(player),
                    None => return Err(BoardParseError::UnknownSymbol(symbol)),
                },
            };
        }
    }

    Ok(BoardLayout {
        width: width as u32,
        height: height as u32,
        owners,
    })
}
