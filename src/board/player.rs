//! Player records and the board symbol table.
//!
//! Players are identified by 1-based ids in the public API. Each player
//! carries three incrementally maintained counters: occupied fields,
//! occupied areas, and boundary length (the number of free cells that
//! would extend one of the player's existing areas if claimed next).

/// A 1-based player identifier. Id 0 is never a valid player.
pub type PlayerId = u32;

/// The maximum supported number of players, bounded by the symbol table:
/// 9 digits + 26 lowercase + 26 uppercase letters.
pub const MAX_PLAYERS: u32 = 61;

/// Players with 0-based index below this render as digits.
const DIGIT_SYMBOLS: u32 = 9;

/// Players with 0-based index below this render as digits or lowercase letters.
const DIGIT_AND_LOWER_SYMBOLS: u32 = 35;

/// Per-player counters plus the player's board symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    /// Number of cells currently owned by the player.
    pub busy_fields: u64,
    /// Number of maximal connected owned components. Never exceeds the
    /// game's area cap.
    pub busy_areas: u32,
    /// Number of free cells adjacent to at least one of the player's areas.
    pub boundary_length: u64,
    /// Symbol used when rendering the board.
    pub symbol: char,
}

impl Player {
    /// Creates a player with all counters at zero.
    pub fn new(symbol: char) -> Self {
        Player {
            busy_fields: 0,
            busy_areas: 0,
            boundary_length: 0,
            symbol,
        }
    }
}

/// Returns the board symbol for a 0-based player index.
///
/// The first 9 players use digits `1`-`9`, the next 26 lowercase letters,
/// and the rest uppercase letters. Indices at or above [`MAX_PLAYERS`]
/// have no symbol and are rejected at game construction.
pub fn symbol_for_index(index: u32) -> char {
    if index < DIGIT_SYMBOLS {
        (b'1' + index as u8) as char
    } else if index < DIGIT_AND_LOWER_SYMBOLS {
        (b'a' + (index - DIGIT_SYMBOLS) as u8) as char
    } else {
        (b'A' + (index - DIGIT_AND_LOWER_SYMBOLS) as u8) as char
    }
}

/// Inverse of [`symbol_for_index`], returning a 1-based player id.
///
/// Returns `None` for `.` (a free cell) and any character outside the
/// symbol table.
pub fn player_for_symbol(symbol: char) -> Option<PlayerId> {
    let index = match symbol {
        '1'..='9' => symbol as u32 - '1' as u32,
        'a'..='z' => DIGIT_SYMBOLS + (symbol as u32 - 'a' as u32),
        'A'..='Z' => DIGIT_AND_LOWER_SYMBOLS + (symbol as u32 - 'A' as u32),
        _ => return None,
    };
    Some(index + 1)
}
