//! Landgrab engine library.
//!
//! A territory-claiming board game engine: players place markers on a
//! rectangular grid, owning up to a capped number of disjoint connected
//! areas. Per-player field, area, and boundary counters are maintained
//! incrementally on every move. Exposes the board, game, and protocol
//! modules for use by integration tests and the binary entry point.

pub mod board;
pub mod game;
pub mod protocol;
pub mod session;
