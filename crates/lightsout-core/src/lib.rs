//! Core data structures for the Lights Out puzzle.
//!
//! This crate provides the board state machine shared by the generator,
//! game session, and application crates:
//!
//! - [`position`]: Board coordinate types, including the `r-c` string
//!   encoding used at presentation boundaries
//! - [`grid`]: The rectangular lit/unlit board, the toggle rule (flipping a
//!   cell also flips its four orthogonal neighbors), and the win predicate
//!
//! # Examples
//!
//! ```
//! use lightsout_core::{Grid, Position};
//!
//! let mut grid = Grid::unlit(5, 5).unwrap();
//!
//! // Toggling a cell lights it together with its orthogonal neighbors.
//! grid.toggle(Position::new(2, 2));
//! assert_eq!(grid.lit_count(), 5);
//!
//! // Toggling the same cell again restores the cleared board.
//! grid.toggle(Position::new(2, 2));
//! assert!(grid.is_cleared());
//! ```

pub mod grid;
pub mod position;

// Re-export commonly used types
pub use self::{
    grid::{Grid, InvalidDimensionError, ParseGridError},
    position::{ParsePositionError, Position},
};
