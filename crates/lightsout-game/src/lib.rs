//! Game session management for Lights Out.
//!
//! This crate ties the board and generator together into a playable
//! session: a [`Game`] owns one grid plus its derived win flag and drives
//! the `Playing`/`Won` state machine. All game logic lives here and in the
//! core crate; presentation layers only request new games, forward cell
//! toggles, and read the resulting state back.
//!
//! # Examples
//!
//! ```
//! use lightsout_game::Game;
//! use lightsout_generator::BoardGenerator;
//!
//! let generator = BoardGenerator::default();
//! let mut game = Game::new(generator.generate());
//!
//! // Toggling mutates the board and reports the resulting status.
//! let pos = game.grid().positions().next().unwrap();
//! let status = game.toggle(pos);
//! assert_eq!(status.is_won(), game.is_won());
//! ```

pub mod game;

// Re-export commonly used types
pub use self::game::{Game, GameStatus};
