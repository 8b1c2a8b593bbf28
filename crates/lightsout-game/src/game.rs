//! The Lights Out game session and its state machine.

use lightsout_core::{Grid, Position};
use lightsout_generator::GeneratedBoard;

/// The whole-game state: still playing, or won.
///
/// A session starts in [`Playing`](Self::Playing) and moves to
/// [`Won`](Self::Won) when a toggle leaves every cell unlit. `Won` is
/// terminal; only a new game resets the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameStatus {
    /// At least one cell is still lit.
    Playing,
    /// Every cell is unlit.
    Won,
}

/// A Lights Out game session.
///
/// Owns exactly one [`Grid`] plus the derived `won` flag. The flag is a
/// pure function of the grid (true iff every cell is unlit) and is
/// recomputed inside every mutation, so a caller can never observe it out
/// of sync with the board. A session is created per game and replaced
/// wholesale on restart; the only mutation is [`Game::toggle`].
///
/// # Example
///
/// ```
/// use lightsout_core::Position;
/// use lightsout_game::{Game, GameStatus};
/// use lightsout_generator::BoardGenerator;
///
/// let generator = BoardGenerator::new(3, 3, 1.0).unwrap();
/// let mut game = Game::new(generator.generate());
/// assert_eq!(game.status(), GameStatus::Playing);
///
/// game.toggle(Position::new(1, 1));
/// assert_eq!(game.grid().lit_count(), 4); // the plus shape went out
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    grid: Grid,
    won: bool,
}

impl Game {
    /// Creates a new session from a generated starting board.
    ///
    /// A board generated with a lighting chance of zero is already cleared,
    /// so the session may start in [`GameStatus::Won`].
    #[must_use]
    pub fn new(board: GeneratedBoard) -> Self {
        let GeneratedBoard { grid, seed: _ } = board;
        Self::from_grid(grid)
    }

    /// Creates a session from an explicit board state.
    ///
    /// Useful for spelling out fixtures in tests via
    /// [`Grid`]'s `FromStr` implementation.
    #[must_use]
    pub fn from_grid(grid: Grid) -> Self {
        let won = grid.is_cleared();
        Self { grid, won }
    }

    /// Returns the current board, for rendering each cell's lit state.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns whether the board is cleared.
    ///
    /// Always equal to `self.grid().is_cleared()`; the flag is recomputed
    /// after every toggle, never cached stale.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Returns the whole-game status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.won {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }

    /// Applies the toggle rule at `pos` and returns the resulting status.
    ///
    /// Flips the cell and its four orthogonal neighbors (off-board targets
    /// are silently skipped), then recomputes the win flag, so
    /// toggle-then-check is one atomic step from the caller's point of
    /// view. A won session is terminal: toggles on it leave the board
    /// untouched and report [`GameStatus::Won`].
    ///
    /// # Example
    ///
    /// ```
    /// use lightsout_core::{Grid, Position};
    /// use lightsout_game::{Game, GameStatus};
    ///
    /// let grid: Grid = "
    ///     .O.
    ///     OOO
    ///     .O.
    /// "
    /// .parse()
    /// .unwrap();
    /// let mut game = Game::from_grid(grid);
    ///
    /// // One toggle at the center clears the plus shape.
    /// assert_eq!(game.toggle(Position::new(1, 1)), GameStatus::Won);
    /// ```
    pub fn toggle(&mut self, pos: Position) -> GameStatus {
        if self.won {
            return GameStatus::Won;
        }
        self.grid.toggle(pos);
        self.won = self.grid.is_cleared();
        self.status()
    }
}
