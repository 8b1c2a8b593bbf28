//! Randomized board generation for Lights Out.
//!
//! [`BoardGenerator`] produces starting boards by lighting each cell
//! independently with a configurable probability. Generation is
//! reproducible: every generated board carries the [`BoardSeed`] that
//! produced it, and feeding the same seed back in recreates the same
//! board.
//!
//! # Examples
//!
//! ```
//! use lightsout_generator::BoardGenerator;
//!
//! let generator = BoardGenerator::default();
//! let board = generator.generate();
//! assert_eq!(board.grid.rows(), 5);
//! assert_eq!(board.grid.cols(), 5);
//!
//! // The seed makes the board reproducible.
//! let replay = generator.generate_with_seed(board.seed);
//! assert_eq!(replay.grid, board.grid);
//! ```

use std::{fmt, str::FromStr};

use lightsout_core::{Grid, InvalidDimensionError};
use rand::{Rng, RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

/// An error which is returned when generator parameters are rejected.
///
/// Both variants are raised synchronously when the generator is built;
/// generation itself cannot fail.
#[derive(
    Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GenerateError {
    /// The requested board dimensions are out of range.
    #[display("{_0}")]
    InvalidDimension(#[from] InvalidDimensionError),
    /// The lighting probability is outside `0.0..=1.0`.
    #[display("invalid lighting probability {chance_lit}: must be within 0.0..=1.0")]
    InvalidProbability {
        /// The rejected probability.
        chance_lit: f64,
    },
}

/// A seed identifying one generated board.
///
/// Seeds display and parse as hexadecimal, so a board can be shared or
/// replayed by quoting its seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSeed(u64);

impl BoardSeed {
    /// Creates a seed from a raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw seed value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BoardSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// An error which can be returned when parsing a board seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("board seed must be 1 to 16 hex digits")]
pub struct ParseBoardSeedError;

impl FromStr for BoardSeed {
    type Err = ParseBoardSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = u64::from_str_radix(s, 16).map_err(|_| ParseBoardSeedError)?;
        Ok(Self(value))
    }
}

/// A generated starting board together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBoard {
    /// The starting board.
    pub grid: Grid,
    /// The seed that reproduces this board.
    pub seed: BoardSeed,
}

/// Generates starting boards with each cell independently lit with a
/// fixed probability.
///
/// # Examples
///
/// ```
/// use lightsout_generator::BoardGenerator;
///
/// let generator = BoardGenerator::new(3, 4, 1.0).unwrap();
/// let board = generator.generate();
/// assert_eq!(board.grid.lit_count(), 12); // every cell lit
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGenerator {
    rows: usize,
    cols: usize,
    chance_lit: f64,
}

impl BoardGenerator {
    /// Default number of rows.
    pub const DEFAULT_ROWS: usize = 5;
    /// Default number of columns.
    pub const DEFAULT_COLS: usize = 5;
    /// Default probability that a cell starts lit.
    pub const DEFAULT_CHANCE_LIT: f64 = 0.25;

    /// Creates a generator for `rows × cols` boards where each cell starts
    /// lit with probability `chance_lit`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidDimension`] if `rows` or `cols` is
    /// zero (or does not fit in an `i32`), and
    /// [`GenerateError::InvalidProbability`] if `chance_lit` is not within
    /// `0.0..=1.0`. Parameters are validated here so generation itself
    /// cannot fail.
    pub fn new(rows: usize, cols: usize, chance_lit: f64) -> Result<Self, GenerateError> {
        Grid::validate_dimensions(rows, cols)?;
        if !(0.0..=1.0).contains(&chance_lit) {
            return Err(GenerateError::InvalidProbability { chance_lit });
        }
        Ok(Self {
            rows,
            cols,
            chance_lit,
        })
    }

    /// Returns the number of rows of generated boards.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns of generated boards.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the probability that a cell starts lit.
    #[must_use]
    pub const fn chance_lit(&self) -> f64 {
        self.chance_lit
    }

    /// Generates a board from a freshly drawn random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedBoard {
        self.generate_with_seed(BoardSeed::new(rand::rng().random()))
    }

    /// Generates the board identified by `seed`.
    ///
    /// The same seed always produces the same board for the same generator
    /// parameters.
    #[must_use]
    pub fn generate_with_seed(&self, seed: BoardSeed) -> GeneratedBoard {
        let mut rng = Pcg64Mcg::seed_from_u64(seed.value());
        let grid = self.generate_with_rng(&mut rng);
        GeneratedBoard { grid, seed }
    }

    /// Generates a board by drawing one boolean per cell from `rng`, in
    /// row-major order.
    ///
    /// This is the injection point for deterministic tests that want to
    /// supply their own randomness source.
    #[expect(clippy::missing_panics_doc)]
    pub fn generate_with_rng<R>(&self, rng: &mut R) -> Grid
    where
        R: Rng + ?Sized,
    {
        Grid::from_fn(self.rows, self.cols, |_| rng.random_bool(self.chance_lit))
            .expect("dimensions are validated when the generator is built")
    }
}

/// The classic setup: a 5×5 board with a 25% chance per cell.
impl Default for BoardGenerator {
    fn default() -> Self {
        Self {
            rows: Self::DEFAULT_ROWS,
            cols: Self::DEFAULT_COLS,
            chance_lit: Self::DEFAULT_CHANCE_LIT,
        }
    }
}
