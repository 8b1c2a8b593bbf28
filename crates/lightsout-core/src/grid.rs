//! The Lights Out board and its toggle rule.

use std::{fmt, ops::Index, str::FromStr};

use crate::Position;

/// An error which is returned when board dimensions are rejected.
///
/// Dimensions must be at least 1×1 and each side must fit in an `i32` so
/// that every cell is addressable by a [`Position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid board dimensions {rows}x{cols}: rows and cols must be at least 1")]
pub struct InvalidDimensionError {
    /// The rejected row count.
    pub rows: usize,
    /// The rejected column count.
    pub cols: usize,
}

/// A rectangular board of lit/unlit cells.
///
/// The grid has fixed `rows × cols` dimensions for the lifetime of one
/// game and stores one boolean per cell ("lit") in row-major order. The
/// only mutation is the toggle rule: flipping a cell together with its
/// four orthogonal neighbors, silently skipping any target outside the
/// board.
///
/// # Examples
///
/// ```
/// use lightsout_core::{Grid, Position};
///
/// let mut grid = Grid::unlit(3, 3).unwrap();
/// assert!(grid.is_cleared());
///
/// grid.toggle(Position::new(1, 1));
/// assert_eq!(grid.lit_count(), 5);
/// assert!(!grid.is_cleared());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an entirely unlit grid.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDimensionError`] if `rows` or `cols` is zero, or if
    /// either side does not fit in an `i32`.
    pub fn unlit(rows: usize, cols: usize) -> Result<Self, InvalidDimensionError> {
        Self::validate_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        })
    }

    /// Creates a grid by evaluating `f` once per cell, in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDimensionError`] if `rows` or `cols` is zero, or if
    /// either side does not fit in an `i32`.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Result<Self, InvalidDimensionError>
    where
        F: FnMut(Position) -> bool,
    {
        let mut grid = Self::unlit(rows, cols)?;
        for i in 0..grid.cells.len() {
            let pos = grid.position_of(i);
            grid.cells[i] = f(pos);
        }
        Ok(grid)
    }

    /// Checks whether `rows × cols` are acceptable board dimensions,
    /// without building a grid.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDimensionError`] if `rows` or `cols` is zero, or if
    /// either side does not fit in an `i32`.
    pub fn validate_dimensions(rows: usize, cols: usize) -> Result<(), InvalidDimensionError> {
        if rows < 1 || cols < 1 || i32::try_from(rows).is_err() || i32::try_from(cols).is_err() {
            return Err(InvalidDimensionError { rows, cols });
        }
        Ok(())
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns whether the position lies on the board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.index_of(pos).is_some()
    }

    /// Returns the lit state of the cell, or `None` for off-board positions.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<bool> {
        self.index_of(pos).map(|i| self.cells[i])
    }

    /// Flips the single cell at `pos`.
    ///
    /// Off-board positions are silently skipped. Returns whether a cell was
    /// actually flipped.
    pub fn flip(&mut self, pos: Position) -> bool {
        match self.index_of(pos) {
            Some(i) => {
                self.cells[i] = !self.cells[i];
                true
            }
            None => false,
        }
    }

    /// Applies the toggle rule at `pos`: flips the cell itself and its four
    /// orthogonal neighbors.
    ///
    /// Each of the five targets is flipped independently, and targets
    /// outside the board are silently skipped. This makes the operation
    /// total: any position (a corner, an edge, or a coordinate nowhere
    /// near the board) is a valid input. Returns the number of cells that
    /// were flipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use lightsout_core::{Grid, Position};
    ///
    /// let mut grid = Grid::unlit(3, 3).unwrap();
    /// // A corner toggle reaches only three cells.
    /// assert_eq!(grid.toggle(Position::new(0, 0)), 3);
    /// ```
    pub fn toggle(&mut self, pos: Position) -> usize {
        pos.cross()
            .into_iter()
            .filter(|&target| self.flip(target))
            .count()
    }

    /// Returns whether every cell is unlit, which is the win condition.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(|&lit| !lit)
    }

    /// Returns the number of lit cells.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&lit| lit).count()
    }

    /// Returns an iterator over all board positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let (rows, cols) = (self.rows, self.cols);
        (0..rows).flat_map(move |row| (0..cols).map(move |col| position_from_usize(row, col)))
    }

    fn index_of(&self, pos: Position) -> Option<usize> {
        let row = usize::try_from(pos.row()).ok()?;
        let col = usize::try_from(pos.col()).ok()?;
        (row < self.rows && col < self.cols).then_some(row * self.cols + col)
    }

    fn position_of(&self, index: usize) -> Position {
        debug_assert!(index < self.cells.len());
        position_from_usize(index / self.cols, index % self.cols)
    }
}

// Both sides are validated to fit in i32 at construction.
#[expect(clippy::cast_possible_truncation)]
fn position_from_usize(row: usize, col: usize) -> Position {
    Position::new(row as i32, col as i32)
}

impl Index<Position> for Grid {
    type Output = bool;

    /// # Panics
    ///
    /// Panics if `pos` lies outside the board. Use [`Grid::get`] for
    /// positions that may be off-board.
    fn index(&self, pos: Position) -> &Self::Output {
        let Some(i) = self.index_of(pos) else {
            panic!(
                "position {pos} is outside the {}x{} board",
                self.rows, self.cols
            );
        };
        &self.cells[i]
    }
}

/// Formats the grid one row per line, `.` for unlit and `O` for lit:
///
/// ```text
/// ...
/// OO.     (where . is off, and O is on)
/// ...
/// ```
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols {
                let lit = self.cells[row * self.cols + col];
                f.write_str(if lit { "O" } else { "." })?;
            }
        }
        Ok(())
    }
}

/// An error which can be returned when parsing a grid string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The string contains no rows.
    #[display("grid string contains no rows")]
    Empty,
    /// A row has a different width than the first row.
    #[display("uneven grid rows: expected {expected} cells, found {found}")]
    UnevenRows {
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// The string contains a character other than `.`, `O`, or whitespace.
    #[display("unexpected character {ch:?} in grid string")]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
    },
}

/// Parses the notation produced by [`Grid`]'s `Display` implementation.
///
/// Rows are whitespace-separated runs of `.` (unlit) and `O` (lit), so
/// both the multi-line `Display` output and a compact one-line form like
/// `".O. OOO .O."` parse. Mostly useful for spelling out board fixtures in
/// tests.
///
/// # Examples
///
/// ```
/// use lightsout_core::Grid;
///
/// let grid: Grid = "
///     .O.
///     OOO
///     .O.
/// "
/// .parse()
/// .unwrap();
/// assert_eq!(grid.lit_count(), 5);
/// ```
impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::new();
        let mut rows = 0;
        let mut cols = None;
        for token in s.split_whitespace() {
            let start = cells.len();
            for ch in token.chars() {
                match ch {
                    '.' => cells.push(false),
                    'O' => cells.push(true),
                    ch => return Err(ParseGridError::UnexpectedCharacter { ch }),
                }
            }
            let found = cells.len() - start;
            let expected = *cols.get_or_insert(found);
            if found != expected {
                return Err(ParseGridError::UnevenRows { expected, found });
            }
            rows += 1;
        }
        let cols = cols.ok_or(ParseGridError::Empty)?;
        Self::validate_dimensions(rows, cols).map_err(|_| ParseGridError::Empty)?;
        Ok(Self { rows, cols, cells })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn grid(s: &str) -> Grid {
        s.parse().expect("valid grid string")
    }

    #[test]
    fn test_unlit_is_cleared() {
        let grid = Grid::unlit(5, 5).unwrap();
        assert_eq!(grid.rows(), 5);
        assert_eq!(grid.cols(), 5);
        assert_eq!(grid.lit_count(), 0);
        assert!(grid.is_cleared());
    }

    #[test]
    fn test_invalid_dimensions_are_rejected() {
        assert_eq!(
            Grid::unlit(0, 5),
            Err(InvalidDimensionError { rows: 0, cols: 5 })
        );
        assert_eq!(
            Grid::unlit(5, 0),
            Err(InvalidDimensionError { rows: 5, cols: 0 })
        );
        assert!(Grid::unlit(0, 0).is_err());
    }

    #[test]
    fn test_from_fn_visits_cells_in_row_major_order() {
        let mut visited = Vec::new();
        let grid = Grid::from_fn(2, 3, |pos| {
            visited.push(pos);
            pos.row() == pos.col()
        })
        .unwrap();

        let expected: Vec<_> = grid.positions().collect();
        assert_eq!(visited, expected);
        assert_eq!(grid.to_string(), "O..\n.O.");
    }

    #[test]
    fn test_get_is_none_off_board() {
        let grid = Grid::unlit(3, 3).unwrap();
        assert_eq!(grid.get(Position::new(0, 0)), Some(false));
        assert_eq!(grid.get(Position::new(-1, 0)), None);
        assert_eq!(grid.get(Position::new(0, 3)), None);
        assert_eq!(grid.get(Position::new(3, 0)), None);
    }

    #[test]
    fn test_toggle_center_lights_a_plus_shape() {
        let mut board = Grid::unlit(3, 3).unwrap();
        assert_eq!(board.toggle(Position::new(1, 1)), 5);
        assert_eq!(board, grid(".O. OOO .O."));
        assert!(!board.is_cleared());
    }

    #[test]
    fn test_toggle_twice_restores_the_board() {
        let mut board = grid("O.O .O. OO.");
        let before = board.clone();
        board.toggle(Position::new(1, 1));
        assert_ne!(board, before);
        board.toggle(Position::new(1, 1));
        assert_eq!(board, before);
    }

    #[test]
    fn test_corner_toggle_flips_exactly_three_cells() {
        let mut board = Grid::unlit(3, 3).unwrap();
        assert_eq!(board.toggle(Position::new(0, 0)), 3);
        assert_eq!(board, grid("OO. O.. ..."));
    }

    #[test]
    fn test_toggle_on_single_cell_board() {
        let mut board = Grid::unlit(1, 1).unwrap();
        assert_eq!(board.toggle(Position::new(0, 0)), 1);
        assert_eq!(board.to_string(), "O");
        assert_eq!(board.toggle(Position::new(0, 0)), 1);
        assert!(board.is_cleared());
    }

    #[test]
    fn test_toggle_on_single_row_board() {
        let mut board = Grid::unlit(1, 4).unwrap();
        assert_eq!(board.toggle(Position::new(0, 1)), 3);
        assert_eq!(board.to_string(), "OOO.");
    }

    #[test]
    fn test_toggle_off_board_is_skipped() {
        let mut board = grid("OO. O.. ...");
        // Off by far: nothing to flip.
        assert_eq!(board.toggle(Position::new(100, 100)), 0);
        assert_eq!(board, grid("OO. O.. ..."));
        // Just above the board: only the (0, 1) neighbor lands on it.
        assert_eq!(board.toggle(Position::new(-1, 1)), 1);
        assert_eq!(board, grid("O.. O.. ..."));
    }

    #[test]
    fn test_index_by_position() {
        let board = grid(".O. OOO .O.");
        assert!(board[Position::new(0, 1)]);
        assert!(!board[Position::new(0, 0)]);
    }

    #[test]
    #[should_panic(expected = "outside the 3x3 board")]
    fn test_index_off_board_panics() {
        let board = Grid::unlit(3, 3).unwrap();
        let _ = board[Position::new(3, 3)];
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!("".parse::<Grid>(), Err(ParseGridError::Empty));
        assert_eq!("   \n  ".parse::<Grid>(), Err(ParseGridError::Empty));
        assert_eq!(
            "..\n...".parse::<Grid>(),
            Err(ParseGridError::UnevenRows {
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            ".x.".parse::<Grid>(),
            Err(ParseGridError::UnexpectedCharacter { ch: 'x' })
        );
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (1..8usize, 1..8usize).prop_flat_map(|(rows, cols)| {
            proptest::collection::vec(any::<bool>(), rows * cols).prop_map(move |cells| Grid {
                rows,
                cols,
                cells,
            })
        })
    }

    proptest! {
        #[test]
        fn prop_toggle_is_its_own_inverse(
            board in arb_grid(),
            row in -2..10i32,
            col in -2..10i32,
        ) {
            let pos = Position::new(row, col);
            let before = board.clone();
            let mut board = board;
            board.toggle(pos);
            board.toggle(pos);
            prop_assert_eq!(board, before);
        }

        #[test]
        fn prop_toggle_is_local(
            board in arb_grid(),
            row in -2..10i32,
            col in -2..10i32,
        ) {
            let pos = Position::new(row, col);
            let before = board.clone();
            let mut board = board;
            let flipped = board.toggle(pos);
            prop_assert!(flipped <= 5);

            let mut changed = 0;
            for target in board.positions() {
                if board.get(target) == before.get(target) {
                    continue;
                }
                changed += 1;
                let row_delta = (target.row() - pos.row()).abs();
                let col_delta = (target.col() - pos.col()).abs();
                prop_assert!(row_delta + col_delta <= 1);
            }
            prop_assert_eq!(changed, flipped);
        }

        #[test]
        fn prop_display_parse_round_trip(board in arb_grid()) {
            let parsed: Grid = board.to_string().parse().unwrap();
            prop_assert_eq!(parsed, board);
        }

        #[test]
        fn prop_is_cleared_matches_lit_count(board in arb_grid()) {
            prop_assert_eq!(board.is_cleared(), board.lit_count() == 0);
        }
    }
}
