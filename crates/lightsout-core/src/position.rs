//! Board position (row, column) coordinate types.

use std::{fmt, str::FromStr};

/// A board coordinate identified by row and column.
///
/// Positions are signed and unbounded: a `Position` may reference a cell
/// outside any particular grid. This is intentional: the toggle rule
/// addresses the four orthogonal neighbors of a cell without checking
/// bounds first, and [`Grid`](crate::Grid) silently skips targets that
/// fall outside the board.
///
/// # Examples
///
/// ```
/// use lightsout_core::Position;
///
/// let pos = Position::new(1, 2);
/// assert_eq!(pos.row(), 1);
/// assert_eq!(pos.col(), 2);
/// assert_eq!(pos.up(), Position::new(0, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: i32,
    col: i32,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the row coordinate.
    #[must_use]
    pub const fn row(self) -> i32 {
        self.row
    }

    /// Returns the column coordinate.
    #[must_use]
    pub const fn col(self) -> i32 {
        self.col
    }

    /// Returns the position one row above (saturating at `i32::MIN`).
    #[must_use]
    pub const fn up(self) -> Self {
        Self::new(self.row.saturating_sub(1), self.col)
    }

    /// Returns the position one row below (saturating at `i32::MAX`).
    #[must_use]
    pub const fn down(self) -> Self {
        Self::new(self.row.saturating_add(1), self.col)
    }

    /// Returns the position one column to the left (saturating at `i32::MIN`).
    #[must_use]
    pub const fn left(self) -> Self {
        Self::new(self.row, self.col.saturating_sub(1))
    }

    /// Returns the position one column to the right (saturating at `i32::MAX`).
    #[must_use]
    pub const fn right(self) -> Self {
        Self::new(self.row, self.col.saturating_add(1))
    }

    /// Returns this position and its four orthogonal neighbors.
    ///
    /// These are the five targets of the toggle rule. The array may contain
    /// coordinates outside any particular grid; callers are expected to
    /// bounds-check (or to rely on [`Grid::flip`](crate::Grid::flip), which
    /// skips off-board targets).
    ///
    /// # Examples
    ///
    /// ```
    /// use lightsout_core::Position;
    ///
    /// let cross = Position::new(1, 1).cross();
    /// assert_eq!(cross.len(), 5);
    /// assert!(cross.contains(&Position::new(0, 1)));
    /// ```
    #[must_use]
    pub const fn cross(self) -> [Self; 5] {
        [self, self.right(), self.left(), self.up(), self.down()]
    }
}

/// Formats the position in the `r-c` boundary encoding (e.g. `"1-2"`).
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

/// An error which can be returned when parsing a position string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParsePositionError {
    /// The string has no `-` separator between row and column.
    #[display("missing `-` separator between row and column")]
    MissingSeparator,
    /// A row or column component is not a non-negative integer.
    #[display("row and column must be non-negative integers")]
    InvalidComponent,
}

/// Parses the `r-c` boundary encoding used by presentation layers to key
/// cells (e.g. `"1-2"`).
///
/// Only non-negative coordinates have a string form; off-grid positions
/// never cross the string boundary.
///
/// # Examples
///
/// ```
/// use lightsout_core::Position;
///
/// let pos: Position = "2-4".parse().unwrap();
/// assert_eq!(pos, Position::new(2, 4));
/// assert_eq!(pos.to_string(), "2-4");
/// ```
impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once('-')
            .ok_or(ParsePositionError::MissingSeparator)?;
        let row = row
            .parse()
            .map_err(|_| ParsePositionError::InvalidComponent)?;
        let col = col
            .parse()
            .map_err(|_| ParsePositionError::InvalidComponent)?;
        Ok(Self::new(row, col))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_neighbors() {
        let pos = Position::new(3, 5);
        assert_eq!(pos.up(), Position::new(2, 5));
        assert_eq!(pos.down(), Position::new(4, 5));
        assert_eq!(pos.left(), Position::new(3, 4));
        assert_eq!(pos.right(), Position::new(3, 6));
    }

    #[test]
    fn test_neighbors_go_off_grid() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.up(), Position::new(-1, 0));
        assert_eq!(origin.left(), Position::new(0, -1));
    }

    #[test]
    fn test_cross_contains_self_and_orthogonal_neighbors() {
        let pos = Position::new(1, 1);
        let cross = pos.cross();
        assert_eq!(cross.len(), 5);
        for target in [
            pos,
            Position::new(1, 2),
            Position::new(1, 0),
            Position::new(0, 1),
            Position::new(2, 1),
        ] {
            assert!(cross.contains(&target));
        }
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!("0-0".parse(), Ok(Position::new(0, 0)));
        assert_eq!("12-3".parse(), Ok(Position::new(12, 3)));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            "12".parse::<Position>(),
            Err(ParsePositionError::MissingSeparator)
        );
        assert_eq!(
            "a-0".parse::<Position>(),
            Err(ParsePositionError::InvalidComponent)
        );
        assert_eq!(
            "1-".parse::<Position>(),
            Err(ParsePositionError::InvalidComponent)
        );
        assert_eq!(
            "-1-2".parse::<Position>(),
            Err(ParsePositionError::InvalidComponent)
        );
    }

    proptest! {
        #[test]
        fn prop_display_parse_round_trip(row in 0..10_000i32, col in 0..10_000i32) {
            let pos = Position::new(row, col);
            let parsed: Position = pos.to_string().parse().unwrap();
            prop_assert_eq!(parsed, pos);
        }

        #[test]
        fn prop_cross_targets_are_within_distance_one(row in -100..100i32, col in -100..100i32) {
            let pos = Position::new(row, col);
            for target in pos.cross() {
                let row_delta = (target.row() - pos.row()).abs();
                let col_delta = (target.col() - pos.col()).abs();
                prop_assert!(row_delta + col_delta <= 1);
            }
        }
    }
}
