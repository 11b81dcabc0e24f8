//! Grid position coordinates.

use std::fmt::{self, Display};

use crate::Direction;

/// A cell position on a square grid, identified by `(row, col)`.
///
/// Rows grow downward and columns grow to the right, both starting at 0.
/// A position carries no grid size; bounds are checked by the operations that
/// take a size.
///
/// # Examples
///
/// ```
/// use wordseek_core::{Direction, Position};
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.step(Direction::DownRight, 2, 10), Some(Position::new(4, 5)));
/// assert_eq!(pos.step(Direction::Up, 3, 10), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns `true` if this position lies inside a `size × size` grid.
    #[must_use]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Moves `steps` cells in `direction`.
    ///
    /// Returns `None` if the result leaves a `size × size` grid.
    #[must_use]
    pub fn step(self, direction: Direction, steps: usize, size: usize) -> Option<Self> {
        let steps = isize::try_from(steps).ok()?;
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr.checked_mul(steps)?)?;
        let col = self.col.checked_add_signed(dc.checked_mul(steps)?)?;
        let pos = Self::new(row, col);
        pos.in_bounds(size).then_some(pos)
    }

    /// Returns the signed `(row, col)` difference from `self` to `other`.
    #[must_use]
    pub fn delta_to(self, other: Self) -> Option<(isize, isize)> {
        let dr = isize::try_from(other.row).ok()? - isize::try_from(self.row).ok()?;
        let dc = isize::try_from(other.col).ok()? - isize::try_from(self.col).ok()?;
        Some((dr, dc))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
