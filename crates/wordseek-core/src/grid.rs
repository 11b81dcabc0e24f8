//! Letter grids.
//!
//! Two grid types cover the life of a puzzle:
//!
//! - [`DraftGrid`] is the scratch surface used while words are being placed.
//!   Cells may still be empty.
//! - [`Grid`] is the finished puzzle surface. Every cell holds exactly one
//!   [`Letter`], which the type enforces by construction.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{DirectionSet, Letter, PlacedWord, Position, Word};

/// A finished square letter grid.
///
/// # Text format
///
/// One line per row, one letter per cell. Surrounding whitespace on each line
/// and blank lines are ignored; lowercase letters are accepted.
///
/// # Examples
///
/// ```
/// use wordseek_core::{Grid, Letter, Position};
///
/// let grid: Grid = "
///     CAT
///     XOX
///     XXG
/// "
/// .parse()
/// .unwrap();
///
/// assert_eq!(grid.size(), 3);
/// assert_eq!(grid[Position::new(1, 1)], Letter::from_char('O').unwrap());
/// assert_eq!(grid.to_string(), "CAT\nXOX\nXXG");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<Letter>,
}

/// Errors returned when building a [`Grid`] from rows or text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The input had no rows.
    #[display("grid has no rows")]
    Empty,
    /// A row's length differs from the number of rows.
    #[display("row {row} has {len} cells, expected {expected}")]
    NotSquare {
        /// Zero-based row index.
        row: usize,
        /// Actual number of cells in the row.
        len: usize,
        /// Number of rows, which every row must match.
        expected: usize,
    },
    /// A cell held something other than `A`-`Z`.
    #[display("invalid letter {ch:?} at ({row}, {col})")]
    InvalidLetter {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// The offending character.
        ch: char,
    },
}

impl Grid {
    /// Default grid size.
    pub const DEFAULT_SIZE: usize = 10;

    /// Builds a grid from rows of letters.
    ///
    /// # Errors
    ///
    /// Returns [`ParseGridError::Empty`] if there are no rows, or
    /// [`ParseGridError::NotSquare`] if any row's length differs from the row
    /// count.
    pub fn from_rows(rows: Vec<Vec<Letter>>) -> Result<Self, ParseGridError> {
        let size = rows.len();
        if size == 0 {
            return Err(ParseGridError::Empty);
        }
        let mut cells = Vec::with_capacity(size * size);
        for (row, letters) in rows.into_iter().enumerate() {
            if letters.len() != size {
                return Err(ParseGridError::NotSquare {
                    row,
                    len: letters.len(),
                    expected: size,
                });
            }
            cells.extend(letters);
        }
        Ok(Self { size, cells })
    }

    /// Builds a grid from one string per row.
    ///
    /// # Errors
    ///
    /// Returns [`ParseGridError::InvalidLetter`] for any non-letter character,
    /// plus the errors of [`Grid::from_rows`].
    pub fn from_row_strings<S>(rows: &[S]) -> Result<Self, ParseGridError>
    where
        S: AsRef<str>,
    {
        let rows = rows
            .iter()
            .enumerate()
            .map(|(row, line)| {
                line.as_ref()
                    .chars()
                    .enumerate()
                    .map(|(col, ch)| {
                        Letter::from_char(ch).ok_or(ParseGridError::InvalidLetter { row, col, ch })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the letter at `pos`, or `None` if `pos` is outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Letter> {
        pos.in_bounds(self.size)
            .then(|| self.cells[pos.row * self.size + pos.col])
    }

    /// Returns every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Returns each row as a string.
    #[must_use]
    pub fn row_strings(&self) -> Vec<String> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|l| l.as_char()).collect())
            .collect()
    }

    /// Concatenates the letters at `positions`, in order.
    ///
    /// Returns `None` if any position is outside the grid.
    #[must_use]
    pub fn read(&self, positions: &[Position]) -> Option<String> {
        positions
            .iter()
            .map(|pos| self.get(*pos).map(Letter::as_char))
            .collect()
    }

    /// Returns `true` if the grid spells `placed.word` along its path.
    #[must_use]
    pub fn holds(&self, placed: &PlacedWord) -> bool {
        let Some(path) = placed.path(self.size) else {
            return false;
        };
        path.into_iter()
            .zip(placed.word.letters())
            .all(|(pos, letter)| self[pos] == letter)
    }

    /// Searches for a placement of `word` whose path passes through `pos`.
    ///
    /// Every direction in `directions` is tried both forwards and reversed,
    /// with every start cell that puts `pos` on the path. The first
    /// placement the grid actually spells is returned.
    ///
    /// A word that happens to be spelled twice in the grid is found at
    /// whichever placement covers `pos`, so coincidental spellings count too.
    #[must_use]
    pub fn find_placement_through(
        &self,
        word: &Word,
        pos: Position,
        directions: DirectionSet,
    ) -> Option<PlacedWord> {
        if !pos.in_bounds(self.size) {
            return None;
        }
        for offset in 0..word.len() {
            for forward in directions.directions() {
                for direction in [forward, forward.opposite()] {
                    let Some(start) = pos.step(direction.opposite(), offset, self.size) else {
                        continue;
                    };
                    let placed = PlacedWord::new(word.clone(), start, direction);
                    if self.holds(&placed) {
                        return Some(placed);
                    }
                }
            }
        }
        None
    }
}

impl Index<Position> for Grid {
    type Output = Letter;

    fn index(&self, pos: Position) -> &Self::Output {
        assert!(
            pos.in_bounds(self.size),
            "position {pos} is outside a {0}x{0} grid",
            self.size
        );
        &self.cells[pos.row * self.size + pos.col]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.row_strings().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>();
        Self::from_row_strings(&rows)
    }
}

/// A grid under construction whose cells may still be empty.
///
/// Words are written with [`DraftGrid::place`] after checking
/// [`DraftGrid::can_place`]. Once placement is done, [`DraftGrid::fill`]
/// fills the gaps and produces a finished [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftGrid {
    size: usize,
    cells: Vec<Option<Letter>>,
}

impl DraftGrid {
    /// Creates an empty `size × size` draft.
    ///
    /// A `size` of 0 is raised to 1; a finished [`Grid`] always has a cell.
    #[must_use]
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the letter at `pos`, or `None` if the cell is empty or outside
    /// the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Letter> {
        if pos.in_bounds(self.size) {
            self.cells[pos.row * self.size + pos.col]
        } else {
            None
        }
    }

    /// Returns `true` if `placed` fits in the grid and every cell on its path
    /// is either empty or already holds the required letter.
    #[must_use]
    pub fn can_place(&self, placed: &PlacedWord) -> bool {
        let Some(path) = placed.path(self.size) else {
            return false;
        };
        path.into_iter()
            .zip(placed.word.letters())
            .all(|(pos, letter)| self.get(pos).is_none_or(|existing| existing == letter))
    }

    /// Writes the letters of `placed` along its path.
    ///
    /// Returns `false` and leaves the grid untouched if
    /// [`can_place`](Self::can_place) would reject the placement.
    pub fn place(&mut self, placed: &PlacedWord) -> bool {
        if !self.can_place(placed) {
            return false;
        }
        let Some(path) = placed.path(self.size) else {
            return false;
        };
        for (pos, letter) in path.into_iter().zip(placed.word.letters()) {
            self.cells[pos.row * self.size + pos.col] = Some(letter);
        }
        true
    }

    /// Returns the number of cells that are still empty.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Fills every empty cell with a letter from `next_letter` and returns the
    /// finished grid.
    ///
    /// `next_letter` is called once per empty cell, in row-major order.
    #[must_use]
    pub fn fill<F>(self, mut next_letter: F) -> Grid
    where
        F: FnMut() -> Letter,
    {
        let cells = self
            .cells
            .into_iter()
            .map(|cell| cell.unwrap_or_else(&mut next_letter))
            .collect();
        Grid {
            size: self.size,
            cells,
        }
    }
}
