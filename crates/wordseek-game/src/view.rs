use wordseek_core::{Letter, Position, Word};

use crate::{Game, Selection};

bitflags::bitflags! {
    /// Highlight flags for a single grid cell.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct CellVisualState: u8 {
        /// The cell lies on a found word.
        const FOUND = 0b0000_0001;
        /// The cell is part of the selection in progress.
        const SELECTED = 0b0000_0010;
    }
}

/// One cell of a [`GridView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Cell position.
    pub position: Position,
    /// Letter shown in the cell.
    pub letter: Letter,
    /// Highlights that apply to the cell.
    pub visual_state: CellVisualState,
}

/// One entry of the word list shown next to the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// The word.
    pub word: Word,
    /// `true` once the word has been found.
    pub found: bool,
}

/// A read-only projection of a [`Game`] for presentation layers.
///
/// Renderers draw from this instead of querying the game cell by cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    size: usize,
    cells: Vec<CellView>,
    words: Vec<WordEntry>,
    completed: bool,
}

impl GridView {
    /// Builds the view of `game`, highlighting `selection` if one is in progress.
    #[must_use]
    pub fn build(game: &Game, selection: Option<&Selection>) -> Self {
        let grid = game.grid();
        let cells = grid
            .positions()
            .map(|position| {
                let mut visual_state = CellVisualState::empty();
                if game.is_cell_in_found_word(position) {
                    visual_state |= CellVisualState::FOUND;
                }
                if selection.is_some_and(|s| s.contains(position)) {
                    visual_state |= CellVisualState::SELECTED;
                }
                CellView {
                    position,
                    letter: grid[position],
                    visual_state,
                }
            })
            .collect();
        let words = game
            .words()
            .iter()
            .map(|word| WordEntry {
                word: word.clone(),
                found: game.is_found(word),
            })
            .collect();
        Self {
            size: grid.size(),
            cells,
            words,
            completed: game.is_completed(),
        }
    }

    /// Returns the side length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at `pos`, or `None` if out of bounds.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<&CellView> {
        pos.in_bounds(self.size)
            .then(|| &self.cells[pos.row * self.size + pos.col])
    }

    /// Returns the cells of row `row`, left to right.
    #[must_use]
    pub fn row(&self, row: usize) -> &[CellView] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    /// Returns all cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[CellView] {
        &self.cells
    }

    /// Returns the word list in placement order.
    #[must_use]
    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    /// Returns the number of found words.
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.words.iter().filter(|entry| entry.found).count()
    }

    /// Returns `true` if the game is completed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }
}
