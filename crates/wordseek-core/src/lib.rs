//! Core data structures for word-search puzzles.
//!
//! This crate provides the types shared by puzzle generation, selection
//! checking, and persistence.
//!
//! # Overview
//!
//! 1. **Cells** - what a grid is made of
//!    - [`letter`]: Type-safe uppercase letters `A`-`Z`
//!    - [`position`]: `(row, col)` cell coordinates
//!
//! 2. **Lines** - how words run through a grid
//!    - [`direction`]: The eight compass [`Direction`]s and [`DirectionSet`]
//!    - [`difficulty`]: Named presets selecting a [`DirectionSet`]
//!
//! 3. **Puzzle surfaces** - words and grids
//!    - [`word`]: Validated [`Word`]s and their [`PlacedWord`] layouts
//!    - [`grid`]: The finished [`Grid`] and the [`DraftGrid`] used while placing words
//!
//! # Examples
//!
//! ```
//! use wordseek_core::{Direction, DraftGrid, Letter, PlacedWord, Position, Word};
//!
//! let mut draft = DraftGrid::new(5);
//! let cat = PlacedWord::new(Word::new("CAT")?, Position::new(0, 0), Direction::Right);
//! assert!(draft.place(&cat));
//!
//! let grid = draft.fill(|| Letter::from_char('X').unwrap());
//! assert!(grid.holds(&cat));
//! assert_eq!(grid.row_strings()[0], "CATXX");
//! # Ok::<(), wordseek_core::WordError>(())
//! ```

pub mod difficulty;
pub mod direction;
pub mod grid;
pub mod letter;
pub mod position;
pub mod word;

pub use self::{
    difficulty::{Difficulty, ParseDifficultyError},
    direction::{Direction, DirectionSet},
    grid::{DraftGrid, Grid, ParseGridError},
    letter::Letter,
    position::Position,
    word::{PlacedWord, Word, WordError},
};
