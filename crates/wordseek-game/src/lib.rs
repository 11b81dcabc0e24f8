//! Game session management for word-search puzzles.
//!
//! # Overview
//!
//! - [`Selection`] and [`SelectionTracker`]: the cells a player traces
//! - [`resolver`]: pure functions that check a selection against the word set
//! - [`Game`]: a session that records found words and detects completion
//! - [`GridView`]: a read-only projection for renderers
//!
//! # Examples
//!
//! ```
//! use wordseek_core::{Difficulty, Position};
//! use wordseek_game::{Game, GridView, Selection, SelectionOutcome};
//! use wordseek_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::for_difficulty(Difficulty::Medium);
//! let mut game = Game::new(generator.generate_with_seed(PuzzleSeed::from_phrase("lib")));
//!
//! let stray = Selection::line(Position::new(0, 0), Position::new(5, 1));
//! assert!(stray.is_none());
//!
//! let outcome = game
//!     .resolve_selection(&Selection::new(vec![Position::new(0, 0)]))
//!     .unwrap();
//! assert_eq!(outcome, SelectionOutcome::NoMatch);
//!
//! let view = GridView::build(&game, None);
//! assert_eq!(view.found_count(), 0);
//! ```

mod error;
mod game;
pub mod resolver;
mod selection;
mod view;

pub use self::{
    error::{GameError, InvalidState},
    game::{Game, GameStatus, SelectionOutcome},
    selection::{Selection, SelectionTracker},
    view::{CellView, CellVisualState, GridView, WordEntry},
};
