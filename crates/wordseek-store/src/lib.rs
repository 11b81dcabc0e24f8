//! Persistence for word-search game sessions.
//!
//! A session is saved as a [`GameState`] snapshot under a store-allocated
//! [`PuzzleId`], scoped to the [`OwnerId`] it belongs to. [`PuzzleStore`] is
//! the storage boundary; [`MemoryStore`] and [`JsonFileStore`] implement it.
//!
//! # Examples
//!
//! ```
//! use std::time::SystemTime;
//!
//! use wordseek_core::Difficulty;
//! use wordseek_game::Game;
//! use wordseek_generator::PuzzleGenerator;
//! use wordseek_store::{GameState, MemoryStore, OwnerId, PuzzleStore};
//!
//! let game = Game::new(PuzzleGenerator::for_difficulty(Difficulty::Easy).generate());
//! let owner = OwnerId::new("alice");
//!
//! let mut store = MemoryStore::new();
//! let id = store.insert(GameState::new(owner.clone(), &game, SystemTime::now()))?;
//!
//! let restored = store.load(&owner, id)?.to_game()?;
//! assert_eq!(restored, game);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

pub use self::{
    error::StoreError,
    ids::{OwnerId, PuzzleId},
    json_file::JsonFileStore,
    memory::MemoryStore,
    state::GameState,
};

mod error;
mod ids;
mod json_file;
mod memory;
mod records;
mod state;

/// A saved puzzle with its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPuzzle {
    /// Store-allocated id.
    pub id: PuzzleId,
    /// The saved snapshot.
    pub state: GameState,
}

impl StoredPuzzle {
    /// Pairs a snapshot with its id.
    #[must_use]
    pub fn new(id: PuzzleId, state: GameState) -> Self {
        Self { id, state }
    }
}

/// Storage for saved game sessions.
///
/// Every lookup is scoped to an owner: a puzzle that exists but belongs to
/// someone else is reported as [`StoreError::NotFound`], the same as one
/// that does not exist.
pub trait PuzzleStore {
    /// Saves a new puzzle and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage fails.
    fn insert(&mut self, state: GameState) -> Result<PuzzleId, StoreError>;

    /// Replaces the snapshot of an existing puzzle owned by `state.owner`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the owner has no such puzzle,
    /// [`StoreError::Completed`] if the stored puzzle is already completed,
    /// or an error if the backing storage fails.
    fn update(&mut self, id: PuzzleId, state: GameState) -> Result<(), StoreError>;

    /// Loads a puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the owner has no such puzzle.
    fn load(&self, owner: &OwnerId, id: PuzzleId) -> Result<GameState, StoreError>;

    /// Returns the most recently saved puzzle the owner has not completed.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage fails.
    fn latest_incomplete(&self, owner: &OwnerId) -> Result<Option<StoredPuzzle>, StoreError>;

    /// Lists the owner's puzzles, most recently saved first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage fails.
    fn list(&self, owner: &OwnerId) -> Result<Vec<StoredPuzzle>, StoreError>;

    /// Deletes a puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the owner has no such puzzle, or
    /// an error if the backing storage fails.
    fn delete(&mut self, owner: &OwnerId, id: PuzzleId) -> Result<(), StoreError>;
}
