use std::{collections::BTreeSet, time::SystemTime};

use serde::{Deserialize, Serialize};
use wordseek_core::{Difficulty, Grid, Word};
use wordseek_game::{Game, GameError, InvalidState};

use crate::OwnerId;

/// Persisted snapshot of a game session.
///
/// Uses text formats (grid rows, word strings, difficulty name) so the saved
/// file stays readable. Converting back with [`GameState::to_game`] validates
/// everything, so a hand-edited or truncated save is rejected instead of
/// producing a broken session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Owner of the puzzle.
    pub owner: OwnerId,
    /// Difficulty name.
    pub difficulty: String,
    /// Grid rows, top to bottom.
    pub grid: Vec<String>,
    /// Words hidden in the grid.
    pub words: Vec<String>,
    /// Words found so far.
    pub found_words: Vec<String>,
    /// `true` once every word is found.
    pub completed: bool,
    /// When the puzzle was generated.
    pub started_at: SystemTime,
    /// When this snapshot was taken.
    pub last_saved: SystemTime,
}

impl GameState {
    /// Takes the first snapshot of a freshly started game.
    #[must_use]
    pub fn new(owner: OwnerId, game: &Game, now: SystemTime) -> Self {
        Self {
            owner,
            difficulty: game.difficulty().to_string(),
            grid: game.grid().row_strings(),
            words: game.words().iter().map(ToString::to_string).collect(),
            found_words: Vec::new(),
            completed: false,
            started_at: now,
            last_saved: now,
        }
        .with_progress(game, now)
    }

    /// Returns the snapshot updated with the progress of `game`.
    ///
    /// Only the found words, the completion flag, and `last_saved` change;
    /// the grid and word set are fixed at generation.
    #[must_use]
    pub fn with_progress(mut self, game: &Game, now: SystemTime) -> Self {
        self.found_words = game.found_words().iter().map(ToString::to_string).collect();
        self.completed = game.is_completed();
        self.last_saved = now;
        self
    }

    /// Rebuilds the game session from the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] if any field is malformed or the
    /// fields disagree with each other.
    pub fn to_game(&self) -> Result<Game, GameError> {
        let difficulty = self
            .difficulty
            .parse::<Difficulty>()
            .map_err(InvalidState::from)?;
        let grid = Grid::from_row_strings(self.grid.as_slice()).map_err(InvalidState::from)?;
        let words = self
            .words
            .iter()
            .map(|w| Word::new(w))
            .collect::<Result<Vec<_>, _>>()
            .map_err(InvalidState::from)?;
        let found_words = self
            .found_words
            .iter()
            .map(|w| Word::new(w))
            .collect::<Result<BTreeSet<_>, _>>()
            .map_err(InvalidState::from)?;
        Game::from_parts(grid, difficulty, words, found_words, self.completed)
    }
}
