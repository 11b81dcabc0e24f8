use std::collections::BTreeSet;

use wordseek_core::{Difficulty, DirectionSet, Grid, Position, Word};
use wordseek_generator::GeneratedPuzzle;

use crate::{GameError, InvalidState, Selection, resolver};

/// Lifecycle of a puzzle session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameStatus {
    /// Accepting selections.
    InProgress,
    /// Every word has been found. Terminal.
    Completed,
}

/// What a resolved selection matched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SelectionOutcome {
    /// The selection spelled a word that had not been found yet.
    Found {
        /// The newly found word.
        word: Word,
        /// `true` if this find completed the puzzle.
        completed: bool,
    },
    /// The selection spelled a word that was already found. Nothing changed.
    AlreadyFound {
        /// The re-traced word.
        word: Word,
    },
    /// The selection was not a valid line or spelled no word. Nothing changed.
    NoMatch,
}

/// A word-search game session.
///
/// Holds the grid, the words hidden in it, and the words found so far, and
/// moves from [`GameStatus::InProgress`] to [`GameStatus::Completed`] once every
/// word is found. A completed game is never reopened; starting over means
/// generating a new puzzle.
///
/// # Example
///
/// ```
/// use wordseek_core::Difficulty;
/// use wordseek_game::{Game, Selection};
/// use wordseek_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::for_difficulty(Difficulty::Easy);
/// let puzzle = generator.generate_with_seed(PuzzleSeed::from_phrase("doc"));
/// let placements = puzzle.placements.clone();
/// let mut game = Game::new(puzzle);
///
/// for placed in &placements {
///     let selection = Selection::new(placed.path(game.grid().size()).unwrap());
///     let outcome = game.resolve_selection(&selection).unwrap();
///     assert!(outcome.is_found());
/// }
/// assert_eq!(game.is_completed(), !placements.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    grid: Grid,
    difficulty: Difficulty,
    words: Vec<Word>,
    found_words: BTreeSet<Word>,
    status: GameStatus,
}

impl Game {
    /// Creates a new game from a generated puzzle with nothing found yet.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            grid,
            words,
            placements: _,
            difficulty,
            seed: _,
        } = puzzle;
        Self {
            grid,
            difficulty,
            words,
            found_words: BTreeSet::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Restores a game from saved parts.
    ///
    /// The parts are checked before the game is rebuilt so that a corrupted
    /// save never renders missing or stray cells.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] if the word set is empty or has
    /// duplicates, a word is not spelled in the grid in an allowed direction,
    /// a found word is not in the word set, or `completed` disagrees with the
    /// found words.
    pub fn from_parts(
        grid: Grid,
        difficulty: Difficulty,
        words: Vec<Word>,
        found_words: BTreeSet<Word>,
        completed: bool,
    ) -> Result<Self, GameError> {
        if words.is_empty() {
            return Err(InvalidState::NoWords.into());
        }
        let mut seen = BTreeSet::new();
        for word in &words {
            if !seen.insert(word) {
                return Err(InvalidState::DuplicateWord { word: word.clone() }.into());
            }
            if !spelled_anywhere(&grid, word, difficulty.directions()) {
                return Err(InvalidState::WordNotInGrid { word: word.clone() }.into());
            }
        }
        if let Some(word) = found_words.iter().find(|w| !seen.contains(w)) {
            return Err(InvalidState::UnknownFoundWord { word: word.clone() }.into());
        }
        let is_complete = resolver::is_complete(&words, &found_words);
        if completed != is_complete {
            return Err(InvalidState::CompletionMismatch {
                completed,
                found: found_words.len(),
                total: words.len(),
            }
            .into());
        }

        let status = if is_complete {
            GameStatus::Completed
        } else {
            GameStatus::InProgress
        };
        Ok(Self {
            grid,
            difficulty,
            words,
            found_words,
            status,
        })
    }

    /// Returns the puzzle grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the difficulty the puzzle was generated at.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the directions selections may run in.
    #[must_use]
    pub fn directions(&self) -> DirectionSet {
        self.difficulty.directions()
    }

    /// Returns every word hidden in the grid, in placement order.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Returns the words found so far.
    #[must_use]
    pub fn found_words(&self) -> &BTreeSet<Word> {
        &self.found_words
    }

    /// Returns the words not found yet, in placement order.
    pub fn remaining_words(&self) -> impl Iterator<Item = &Word> {
        self.words
            .iter()
            .filter(|word| !self.found_words.contains(*word))
    }

    /// Returns `true` if `word` has been found.
    #[must_use]
    pub fn is_found(&self, word: &Word) -> bool {
        self.found_words.contains(word)
    }

    /// Returns the session status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns `true` once every word has been found.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    /// Checks a finished selection and records a newly found word.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameCompleted`] if the game is already completed.
    /// Invalid or non-matching selections are not errors; they yield
    /// [`SelectionOutcome::NoMatch`].
    pub fn resolve_selection(
        &mut self,
        selection: &Selection,
    ) -> Result<SelectionOutcome, GameError> {
        if self.is_completed() {
            return Err(GameError::GameCompleted);
        }
        let Some(word) = resolver::match_selection(
            &self.grid,
            &self.words,
            &self.found_words,
            self.directions(),
            selection,
        ) else {
            return Ok(SelectionOutcome::NoMatch);
        };
        if self.found_words.contains(word) {
            return Ok(SelectionOutcome::AlreadyFound { word: word.clone() });
        }

        let word = word.clone();
        self.found_words.insert(word.clone());
        let completed = resolver::is_complete(&self.words, &self.found_words);
        if completed {
            self.status = GameStatus::Completed;
            log::info!("all {} words found", self.words.len());
        }
        Ok(SelectionOutcome::Found { word, completed })
    }

    /// Returns `true` if `pos` lies on a found word.
    ///
    /// See [`resolver::is_cell_in_found_word`] for how placements are
    /// re-derived.
    #[must_use]
    pub fn is_cell_in_found_word(&self, pos: Position) -> bool {
        resolver::is_cell_in_found_word(&self.grid, &self.found_words, self.directions(), pos)
    }
}

fn spelled_anywhere(grid: &Grid, word: &Word, directions: DirectionSet) -> bool {
    grid.positions()
        .any(|pos| grid.find_placement_through(word, pos, directions).is_some())
}

#[cfg(test)]
mod tests {
    use wordseek_core::{Direction, DraftGrid, Letter, PlacedWord};
    use wordseek_generator::{PuzzleGenerator, PuzzleSeed};

    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    /// CAT right from (0, 0) and DOG down from (2, 5) on a `Z`-filled 10x10 grid.
    fn cat_dog_grid() -> Grid {
        let mut draft = DraftGrid::new(10);
        assert!(draft.place(&PlacedWord::new(word("CAT"), pos(0, 0), Direction::Right)));
        assert!(draft.place(&PlacedWord::new(word("DOG"), pos(2, 5), Direction::Down)));
        draft.fill(|| Letter::from_char('Z').unwrap())
    }

    fn cat_dog_game() -> Game {
        Game::from_parts(
            cat_dog_grid(),
            Difficulty::Easy,
            vec![word("CAT"), word("DOG")],
            BTreeSet::new(),
            false,
        )
        .unwrap()
    }

    #[test]
    fn test_new_game_starts_in_progress() {
        let generator = PuzzleGenerator::for_difficulty(Difficulty::Medium);
        let puzzle = generator.generate_with_seed(PuzzleSeed::from_phrase("new"));
        let words = puzzle.words.clone();
        let game = Game::new(puzzle);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.found_words().is_empty());
        assert_eq!(game.words(), words.as_slice());
        assert_eq!(game.remaining_words().count(), words.len());
        assert_eq!(game.difficulty(), Difficulty::Medium);
    }

    #[test]
    fn test_finding_all_words_completes() {
        let mut game = cat_dog_game();
        let cat = Selection::new(vec![pos(0, 0), pos(0, 1), pos(0, 2)]);
        let dog_reversed = Selection::new(vec![pos(4, 5), pos(3, 5), pos(2, 5)]);

        assert_eq!(
            game.resolve_selection(&cat),
            Ok(SelectionOutcome::Found {
                word: word("CAT"),
                completed: false
            })
        );
        assert!(game.is_found(&word("CAT")));
        assert_eq!(game.remaining_words().collect::<Vec<_>>(), vec![&word("DOG")]);

        assert_eq!(
            game.resolve_selection(&dog_reversed),
            Ok(SelectionOutcome::Found {
                word: word("DOG"),
                completed: true
            })
        );
        assert!(game.is_completed());
        assert_eq!(game.found_words().len(), 2);
        assert_eq!(game.resolve_selection(&cat), Err(GameError::GameCompleted));
    }

    #[test]
    fn test_retracing_found_word_is_noop() {
        let mut game = cat_dog_game();
        let cat = Selection::new(vec![pos(0, 0), pos(0, 1), pos(0, 2)]);
        assert!(game.resolve_selection(&cat).unwrap().is_found());
        assert_eq!(
            game.resolve_selection(&cat),
            Ok(SelectionOutcome::AlreadyFound { word: word("CAT") })
        );
        assert_eq!(game.found_words().len(), 1);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_word_and_its_reverse_complete() {
        let mut draft = DraftGrid::new(10);
        assert!(draft.place(&PlacedWord::new(word("RAT"), pos(0, 0), Direction::Right)));
        assert!(draft.place(&PlacedWord::new(word("TAR"), pos(5, 0), Direction::Right)));
        let grid = draft.fill(|| Letter::from_char('Z').unwrap());
        let mut game = Game::from_parts(
            grid,
            Difficulty::Easy,
            vec![word("RAT"), word("TAR")],
            BTreeSet::new(),
            false,
        )
        .unwrap();
        let tar = Selection::new(vec![pos(5, 0), pos(5, 1), pos(5, 2)]);
        let tar_reversed = Selection::new(vec![pos(5, 2), pos(5, 1), pos(5, 0)]);

        assert_eq!(
            game.resolve_selection(&tar),
            Ok(SelectionOutcome::Found {
                word: word("TAR"),
                completed: false
            })
        );
        assert_eq!(
            game.resolve_selection(&tar_reversed),
            Ok(SelectionOutcome::Found {
                word: word("RAT"),
                completed: true
            })
        );
        assert!(game.is_completed());
    }

    #[test]
    fn test_invalid_selection_is_no_match() {
        let mut game = cat_dog_game();
        let diagonal = Selection::new(vec![pos(0, 0), pos(1, 1), pos(2, 2)]);
        let scattered = Selection::new(vec![pos(0, 0), pos(5, 5)]);
        assert_eq!(game.resolve_selection(&diagonal), Ok(SelectionOutcome::NoMatch));
        assert_eq!(game.resolve_selection(&scattered), Ok(SelectionOutcome::NoMatch));
        assert_eq!(game.resolve_selection(&Selection::default()), Ok(SelectionOutcome::NoMatch));
        assert!(game.found_words().is_empty());
    }

    #[test]
    fn test_cell_highlight_after_restore() {
        let game = Game::from_parts(
            cat_dog_grid(),
            Difficulty::Easy,
            vec![word("CAT"), word("DOG")],
            BTreeSet::from([word("DOG")]),
            false,
        )
        .unwrap();
        assert!(game.is_cell_in_found_word(pos(2, 5)));
        assert!(game.is_cell_in_found_word(pos(3, 5)));
        assert!(game.is_cell_in_found_word(pos(4, 5)));
        assert!(!game.is_cell_in_found_word(pos(0, 0)));
        assert!(!game.is_cell_in_found_word(pos(5, 5)));
    }

    #[test]
    fn test_restore_completed_game() {
        let game = Game::from_parts(
            cat_dog_grid(),
            Difficulty::Easy,
            vec![word("CAT"), word("DOG")],
            BTreeSet::from([word("CAT"), word("DOG")]),
            true,
        )
        .unwrap();
        assert!(game.is_completed());
    }

    #[test]
    fn test_restore_rejects_invalid_state() {
        let restore = |words: Vec<Word>, found: BTreeSet<Word>, completed: bool| {
            Game::from_parts(cat_dog_grid(), Difficulty::Easy, words, found, completed)
                .map(|_| ())
                .unwrap_err()
        };

        assert_eq!(
            restore(vec![], BTreeSet::new(), false),
            GameError::InvalidState(InvalidState::NoWords)
        );
        assert_eq!(
            restore(vec![word("CAT"), word("CAT")], BTreeSet::new(), false),
            GameError::InvalidState(InvalidState::DuplicateWord { word: word("CAT") })
        );
        assert_eq!(
            restore(vec![word("COW")], BTreeSet::new(), false),
            GameError::InvalidState(InvalidState::WordNotInGrid { word: word("COW") })
        );
        assert_eq!(
            restore(vec![word("CAT")], BTreeSet::from([word("DOG")]), false),
            GameError::InvalidState(InvalidState::UnknownFoundWord { word: word("DOG") })
        );
        assert_eq!(
            restore(vec![word("CAT")], BTreeSet::from([word("CAT")]), false),
            GameError::InvalidState(InvalidState::CompletionMismatch {
                completed: false,
                found: 1,
                total: 1
            })
        );
        assert_eq!(
            restore(vec![word("CAT")], BTreeSet::new(), true),
            GameError::InvalidState(InvalidState::CompletionMismatch {
                completed: true,
                found: 0,
                total: 1
            })
        );
    }

    #[test]
    fn test_restore_checks_directions() {
        // DOG runs down, which the easy preset allows but a right-only check would not.
        let result = Game::from_parts(
            cat_dog_grid(),
            Difficulty::Easy,
            vec![word("DOG")],
            BTreeSet::new(),
            false,
        );
        assert!(result.is_ok());
    }
}
