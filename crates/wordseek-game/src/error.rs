use wordseek_core::{ParseDifficultyError, ParseGridError, Word, WordError};

/// Errors returned by [`Game`](crate::Game) operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    /// The game is completed and accepts no further selections.
    #[display("game is already completed")]
    GameCompleted,
    /// Restored state is malformed.
    #[display("invalid game state: {_0}")]
    #[from]
    InvalidState(InvalidState),
}

/// Reasons restored game state is rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum InvalidState {
    /// The grid could not be parsed.
    #[display("malformed grid: {_0}")]
    #[from]
    Grid(ParseGridError),
    /// A stored word is not a valid word.
    #[display("malformed word: {_0}")]
    #[from]
    Word(WordError),
    /// The stored difficulty name is unknown.
    #[display("malformed difficulty: {_0}")]
    #[from]
    Difficulty(ParseDifficultyError),
    /// The word set is empty.
    #[display("puzzle has no words")]
    NoWords,
    /// The word set lists the same word twice.
    #[display("word {word} is listed twice")]
    DuplicateWord {
        /// The repeated word.
        word: Word,
    },
    /// A word is not spelled anywhere in the grid in an allowed direction.
    #[display("word {word} does not appear in the grid")]
    WordNotInGrid {
        /// The missing word.
        word: Word,
    },
    /// A found word is not part of the word set.
    #[display("found word {word} is not in the word set")]
    UnknownFoundWord {
        /// The stray word.
        word: Word,
    },
    /// The stored completion flag disagrees with the found words.
    #[display("completed flag is {completed} but {found} of {total} words are found")]
    CompletionMismatch {
        /// Stored completion flag.
        completed: bool,
        /// Number of found words.
        found: usize,
        /// Number of words in the set.
        total: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_errors_convert_into_game_error() {
        let e = GameError::from(InvalidState::from(ParseGridError::Empty));
        assert_eq!(
            e,
            GameError::InvalidState(InvalidState::Grid(ParseGridError::Empty))
        );
        assert_eq!(
            e.to_string(),
            format!("invalid game state: malformed grid: {}", ParseGridError::Empty)
        );
    }
}
