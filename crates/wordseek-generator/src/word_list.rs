//! Built-in word lists.

use wordseek_core::{Difficulty, Word};

/// Starter words used when no difficulty-specific list is wanted.
pub const CLASSIC: [&str; 5] = ["HELLO", "WORLD", "GAME", "PLAY", "FUN"];

const EASY: [&str; 4] = ["CAT", "DOG", "RAT", "BAT"];
const MEDIUM: [&str; 4] = ["HOUSE", "MOUSE", "PLANT", "TRAIN"];
const HARD: [&str; 4] = ["ELEPHANT", "COMPUTER", "CALENDAR", "MOUNTAIN"];

/// Returns the built-in word list for `difficulty`.
///
/// # Examples
///
/// ```
/// use wordseek_core::Difficulty;
/// use wordseek_generator::word_list;
///
/// let words = word_list::for_difficulty(Difficulty::Easy);
/// assert_eq!(words[0].as_str(), "CAT");
/// ```
#[must_use]
pub fn for_difficulty(difficulty: Difficulty) -> Vec<Word> {
    let list: &[&str] = match difficulty {
        Difficulty::Easy => &EASY,
        Difficulty::Medium => &MEDIUM,
        Difficulty::Hard => &HARD,
    };
    to_words(list)
}

/// Returns the [`CLASSIC`] starter words.
#[must_use]
pub fn classic() -> Vec<Word> {
    to_words(&CLASSIC)
}

fn to_words(list: &[&str]) -> Vec<Word> {
    list.iter()
        .map(|text| match Word::new(text) {
            Ok(word) => word,
            Err(e) => unreachable!("built-in word list is invalid: {e}"),
        })
        .collect()
}
