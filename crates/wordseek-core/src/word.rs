//! Puzzle words and their placements.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Direction, Letter, Position};

/// A puzzle word: two or more uppercase letters `A`-`Z`.
///
/// Lowercase input is normalized to uppercase. Single-letter words are
/// rejected because a one-cell selection has no direction and could never be
/// found.
///
/// # Examples
///
/// ```
/// use wordseek_core::Word;
///
/// let word: Word = "hello".parse().unwrap();
/// assert_eq!(word.as_str(), "HELLO");
/// assert_eq!(word.len(), 5);
/// assert_eq!(word.reversed(), "OLLEH");
///
/// assert!("A".parse::<Word>().is_err());
/// assert!("NO SPACES".parse::<Word>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
}

/// Errors returned when constructing a [`Word`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WordError {
    /// The word has fewer than [`Word::MIN_LEN`] letters.
    #[display("word {text:?} is shorter than two letters")]
    TooShort {
        /// The rejected input.
        text: String,
    },
    /// The word contains a character outside `A`-`Z`.
    #[display("word {text:?} contains non-letter character {ch:?}")]
    InvalidCharacter {
        /// The rejected input.
        text: String,
        /// The first offending character.
        ch: char,
    },
}

impl Word {
    /// Minimum number of letters in a word.
    pub const MIN_LEN: usize = 2;

    /// Creates a word, normalizing letters to uppercase.
    ///
    /// # Errors
    ///
    /// Returns [`WordError::InvalidCharacter`] if `text` contains anything other
    /// than ASCII letters, or [`WordError::TooShort`] if it has fewer than
    /// [`Word::MIN_LEN`] letters.
    pub fn new(text: &str) -> Result<Self, WordError> {
        if let Some(ch) = text.chars().find(|ch| Letter::from_char(*ch).is_none()) {
            return Err(WordError::InvalidCharacter {
                text: text.to_owned(),
                ch,
            });
        }
        if text.len() < Self::MIN_LEN {
            return Err(WordError::TooShort {
                text: text.to_owned(),
            });
        }
        Ok(Self {
            text: text.to_ascii_uppercase(),
        })
    }

    /// Returns the word as an uppercase string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always `false`; words have at least [`Word::MIN_LEN`] letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the letters of the word in reading order.
    pub fn letters(&self) -> impl DoubleEndedIterator<Item = Letter> + ExactSizeIterator + '_ {
        self.text
            .bytes()
            .map(|b| Letter::from_index(usize::from(b - b'A')))
    }

    /// Returns the word spelled backwards.
    #[must_use]
    pub fn reversed(&self) -> String {
        self.text.chars().rev().collect()
    }

    /// Returns `true` if `candidate` spells this word forwards or backwards.
    #[must_use]
    pub fn matches_either_way(&self, candidate: &str) -> bool {
        self.text == candidate || self.text.chars().rev().eq(candidate.chars())
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// A word as laid out in a grid: start cell plus direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlacedWord {
    /// The placed word.
    pub word: Word,
    /// Cell holding the first letter.
    pub start: Position,
    /// Direction from the first letter to the last.
    pub direction: Direction,
}

impl PlacedWord {
    /// Creates a placement.
    #[must_use]
    pub fn new(word: Word, start: Position, direction: Direction) -> Self {
        Self {
            word,
            start,
            direction,
        }
    }

    /// Returns the cells covered by the word in reading order, or `None` if
    /// any of them falls outside a `size × size` grid.
    #[must_use]
    pub fn path(&self, size: usize) -> Option<Vec<Position>> {
        (0..self.word.len())
            .map(|i| self.start.step(self.direction, i, size))
            .collect()
    }

    /// Returns the cell holding the last letter, or `None` if it falls
    /// outside a `size × size` grid.
    #[must_use]
    pub fn end(&self, size: usize) -> Option<Position> {
        self.start.step(self.direction, self.word.len() - 1, size)
    }
}

impl Display for PlacedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {} {}", self.word, self.start, self.direction)
    }
}
