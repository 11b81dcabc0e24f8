//! Puzzle letter representation.

use std::fmt::{self, Display};

/// An uppercase Latin letter `A`-`Z`.
///
/// Every cell of a finished [`Grid`](crate::Grid) holds exactly one `Letter`.
/// The type makes it impossible to store lowercase letters, digits, or blanks
/// in a grid cell.
///
/// # Examples
///
/// ```
/// use wordseek_core::Letter;
///
/// let letter = Letter::from_char('q').unwrap();
/// assert_eq!(letter.as_char(), 'Q');
/// assert_eq!(letter.index(), 16);
///
/// assert!(Letter::from_char('7').is_none());
/// assert_eq!(Letter::ALL.len(), 26);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Number of letters in the alphabet.
    pub const COUNT: usize = 26;

    /// Array containing all letters from `A` to `Z`.
    pub const ALL: [Self; Self::COUNT] = {
        let mut all = [Self(b'A'); Self::COUNT];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < Self::COUNT {
            all[i] = Self(b'A' + i as u8);
            i += 1;
        }
        all
    };

    /// Creates a letter from a character.
    ///
    /// Lowercase ASCII letters are normalized to uppercase. Returns `None` for
    /// anything outside `a`-`z` / `A`-`Z`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_alphabetic() {
            Some(Self((ch as u8).to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// Creates a letter from its alphabet index (`0` is `A`, `25` is `Z`).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-25.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        assert!(index < Self::COUNT, "Invalid letter index: {index}");
        Self::ALL[index]
    }

    /// Returns the alphabet index of this letter (0-25).
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    /// Returns this letter as an uppercase `char`.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_char(), f)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.as_char()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(Letter::from_char('A'), Some(Letter::ALL[0]));
        assert_eq!(Letter::from_char('z'), Some(Letter::ALL[25]));
        assert_eq!(Letter::from_char(' '), None);
        assert_eq!(Letter::from_char('é'), None);

        for (i, letter) in Letter::ALL.into_iter().enumerate() {
            assert_eq!(letter.index(), i);
            assert_eq!(Letter::from_index(i), letter);
            assert_eq!(Letter::from_char(letter.as_char()), Some(letter));
        }

        assert_eq!(format!("{}", Letter::from_index(2)), "C");
        let ch: char = Letter::from_index(25).into();
        assert_eq!(ch, 'Z');
    }

    #[test]
    #[should_panic(expected = "Invalid letter index: 26")]
    fn test_from_index_out_of_range_panics() {
        let _ = Letter::from_index(26);
    }
}
