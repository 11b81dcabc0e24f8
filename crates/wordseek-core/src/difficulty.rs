//! Difficulty presets.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::DirectionSet;

/// A named preset controlling which directions words may run in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    /// Words run right or down only.
    Easy,
    /// Easy plus the down-right and up-right diagonals.
    #[default]
    Medium,
    /// All eight compass directions, including backwards words.
    Hard,
}

impl Difficulty {
    /// All presets from easiest to hardest.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the directions allowed at this difficulty.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordseek_core::{Difficulty, DirectionSet};
    ///
    /// assert_eq!(
    ///     Difficulty::Easy.directions(),
    ///     DirectionSet::RIGHT | DirectionSet::DOWN
    /// );
    /// assert_eq!(Difficulty::Hard.directions(), DirectionSet::all());
    /// ```
    #[must_use]
    pub const fn directions(self) -> DirectionSet {
        match self {
            Self::Easy => DirectionSet::RIGHT.union(DirectionSet::DOWN),
            Self::Medium => DirectionSet::RIGHT
                .union(DirectionSet::DOWN)
                .union(DirectionSet::DOWN_RIGHT)
                .union(DirectionSet::UP_RIGHT),
            Self::Hard => DirectionSet::all(),
        }
    }

    /// Returns the lowercase preset name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown difficulty name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty: {name:?} (expected easy, medium, or hard)")]
pub struct ParseDifficultyError {
    name: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDifficultyError { name: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    #[test]
    fn test_presets_are_nested() {
        let easy = Difficulty::Easy.directions();
        let medium = Difficulty::Medium.directions();
        let hard = Difficulty::Hard.directions();
        assert!(medium.contains(easy));
        assert!(hard.contains(medium));
        assert_eq!(easy.directions().count(), 2);
        assert_eq!(medium.directions().count(), 4);
        assert_eq!(hard.directions().count(), 8);
        assert_eq!(
            medium.to_vec(),
            vec![
                Direction::Right,
                Direction::Down,
                Direction::DownRight,
                Direction::UpRight
            ]
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("easy".parse(), Ok(Difficulty::Easy));
        assert_eq!(" Hard ".parse(), Ok(Difficulty::Hard));
        assert_eq!(Difficulty::default(), Difficulty::Medium);
        let err = "extreme".parse::<Difficulty>().unwrap_err();
        assert!(err.to_string().contains("extreme"));

        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse(), Ok(difficulty));
        }
    }
}
