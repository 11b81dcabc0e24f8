//! Compass directions and direction sets.

use std::fmt::{self, Display};

use crate::Position;

/// One of the eight compass unit vectors a word can be laid out along.
///
/// Each direction is a `(row_delta, col_delta)` pair with components in
/// `-1..=1`. A direction and its [`opposite`](Self::opposite) describe the same
/// line read backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// `(0, 1)`
    Right,
    /// `(1, 0)`
    Down,
    /// `(1, 1)`
    DownRight,
    /// `(-1, 1)`
    UpRight,
    /// `(0, -1)`
    Left,
    /// `(-1, 0)`
    Up,
    /// `(-1, -1)`
    UpLeft,
    /// `(1, -1)`
    DownLeft,
}

impl Direction {
    /// All eight directions. The first four are the "forward" reading
    /// directions, the last four their opposites in the same order.
    pub const ALL: [Self; 8] = [
        Self::Right,
        Self::Down,
        Self::DownRight,
        Self::UpRight,
        Self::Left,
        Self::Up,
        Self::UpLeft,
        Self::DownLeft,
    ];

    /// Returns the `(row_delta, col_delta)` unit vector.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::DownRight => (1, 1),
            Self::UpRight => (-1, 1),
            Self::Left => (0, -1),
            Self::Up => (-1, 0),
            Self::UpLeft => (-1, -1),
            Self::DownLeft => (1, -1),
        }
    }

    /// Returns the direction pointing the other way along the same line.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::DownRight => Self::UpLeft,
            Self::UpRight => Self::DownLeft,
            Self::Left => Self::Right,
            Self::Up => Self::Down,
            Self::UpLeft => Self::DownRight,
            Self::DownLeft => Self::UpRight,
        }
    }

    /// Looks up the direction with the given unit vector.
    #[must_use]
    pub fn from_delta(dr: isize, dc: isize) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.delta() == (dr, dc))
    }

    /// Returns the direction and the number of steps of the straight line from
    /// `from` to `to`.
    ///
    /// Returns `None` when the two positions are equal or do not lie on a
    /// horizontal, vertical, or 45° diagonal line.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordseek_core::{Direction, Position};
    ///
    /// let line = Direction::between(Position::new(4, 1), Position::new(1, 4));
    /// assert_eq!(line, Some((Direction::UpRight, 3)));
    ///
    /// assert_eq!(Direction::between(Position::new(0, 0), Position::new(1, 2)), None);
    /// assert_eq!(Direction::between(Position::new(2, 2), Position::new(2, 2)), None);
    /// ```
    #[must_use]
    pub fn between(from: Position, to: Position) -> Option<(Self, usize)> {
        let (dr, dc) = from.delta_to(to)?;
        let len = dr.unsigned_abs().max(dc.unsigned_abs());
        if len == 0 {
            return None;
        }
        if dr != 0 && dc != 0 && dr.unsigned_abs() != dc.unsigned_abs() {
            return None;
        }
        Self::from_delta(dr.signum(), dc.signum()).map(|d| (d, len))
    }

    /// Returns the flag for this direction in a [`DirectionSet`].
    #[must_use]
    pub const fn flag(self) -> DirectionSet {
        match self {
            Self::Right => DirectionSet::RIGHT,
            Self::Down => DirectionSet::DOWN,
            Self::DownRight => DirectionSet::DOWN_RIGHT,
            Self::UpRight => DirectionSet::UP_RIGHT,
            Self::Left => DirectionSet::LEFT,
            Self::Up => DirectionSet::UP,
            Self::UpLeft => DirectionSet::UP_LEFT,
            Self::DownLeft => DirectionSet::DOWN_LEFT,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Right => "right",
            Self::Down => "down",
            Self::DownRight => "down-right",
            Self::UpRight => "up-right",
            Self::Left => "left",
            Self::Up => "up",
            Self::UpLeft => "up-left",
            Self::DownLeft => "down-left",
        };
        f.write_str(name)
    }
}

bitflags::bitflags! {
    /// A set of allowed [`Direction`]s.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordseek_core::{Direction, DirectionSet};
    ///
    /// let set = DirectionSet::RIGHT | DirectionSet::DOWN;
    /// assert!(set.contains_direction(Direction::Down));
    /// assert!(!set.contains_direction(Direction::Up));
    /// assert!(set.contains_line(Direction::Up));
    /// assert_eq!(set.to_vec(), vec![Direction::Right, Direction::Down]);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DirectionSet: u8 {
        /// [`Direction::Right`]
        const RIGHT = 0b0000_0001;
        /// [`Direction::Down`]
        const DOWN = 0b0000_0010;
        /// [`Direction::DownRight`]
        const DOWN_RIGHT = 0b0000_0100;
        /// [`Direction::UpRight`]
        const UP_RIGHT = 0b0000_1000;
        /// [`Direction::Left`]
        const LEFT = 0b0001_0000;
        /// [`Direction::Up`]
        const UP = 0b0010_0000;
        /// [`Direction::UpLeft`]
        const UP_LEFT = 0b0100_0000;
        /// [`Direction::DownLeft`]
        const DOWN_LEFT = 0b1000_0000;
    }
}

impl DirectionSet {
    /// Returns `true` if `direction` itself is in the set.
    #[must_use]
    pub const fn contains_direction(self, direction: Direction) -> bool {
        self.contains(direction.flag())
    }

    /// Returns `true` if `direction` or its opposite is in the set.
    ///
    /// Matching treats a line and its reverse as the same line, so this is the
    /// check used for selections.
    #[must_use]
    pub const fn contains_line(self, direction: Direction) -> bool {
        self.contains_direction(direction) || self.contains_direction(direction.opposite())
    }

    /// Returns the directions in this set in [`Direction::ALL`] order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |d| self.contains_direction(*d))
    }

    /// Collects the directions in this set in [`Direction::ALL`] order.
    #[must_use]
    pub fn to_vec(self) -> Vec<Direction> {
        self.directions().collect()
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, direction| set | direction.flag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites_negate_delta() {
        for direction in Direction::ALL {
            let (dr, dc) = direction.delta();
            assert_eq!(direction.opposite().delta(), (-dr, -dc));
            assert_eq!(direction.opposite().opposite(), direction);
            assert_eq!(Direction::from_delta(dr, dc), Some(direction));
        }
        assert_eq!(Direction::from_delta(0, 0), None);
        assert_eq!(Direction::from_delta(2, 0), None);
    }

    #[test]
    fn test_between() {
        let center = Position::new(5, 5);
        for direction in Direction::ALL {
            let end = center.step(direction, 3, 10).unwrap();
            assert_eq!(Direction::between(center, end), Some((direction, 3)));
        }
        assert_eq!(Direction::between(center, Position::new(6, 7)), None);
        assert_eq!(Direction::between(center, center), None);
    }

    #[test]
    fn test_direction_set() {
        let set: DirectionSet = [Direction::UpRight, Direction::Right].into_iter().collect();
        assert_eq!(set, DirectionSet::UP_RIGHT | DirectionSet::RIGHT);
        assert_eq!(set.to_vec(), vec![Direction::Right, Direction::UpRight]);
        assert!(set.contains_line(Direction::DownLeft));
        assert!(!set.contains_line(Direction::Down));
        assert_eq!(DirectionSet::all().directions().count(), 8);
        assert_eq!(DirectionSet::empty().directions().count(), 0);
    }
}
