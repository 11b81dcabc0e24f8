use wordseek_core::{Direction, DirectionSet, Position};

/// An ordered trace of grid cells chosen by the player.
///
/// A selection is only meaningful when it forms a straight, contiguous line;
/// see [`Selection::line_direction`]. Anything else simply never matches.
///
/// # Examples
///
/// ```
/// use wordseek_core::{Direction, DirectionSet, Position};
/// use wordseek_game::Selection;
///
/// let selection = Selection::line(Position::new(0, 2), Position::new(0, 0)).unwrap();
/// assert_eq!(selection.len(), 3);
/// assert_eq!(
///     selection.line_direction(10, DirectionSet::RIGHT),
///     Some(Direction::Left)
/// );
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Selection {
    cells: Vec<Position>,
}

impl Selection {
    /// Creates a selection from cells in trace order.
    #[must_use]
    pub fn new(cells: Vec<Position>) -> Self {
        Self { cells }
    }

    /// Creates the straight selection from `start` to `end`, inclusive.
    ///
    /// Returns a one-cell selection when `start == end`, and `None` when the
    /// two cells are not on a horizontal, vertical, or diagonal line.
    #[must_use]
    pub fn line(start: Position, end: Position) -> Option<Self> {
        if start == end {
            return Some(Self::new(vec![start]));
        }
        let (direction, len) = Direction::between(start, end)?;
        let cells = (0..=len)
            .map(|i| step_unbounded(start, direction, i))
            .collect::<Option<Vec<_>>>()?;
        Some(Self::new(cells))
    }

    /// Returns the selected cells in trace order.
    #[must_use]
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Returns the number of selected cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no cells are selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if `pos` is part of the selection.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Validates the selection as a line on a `size × size` grid.
    ///
    /// Returns the direction from the first cell to the last when:
    ///
    /// - the first and last cells lie on a straight line of at least two cells,
    /// - every cell is exactly one unit step after the previous one,
    /// - every cell is in bounds, and
    /// - that direction or its opposite is in `directions`.
    ///
    /// Otherwise returns `None`.
    #[must_use]
    pub fn line_direction(&self, size: usize, directions: DirectionSet) -> Option<Direction> {
        let (&first, &last) = (self.cells.first()?, self.cells.last()?);
        let (direction, len) = Direction::between(first, last)?;
        if self.cells.len() != len + 1 || !directions.contains_line(direction) {
            return None;
        }
        let contiguous = self
            .cells
            .iter()
            .enumerate()
            .all(|(i, pos)| first.step(direction, i, size) == Some(*pos));
        contiguous.then_some(direction)
    }
}

impl From<Vec<Position>> for Selection {
    fn from(cells: Vec<Position>) -> Self {
        Self::new(cells)
    }
}

fn step_unbounded(pos: Position, direction: Direction, steps: usize) -> Option<Position> {
    pos.step(direction, steps, usize::MAX)
}

/// Tracks a selection while the player drags across the grid.
///
/// The drag is anchored at the cell where it started. Each update extends the
/// selection to the straight line from the anchor to the pointer, as long as
/// that line runs in an allowed direction (either way); otherwise the previous
/// selection is kept.
#[derive(Debug, Clone)]
pub struct SelectionTracker {
    size: usize,
    directions: DirectionSet,
    anchor: Option<Position>,
    selection: Selection,
}

impl SelectionTracker {
    /// Creates an idle tracker for a `size × size` grid.
    #[must_use]
    pub fn new(size: usize, directions: DirectionSet) -> Self {
        Self {
            size,
            directions,
            anchor: None,
            selection: Selection::default(),
        }
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    /// Returns the current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Starts a drag at `pos`. Out-of-bounds cells are ignored.
    pub fn start(&mut self, pos: Position) {
        if !pos.in_bounds(self.size) {
            return;
        }
        self.anchor = Some(pos);
        self.selection = Selection::new(vec![pos]);
    }

    /// Moves the drag to `pos`.
    ///
    /// Returns `true` if the selection changed.
    pub fn update(&mut self, pos: Position) -> bool {
        let Some(anchor) = self.anchor else {
            return false;
        };
        if !pos.in_bounds(self.size) {
            return false;
        }
        if let Some((direction, _)) = Direction::between(anchor, pos)
            && !self.directions.contains_line(direction)
        {
            return false;
        }
        let Some(selection) = Selection::line(anchor, pos) else {
            return false;
        };
        if selection == self.selection {
            return false;
        }
        self.selection = selection;
        true
    }

    /// Ends the drag and returns the final selection.
    ///
    /// Returns `None` if no drag was in progress.
    pub fn finish(&mut self) -> Option<Selection> {
        self.anchor.take()?;
        Some(std::mem::take(&mut self.selection))
    }

    /// Abandons the drag and clears the selection.
    pub fn cancel(&mut self) {
        self.anchor = None;
        self.selection = Selection::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_line() {
        assert_eq!(
            Selection::line(pos(0, 0), pos(2, 2)).unwrap().cells(),
            &[pos(0, 0), pos(1, 1), pos(2, 2)]
        );
        assert_eq!(
            Selection::line(pos(3, 1), pos(1, 1)).unwrap().cells(),
            &[pos(3, 1), pos(2, 1), pos(1, 1)]
        );
        assert_eq!(Selection::line(pos(4, 4), pos(4, 4)).unwrap().len(), 1);
        assert_eq!(Selection::line(pos(0, 0), pos(1, 2)), None);
    }

    #[test]
    fn test_line_direction_accepts_straight_lines() {
        let forward = Selection::new(vec![pos(0, 0), pos(0, 1), pos(0, 2)]);
        let backward = Selection::new(vec![pos(0, 2), pos(0, 1), pos(0, 0)]);
        assert_eq!(forward.line_direction(10, DirectionSet::RIGHT), Some(Direction::Right));
        assert_eq!(backward.line_direction(10, DirectionSet::RIGHT), Some(Direction::Left));
        assert_eq!(forward.line_direction(10, DirectionSet::DOWN), None);
    }

    #[test]
    fn test_line_direction_rejects_malformed_selections() {
        let all = DirectionSet::all();
        assert_eq!(Selection::default().line_direction(10, all), None);
        assert_eq!(Selection::new(vec![pos(0, 0)]).line_direction(10, all), None);
        // Gap in the middle.
        assert_eq!(
            Selection::new(vec![pos(0, 0), pos(0, 2), pos(0, 3)]).line_direction(10, all),
            None
        );
        // Right endpoints, wrong path.
        assert_eq!(
            Selection::new(vec![pos(0, 0), pos(1, 1), pos(0, 2)]).line_direction(10, all),
            None
        );
        // Knight move.
        assert_eq!(
            Selection::new(vec![pos(0, 0), pos(1, 2)]).line_direction(10, all),
            None
        );
        // Repeated cell.
        assert_eq!(
            Selection::new(vec![pos(0, 0), pos(0, 0), pos(0, 1)]).line_direction(10, all),
            None
        );
        // Out of bounds.
        assert_eq!(
            Selection::new(vec![pos(0, 8), pos(0, 9), pos(0, 10)]).line_direction(10, all),
            None
        );
    }

    #[test]
    fn test_tracker_follows_allowed_lines() {
        let mut tracker = SelectionTracker::new(10, DirectionSet::RIGHT | DirectionSet::DOWN);
        assert!(!tracker.update(pos(0, 1)));
        assert_eq!(tracker.finish(), None);

        tracker.start(pos(2, 2));
        assert!(tracker.is_active());
        assert!(tracker.update(pos(2, 4)));
        assert_eq!(tracker.selection().len(), 3);

        // Diagonals are not allowed: selection stays on the last valid line.
        assert!(!tracker.update(pos(4, 4)));
        assert_eq!(tracker.selection().len(), 3);

        // Dragging backwards along an allowed line is fine.
        assert!(tracker.update(pos(2, 0)));
        assert_eq!(tracker.selection().cells(), &[pos(2, 2), pos(2, 1), pos(2, 0)]);

        assert!(tracker.update(pos(2, 2)));
        assert_eq!(tracker.selection().len(), 1);

        let finished = tracker.finish().unwrap();
        assert_eq!(finished.cells(), &[pos(2, 2)]);
        assert!(!tracker.is_active());
        assert!(tracker.selection().is_empty());
    }

    #[test]
    fn test_tracker_ignores_out_of_bounds() {
        let mut tracker = SelectionTracker::new(5, DirectionSet::all());
        tracker.start(pos(5, 0));
        assert!(!tracker.is_active());

        tracker.start(pos(4, 0));
        assert!(!tracker.update(pos(4, 5)));
        tracker.cancel();
        assert!(!tracker.is_active());
        assert!(tracker.selection().is_empty());
    }
}
