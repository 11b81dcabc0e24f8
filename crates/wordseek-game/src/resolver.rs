//! Selection checking as pure functions over explicit puzzle state.
//!
//! These functions never mutate their inputs and perform no I/O; [`Game`]
//! layers the session state machine on top of them.
//!
//! [`Game`]: crate::Game

use std::collections::BTreeSet;

use wordseek_core::{DirectionSet, Grid, Position, Word};

use crate::{Selection, SelectionOutcome};

/// The result of [`resolve_selection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// What the selection matched.
    pub outcome: SelectionOutcome,
    /// Found words after applying the selection.
    pub found_words: BTreeSet<Word>,
}

impl Resolution {
    /// Returns the newly found word, if the selection found one.
    #[must_use]
    pub fn matched(&self) -> Option<&Word> {
        match &self.outcome {
            SelectionOutcome::Found { word, .. } => Some(word),
            SelectionOutcome::AlreadyFound { .. } | SelectionOutcome::NoMatch => None,
        }
    }
}

/// Returns the word in `words` spelled by `selection`, forwards or backwards.
///
/// Unfound words win over found ones, and within each group an exact reading
/// wins over a reversed one. A word and its reverse in the same set can
/// therefore both be found from the same cells.
///
/// Returns `None` if the selection is not a valid line (see
/// [`Selection::line_direction`]) or spells no word.
#[must_use]
pub fn match_selection<'w>(
    grid: &Grid,
    words: &'w [Word],
    found_words: &BTreeSet<Word>,
    directions: DirectionSet,
    selection: &Selection,
) -> Option<&'w Word> {
    selection.line_direction(grid.size(), directions)?;
    let candidate = grid.read(selection.cells())?;
    let (unfound, found): (Vec<&Word>, Vec<&Word>) =
        words.iter().partition(|word| !found_words.contains(*word));
    [unfound, found].into_iter().find_map(|group| {
        group
            .iter()
            .find(|word| word.as_str() == candidate)
            .or_else(|| group.iter().find(|word| word.matches_either_way(&candidate)))
            .copied()
    })
}

/// Checks `selection` against the words that have not been found yet.
///
/// A selection spelling an unfound word adds it to the found set. Re-tracing a
/// word that was already found changes nothing. Invalid or non-matching
/// selections change nothing.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
///
/// use wordseek_core::{DirectionSet, Grid, Position, Word};
/// use wordseek_game::{Selection, resolver};
///
/// let grid: Grid = "CATX\nXXXX\nXXXX\nXXXX".parse().unwrap();
/// let words = vec![Word::new("CAT").unwrap()];
/// let backwards = Selection::line(Position::new(0, 2), Position::new(0, 0)).unwrap();
///
/// let resolution =
///     resolver::resolve_selection(&grid, &words, &BTreeSet::new(), DirectionSet::RIGHT, &backwards);
/// assert_eq!(resolution.matched().map(Word::as_str), Some("CAT"));
/// assert_eq!(resolution.found_words.len(), 1);
/// ```
#[must_use]
pub fn resolve_selection(
    grid: &Grid,
    words: &[Word],
    found_words: &BTreeSet<Word>,
    directions: DirectionSet,
    selection: &Selection,
) -> Resolution {
    let mut found_words = found_words.clone();
    let outcome = match match_selection(grid, words, &found_words, directions, selection) {
        None => SelectionOutcome::NoMatch,
        Some(word) if found_words.contains(word) => {
            SelectionOutcome::AlreadyFound { word: word.clone() }
        }
        Some(word) => {
            found_words.insert(word.clone());
            SelectionOutcome::Found {
                word: word.clone(),
                completed: is_complete(words, &found_words),
            }
        }
    };
    Resolution {
        outcome,
        found_words,
    }
}

/// Returns `true` if every word has been found.
///
/// A puzzle with no words is never complete.
#[must_use]
pub fn is_complete(words: &[Word], found_words: &BTreeSet<Word>) -> bool {
    !words.is_empty() && words.iter().all(|word| found_words.contains(word))
}

/// Returns `true` if `pos` lies on some placement of a found word.
///
/// Found words are stored as strings only, so the placement is re-derived by
/// searching the grid for each found word through `pos` in every allowed
/// direction, forwards and reversed. A found word that also happens to be
/// spelled elsewhere in the grid highlights both spellings.
#[must_use]
pub fn is_cell_in_found_word(
    grid: &Grid,
    found_words: &BTreeSet<Word>,
    directions: DirectionSet,
    pos: Position,
) -> bool {
    found_words
        .iter()
        .any(|word| grid.find_placement_through(word, pos, directions).is_some())
}
