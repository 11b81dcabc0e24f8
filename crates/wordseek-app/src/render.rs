//! Plain-text rendering of a [`GridView`].
//!
//! Found cells are wrapped in `( )` and selected cells in `[ ]`; a selected
//! cell shows as selected even if it is also found.

use std::{
    fmt::Write as _,
    time::{Duration, SystemTime},
};

use wordseek_game::{CellView, CellVisualState, GridView};

use crate::PuzzleSummary;

#[must_use]
pub fn render_grid(view: &GridView) -> String {
    let mut out = String::from("   ");
    for col in 0..view.size() {
        let _ = write!(out, "{col:^3}");
    }
    trim_line_end(&mut out);

    for row in 0..view.size() {
        let _ = write!(out, "\n{row:>2} ");
        for cell in view.row(row) {
            out.push_str(&render_cell(cell));
        }
        trim_line_end(&mut out);
    }
    out
}

fn render_cell(cell: &CellView) -> String {
    let (open, close) = if cell.visual_state.contains(CellVisualState::SELECTED) {
        ('[', ']')
    } else if cell.visual_state.contains(CellVisualState::FOUND) {
        ('(', ')')
    } else {
        (' ', ' ')
    };
    format!("{open}{}{close}", cell.letter)
}

fn trim_line_end(out: &mut String) {
    let trimmed = out.trim_end_matches(' ').len();
    out.truncate(trimmed);
}

#[must_use]
pub fn render_words(view: &GridView) -> String {
    view.words()
        .iter()
        .map(|entry| {
            let mark = if entry.found { 'x' } else { ' ' };
            format!("[{mark}] {}", entry.word)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn render_status(view: &GridView) -> String {
    let total = view.words().len();
    if view.is_completed() {
        format!("Completed! All {total} words found.")
    } else {
        format!("Found {} of {total} words.", view.found_count())
    }
}

/// Formats a puzzle listing as a table, ages relative to `now`.
#[must_use]
pub fn render_summaries(summaries: &[PuzzleSummary], now: SystemTime) -> String {
    let mut out = String::from("ID    DIFFICULTY  FOUND   STATUS       SAVED");
    for summary in summaries {
        let status = if summary.completed {
            "completed"
        } else {
            "in progress"
        };
        let found = format!("{}/{}", summary.found, summary.total);
        let age = now
            .duration_since(summary.last_saved)
            .map_or_else(|_| "just now".to_owned(), format_age);
        let _ = write!(
            out,
            "\n{:<5} {:<11} {found:<7} {status:<12} {age}",
            summary.id.get(),
            summary.difficulty
        );
    }
    out
}

fn format_age(age: Duration) -> String {
    let secs = age.as_secs();
    match secs {
        0..60 => "just now".to_owned(),
        60..3_600 => format!("{}m ago", secs / 60),
        3_600..86_400 => format!("{}h ago", secs / 3_600),
        _ => format!("{}d ago", secs / 86_400),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use wordseek_core::{Difficulty, Grid, Position, Word};
    use wordseek_game::{Game, Selection};
    use wordseek_store::PuzzleId;

    use super::*;

    fn game(found: &[&str]) -> Game {
        let grid: Grid = "
            CATZ
            ZZZD
            ZZZO
            ZZZG
        "
        .parse()
        .unwrap();
        let words = vec![Word::new("CAT").unwrap(), Word::new("DOG").unwrap()];
        let found = found
            .iter()
            .map(|s| Word::new(s).unwrap())
            .collect::<BTreeSet<_>>();
        let completed = found.len() == words.len();
        Game::from_parts(grid, Difficulty::Easy, words, found, completed).unwrap()
    }

    #[test]
    fn test_render_grid() {
        let selection = Selection::line(Position::new(1, 3), Position::new(3, 3)).unwrap();
        let view = GridView::build(&game(&["CAT"]), Some(&selection));
        let expected = [
            "    0  1  2  3",
            " 0 (C)(A)(T) Z",
            " 1  Z  Z  Z [D]",
            " 2  Z  Z  Z [O]",
            " 3  Z  Z  Z [G]",
        ]
        .join("\n");
        assert_eq!(render_grid(&view), expected);
    }

    #[test]
    fn test_render_summaries() {
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(100_000);
        let summary = |id, found, completed, age_secs| PuzzleSummary {
            id: PuzzleId::new(id),
            difficulty: "medium".to_owned(),
            found,
            total: 4,
            completed,
            started_at: SystemTime::UNIX_EPOCH,
            last_saved: now - Duration::from_secs(age_secs),
        };
        let table = render_summaries(
            &[summary(3, 1, false, 5), summary(12, 4, true, 7_200)],
            now,
        );
        let expected = [
            "ID    DIFFICULTY  FOUND   STATUS       SAVED",
            "3     medium      1/4     in progress  just now",
            "12    medium      4/4     completed    2h ago",
        ]
        .join("\n");
        assert_eq!(table, expected);
    }

    #[test]
    fn test_format_age() {
        assert_eq!(format_age(Duration::from_secs(59)), "just now");
        assert_eq!(format_age(Duration::from_secs(125)), "2m ago");
        assert_eq!(format_age(Duration::from_secs(3 * 86_400)), "3d ago");
    }

    #[test]
    fn test_render_words_and_status() {
        let view = GridView::build(&game(&["DOG"]), None);
        assert_eq!(render_words(&view), "[ ] CAT\n[x] DOG");
        assert_eq!(render_status(&view), "Found 1 of 2 words.");

        let view = GridView::build(&game(&["CAT", "DOG"]), None);
        assert_eq!(render_status(&view), "Completed! All 2 words found.");
    }
}
