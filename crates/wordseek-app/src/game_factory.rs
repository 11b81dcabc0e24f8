use wordseek_core::Word;
use wordseek_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed, word_list};

use crate::{error::AppError, settings::GenerationSettings};

/// Options for one new puzzle on top of the generation settings.
#[derive(Debug, Default, Clone)]
pub struct NewGameRequest {
    /// Words to hide. Empty means the built-in list for the difficulty.
    pub words: Vec<Word>,
    /// Seed to regenerate a known puzzle. `None` draws a random one.
    pub seed: Option<PuzzleSeed>,
}

#[must_use]
pub fn puzzle_generator(settings: &GenerationSettings, words: Vec<Word>) -> PuzzleGenerator {
    let words = if words.is_empty() {
        word_list::for_difficulty(settings.difficulty)
    } else {
        words
    };
    PuzzleGenerator::new(words, settings.grid_size, settings.difficulty)
        .with_max_attempts(settings.max_attempts)
}

/// Generates a puzzle that can be played.
///
/// A puzzle where no word fit could never be completed, so it is rejected.
pub fn generate_puzzle(
    settings: &GenerationSettings,
    request: NewGameRequest,
) -> Result<GeneratedPuzzle, AppError> {
    let generator = puzzle_generator(settings, request.words);
    let puzzle = match request.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };
    if puzzle.words.is_empty() {
        return Err(AppError::NoWordsPlaced {
            requested: generator.words().len(),
            size: settings.grid_size,
        });
    }
    let dropped = generator.words().len() - puzzle.words.len();
    if dropped > 0 {
        log::info!("{dropped} word(s) did not fit and were left out");
    }
    Ok(puzzle)
}
