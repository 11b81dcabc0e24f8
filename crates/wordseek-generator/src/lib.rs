//! Word-search puzzle generation.
//!
//! [`GridBuilder`] implements the placement algorithm: words are dropped onto
//! random start cells in random allowed directions, overlapping only where
//! letters agree, and leftover cells get random letters. [`PuzzleGenerator`]
//! wraps it with a [`PuzzleSeed`] so every puzzle can be regenerated exactly.
//!
//! # Examples
//!
//! ```
//! use wordseek_core::Difficulty;
//! use wordseek_generator::{PuzzleGenerator, word_list};
//!
//! let generator = PuzzleGenerator::new(word_list::classic(), 10, Difficulty::Medium);
//! let puzzle = generator.generate();
//!
//! let again = generator.generate_with_seed(puzzle.seed);
//! assert_eq!(puzzle, again);
//! ```

use wordseek_core::{Difficulty, Grid, PlacedWord, Word};

pub use self::{
    builder::{BuiltGrid, GridBuilder, random_letter},
    seed::{ParseSeedError, PuzzleSeed},
};

mod builder;
mod seed;
pub mod word_list;

/// A generated puzzle together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The finished grid.
    pub grid: Grid,
    /// Words that were placed, in input order.
    pub words: Vec<Word>,
    /// Where each placed word ended up, parallel to `words`.
    pub placements: Vec<PlacedWord>,
    /// Difficulty whose directions were used.
    pub difficulty: Difficulty,
    /// Seed for regenerating this exact puzzle.
    pub seed: PuzzleSeed,
}

/// Generates seeded puzzles from a fixed word list.
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    words: Vec<Word>,
    difficulty: Difficulty,
    builder: GridBuilder,
}

impl PuzzleGenerator {
    /// Creates a generator for `size × size` grids at `difficulty`.
    #[must_use]
    pub fn new(words: Vec<Word>, size: usize, difficulty: Difficulty) -> Self {
        Self {
            words,
            difficulty,
            builder: GridBuilder::new(size, difficulty.directions()),
        }
    }

    /// Creates a generator using the built-in list for `difficulty` on a
    /// default-sized grid.
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self::new(
            word_list::for_difficulty(difficulty),
            Grid::DEFAULT_SIZE,
            difficulty,
        )
    }

    /// Sets the number of placement attempts per word.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.builder = self.builder.with_max_attempts(max_attempts);
        self
    }

    /// Returns the input word list.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Returns the underlying builder.
    #[must_use]
    pub fn builder(&self) -> &GridBuilder {
        &self.builder
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();
        let BuiltGrid {
            grid,
            words,
            placements,
        } = self.builder.build(&self.words, &mut rng);
        log::debug!(
            "generated {} puzzle with {}/{} words from seed {seed}",
            self.difficulty,
            words.len(),
            self.words.len()
        );
        GeneratedPuzzle {
            grid,
            words,
            placements,
            difficulty: self.difficulty,
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_reproduces_puzzle() {
        let generator = PuzzleGenerator::for_difficulty(Difficulty::Hard);
        let seed = PuzzleSeed::from_phrase("reproducible");
        let a = generator.generate_with_seed(seed);
        let b = generator.generate_with_seed(seed);
        assert_eq!(a, b);
        assert_eq!(a.seed, seed);
        assert_eq!(a.difficulty, Difficulty::Hard);

        let parsed: PuzzleSeed = seed.to_string().parse().unwrap();
        assert_eq!(generator.generate_with_seed(parsed), a);
    }

    #[test]
    fn test_placements_respect_difficulty() {
        for difficulty in Difficulty::ALL {
            let generator = PuzzleGenerator::for_difficulty(difficulty);
            for i in 0..20 {
                let puzzle = generator.generate_with_seed(PuzzleSeed::from_phrase(&i.to_string()));
                assert_eq!(puzzle.grid.size(), Grid::DEFAULT_SIZE);
                for placed in &puzzle.placements {
                    assert!(difficulty.directions().contains_direction(placed.direction));
                    assert!(puzzle.grid.holds(placed));
                }
            }
        }
    }

    #[test]
    fn test_max_attempts_is_forwarded() {
        let generator = PuzzleGenerator::for_difficulty(Difficulty::Easy).with_max_attempts(0);
        assert_eq!(generator.builder().max_attempts(), 0);
        let puzzle = generator.generate();
        assert!(puzzle.words.is_empty());
        assert_eq!(generator.words().len(), 4);
    }
}
