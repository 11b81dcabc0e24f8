//! Example demonstrating word-search puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` for a difficulty
//! - Generate a random or seeded puzzle
//! - Display the grid, the placed words, and the answer key
//! - Sample many seeds and keep the one that places the most words
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Use custom words on a hard, 12x12 grid:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard --size 12 --word rust --word cargo
//! ```
//!
//! Sample seeds until every word fits (default budget: 1000):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --word elephant --word mountain --size 8 --max-tries 1000
//! ```
//!
//! Regenerate a puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```

use std::process;

use clap::Parser;
use rayon::prelude::*;
use wordseek_core::{Difficulty, Word};
use wordseek_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed, word_list};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty preset (easy, medium, hard).
    #[arg(short, long, value_name = "LEVEL", default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Grid size.
    #[arg(short, long, value_name = "N", default_value_t = 10)]
    size: usize,

    /// Word to hide. Repeatable. Defaults to the difficulty's built-in list.
    #[arg(short, long = "word", value_name = "WORD")]
    words: Vec<Word>,

    /// Seed to regenerate.
    #[arg(long, value_name = "HEX", conflicts_with = "max_tries")]
    seed: Option<PuzzleSeed>,

    /// Number of seeds to sample, keeping the puzzle that places the most words.
    #[arg(long, value_name = "COUNT")]
    max_tries: Option<usize>,
}

fn main() {
    let args = Args::parse();
    let words = if args.words.is_empty() {
        word_list::for_difficulty(args.difficulty)
    } else {
        args.words
    };
    let generator = PuzzleGenerator::new(words, args.size, args.difficulty);

    if let Some(seed) = args.seed {
        print_puzzle(&generator, &generator.generate_with_seed(seed), None);
        return;
    }

    let Some(max_tries) = args.max_tries else {
        print_puzzle(&generator, &generator.generate(), None);
        return;
    };
    if max_tries == 0 {
        eprintln!("--max-tries must be at least 1.");
        process::exit(1);
    }

    let best = (0..max_tries)
        .into_par_iter()
        .map(|_| generator.generate())
        .max_by_key(|puzzle| puzzle.words.len());

    match best {
        Some(puzzle) => print_puzzle(&generator, &puzzle, Some(max_tries)),
        None => {
            eprintln!("No puzzle was generated.");
            process::exit(1);
        }
    }
}

fn print_puzzle(generator: &PuzzleGenerator, puzzle: &GeneratedPuzzle, tries: Option<usize>) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    if let Some(tries) = tries {
        println!("Selection:");
        println!("  Max tries: {tries}");
        println!();
    }

    println!("Grid ({}):", puzzle.difficulty);
    for row in puzzle.grid.row_strings() {
        let spaced: Vec<String> = row.chars().map(String::from).collect();
        println!("  {}", spaced.join(" "));
    }
    println!();

    println!(
        "Words ({}/{} placed):",
        puzzle.words.len(),
        generator.words().len()
    );
    for placed in &puzzle.placements {
        println!("  {placed}");
    }
    for word in generator.words() {
        if !puzzle.words.contains(word) {
            println!("  {word} (dropped)");
        }
    }
}
