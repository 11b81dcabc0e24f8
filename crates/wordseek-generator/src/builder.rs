use rand::{Rng, seq::IndexedRandom as _};
use wordseek_core::{Direction, DirectionSet, DraftGrid, Grid, Letter, PlacedWord, Position, Word};

/// Places words into a square grid and fills the rest with random letters.
///
/// Placement is best effort. Each word gets a fixed number of random attempts
/// (a random start cell and a random allowed direction per attempt); a word
/// that cannot be placed in that budget is dropped and never retried. Callers
/// must read the placed words from [`BuiltGrid::words`] rather than assume
/// every input word made it in.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
/// use wordseek_core::{DirectionSet, Word};
/// use wordseek_generator::GridBuilder;
///
/// let words = ["CAT", "DOG"].map(|w| Word::new(w).unwrap());
/// let builder = GridBuilder::new(10, DirectionSet::RIGHT | DirectionSet::DOWN);
/// let built = builder.build(&words, &mut Pcg64::seed_from_u64(7));
///
/// assert_eq!(built.grid.size(), 10);
/// for placed in &built.placements {
///     assert!(built.grid.holds(placed));
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridBuilder {
    size: usize,
    directions: DirectionSet,
    max_attempts: usize,
}

/// The result of [`GridBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltGrid {
    /// The finished grid.
    pub grid: Grid,
    /// Words that were placed, in input order.
    pub words: Vec<Word>,
    /// Where each placed word ended up, parallel to `words`.
    pub placements: Vec<PlacedWord>,
}

impl GridBuilder {
    /// Default number of placement attempts per word.
    pub const DEFAULT_MAX_ATTEMPTS: usize = 50;

    /// Creates a builder for a `size × size` grid using `directions`.
    ///
    /// A `size` of 0 is raised to 1.
    #[must_use]
    pub fn new(size: usize, directions: DirectionSet) -> Self {
        Self {
            size: size.max(1),
            directions,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets the number of placement attempts per word.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Returns the grid size.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the allowed directions.
    #[must_use]
    pub fn directions(&self) -> DirectionSet {
        self.directions
    }

    /// Returns the number of placement attempts per word.
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Places `words` in order, then fills every remaining cell.
    ///
    /// Words are processed in the given order, which affects the layout but
    /// not the placement rules. Repeated words are placed once.
    pub fn build<R>(&self, words: &[Word], rng: &mut R) -> BuiltGrid
    where
        R: Rng + ?Sized,
    {
        let directions = self.directions.to_vec();
        let mut draft = DraftGrid::new(self.size);
        let mut placed_words = Vec::new();
        let mut placements = Vec::new();

        for word in words {
            if placed_words.contains(word) {
                log::debug!("skipping repeated word {word}");
                continue;
            }
            match self.place_word(&mut draft, word, &directions, rng) {
                Some(placed) => {
                    log::debug!("placed {placed}");
                    placed_words.push(word.clone());
                    placements.push(placed);
                }
                None => {
                    log::debug!(
                        "dropped {word} after {} attempts on a {}x{} grid",
                        self.max_attempts,
                        self.size,
                        self.size
                    );
                }
            }
        }

        let grid = draft.fill(|| random_letter(rng));
        BuiltGrid {
            grid,
            words: placed_words,
            placements,
        }
    }

    fn place_word<R>(
        &self,
        draft: &mut DraftGrid,
        word: &Word,
        directions: &[Direction],
        rng: &mut R,
    ) -> Option<PlacedWord>
    where
        R: Rng + ?Sized,
    {
        for _ in 0..self.max_attempts {
            let start = Position::new(rng.random_range(0..self.size), rng.random_range(0..self.size));
            let direction = *directions.choose(rng)?;
            let placed = PlacedWord::new(word.clone(), start, direction);
            if draft.place(&placed) {
                return Some(placed);
            }
        }
        None
    }
}

/// Draws a uniformly random letter `A`-`Z`.
pub fn random_letter<R>(rng: &mut R) -> Letter
where
    R: Rng + ?Sized,
{
    Letter::from_index(rng.random_range(0..Letter::COUNT))
}
