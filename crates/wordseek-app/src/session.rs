use std::time::{Instant, SystemTime};

use wordseek_game::{Game, Selection, SelectionOutcome};
use wordseek_generator::PuzzleSeed;
use wordseek_store::{GameState, OwnerId, PuzzleId, PuzzleStore, StoredPuzzle};

use crate::{
    autosave::Autosave,
    error::AppError,
    game_factory::{self, NewGameRequest},
    identity::IdentityProvider,
    settings::Settings,
};

/// A game being played, bound to its saved puzzle.
#[derive(Debug)]
pub struct Session {
    id: PuzzleId,
    game: Game,
    snapshot: GameState,
    autosave: Autosave,
}

impl Session {
    #[must_use]
    pub fn id(&self) -> PuzzleId {
        self.id
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn started_at(&self) -> SystemTime {
        self.snapshot.started_at
    }

    #[must_use]
    pub fn last_saved(&self) -> SystemTime {
        self.snapshot.last_saved
    }

    /// Returns `true` if there are finds that are not saved yet.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.autosave.is_dirty()
    }

    /// Returns when the pending autosave becomes due.
    #[must_use]
    pub fn save_deadline(&self) -> Option<Instant> {
        self.autosave.deadline()
    }
}

/// One line of a puzzle listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSummary {
    pub id: PuzzleId,
    pub difficulty: String,
    pub found: usize,
    pub total: usize,
    pub completed: bool,
    pub started_at: SystemTime,
    pub last_saved: SystemTime,
}

impl From<&StoredPuzzle> for PuzzleSummary {
    fn from(puzzle: &StoredPuzzle) -> Self {
        let state = &puzzle.state;
        Self {
            id: puzzle.id,
            difficulty: state.difficulty.clone(),
            found: state.found_words.len(),
            total: state.words.len(),
            completed: state.completed,
            started_at: state.started_at,
            last_saved: state.last_saved,
        }
    }
}

/// Puzzle lifecycle for one signed-in owner.
///
/// Finds are saved with a debounce; completing a puzzle saves immediately,
/// and [`GameService::flush`] writes whatever is pending on exit.
#[derive(Debug)]
pub struct GameService<S> {
    store: S,
    owner: OwnerId,
    settings: Settings,
}

impl<S> GameService<S>
where
    S: PuzzleStore,
{
    #[must_use]
    pub fn new(store: S, owner: OwnerId, settings: Settings) -> Self {
        Self {
            store,
            owner,
            settings,
        }
    }

    /// Verifies `token` and opens a service for its owner.
    pub fn sign_in<P>(
        store: S,
        provider: &P,
        token: &str,
        settings: Settings,
    ) -> Result<Self, AppError>
    where
        P: IdentityProvider + ?Sized,
    {
        let owner = provider.verify(token)?;
        log::debug!("signed in as {owner}");
        Ok(Self::new(store, owner, settings))
    }

    #[must_use]
    pub fn owner(&self) -> &OwnerId {
        &self.owner
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Generates a puzzle, saves it, and starts playing it.
    pub fn start_new(
        &mut self,
        request: NewGameRequest,
    ) -> Result<(Session, PuzzleSeed), AppError> {
        let puzzle = game_factory::generate_puzzle(&self.settings.generation, request)?;
        let seed = puzzle.seed;
        let game = Game::new(puzzle);
        let snapshot = GameState::new(self.owner.clone(), &game, SystemTime::now());
        let id = self.store.insert(snapshot.clone())?;
        log::info!(
            "started puzzle {id} for {} ({}, {} words)",
            self.owner,
            game.difficulty(),
            game.words().len()
        );
        Ok((self.session(id, game, snapshot), seed))
    }

    /// Resumes a saved puzzle.
    pub fn open(&self, id: PuzzleId) -> Result<Session, AppError> {
        let snapshot = self.store.load(&self.owner, id)?;
        let game = snapshot.to_game()?;
        log::info!("opened puzzle {id} for {}", self.owner);
        Ok(self.session(id, game, snapshot))
    }

    /// Resumes the most recently saved puzzle that is not completed.
    pub fn open_latest(&self) -> Result<Option<Session>, AppError> {
        let Some(StoredPuzzle { id, state }) = self.store.latest_incomplete(&self.owner)? else {
            return Ok(None);
        };
        let game = state.to_game()?;
        log::info!("resumed puzzle {id} for {}", self.owner);
        Ok(Some(self.session(id, game, state)))
    }

    /// Lists the owner's puzzles, most recently saved first.
    pub fn list(&self) -> Result<Vec<PuzzleSummary>, AppError> {
        let puzzles = self.store.list(&self.owner)?;
        Ok(puzzles.iter().map(PuzzleSummary::from).collect())
    }

    pub fn delete(&mut self, id: PuzzleId) -> Result<(), AppError> {
        self.store.delete(&self.owner, id)?;
        log::info!("deleted puzzle {id} for {}", self.owner);
        Ok(())
    }

    /// Applies a finished selection to the session.
    ///
    /// A newly found word schedules an autosave; the find that completes the
    /// puzzle is saved right away.
    ///
    /// Only game errors are returned. A failed save is logged and kept
    /// pending.
    pub fn select(
        &mut self,
        session: &mut Session,
        selection: &Selection,
        now: Instant,
    ) -> Result<SelectionOutcome, AppError> {
        let outcome = session.game.resolve_selection(selection)?;
        if let SelectionOutcome::Found { word, completed } = &outcome {
            log::debug!("found {word} in puzzle {}", session.id);
            session.autosave.mark_dirty(now);
            if *completed {
                log::info!("puzzle {} completed", session.id);
                // Left dirty on failure so that `flush` retries.
                if let Err(e) = self.save(session) {
                    log::warn!("failed to save completed puzzle {}: {e}", session.id);
                }
            }
        }
        Ok(outcome)
    }

    /// Saves the session if the debounce interval has passed since the last find.
    ///
    /// Returns `true` if a save happened.
    pub fn save_if_due(&mut self, session: &mut Session, now: Instant) -> Result<bool, AppError> {
        if !session.autosave.is_due(now) {
            return Ok(false);
        }
        self.save(session)?;
        Ok(true)
    }

    /// Saves any pending changes.
    pub fn flush(&mut self, session: &mut Session) -> Result<(), AppError> {
        if session.is_dirty() {
            self.save(session)?;
        }
        Ok(())
    }

    fn save(&mut self, session: &mut Session) -> Result<(), AppError> {
        let snapshot = session
            .snapshot
            .clone()
            .with_progress(&session.game, SystemTime::now());
        self.store.update(session.id, snapshot.clone())?;
        session.snapshot = snapshot;
        session.autosave.clear_dirty();
        log::debug!(
            "saved puzzle {} ({}/{} found)",
            session.id,
            session.game.found_words().len(),
            session.game.words().len()
        );
        Ok(())
    }

    fn session(&self, id: PuzzleId, game: Game, snapshot: GameState) -> Session {
        Session {
            id,
            game,
            snapshot,
            autosave: Autosave::new(self.settings.autosave.debounce),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use wordseek_core::{Position, Word};
    use wordseek_store::{MemoryStore, StoreError};

    use super::*;
    use crate::identity::{AuthError, LocalIdentity};

    fn service() -> GameService<MemoryStore> {
        GameService::new(MemoryStore::new(), OwnerId::new("alice"), Settings::default())
    }

    fn request(phrase: &str) -> NewGameRequest {
        NewGameRequest {
            words: vec![Word::new("CAT").unwrap(), Word::new("DOG").unwrap()],
            seed: Some(PuzzleSeed::from_phrase(phrase)),
        }
    }

    /// Builds the selection spelling `word` in the session's grid.
    fn selection_for(session: &Session, word: &Word) -> Selection {
        let game = session.game();
        let placed = game
            .grid()
            .positions()
            .find_map(|pos| game.grid().find_placement_through(word, pos, game.directions()))
            .unwrap();
        Selection::new(placed.path(game.grid().size()).unwrap())
    }

    fn saved_found(service: &GameService<MemoryStore>, session: &Session) -> usize {
        service
            .store()
            .load(service.owner(), session.id())
            .unwrap()
            .found_words
            .len()
    }

    #[test]
    fn test_sign_in() {
        let service =
            GameService::sign_in(MemoryStore::new(), &LocalIdentity, "Alice", Settings::default())
                .unwrap();
        assert_eq!(service.owner(), &OwnerId::new("alice"));

        let err = GameService::sign_in(MemoryStore::new(), &LocalIdentity, "", Settings::default())
            .unwrap_err();
        assert!(matches!(err, AppError::Auth(AuthError::MissingToken)));
    }

    #[test]
    fn test_new_game_is_saved() {
        let mut service = service();
        let (session, seed) = service.start_new(request("saved")).unwrap();
        assert_eq!(seed, PuzzleSeed::from_phrase("saved"));
        assert!(!session.is_dirty());

        let reopened = service.open(session.id()).unwrap();
        assert_eq!(reopened.game(), session.game());
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_find_is_saved_after_debounce() {
        let mut service = service();
        let (mut session, _) = service.start_new(request("debounce")).unwrap();
        let word = session.game().words()[0].clone();
        let t0 = Instant::now();

        let selection = selection_for(&session, &word);
        let outcome = service
            .select(&mut session, &selection, t0)
            .unwrap();
        assert!(outcome.is_found());
        assert!(session.is_dirty());
        assert_eq!(session.save_deadline(), Some(t0 + Duration::from_secs(1)));
        assert_eq!(saved_found(&service, &session), 0);

        assert!(!service.save_if_due(&mut session, t0 + Duration::from_millis(500)).unwrap());
        assert_eq!(saved_found(&service, &session), 0);

        assert!(service.save_if_due(&mut session, t0 + Duration::from_secs(1)).unwrap());
        assert!(!session.is_dirty());
        assert_eq!(session.save_deadline(), None);
        assert_eq!(saved_found(&service, &session), 1);
    }

    #[test]
    fn test_completion_saves_immediately() {
        let mut service = service();
        let (mut session, _) = service.start_new(request("complete")).unwrap();
        let words = session.game().words().to_vec();
        let now = Instant::now();

        for word in &words {
            let selection = selection_for(&session, word);
            service.select(&mut session, &selection, now).unwrap();
        }
        assert!(session.game().is_completed());
        assert!(!session.is_dirty());

        let saved = service.store().load(service.owner(), session.id()).unwrap();
        assert!(saved.completed);
        assert_eq!(saved.found_words.len(), words.len());
        assert!(service.open_latest().unwrap().is_none());

        let again = selection_for(&session, &words[0]);
        assert!(matches!(
            service.select(&mut session, &again, now),
            Err(AppError::Game(_))
        ));
    }

    #[test]
    fn test_flush_writes_pending_finds() {
        let mut service = service();
        let (mut session, _) = service.start_new(request("flush")).unwrap();
        let word = session.game().words()[0].clone();
        let selection = selection_for(&session, &word);
        service.select(&mut session, &selection, Instant::now()).unwrap();

        service.flush(&mut session).unwrap();
        assert!(!session.is_dirty());
        assert_eq!(saved_found(&service, &session), 1);

        let resumed = service.open_latest().unwrap().unwrap();
        assert_eq!(resumed.id(), session.id());
        assert!(resumed.game().is_found(&word));
    }

    #[test]
    fn test_no_match_does_not_dirty() {
        let mut service = service();
        let (mut session, _) = service.start_new(request("nomatch")).unwrap();
        let stray = Selection::new(vec![Position::new(0, 0)]);
        let outcome = service.select(&mut session, &stray, Instant::now()).unwrap();
        assert_eq!(outcome, SelectionOutcome::NoMatch);
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_delete() {
        let mut service = service();
        let (session, _) = service.start_new(request("delete")).unwrap();
        service.delete(session.id()).unwrap();
        assert!(matches!(
            service.open(session.id()),
            Err(AppError::Store(StoreError::NotFound { .. }))
        ));
        assert!(service.list().unwrap().is_empty());
    }
}
