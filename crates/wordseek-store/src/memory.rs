use crate::{GameState, OwnerId, PuzzleId, PuzzleStore, StoreError, StoredPuzzle, records::Records};

/// A store that keeps puzzles in memory for the lifetime of the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: Records,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PuzzleStore for MemoryStore {
    fn insert(&mut self, state: GameState) -> Result<PuzzleId, StoreError> {
        Ok(self.records.insert(state))
    }

    fn update(&mut self, id: PuzzleId, state: GameState) -> Result<(), StoreError> {
        self.records.update(id, state)
    }

    fn load(&self, owner: &OwnerId, id: PuzzleId) -> Result<GameState, StoreError> {
        self.records.load(owner, id)
    }

    fn latest_incomplete(&self, owner: &OwnerId) -> Result<Option<StoredPuzzle>, StoreError> {
        Ok(self.records.latest_incomplete(owner))
    }

    fn list(&self, owner: &OwnerId) -> Result<Vec<StoredPuzzle>, StoreError> {
        Ok(self.records.list(owner))
    }

    fn delete(&mut self, owner: &OwnerId, id: PuzzleId) -> Result<(), StoreError> {
        self.records.delete(owner, id)
    }
}
