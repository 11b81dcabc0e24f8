use std::{cmp::Reverse, collections::BTreeMap};

use serde::{Deserialize, Serialize};

use crate::{GameState, OwnerId, PuzzleId, StoreError, StoredPuzzle};

/// Puzzle table shared by the store implementations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Records {
    next_id: PuzzleId,
    puzzles: BTreeMap<PuzzleId, GameState>,
}

impl Default for Records {
    fn default() -> Self {
        Self {
            next_id: PuzzleId::new(1),
            puzzles: BTreeMap::new(),
        }
    }
}

impl Records {
    pub(crate) fn insert(&mut self, state: GameState) -> PuzzleId {
        let id = self.next_id;
        self.next_id = id.next();
        self.puzzles.insert(id, state);
        id
    }

    pub(crate) fn update(&mut self, id: PuzzleId, state: GameState) -> Result<(), StoreError> {
        let stored = self
            .puzzles
            .get_mut(&id)
            .filter(|stored| stored.owner == state.owner)
            .ok_or(StoreError::NotFound { id })?;
        if stored.completed {
            return Err(StoreError::Completed { id });
        }
        *stored = state;
        Ok(())
    }

    pub(crate) fn load(&self, owner: &OwnerId, id: PuzzleId) -> Result<GameState, StoreError> {
        self.puzzles
            .get(&id)
            .filter(|state| state.owner == *owner)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    pub(crate) fn latest_incomplete(&self, owner: &OwnerId) -> Option<StoredPuzzle> {
        self.owned_by(owner)
            .filter(|(_, state)| !state.completed)
            .max_by_key(|(id, state)| (state.last_saved, *id))
            .map(|(id, state)| StoredPuzzle::new(id, state.clone()))
    }

    pub(crate) fn list(&self, owner: &OwnerId) -> Vec<StoredPuzzle> {
        let mut puzzles = self
            .owned_by(owner)
            .map(|(id, state)| StoredPuzzle::new(id, state.clone()))
            .collect::<Vec<_>>();
        puzzles.sort_by_key(|puzzle| Reverse((puzzle.state.last_saved, puzzle.id)));
        puzzles
    }

    pub(crate) fn delete(&mut self, owner: &OwnerId, id: PuzzleId) -> Result<(), StoreError> {
        if !self.puzzles.get(&id).is_some_and(|state| state.owner == *owner) {
            return Err(StoreError::NotFound { id });
        }
        self.puzzles.remove(&id);
        Ok(())
    }

    fn owned_by<'a>(
        &'a self,
        owner: &'a OwnerId,
    ) -> impl Iterator<Item = (PuzzleId, &'a GameState)> + 'a {
        self.puzzles
            .iter()
            .filter(move |(_, state)| state.owner == *owner)
            .map(|(id, state)| (*id, state))
    }
}

/// On-disk layout of [`Records`].
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct RecordsFile {
    next_id: PuzzleId,
    puzzles: Vec<StoredPuzzle>,
}

impl From<&Records> for RecordsFile {
    fn from(records: &Records) -> Self {
        Self {
            next_id: records.next_id,
            puzzles: records
                .puzzles
                .iter()
                .map(|(id, state)| StoredPuzzle::new(*id, state.clone()))
                .collect(),
        }
    }
}

impl From<RecordsFile> for Records {
    fn from(file: RecordsFile) -> Self {
        let puzzles = file
            .puzzles
            .into_iter()
            .map(|puzzle| (puzzle.id, puzzle.state))
            .collect::<BTreeMap<_, _>>();
        // Never hand out an id that is already taken, even if the file was edited.
        let next_id = puzzles
            .keys()
            .next_back()
            .map_or(file.next_id, |last| file.next_id.max(last.next()));
        Self { next_id, puzzles }
    }
}
