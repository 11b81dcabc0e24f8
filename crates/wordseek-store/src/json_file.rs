use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{
    GameState, OwnerId, PuzzleId, PuzzleStore, StoreError, StoredPuzzle,
    records::{Records, RecordsFile},
};

/// A store that keeps every puzzle in one JSON file.
///
/// The whole file is read when the store is opened and rewritten after each
/// change. A missing file is treated as an empty store and created on the
/// first write.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    records: Records,
}

impl JsonFileStore {
    /// Opens the store backed by `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file exists but cannot be read, or
    /// [`StoreError::Json`] if it does not hold store data.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str::<RecordsFile>(&contents)
                .map_err(|source| StoreError::Json {
                    path: path.display().to_string(),
                    source,
                })?
                .into(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("store file {} does not exist yet", path.display());
                Records::default()
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.display().to_string(),
                    source,
                });
            }
        };
        Ok(Self { path, records })
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn mutate<T>(
        &mut self,
        f: impl FnOnce(&mut Records) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut records = self.records.clone();
        let value = f(&mut records)?;
        self.write(&records)?;
        self.records = records;
        Ok(value)
    }

    fn write(&self, records: &Records) -> Result<(), StoreError> {
        let contents =
            serde_json::to_string_pretty(&RecordsFile::from(records)).map_err(|source| {
                StoreError::Json {
                    path: self.path.display().to_string(),
                    source,
                }
            })?;
        fs::write(&self.path, contents).map_err(|source| StoreError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        log::debug!("wrote store file {}", self.path.display());
        Ok(())
    }
}

impl PuzzleStore for JsonFileStore {
    fn insert(&mut self, state: GameState) -> Result<PuzzleId, StoreError> {
        self.mutate(|records| Ok(records.insert(state)))
    }

    fn update(&mut self, id: PuzzleId, state: GameState) -> Result<(), StoreError> {
        self.mutate(|records| records.update(id, state))
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
        self.mutate(|records| records.delete(owner, id))
    }
}
