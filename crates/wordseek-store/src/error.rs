use std::io;

use crate::PuzzleId;

/// Errors returned by [`PuzzleStore`](crate::PuzzleStore) implementations.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum StoreError {
    /// The owner has no puzzle with this id.
    #[display("puzzle {id} not found")]
    NotFound {
        /// The requested id.
        id: PuzzleId,
    },
    /// The puzzle is completed and can only be deleted.
    #[display("puzzle {id} is completed and can no longer change")]
    Completed {
        /// The completed puzzle.
        id: PuzzleId,
    },
    /// Reading or writing the backing file failed.
    #[display("failed to access store file {path}: {source}")]
    Io {
        /// The store file.
        path: String,
        /// The underlying error.
        source: io::Error,
    },
    /// The backing file does not hold valid store data.
    #[display("malformed store file {path}: {source}")]
    Json {
        /// The store file.
        path: String,
        /// The underlying error.
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Returns `true` for [`StoreError::NotFound`].
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
