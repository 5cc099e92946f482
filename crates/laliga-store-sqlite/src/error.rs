//! Error type for `laliga-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// Insert rejected by the primary-key constraint.
  #[error("match already exists: {0}")]
  DuplicateMatch(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
