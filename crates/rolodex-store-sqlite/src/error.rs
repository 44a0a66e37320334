//! Error type for `rolodex-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] rolodex_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),
}

impl Error {
  /// Whether the failure was a UNIQUE, FOREIGN KEY or other constraint
  /// rejecting the commit.
  pub fn is_constraint_violation(&self) -> bool {
    match self {
      Error::Database(tokio_rusqlite::Error::Rusqlite(
        rusqlite::Error::SqliteFailure(e, _),
      )) => e.code == rusqlite::ErrorCode::ConstraintViolation,
      _ => false,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
