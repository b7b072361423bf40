// crates/tunebox-core/src/errors.rs
use std::fmt;
use thiserror::Error;

/// Which collection a missing id was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
  Song,
  Playlist,
}

impl fmt::Display for EntityKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      EntityKind::Song => write!(f, "Song"),
      EntityKind::Playlist => write!(f, "Playlist"),
    }
  }
}

/// Error generic to every store operation.
///
/// Upper layers (the HTTP backend, tests) map each variant to a status code:
/// `Validation` and `Conflict` are client mistakes, `NotFound` is a missing id.
/// No variant is fatal and none is ever returned after a partial write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
  /// Required input missing or invalid.
  #[error("{0}")]
  Validation(String),

  /// The referenced id does not exist.
  #[error("{0} not found")]
  NotFound(EntityKind),

  /// The operation would break a uniqueness or membership rule.
  #[error("{0}")]
  Conflict(String),
}

impl CoreError {
  pub fn validation(msg: impl Into<String>) -> Self {
    CoreError::Validation(msg.into())
  }

  pub fn conflict(msg: impl Into<String>) -> Self {
    CoreError::Conflict(msg.into())
  }
}
