use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a song.
///
/// Positive integer handed out by the song store's [`IdSequence`]. It is
/// serialized as a bare number so it can travel in paths and JSON bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SongId(u64);

impl SongId {
  pub fn new(raw: u64) -> Self {
    SongId(raw)
  }

  pub fn get(&self) -> u64 {
    self.0
  }
}

impl From<u64> for SongId {
  fn from(raw: u64) -> Self {
    SongId(raw)
  }
}

impl From<SongId> for u64 {
  fn from(id: SongId) -> Self {
    id.0
  }
}

impl fmt::Display for SongId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// Identifier of a playlist. Drawn from its own sequence, independent
/// of [`SongId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaylistId(u64);

impl PlaylistId {
  pub fn new(raw: u64) -> Self {
    PlaylistId(raw)
  }

  pub fn get(&self) -> u64 {
    self.0
  }
}

impl From<u64> for PlaylistId {
  fn from(raw: u64) -> Self {
    PlaylistId(raw)
  }
}

impl From<PlaylistId> for u64 {
  fn from(id: PlaylistId) -> Self {
    id.0
  }
}

impl fmt::Display for PlaylistId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// Monotonic id counter owned by a store.
///
/// Starts at 1 and never hands out the same value twice, even when the
/// record that received it is deleted later.
#[derive(Debug, Clone)]
pub struct IdSequence {
  next: u64,
}

impl IdSequence {
  pub fn new() -> Self {
    Self { next: 1 }
  }

  /// Returns the next id and advances the counter.
  pub fn allocate<I: From<u64>>(&mut self) -> I {
    let id = self.next;
    self.next += 1;
    I::from(id)
  }
}

impl Default for IdSequence {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sequence_starts_at_one_and_increases() {
    let mut seq = IdSequence::new();
    let a: SongId = seq.allocate();
    let b: SongId = seq.allocate();
    let c: SongId = seq.allocate();

    assert_eq!(a.get(), 1);
    assert!(a < b && b < c);
    assert_eq!(c.get(), 3);
  }

  #[test]
  fn ids_serialize_as_plain_numbers() {
    let id = PlaylistId::new(7);
    assert_eq!(serde_json::to_string(&id).unwrap(), "7");

    let back: SongId = serde_json::from_str("12").unwrap();
    assert_eq!(back, SongId::from(12));
  }
}
