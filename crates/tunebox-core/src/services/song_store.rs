use std::collections::BTreeMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::domain::{IdSequence, NewSong, Song, SongFilter, SongId, SongPatch, SortField, SortOrder, sort_songs};
use crate::errors::{CoreError, EntityKind};
use crate::ports::SongCatalog;

#[derive(Debug, Default)]
struct Inner {
  ids: IdSequence,
  // keyed by id, so iteration order is creation order
  songs: BTreeMap<SongId, Song>,
}

/// Owns every song and the id sequence that names them.
///
/// All mutations run under one write lock, so the existence check and the
/// write it guards are never interleaved with another request. Reads share
/// the lock and never see a half-applied change.
#[derive(Debug, Default)]
pub struct SongStore {
  inner: RwLock<Inner>,
}

impl SongStore {
  pub fn new() -> Self {
    Self::default()
  }

  // -------- COMMAND (write) --------

  pub fn create(&self, input: NewSong) -> Result<Song, CoreError> {
    input.validate()?;

    let mut inner = self.inner.write();
    let id: SongId = inner.ids.allocate();
    let song = input.into_song(id)?;
    inner.songs.insert(id, song.clone());

    debug!(song_id = %id, title = %song.title, "song created");
    Ok(song)
  }

  pub fn update(&self, id: SongId, patch: SongPatch) -> Result<Song, CoreError> {
    let mut inner = self.inner.write();
    let song = inner.songs.get_mut(&id).ok_or(CoreError::NotFound(EntityKind::Song))?;

    if !patch.is_empty() {
      patch.apply(song);
      debug!(song_id = %id, "song updated");
    }
    Ok(song.clone())
  }

  /// Removes the song. Playlists referencing it are left as they are.
  pub fn delete(&self, id: SongId) -> Result<Song, CoreError> {
    let removed = self.inner.write().songs.remove(&id).ok_or(CoreError::NotFound(EntityKind::Song))?;

    debug!(song_id = %id, "song deleted");
    Ok(removed)
  }

  // -------- QUERY (read) --------

  pub fn get(&self, id: SongId) -> Result<Song, CoreError> {
    self.inner.read().songs.get(&id).cloned().ok_or(CoreError::NotFound(EntityKind::Song))
  }

  pub fn list(&self) -> Vec<Song> {
    self.inner.read().songs.values().cloned().collect()
  }

  /// Songs matching every filter that is set, in creation order.
  pub fn search(&self, filter: &SongFilter) -> Vec<Song> {
    if filter.is_empty() {
      return self.list();
    }
    let inner = self.inner.read();
    inner.songs.values().filter(|song| filter.matches(song)).cloned().collect()
  }

  pub fn sort(&self, field: SortField, order: SortOrder) -> Vec<Song> {
    let mut songs = self.list();
    sort_songs(&mut songs, field, order);
    songs
  }

  /// Like [`SongStore::sort`] but takes the field by name, as it arrives in a
  /// query string.
  pub fn sort_by_name(&self, field: &str, descending: bool) -> Result<Vec<Song>, CoreError> {
    let field: SortField = field.parse()?;
    Ok(self.sort(field, SortOrder::from_descending(descending)))
  }

  pub fn len(&self) -> usize {
    self.inner.read().songs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl SongCatalog for SongStore {
  fn contains_song(&self, id: SongId) -> bool {
    self.inner.read().songs.contains_key(&id)
  }
}
