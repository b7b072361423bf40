use std::collections::BTreeMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::domain::{IdSequence, NewPlaylist, Playlist, PlaylistId, PlaylistPatch, SongId};
use crate::errors::{CoreError, EntityKind};
use crate::ports::SongCatalog;

#[derive(Debug, Default)]
struct Inner {
  ids: IdSequence,
  playlists: BTreeMap<PlaylistId, Playlist>,
}

impl Inner {
  fn playlist_mut(&mut self, id: PlaylistId) -> Result<&mut Playlist, CoreError> {
    self.playlists.get_mut(&id).ok_or(CoreError::NotFound(EntityKind::Playlist))
  }
}

/// Owns every playlist and its membership list.
///
/// Membership changes consult the catalog `C` (normally the song store) while
/// holding this store's write lock. The catalog never calls back into this
/// store, so the lock order is always playlists then songs.
pub struct PlaylistStore<C>
where
  C: SongCatalog,
{
  catalog: C,
  inner: RwLock<Inner>,
}

impl<C> PlaylistStore<C>
where
  C: SongCatalog,
{
  pub fn new(catalog: C) -> Self {
    Self { catalog, inner: RwLock::new(Inner::default()) }
  }

  // -------- COMMAND (write) --------

  pub fn create(&self, input: NewPlaylist) -> Result<Playlist, CoreError> {
    input.validate()?;

    let mut inner = self.inner.write();
    let id: PlaylistId = inner.ids.allocate();
    let playlist = input.into_playlist(id)?;
    inner.playlists.insert(id, playlist.clone());

    debug!(playlist_id = %id, name = %playlist.name, "playlist created");
    Ok(playlist)
  }

  /// Applies a partial update. A `songs` list replaces membership as given;
  /// the ids are not checked against the catalog, only for duplicates.
  pub fn update(&self, id: PlaylistId, patch: PlaylistPatch) -> Result<Playlist, CoreError> {
    let mut inner = self.inner.write();
    let playlist = inner.playlist_mut(id)?;
    patch.validate()?;

    if !patch.is_empty() {
      patch.apply(playlist);
      debug!(playlist_id = %id, "playlist updated");
    }
    Ok(playlist.clone())
  }

  pub fn delete(&self, id: PlaylistId) -> Result<Playlist, CoreError> {
    let removed =
      self.inner.write().playlists.remove(&id).ok_or(CoreError::NotFound(EntityKind::Playlist))?;

    debug!(playlist_id = %id, "playlist deleted");
    Ok(removed)
  }

  /// Appends `song_id` to the playlist.
  pub fn add_song(&self, id: PlaylistId, song_id: SongId) -> Result<Playlist, CoreError> {
    let mut inner = self.inner.write();
    let playlist = inner.playlist_mut(id)?;

    if !self.catalog.contains_song(song_id) {
      return Err(CoreError::NotFound(EntityKind::Song));
    }
    if playlist.contains(song_id) {
      return Err(CoreError::conflict("Song already in playlist"));
    }

    playlist.songs.push(song_id);
    debug!(playlist_id = %id, song_id = %song_id, "song added to playlist");
    Ok(playlist.clone())
  }

  /// Removes `song_id` from the playlist.
  ///
  /// Membership is checked first: a member is always removable, even when the
  /// song itself was deleted since it was added. Only for non-members does
  /// the catalog decide between `NotFound` and `Conflict`.
  pub fn remove_song(&self, id: PlaylistId, song_id: SongId) -> Result<Playlist, CoreError> {
    let mut inner = self.inner.write();
    let playlist = inner.playlist_mut(id)?;

    let Some(pos) = playlist.songs.iter().position(|s| *s == song_id) else {
      if !self.catalog.contains_song(song_id) {
        return Err(CoreError::NotFound(EntityKind::Song));
      }
      return Err(CoreError::conflict("Song not in playlist"));
    };

    playlist.songs.remove(pos);
    debug!(playlist_id = %id, song_id = %song_id, "song removed from playlist");
    Ok(playlist.clone())
  }

  // -------- QUERY (read) --------

  pub fn get(&self, id: PlaylistId) -> Result<Playlist, CoreError> {
    self.inner.read().playlists.get(&id).cloned().ok_or(CoreError::NotFound(EntityKind::Playlist))
  }

  pub fn len(&self) -> usize {
    self.inner.read().playlists.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::NewSong;
  use crate::services::SongStore;
  use std::sync::Arc;

  fn stores() -> (Arc<SongStore>, PlaylistStore<Arc<SongStore>>) {
    let songs = Arc::new(SongStore::new());
    let playlists = PlaylistStore::new(Arc::clone(&songs));
    (songs, playlists)
  }

  #[test]
  fn walkthrough_add_and_remove() {
    let (songs, playlists) = stores();
    let song = songs.create(NewSong::new("A", "B")).unwrap();
    let playlist = playlists.create(NewPlaylist::new("P")).unwrap();
    assert_eq!(song.id.get(), 1);
    assert_eq!(playlist.id.get(), 1);

    let after_add = playlists.add_song(playlist.id, song.id).unwrap();
    assert_eq!(after_add.songs, vec![song.id]);

    let again = playlists.add_song(playlist.id, song.id);
    assert!(matches!(again, Err(CoreError::Conflict(_))));
    assert_eq!(playlists.get(playlist.id).unwrap().songs.len(), 1);

    let after_remove = playlists.remove_song(playlist.id, song.id).unwrap();
    assert!(after_remove.songs.is_empty());

    let again = playlists.remove_song(playlist.id, song.id);
    assert!(matches!(again, Err(CoreError::Conflict(_))));
  }

  #[test]
  fn ids_are_independent_of_song_ids() {
    let (songs, playlists) = stores();
    for i in 0..3 {
      songs.create(NewSong::new(format!("t{i}"), "a")).unwrap();
    }
    let p = playlists.create(NewPlaylist::new("first")).unwrap();
    playlists.delete(p.id).unwrap();
    let q = playlists.create(NewPlaylist::new("second")).unwrap();

    assert_eq!(p.id.get(), 1);
    assert_eq!(q.id.get(), 2);
  }

  #[test]
  fn add_song_checks_playlist_then_song() {
    let (songs, playlists) = stores();
    let song = songs.create(NewSong::new("A", "B")).unwrap();
    let playlist = playlists.create(NewPlaylist::new("P")).unwrap();

    assert_eq!(
      playlists.add_song(PlaylistId::new(9), SongId::new(9)),
      Err(CoreError::NotFound(EntityKind::Playlist))
    );
    assert_eq!(playlists.add_song(playlist.id, SongId::new(9)), Err(CoreError::NotFound(EntityKind::Song)));
    assert!(playlists.add_song(playlist.id, song.id).is_ok());
  }

  #[test]
  fn remove_after_add_restores_previous_list() {
    let (songs, playlists) = stores();
    let ids: Vec<SongId> = (0..3).map(|i| songs.create(NewSong::new(format!("t{i}"), "a")).unwrap().id).collect();
    let playlist = playlists.create(NewPlaylist::new("P")).unwrap();
    playlists.add_song(playlist.id, ids[0]).unwrap();
    playlists.add_song(playlist.id, ids[2]).unwrap();
    let before = playlists.get(playlist.id).unwrap();

    playlists.add_song(playlist.id, ids[1]).unwrap();
    let after = playlists.remove_song(playlist.id, ids[1]).unwrap();

    assert_eq!(after, before);
    assert_eq!(after.songs, vec![ids[0], ids[2]]);
  }

  #[test]
  fn stale_member_can_still_be_removed() {
    let (songs, playlists) = stores();
    let song = songs.create(NewSong::new("A", "B")).unwrap();
    let playlist = playlists.create(NewPlaylist::new("P")).unwrap();
    playlists.add_song(playlist.id, song.id).unwrap();

    songs.delete(song.id).unwrap();
    // no cascade
    assert_eq!(playlists.get(playlist.id).unwrap().songs, vec![song.id]);

    let cleaned = playlists.remove_song(playlist.id, song.id).unwrap();
    assert!(cleaned.songs.is_empty());
  }

  #[test]
  fn removing_unknown_non_member_is_not_found() {
    let (_songs, playlists) = stores();
    let playlist = playlists.create(NewPlaylist::new("P")).unwrap();

    assert_eq!(playlists.remove_song(playlist.id, SongId::new(5)), Err(CoreError::NotFound(EntityKind::Song)));
  }

  #[test]
  fn update_replaces_list_without_catalog_check() {
    let (_songs, playlists) = stores();
    let playlist = playlists.create(NewPlaylist::new("P").description("old")).unwrap();
    let patch = PlaylistPatch { songs: Some(vec![SongId::new(40), SongId::new(2)]), ..Default::default() };

    let updated = playlists.update(playlist.id, patch).unwrap();
    assert_eq!(updated.songs, vec![SongId::new(40), SongId::new(2)]);
    assert_eq!(updated.description, "old");
    assert_eq!(updated.name, "P");
  }

  #[test]
  fn update_with_duplicates_changes_nothing() {
    let (_songs, playlists) = stores();
    let playlist = playlists.create(NewPlaylist::new("P")).unwrap();
    let patch = PlaylistPatch {
      name: Some("renamed".into()),
      songs: Some(vec![SongId::new(1), SongId::new(1)]),
      ..Default::default()
    };

    assert!(matches!(playlists.update(playlist.id, patch), Err(CoreError::Validation(_))));
    assert_eq!(playlists.get(playlist.id).unwrap(), playlist);
  }

  #[test]
  fn unknown_playlist_is_not_found_everywhere() {
    let (_songs, playlists) = stores();
    let missing = PlaylistId::new(3);
    let not_found = Err(CoreError::NotFound(EntityKind::Playlist));

    assert_eq!(playlists.get(missing), not_found);
    assert_eq!(playlists.update(missing, PlaylistPatch::default()), not_found);
    assert_eq!(playlists.delete(missing), not_found);
    assert_eq!(playlists.remove_song(missing, SongId::new(1)), not_found);
  }

  #[test]
  fn concurrent_adds_of_same_song_admit_exactly_one() {
    let (songs, playlists) = stores();
    let song = songs.create(NewSong::new("A", "B")).unwrap();
    let playlist = playlists.create(NewPlaylist::new("P")).unwrap();
    let playlists = Arc::new(playlists);

    let handles: Vec<_> = (0..8)
      .map(|_| {
        let playlists = Arc::clone(&playlists);
        std::thread::spawn(move || playlists.add_song(playlist.id, song.id).is_ok())
      })
      .collect();
    let successes = handles.into_iter().map(|h| h.join().unwrap()).filter(|ok| *ok).count();

    assert_eq!(successes, 1);
    assert_eq!(playlists.get(playlist.id).unwrap().songs, vec![song.id]);
  }

  #[test]
  fn concurrent_creates_get_distinct_consecutive_ids() {
    const WRITERS: u64 = 16;
    let (_songs, playlists) = stores();
    assert!(playlists.is_empty());
    let playlists = Arc::new(playlists);

    let handles: Vec<_> = (0..WRITERS)
      .map(|i| {
        let playlists = Arc::clone(&playlists);
        std::thread::spawn(move || playlists.create(NewPlaylist::new(format!("p{i}"))).unwrap().id.get())
      })
      .collect();
    let mut ids: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    ids.sort_unstable();

    assert_eq!(ids, (1..=WRITERS).collect::<Vec<_>>());
    assert_eq!(playlists.len(), WRITERS as usize);
  }
}
