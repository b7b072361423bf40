use crate::domain::ids::{PlaylistId, SongId};
use crate::errors::CoreError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A named, ordered collection of song ids.
///
/// Songs are held by id only; the playlist never owns song data and does not
/// notice when a referenced song is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
  pub id: PlaylistId,
  pub name: String,
  pub description: String,
  /// Insertion order, no duplicates.
  pub songs: Vec<SongId>,
}

impl Playlist {
  pub fn contains(&self, song_id: SongId) -> bool {
    self.songs.contains(&song_id)
  }
}

/// Input for creating a playlist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewPlaylist {
  pub name: Option<String>,
  pub description: Option<String>,
}

impl NewPlaylist {
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: Some(name.into()), description: None }
  }

  pub fn description(mut self, description: impl Into<String>) -> Self {
    self.description = Some(description.into());
    self
  }

  pub fn validate(&self) -> Result<(), CoreError> {
    if self.name.is_none() {
      return Err(CoreError::validation("Missing required field: name"));
    }
    Ok(())
  }

  /// Builds the stored record with an empty song list.
  pub fn into_playlist(self, id: PlaylistId) -> Result<Playlist, CoreError> {
    let Some(name) = self.name else {
      return Err(CoreError::validation("Missing required field: name"));
    };

    Ok(Playlist { id, name, description: self.description.unwrap_or_default(), songs: Vec::new() })
  }
}

/// Partial update of a playlist.
///
/// `songs`, when present, replaces the whole membership list. The ids are not
/// checked against the song store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylistPatch {
  pub name: Option<String>,
  pub description: Option<String>,
  pub songs: Option<Vec<SongId>>,
}

impl PlaylistPatch {
  pub fn is_empty(&self) -> bool {
    self.name.is_none() && self.description.is_none() && self.songs.is_none()
  }

  /// Rejects a replacement list that would repeat an id.
  pub fn validate(&self) -> Result<(), CoreError> {
    if let Some(songs) = &self.songs {
      let mut seen = HashSet::with_capacity(songs.len());
      if !songs.iter().all(|id| seen.insert(*id)) {
        return Err(CoreError::validation("Duplicate song ids in playlist"));
      }
    }
    Ok(())
  }

  pub fn apply(self, playlist: &mut Playlist) {
    if let Some(name) = self.name {
      playlist.name = name;
    }
    if let Some(description) = self.description {
      playlist.description = description;
    }
    if let Some(songs) = self.songs {
      playlist.songs = songs;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_playlist_starts_empty() {
    let playlist = NewPlaylist::new("Road trip").into_playlist(PlaylistId::new(1)).unwrap();

    assert_eq!(playlist.description, "");
    assert!(playlist.songs.is_empty());
  }

  #[test]
  fn missing_name_is_rejected() {
    assert!(matches!(NewPlaylist::default().validate(), Err(CoreError::Validation(_))));
  }

  #[test]
  fn duplicate_replacement_list_fails_validation() {
    let patch = PlaylistPatch { songs: Some(vec![SongId::new(1), SongId::new(2), SongId::new(1)]), ..Default::default() };
    assert!(patch.validate().is_err());

    let ok = PlaylistPatch { songs: Some(vec![SongId::new(3), SongId::new(1)]), ..Default::default() };
    assert!(ok.validate().is_ok());
  }

  #[test]
  fn replacement_list_keeps_given_order() {
    let mut playlist = NewPlaylist::new("Mix").into_playlist(PlaylistId::new(1)).unwrap();
    let patch: PlaylistPatch = serde_json::from_str(r#"{"songs": [5, 2, 9]}"#).unwrap();

    patch.apply(&mut playlist);
    assert_eq!(playlist.songs, vec![SongId::new(5), SongId::new(2), SongId::new(9)]);
    assert_eq!(playlist.name, "Mix");
  }
}
