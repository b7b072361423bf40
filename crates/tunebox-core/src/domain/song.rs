use crate::domain::ids::SongId;
use crate::errors::CoreError;
use serde::{Deserialize, Serialize};

/// A stored track with its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
  /// Assigned by the store on creation, never changes afterwards.
  pub id: SongId,
  pub title: String,
  pub artist: String,
  /// Empty when unknown.
  pub album: String,
  /// Length in seconds, 0 when unknown.
  pub duration: u32,
  /// Empty when unknown.
  pub genre: String,
}

/// Input for creating a song.
///
/// `title` and `artist` are optional here so that a missing value is reported
/// by the store as a validation error rather than by the decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewSong {
  pub title: Option<String>,
  pub artist: Option<String>,
  pub album: Option<String>,
  pub duration: Option<u32>,
  pub genre: Option<String>,
}

impl NewSong {
  pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
    Self { title: Some(title.into()), artist: Some(artist.into()), ..Self::default() }
  }

  pub fn album(mut self, album: impl Into<String>) -> Self {
    self.album = Some(album.into());
    self
  }

  pub fn duration(mut self, seconds: u32) -> Self {
    self.duration = Some(seconds);
    self
  }

  pub fn genre(mut self, genre: impl Into<String>) -> Self {
    self.genre = Some(genre.into());
    self
  }

  /// Checks the required fields without consuming the input.
  pub fn validate(&self) -> Result<(), CoreError> {
    if self.title.is_none() || self.artist.is_none() {
      return Err(CoreError::validation("Missing required fields: title and artist"));
    }
    Ok(())
  }

  /// Builds the stored record, applying defaults to the optional fields.
  pub fn into_song(self, id: SongId) -> Result<Song, CoreError> {
    let (Some(title), Some(artist)) = (self.title, self.artist) else {
      return Err(CoreError::validation("Missing required fields: title and artist"));
    };

    Ok(Song {
      id,
      title,
      artist,
      album: self.album.unwrap_or_default(),
      duration: self.duration.unwrap_or(0),
      genre: self.genre.unwrap_or_default(),
    })
  }
}

/// Partial update of a song. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SongPatch {
  pub title: Option<String>,
  pub artist: Option<String>,
  pub album: Option<String>,
  pub duration: Option<u32>,
  pub genre: Option<String>,
}

impl SongPatch {
  pub fn is_empty(&self) -> bool {
    self.title.is_none()
      && self.artist.is_none()
      && self.album.is_none()
      && self.duration.is_none()
      && self.genre.is_none()
  }

  pub fn apply(self, song: &mut Song) {
    if let Some(title) = self.title {
      song.title = title;
    }
    if let Some(artist) = self.artist {
      song.artist = artist;
    }
    if let Some(album) = self.album {
      song.album = album;
    }
    if let Some(duration) = self.duration {
      song.duration = duration;
    }
    if let Some(genre) = self.genre {
      song.genre = genre;
    }
  }
}
