use crate::domain::song::Song;
use crate::errors::CoreError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Substring filters for song search. Every filter that is set must match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SongFilter {
  pub title: Option<String>,
  pub artist: Option<String>,
  pub genre: Option<String>,
}

impl SongFilter {
  pub fn is_empty(&self) -> bool {
    self.title.is_none() && self.artist.is_none() && self.genre.is_none()
  }

  pub fn matches(&self, song: &Song) -> bool {
    contains_ci(&song.title, self.title.as_deref())
      && contains_ci(&song.artist, self.artist.as_deref())
      && contains_ci(&song.genre, self.genre.as_deref())
  }
}

/// Case-insensitive "contains". An unset needle matches anything.
fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
  match needle {
    None => true,
    Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
  }
}

/// Fields songs can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
  Title,
  Artist,
  Genre,
}

impl SortField {
  pub fn key<'a>(&self, song: &'a Song) -> &'a str {
    match self {
      SortField::Title => &song.title,
      SortField::Artist => &song.artist,
      SortField::Genre => &song.genre,
    }
  }
}

impl FromStr for SortField {
  type Err = CoreError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "title" => Ok(SortField::Title),
      "artist" => Ok(SortField::Artist),
      "genre" => Ok(SortField::Genre),
      _ => Err(CoreError::validation("Invalid sort field. Must be one of: title, artist, genre")),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
  #[default]
  Ascending,
  Descending,
}

impl SortOrder {
  pub fn from_descending(descending: bool) -> Self {
    if descending { SortOrder::Descending } else { SortOrder::Ascending }
  }

  /// Orders two keys. Equal keys stay `Equal` in both directions so a stable
  /// sort keeps their original order.
  pub fn compare(&self, a: &str, b: &str) -> Ordering {
    match self {
      SortOrder::Ascending => a.cmp(b),
      SortOrder::Descending => b.cmp(a),
    }
  }
}

/// Sorts songs in place by `field`, stable for ties.
pub fn sort_songs(songs: &mut [Song], field: SortField, order: SortOrder) {
  songs.sort_by(|a, b| order.compare(field.key(a), field.key(b)));
}
