use serde::{Deserialize, Serialize};
use tunebox_core::domain::Song;

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
  pub error: String,
}

impl ErrorBody {
  pub fn new(error: impl Into<String>) -> Self {
    ErrorBody { error: error.into() }
  }
}

/// `GET /songs/search` answers with one song when asked by id, otherwise
/// with the list of matches.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SearchResponse {
  One(Song),
  Many(Vec<Song>),
}
