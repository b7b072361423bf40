use rocket::http::Status;
use rocket::serde::json::{Error as JsonError, Json, Value, json};
use rocket::State;
use tunebox_core::domain::{NewSong, Song, SongFilter, SongId, SongPatch};

use crate::api::{ApiResult, SearchResponse};
use crate::AppState;

const DEFAULT_SORT_FIELD: &str = "title";

#[post("/songs", data = "<body>")]
pub fn create_song(
  state: &State<AppState>,
  body: Result<Json<NewSong>, JsonError<'_>>,
) -> ApiResult<(Status, Json<Value>)> {
  let Json(input) = body?;
  let song = state.songs.create(input)?;

  Ok((Status::Created, Json(json!({ "message": "Song created successfully", "song": song }))))
}

/// The `get` runs before the body is looked at, so an unknown id is a 404
/// whatever the body holds. It only orders the two failures: `update` checks
/// existence again under its own lock.
#[put("/songs/<id>", data = "<body>")]
pub fn update_song(
  state: &State<AppState>,
  id: u64,
  body: Result<Json<SongPatch>, JsonError<'_>>,
) -> ApiResult<Json<Value>> {
  let id = SongId::new(id);
  state.songs.get(id)?;
  let Json(patch) = body?;
  let song = state.songs.update(id, patch)?;

  Ok(Json(json!({ "message": "Song updated successfully", "song": song })))
}

#[delete("/songs/<id>")]
pub fn delete_song(state: &State<AppState>, id: u64) -> ApiResult<Json<Value>> {
  state.songs.delete(SongId::new(id))?;

  Ok(Json(json!({ "message": "Song deleted successfully" })))
}

/// With `id` this is a lookup; otherwise every filter given narrows the list.
#[get("/songs/search?<id>&<title>&<artist>&<genre>")]
pub fn search_songs(
  state: &State<AppState>,
  id: Option<u64>,
  title: Option<String>,
  artist: Option<String>,
  genre: Option<String>,
) -> ApiResult<Json<SearchResponse>> {
  if let Some(id) = id {
    let song = state.songs.get(SongId::new(id))?;
    return Ok(Json(SearchResponse::One(song)));
  }

  let filter = SongFilter { title, artist, genre };
  Ok(Json(SearchResponse::Many(state.songs.search(&filter))))
}

/// `reverse` counts as set only when it reads `true`, in any case.
#[get("/songs/sort?<sort_by>&<reverse>")]
pub fn sort_songs(
  state: &State<AppState>,
  sort_by: Option<&str>,
  reverse: Option<&str>,
) -> ApiResult<Json<Vec<Song>>> {
  let descending = reverse.is_some_and(|r| r.eq_ignore_ascii_case("true"));
  let songs = state.songs.sort_by_name(sort_by.unwrap_or(DEFAULT_SORT_FIELD), descending)?;

  Ok(Json(songs))
}
