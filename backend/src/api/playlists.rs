use rocket::http::Status;
use rocket::serde::json::{Error as JsonError, Json, Value, json};
use rocket::State;
use tunebox_core::domain::{NewPlaylist, Playlist, PlaylistId, PlaylistPatch, SongId};

use crate::api::ApiResult;
use crate::AppState;

#[post("/playlists", data = "<body>")]
pub fn create_playlist(
  state: &State<AppState>,
  body: Result<Json<NewPlaylist>, JsonError<'_>>,
) -> ApiResult<(Status, Json<Value>)> {
  let Json(input) = body?;
  let playlist = state.playlists.create(input)?;

  Ok((Status::Created, Json(json!({ "message": "Playlist created successfully", "playlist": playlist }))))
}

#[get("/playlists/<id>")]
pub fn get_playlist(state: &State<AppState>, id: u64) -> ApiResult<Json<Playlist>> {
  Ok(Json(state.playlists.get(PlaylistId::new(id))?))
}

/// Same ordering as `update_song`: 404 wins over a bad body, and `update`
/// re-checks existence itself.
#[put("/playlists/<id>", data = "<body>")]
pub fn update_playlist(
  state: &State<AppState>,
  id: u64,
  body: Result<Json<PlaylistPatch>, JsonError<'_>>,
) -> ApiResult<Json<Value>> {
  let id = PlaylistId::new(id);
  state.playlists.get(id)?;
  let Json(patch) = body?;
  let playlist = state.playlists.update(id, patch)?;

  Ok(Json(json!({ "message": "Playlist updated successfully", "playlist": playlist })))
}

#[delete("/playlists/<id>")]
pub fn delete_playlist(state: &State<AppState>, id: u64) -> ApiResult<Json<Value>> {
  state.playlists.delete(PlaylistId::new(id))?;

  Ok(Json(json!({ "message": "Playlist deleted successfully" })))
}

#[post("/playlists/<id>/songs/<song_id>")]
pub fn add_song(state: &State<AppState>, id: u64, song_id: u64) -> ApiResult<Json<Value>> {
  let playlist = state.playlists.add_song(PlaylistId::new(id), SongId::new(song_id))?;

  Ok(Json(json!({ "message": "Song added to playlist successfully", "playlist": playlist })))
}

#[delete("/playlists/<id>/songs/<song_id>")]
pub fn remove_song(state: &State<AppState>, id: u64, song_id: u64) -> ApiResult<Json<Value>> {
  let playlist = state.playlists.remove_song(PlaylistId::new(id), SongId::new(song_id))?;

  Ok(Json(json!({ "message": "Song removed from playlist successfully", "playlist": playlist })))
}
