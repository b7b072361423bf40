mod catchers;
mod dto;
mod error;
mod playlists;
mod songs;

use rocket::{Catcher, Route};

pub use dto::{ErrorBody, SearchResponse};
pub use error::ApiResult;

pub fn routes() -> Vec<Route> {
  routes![
    songs::create_song,
    songs::update_song,
    songs::delete_song,
    songs::search_songs,
    songs::sort_songs,
    playlists::create_playlist,
    playlists::get_playlist,
    playlists::update_playlist,
    playlists::delete_playlist,
    playlists::add_song,
    playlists::remove_song,
  ]
}

pub fn catchers() -> Vec<Catcher> {
  catchers![catchers::not_found, catchers::default_catcher]
}
