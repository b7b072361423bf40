pub mod playlist_store;
pub mod song_store;

pub use playlist_store::PlaylistStore;
pub use song_store::SongStore;
