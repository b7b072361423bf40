pub mod ids;
pub mod playlist;
pub mod query;
pub mod song;

pub use ids::{IdSequence, PlaylistId, SongId};
pub use playlist::{NewPlaylist, Playlist, PlaylistPatch};
pub use query::{SongFilter, SortField, SortOrder, sort_songs};
pub use song::{NewSong, Song, SongPatch};
