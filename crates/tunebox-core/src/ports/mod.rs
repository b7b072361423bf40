pub mod song_catalog;

pub use song_catalog::SongCatalog;
