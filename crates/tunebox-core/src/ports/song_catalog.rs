use crate::domain::SongId;
use std::sync::Arc;

/// Read-only view of the songs a playlist may reference.
///
/// The playlist store only ever asks whether an id exists; it never reads or
/// owns song data through this port.
pub trait SongCatalog: Send + Sync {
  fn contains_song(&self, id: SongId) -> bool;
}

impl<C: SongCatalog + ?Sized> SongCatalog for Arc<C> {
  fn contains_song(&self, id: SongId) -> bool {
    (**self).contains_song(id)
  }
}
