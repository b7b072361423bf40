#[macro_use]
extern crate rocket;

mod api;
mod config;

use std::sync::Arc;

use rocket::figment::Provider;
use rocket::{Build, Rocket};
use tracing::{info, warn};
use tunebox_core::services::{PlaylistStore, SongStore};

pub use crate::config::ServerConfig;

/// Global application state managed by Rocket.
///
/// The song store is shared: the song routes use it directly and the
/// playlist store reads it to validate membership changes.
pub struct AppState {
  pub songs: Arc<SongStore>,
  pub playlists: PlaylistStore<Arc<SongStore>>,
}

impl AppState {
  pub fn new() -> Self {
    let songs = Arc::new(SongStore::new());
    let playlists = PlaylistStore::new(Arc::clone(&songs));
    Self { songs, playlists }
  }
}

impl Default for AppState {
  fn default() -> Self {
    Self::new()
  }
}

/// Assembles the server without launching it. Tests hand the result to a
/// local client; [`run`] launches it.
pub fn build_rocket<P: Provider>(provider: P, state: AppState) -> Rocket<Build> {
  rocket::custom(provider).manage(state).mount("/", api::routes()).register("/", api::catchers())
}

/// Loads the `[server]` config section, installs logging and serves until
/// shutdown.
pub async fn run() -> anyhow::Result<()> {
  // 1. Configuration
  // Written back right away so a fresh install gets a file to edit.
  let cfg = ServerConfig::load()?;

  // 2. Logging
  let level = cfg.tracing_level();
  tracing_subscriber::fmt().with_max_level(level.unwrap_or(tracing::Level::INFO)).init();
  if level.is_none() {
    warn!(configured = %cfg.log_level, "invalid log level, using info");
  }

  // 3. Stores + HTTP
  let rocket_cfg = cfg.rocket_config()?;
  info!(address = %rocket_cfg.address, port = rocket_cfg.port, "starting tunebox");

  let rocket = build_rocket(rocket_cfg, AppState::new())
    .launch()
    .await
    .map_err(|e| anyhow::anyhow!("server stopped with an error: {e}"))?;

  // Everything lives in memory, so report what is being dropped.
  if let Some(state) = rocket.state::<AppState>() {
    info!(songs = state.songs.len(), playlists = state.playlists.len(), "tunebox shut down");
  }
  Ok(())
}
