use std::net::IpAddr;

use rocket::config::LogLevel;
use serde::{Deserialize, Serialize};
use tunebox_config::{ConfigBackend, ConfigError, TomlConfigBackend, config_backend};

const SECTION: &str = "server";

/// The `[server]` section of `tunebox.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  /// Interface to bind.
  pub address: String,
  pub port: u16,
  /// `trace`, `debug`, `info`, `warn` or `error`.
  pub log_level: String,
}

impl Default for ServerConfig {
  fn default() -> Self {
    ServerConfig { address: "127.0.0.1".into(), port: 5000, log_level: "info".into() }
  }
}

impl ServerConfig {
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(config_backend()?)
  }

  /// Reads the section (defaults when absent) and saves it back.
  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let cfg: ServerConfig = backend.load_section_with_default(SECTION)?;
    backend.save_section(SECTION, &cfg)?;
    Ok(cfg)
  }

  pub fn save_to(&self, backend: &TomlConfigBackend) -> Result<(), ConfigError> {
    backend.save_section(SECTION, self)
  }

  /// `None` when `log_level` is not a level name.
  pub fn tracing_level(&self) -> Option<tracing::Level> {
    self.log_level.parse().ok()
  }

  /// Rocket settings derived from this section. Rocket's own logger is kept
  /// quiet since request handling logs through `tracing`.
  pub fn rocket_config(&self) -> Result<rocket::Config, ConfigError> {
    let address: IpAddr = self
      .address
      .parse()
      .map_err(|e| ConfigError::Other(format!("invalid server address {:?}: {e}", self.address)))?;

    Ok(rocket::Config {
      address,
      port: self.port,
      log_level: LogLevel::Critical,
      ..rocket::Config::release_default()
    })
  }
}
