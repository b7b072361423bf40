use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

/// Where tunebox looks for `tunebox.toml`. Nothing else is kept on disk.
#[derive(Debug, Clone)]
pub struct TuneboxPaths {
  pub config_dir: PathBuf,
}

impl TuneboxPaths {
  /// Resolves the config directory and creates it if missing.
  ///
  /// `TUNEBOX_BASE_DIR` switches to a portable layout rooted at that path;
  /// otherwise the platform's project config directory is used.
  pub fn new() -> Result<Self, ConfigError> {
    match std::env::var("TUNEBOX_BASE_DIR") {
      Ok(env_base) => Self::portable(PathBuf::from(env_base)),
      Err(_) => {
        let proj_dirs = ProjectDirs::from("com", "tunebox", "tunebox").ok_or(ConfigError::Directories)?;
        Self::at(proj_dirs.config_dir().to_path_buf())
      }
    }
  }

  /// Layout with the config file under `base/config/`.
  pub fn portable(base: PathBuf) -> Result<Self, ConfigError> {
    Self::at(base.join("config"))
  }

  fn at(config_dir: PathBuf) -> Result<Self, ConfigError> {
    std::fs::create_dir_all(&config_dir)?;
    Ok(Self { config_dir })
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("tunebox.toml")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  struct EnvVarGuard {
    key: String,
    original: Option<String>,
  }

  impl EnvVarGuard {
    fn new(key: &str, value: &str) -> Self {
      let original = std::env::var(key).ok();
      unsafe { std::env::set_var(key, value) };
      EnvVarGuard { key: key.to_owned(), original }
    }
  }

  impl Drop for EnvVarGuard {
    fn drop(&mut self) {
      match &self.original {
        Some(val) => unsafe { std::env::set_var(&self.key, val) },
        None => unsafe { std::env::remove_var(&self.key) },
      }
    }
  }

  #[test]
  fn test_tunebox_base_dir_override() {
    let tmp = tempdir().unwrap();
    let _env = EnvVarGuard::new("TUNEBOX_BASE_DIR", tmp.path().to_str().unwrap());

    let paths = TuneboxPaths::new().unwrap();

    assert_eq!(paths.config_dir, tmp.path().join("config"));
    assert!(paths.config_dir.exists());
    // only the config directory is created
    assert!(!tmp.path().join("data").exists());
    assert!(!tmp.path().join("cache").exists());
  }

  #[test]
  fn config_file_lives_in_config_dir() {
    let tmp = tempdir().unwrap();
    let paths = TuneboxPaths::portable(tmp.path().to_path_buf()).unwrap();

    assert_eq!(paths.config_file(), tmp.path().join("config").join("tunebox.toml"));
  }
}
