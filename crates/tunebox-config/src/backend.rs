use crate::io::atomic_write_str;
use crate::paths::{ConfigError, TuneboxPaths};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use toml_edit::DocumentMut;

/// Section-oriented access to the config file. Each component owns one
/// top-level table (`[server]`, ...) and never touches the others.
pub trait ConfigBackend {
  /// Reads `[section]`. A missing file or section yields `T::default()`; keys
  /// missing inside the section are filled by the type's serde defaults.
  fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default;

  /// Replaces `[section]`, keeping comments and every other section intact.
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

pub struct TomlConfigBackend {
  paths: TuneboxPaths,
}

impl TomlConfigBackend {
  pub fn new(paths: TuneboxPaths) -> Self {
    Self { paths }
  }

  pub fn paths(&self) -> &TuneboxPaths {
    &self.paths
  }
}

/// File contents, or `None` when there is no file yet.
fn read_optional(path: &Path) -> Result<Option<String>, ConfigError> {
  match fs::read_to_string(path) {
    Ok(content) => Ok(Some(content)),
    Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
    Err(e) => Err(e.into()),
  }
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    let Some(content) = read_optional(&self.paths.config_file())? else {
      return Ok(T::default());
    };

    let root: toml::Table = toml::from_str(&content)?;
    match root.get(section) {
      None => Ok(T::default()),
      Some(table) => {
        table.clone().try_into().map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
      }
    }
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = self.paths.config_file();

    let mut doc = match read_optional(&path)? {
      Some(content) => {
        content.parse::<DocumentMut>().map_err(|e| ConfigError::Other(format!("parse {}: {e}", path.display())))?
      }
      None => DocumentMut::new(),
    };

    // `toml` renders a struct as header-less "key = value" lines; parsing
    // those back gives a table item that can be dropped in under `section`.
    let rendered =
      toml::to_string(value).map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;
    let table = rendered
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("reparse section [{section}]: {e}")))?
      .into_item();
    doc[section] = table;

    atomic_write_str(&path, &doc.to_string())?;
    Ok(())
  }
}
