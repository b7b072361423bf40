mod backend;
mod io;
mod paths;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use paths::{ConfigError, TuneboxPaths};

use once_cell::sync::OnceCell;

static BACKEND: OnceCell<TomlConfigBackend> = OnceCell::new();

/// Process-wide config backend, resolved on first use.
///
/// Path resolution can fail (no home directory, unwritable base dir), so the
/// error is returned to the caller instead of aborting the process.
pub fn config_backend() -> Result<&'static TomlConfigBackend, ConfigError> {
  BACKEND.get_or_try_init(|| TuneboxPaths::new().map(TomlConfigBackend::new))
}
