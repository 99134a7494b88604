//! Application settings.
//!
//! Settings are layered with figment: built-in defaults, then an optional
//! TOML file, then `CMDHOST_*` environment variables.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable prefix read by [`Settings::load`].
pub const ENV_PREFIX: &str = "CMDHOST_";

/// Default documentation file written by `help documentation`.
pub const DEFAULT_DOC_FILE: &str = "doc.rs";

/// Application metadata shared by the dispatcher and the help renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Program name used in usage lines and diagnostics.
    pub name: String,
    /// Short, single line description of the application.
    pub short: String,
    /// Long description, shown by `help <name>`.
    pub long: String,
    /// Output path of `help documentation`.
    pub doc_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            name: process_name(),
            short: String::new(),
            long: String::new(),
            doc_file: PathBuf::from(DEFAULT_DOC_FILE),
        }
    }
}

impl Settings {
    pub fn new(name: impl Into<String>, short: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short: short.into(),
            ..Self::default()
        }
    }

    pub fn with_long(mut self, long: impl Into<String>) -> Self {
        self.long = long.into();
        self
    }

    pub fn with_doc_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.doc_file = path.into();
        self
    }

    /// Loads settings from `path` and the environment on top of the defaults.
    ///
    /// A missing file is not an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::figment(Self::default(), path.as_ref())
            .extract()
            .map_err(ConfigError::from)
    }

    /// Like [`Settings::load`], but starting from `base` instead of the defaults.
    pub fn load_over(base: Settings, path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::figment(base, path.as_ref())
            .extract()
            .map_err(ConfigError::from)
    }

    fn figment(base: Settings, path: &Path) -> Figment {
        Figment::from(Serialized::defaults(base))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
    }
}

/// Name of the running executable, without directory or extension.
pub fn process_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_stem)
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned())
}
