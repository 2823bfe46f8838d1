use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ConfigError, Result};

/// Journal mode applied through `PRAGMA journal_mode` when a connection is
/// opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalMode {
    Delete,
    Truncate,
    Persist,
    Memory,
    Wal,
    Off,
}

impl JournalMode {
    /// The value understood by `PRAGMA journal_mode`.
    pub fn as_pragma_value(&self) -> &'static str {
        match self {
            JournalMode::Delete => "DELETE",
            JournalMode::Truncate => "TRUNCATE",
            JournalMode::Persist => "PERSIST",
            JournalMode::Memory => "MEMORY",
            JournalMode::Wal => "WAL",
            JournalMode::Off => "OFF",
        }
    }
}

/// Settings for opening a database session.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    /// Path to the SQLite database file. `:memory:` opens a private
    /// in-memory database.
    pub path: String,

    /// Journal mode applied on open.
    /// Default: leaves the SQLite default untouched
    pub journal_mode: Option<JournalMode>,

    /// Makes `LIKE` comparisons case sensitive.
    /// Default: false
    pub case_sensitive_like: Option<bool>,

    /// Busy timeout in milliseconds, for sessions that may contend with
    /// other connections on the same file.
    /// Default: leaves the driver default untouched
    pub busy_timeout_ms: Option<u64>,
}

impl Settings {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            journal_mode: None,
            case_sensitive_like: None,
            busy_timeout_ms: None,
        }
    }

    /// Settings for a private in-memory database. Useful for tests and
    /// scratch sessions.
    pub fn in_memory() -> Self {
        Self::new(":memory:")
    }

    /// Reads settings from a TOML file and validates them.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(&path)?;
        let settings: Settings = toml::from_str(&raw)?;
        settings.validate()?;
        info!("Database settings loaded from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Writes settings as TOML, creating parent directories as needed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = toml::to_string_pretty(self)?;
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serialized)?;
        info!("Database settings saved to {}", path.as_ref().display());
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::MissingKey("path"));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::in_memory()
    }
}
