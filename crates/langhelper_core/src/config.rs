//! Process configuration read from environment variables.
//!
//! # Responsibility
//! - Collect log, database and table-file settings in one value.
//! - Validate values up front so later stages do not fail halfway.
//!
//! # Invariants
//! - Unset or blank variables fall back to defaults.
//! - Lookup is injectable, so parsing never depends on the real process env
//!   in tests.

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const ENV_LOG_LEVEL: &str = "LANGHELPER_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "LANGHELPER_LOG_DIR";
pub const ENV_DB_PATH: &str = "LANGHELPER_DB_PATH";
pub const ENV_TABLES_PATH: &str = "LANGHELPER_TABLES_PATH";

pub const DEFAULT_DB_FILE: &str = "langhelper.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel { value: String },
    RelativeLogDir { value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel { value } => write!(
                f,
                "{ENV_LOG_LEVEL}=`{value}` is not one of trace|debug|info|warn|error"
            ),
            Self::RelativeLogDir { value } => {
                write!(f, "{ENV_LOG_DIR}=`{value}` must be an absolute path")
            }
        }
    }
}

impl Error for ConfigError {}

/// Resolved process settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub log_level: &'static str,
    /// File logging is disabled when `None`.
    pub log_dir: Option<PathBuf>,
    pub db_path: PathBuf,
    /// Built-in tables are used when `None`.
    pub tables_path: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
            db_path: PathBuf::from(DEFAULT_DB_FILE),
            tables_path: None,
        }
    }
}

impl CoreConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };
        let mut config = Self::default();

        if let Some(level) = value(ENV_LOG_LEVEL) {
            config.log_level = normalize_level(&level)
                .map_err(|_| ConfigError::InvalidLogLevel { value: level })?;
        }
        if let Some(dir) = value(ENV_LOG_DIR) {
            if !Path::new(&dir).is_absolute() {
                return Err(ConfigError::RelativeLogDir { value: dir });
            }
            config.log_dir = Some(PathBuf::from(dir));
        }
        if let Some(path) = value(ENV_DB_PATH) {
            config.db_path = PathBuf::from(path);
        }
        config.tables_path = value(ENV_TABLES_PATH).map(PathBuf::from);

        Ok(config)
    }
}
