//! Runtime configuration for core callers.
//!
//! # Responsibility
//! - Resolve log level, log directory and task store path from environment.
//!
//! # Invariants
//! - Blank or missing variables fall back to defaults.
//! - Resolution never fails; validation happens where values are used.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "LAZYTASK_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "LAZYTASK_LOG_DIR";
pub const ENV_DB_PATH: &str = "LAZYTASK_DB_PATH";

const DEFAULT_LOG_DIR_NAME: &str = "lazytask-logs";
const DEFAULT_DB_FILE_NAME: &str = "lazytask.sqlite3";

/// Resolved core settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub log_level: String,
    pub log_dir: PathBuf,
    pub db_path: PathBuf,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME),
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
        }
    }
}

impl CoreConfig {
    /// Reads `LAZYTASK_*` variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let defaults = Self::default();
        Self {
            log_level: non_blank(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            log_dir: non_blank(ENV_LOG_DIR)
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            db_path: non_blank(ENV_DB_PATH)
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
        }
    }
}
