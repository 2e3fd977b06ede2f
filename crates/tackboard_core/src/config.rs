//! Persistence configuration resolution.
//!
//! # Responsibility
//! - Resolve the database path from explicit arguments and the process
//!   environment.
//!
//! # Invariants
//! - An explicit argument always wins over the environment.
//! - A missing path is fatal at startup; the persistence subsystem refuses
//!   to initialize without one.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Environment variable naming the SQLite database file.
pub const DB_PATH_ENV: &str = "TACKBOARD_DB_PATH";

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither an explicit argument nor the environment supplied a path.
    MissingDatabasePath,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDatabasePath => write!(
                f,
                "no database path configured; pass one explicitly or set {DB_PATH_ENV}"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Resolves the database path from an optional explicit argument and an
/// optional environment value, in that precedence order.
///
/// Blank values are treated as absent.
pub fn resolve_database_path(
    explicit: Option<&str>,
    env_value: Option<&str>,
) -> ConfigResult<PathBuf> {
    let chosen = [explicit, env_value]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty());

    chosen
        .map(PathBuf::from)
        .ok_or(ConfigError::MissingDatabasePath)
}

/// Resolves the database path against the live process environment.
pub fn database_path_from_env(explicit: Option<&str>) -> ConfigResult<PathBuf> {
    let env_value = std::env::var(DB_PATH_ENV).ok();
    resolve_database_path(explicit, env_value.as_deref())
}
