//! CLI configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. There are no command-line flags.
//!
//! | Variable             | Default                                   |
//! |----------------------|-------------------------------------------|
//! | `BOOKLEDGER_DB_PATH` | `<platform data dir>/bookstore.db`        |
//! | `BOOKLEDGER_SEED`    | `true`                                    |
//!
//! Logging is controlled separately through `RUST_LOG`.

use std::env;
use std::path::PathBuf;

use bookledger_db::DbConfig;
use directories::ProjectDirs;

/// Overrides the database file location.
pub const DB_PATH_VAR: &str = "BOOKLEDGER_DB_PATH";

/// Enables or disables bootstrap seeding.
pub const SEED_VAR: &str = "BOOKLEDGER_SEED";

const DB_FILE_NAME: &str = "bookstore.db";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite database file
    pub database_path: PathBuf,

    /// Seed sample members, books and sales into empty tables on startup
    pub seed_sample_data: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_path = match lookup(DB_PATH_VAR) {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path.trim()),
            _ => default_database_path(),
        };

        let seed_sample_data = match lookup(SEED_VAR) {
            None => true,
            Some(raw) => {
                parse_flag(&raw).ok_or_else(|| ConfigError::InvalidValue(SEED_VAR.to_string()))?
            }
        };

        Ok(AppConfig {
            database_path,
            seed_sample_data,
        })
    }

    /// Database settings derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(self.database_path.clone()).seed_sample_data(self.seed_sample_data)
    }

    /// Creates the directory that will hold the database file.
    pub fn ensure_data_dir(&self) -> Result<(), ConfigError> {
        let Some(parent) = self.database_path.parent() else {
            return Ok(());
        };

        if parent.as_os_str().is_empty() {
            return Ok(());
        }

        std::fs::create_dir_all(parent).map_err(|source| ConfigError::DataDir {
            path: parent.to_path_buf(),
            source,
        })
    }
}

/// Platform data directory (e.g. `~/.local/share/bookledger` on Linux), or
/// the working directory when no home directory can be determined.
fn default_database_path() -> PathBuf {
    ProjectDirs::from("org", "bookledger", "bookledger")
        .map(|dirs| dirs.data_dir().join(DB_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DB_FILE_NAME))
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Cannot create data directory {}: {source}", path.display())]
    DataDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.seed_sample_data);
        assert!(config.database_path.ends_with(DB_FILE_NAME));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (DB_PATH_VAR, "/tmp/ledger/shop.db"),
            (SEED_VAR, "off"),
        ]))
        .unwrap();

        assert_eq!(config.database_path, PathBuf::from("/tmp/ledger/shop.db"));
        assert!(!config.seed_sample_data);

        let db_config = config.db_config();
        assert_eq!(db_config.database_path, config.database_path);
        assert!(!db_config.seed_sample_data);
    }

    #[test]
    fn test_blank_path_falls_back_to_default() {
        let config = AppConfig::from_lookup(lookup_from(&[(DB_PATH_VAR, "  ")])).unwrap();
        assert!(config.database_path.ends_with(DB_FILE_NAME));
    }

    #[test]
    fn test_invalid_seed_flag() {
        let err = AppConfig::from_lookup(lookup_from(&[(SEED_VAR, "maybe")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for BOOKLEDGER_SEED");
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" 1 "), Some(true));
        assert_eq!(parse_flag("No"), Some(false));
        assert_eq!(parse_flag(""), None);
    }

    #[test]
    fn test_ensure_data_dir_creates_parent() {
        let dir = std::env::temp_dir().join(format!("bookledger-config-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let config = AppConfig {
            database_path: dir.join("nested").join(DB_FILE_NAME),
            seed_sample_data: true,
        };
        config.ensure_data_dir().unwrap();
        assert!(dir.join("nested").is_dir());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_ensure_data_dir_accepts_bare_file_name() {
        let config = AppConfig {
            database_path: PathBuf::from(DB_FILE_NAME),
            seed_sample_data: true,
        };
        assert!(config.ensure_data_dir().is_ok());
    }
}
