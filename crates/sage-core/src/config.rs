//! Configuration management for sage.
//!
//! Loads configuration from ${SAGE_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::backend;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the shopping assistant backend.
    pub backend_url: String,

    /// Fixed session id. When unset, a fresh uuid is generated per run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// Directory PDF exports are written to. Defaults to ${SAGE_HOME}/exports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<String>,

    /// Open exported PDFs with the system viewer.
    pub open_exports: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: backend::DEFAULT_BASE_URL.to_string(),
            session_id: None,
            export_dir: None,
            open_exports: true,
        }
    }
}

impl Config {
    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// The session id to use for this run: configured value or a fresh uuid.
    pub fn resolve_session_id(&self) -> String {
        self.session_id
            .clone()
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
    }

    /// Directory for PDF exports.
    pub fn export_dir(&self) -> std::path::PathBuf {
        self.export_dir
            .as_ref()
            .map_or_else(|| paths::sage_home().join("exports"), std::path::PathBuf::from)
    }
}

pub mod paths {
    //! Path resolution for sage configuration and data directories.
    //!
    //! SAGE_HOME resolution order:
    //! 1. SAGE_HOME environment variable (if set)
    //! 2. ~/.config/sage (default)

    use std::path::PathBuf;

    /// Returns the user's home directory, if known.
    pub fn home_dir() -> Option<PathBuf> {
        std::env::var_os("HOME").map(PathBuf::from)
    }

    /// Returns the sage home directory.
    pub fn sage_home() -> PathBuf {
        if let Some(home) = std::env::var_os("SAGE_HOME") {
            return PathBuf::from(home);
        }
        home_dir()
            .map(|h| h.join(".config").join("sage"))
            .unwrap_or_else(|| PathBuf::from(".sage"))
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        sage_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        sage_home().join("logs")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.backend_url, backend::DEFAULT_BASE_URL);
        assert_eq!(config.session_id, None);
        assert!(config.open_exports);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "backend_url = \"http://shop.internal:9000\"").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.backend_url, "http://shop.internal:9000");
        assert!(config.open_exports);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "backend_url = [not toml").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_session_id_generated_when_unset() {
        let config = Config::default();
        let a = config.resolve_session_id();
        let b = config.resolve_session_id();
        assert_ne!(a, b);

        let pinned = Config {
            session_id: Some("demo".to_string()),
            ..Config::default()
        };
        assert_eq!(pinned.resolve_session_id(), "demo");
    }
}
