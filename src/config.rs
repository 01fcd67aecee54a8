//! Optional user configuration loaded from `~/.curlman/config.yaml`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_CURL_PATH, DEFAULT_LOG_LEVEL};

/// Every field falls back to its default when absent
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP client binary, looked up on `PATH` unless absolute
    pub curl_path: String,
    /// Directory receiving `curlman.log`
    pub log_dir: PathBuf,
    /// Filter used when `CURLMAN_LOG` is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            curl_path: String::from(DEFAULT_CURL_PATH),
            log_dir: PathBuf::from("."),
            log_level: String::from(DEFAULT_LOG_LEVEL),
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from the default location, or defaults when there is no home dir
    pub fn load() -> Result<Config> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// A missing or blank file yields defaults; a malformed one is an error
    pub fn load_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.yaml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.curl_path, "curl");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "curl_path: /opt/curl/bin/curl\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.curl_path, "/opt/curl/bin/curl");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_dir, PathBuf::from("."));
    }

    #[test]
    fn test_blank_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "\n  \n").unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "curl_path: [unclosed\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("invalid config"));
    }
}
