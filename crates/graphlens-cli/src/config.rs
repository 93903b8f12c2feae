//! CLI configuration resolution.
//!
//! Settings come from three layers, highest precedence first: command-line
//! flags, environment variables (`GRAPHLENS_URL`, `GRAPHLENS_API_KEY`,
//! `GRAPHLENS_DATASET`), and a `graphlens.json` file in the working
//! directory (written by `graphlens init`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "graphlens.json";

pub const ENV_URL: &str = "GRAPHLENS_URL";
pub const ENV_API_KEY: &str = "GRAPHLENS_API_KEY";
pub const ENV_DATASET: &str = "GRAPHLENS_DATASET";

/// On-disk config shape.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub dataset: Option<String>,
}

impl FileConfig {
    /// Loads the config file if present; missing file is not an error.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE);
        match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}

/// Fully resolved settings for one invocation.
#[derive(Debug)]
pub struct Settings {
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub dataset: Option<String>,
    /// Local snapshot file; when set, no network access happens.
    pub input: Option<PathBuf>,
    /// Emit JSON instead of formatted text.
    pub json: bool,
}

impl Settings {
    /// Merges flags over environment over config file.
    pub fn resolve(
        url: Option<String>,
        api_key: Option<String>,
        dataset: Option<String>,
        input: Option<PathBuf>,
        json: bool,
    ) -> Self {
        let file = FileConfig::load(Path::new("."));
        Self {
            url: url.or_else(|| std::env::var(ENV_URL).ok()).or(file.url),
            api_key: api_key
                .or_else(|| std::env::var(ENV_API_KEY).ok())
                .or(file.api_key),
            dataset: dataset
                .or_else(|| std::env::var(ENV_DATASET).ok())
                .or(file.dataset),
            input,
            json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = FileConfig::load(dir.path());
        assert!(config.url.is_none());
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{"url": "http://localhost:9380"}"#,
        )
        .unwrap();

        let config = FileConfig::load(dir.path());
        assert_eq!(config.url.as_deref(), Some("http://localhost:9380"));
        assert!(config.dataset.is_none());
    }

    #[test]
    fn test_load_malformed_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "not json").unwrap();
        let config = FileConfig::load(dir.path());
        assert!(config.url.is_none());
    }
}
