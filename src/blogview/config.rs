//! # Configuration
//!
//! Settings live in `config.json` inside the config directory:
//! `$BLOGVIEW_CONFIG_DIR` when set, otherwise the OS config directory
//! (via the `directories` crate). A missing file means defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `api-url` | `https://jsonplaceholder.typicode.com` | Base URL of the posts/users API |
//! | `words-per-minute` | `200` | Reading speed used for read-time estimates |
//! | `preview-length` | `150` | Characters of body shown on list cards |
//!
//! The API URL can also be overridden per run with `$BLOGVIEW_API_URL` or
//! `--api-url`; the flag wins.

use crate::error::{BlogError, Result};
use crate::helpers::{DEFAULT_PREVIEW_LENGTH, DEFAULT_WORDS_PER_MINUTE};
use crate::source::http::DEFAULT_API_URL;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

pub const CONFIG_DIR_ENV: &str = "BLOGVIEW_CONFIG_DIR";
pub const API_URL_ENV: &str = "BLOGVIEW_API_URL";

pub const KEYS: [&str; 3] = ["api-url", "words-per-minute", "preview-length"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: u32,

    #[serde(default = "default_preview_length")]
    pub preview_length: usize,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_words_per_minute() -> u32 {
    DEFAULT_WORDS_PER_MINUTE
}

fn default_preview_length() -> usize {
    DEFAULT_PREVIEW_LENGTH
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            words_per_minute: default_words_per_minute(),
            preview_length: default_preview_length(),
        }
    }
}

impl BlogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: BlogConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api-url" => Some(self.api_url.clone()),
            "words-per-minute" => Some(self.words_per_minute.to_string()),
            "preview-length" => Some(self.preview_length.to_string()),
            _ => None,
        }
    }

    /// Validation failures come back as a user-facing message.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "api-url" => {
                let value = value.trim();
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    let message = format!("Invalid api-url (expected http(s)://...): {}", value);
                    return Err(message);
                }
                self.api_url = value.trim_end_matches('/').to_string();
            }
            "words-per-minute" => {
                self.words_per_minute = parse_positive(key, value)? as u32;
            }
            "preview-length" => {
                self.preview_length = parse_positive(key, value)?;
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    /// All key/value pairs in display order.
    pub fn entries(&self) -> Vec<(String, String)> {
        KEYS.iter()
            .filter_map(|k| self.get(k).map(|v| (k.to_string(), v)))
            .collect()
    }
}

fn parse_positive(key: &str, value: &str) -> std::result::Result<usize, String> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n as usize),
        _ => {
            let message = format!("Invalid {} (expected a positive number): {}", key, value);
            Err(message)
        }
    }
}

/// Directory holding `config.json`.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "blogview", "blogview")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| BlogError::Config("Could not determine config dir".to_string()))
}

/// Flag, then environment, then config file.
pub fn resolve_api_url(flag: Option<&str>, env: Option<&str>, config: &BlogConfig) -> String {
    flag.or(env)
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| config.api_url.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = BlogConfig::default();
        assert_eq!(config.api_url, "https://jsonplaceholder.typicode.com");
        assert_eq!(config.words_per_minute, 200);
        assert_eq!(config.preview_length, 150);
    }

    #[test]
    fn load_missing_config_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = BlogConfig::load(dir.path().join("nope")).unwrap();
        assert_eq!(config, BlogConfig::default());
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = BlogConfig::default();
        config.set("api-url", "http://localhost:3000/").unwrap();
        config.set("words-per-minute", "250").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = BlogConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.api_url, "http://localhost:3000");
        assert_eq!(loaded.words_per_minute, 250);
        assert_eq!(loaded.preview_length, 150);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(path, r#"{"preview_length": 80}"#).unwrap();

        let loaded = BlogConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.preview_length, 80);
        assert_eq!(loaded.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "not json").unwrap();
        assert!(matches!(
            BlogConfig::load(dir.path()),
            Err(BlogError::Serialization(_))
        ));
    }

    #[test]
    fn set_rejects_bad_values() {
        let mut config = BlogConfig::default();
        assert!(config.set("api-url", "ftp://example.com").is_err());
        assert!(config.set("words-per-minute", "0").is_err());
        assert!(config.set("preview-length", "lots").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, BlogConfig::default());
    }

    #[test]
    fn entries_list_every_key() {
        let entries = BlogConfig::default().entries();
        let keys: Vec<_> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, KEYS.to_vec());
    }

    #[test]
    fn api_url_precedence() {
        let config = BlogConfig::default();
        assert_eq!(
            resolve_api_url(Some("http://flag/"), Some("http://env"), &config),
            "http://flag"
        );
        assert_eq!(
            resolve_api_url(None, Some("http://env"), &config),
            "http://env"
        );
        assert_eq!(resolve_api_url(None, None, &config), DEFAULT_API_URL);
    }
}
