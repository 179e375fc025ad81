//! Configuration management
//!
//! Handles loading, saving, and editing the user's settings file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::transformers::CharClasses;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Copy every successful, non-sentinel result to the clipboard
    pub copy_results: bool,

    /// Defaults for the random string generator
    pub random_string: RandomStringConfig,

    /// Edge length of generated QR codes in pixels
    pub qr_size: u32,

    /// Chat-completion service used by the AI tools
    pub ai: AiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            copy_results: false,
            random_string: RandomStringConfig::default(),
            qr_size: 400,
            ai: AiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomStringConfig {
    pub length: usize,
    pub classes: CharClasses,
}

impl Default for RandomStringConfig {
    fn default() -> Self {
        Self { length: 16, classes: CharClasses::default() }
    }
}

/// OpenAI-compatible chat-completion endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Base URL; `/chat/completions` is appended
    pub base_url: String,
    pub model: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    pub timeout_secs: u64,
    /// Characters of input the summarizer sends before truncating
    pub summary_char_limit: usize,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openrouter.ai/api/v1".into(),
            model: "openai/gpt-4o-mini".into(),
            api_key_env: "OPENROUTER_API_KEY".into(),
            timeout_secs: 120,
            summary_char_limit: 20_000,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to find config directory")?
            .join("textforge");

        fs::create_dir_all(&config_dir)
            .context("Failed to create config directory")?;

        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from `path`, writing the defaults there if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let data = fs::read_to_string(path)
                .context("Failed to read config file")?;
            serde_json::from_str(&data)
                .context("Failed to parse config file")
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Load config from disk or create default, falling back to the defaults when the file is unusable
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_or_default_from(&path),
            Err(e) => {
                warn!("{:#}; using default settings", e);
                Self::default()
            }
        }
    }

    pub fn load_or_default_from(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            warn!("{:#} ({}); using default settings", e, path.display());
            Self::default()
        })
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        fs::write(path, data)
            .context("Failed to write config file")?;
        Ok(())
    }

    /// Update one setting by its dotted key, e.g. `ai.model`
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fn flag(key: &str, value: &str) -> Result<bool> {
            value
                .parse()
                .with_context(|| format!("{} expects true or false, got '{}'", key, value))
        }
        fn number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T>
        where
            T::Err: std::error::Error + Send + Sync + 'static,
        {
            value
                .parse()
                .with_context(|| format!("{} expects a number, got '{}'", key, value))
        }

        match key {
            "copy_results" => self.copy_results = flag(key, value)?,
            "qr_size" => self.qr_size = number(key, value)?,
            "random_string.length" => self.random_string.length = number(key, value)?,
            "random_string.uppercase" => self.random_string.classes.uppercase = flag(key, value)?,
            "random_string.lowercase" => self.random_string.classes.lowercase = flag(key, value)?,
            "random_string.digits" => self.random_string.classes.digits = flag(key, value)?,
            "random_string.symbols" => self.random_string.classes.symbols = flag(key, value)?,
            "ai.base_url" => self.ai.base_url = value.trim_end_matches('/').to_string(),
            "ai.model" => self.ai.model = value.to_string(),
            "ai.api_key_env" => self.ai.api_key_env = value.to_string(),
            "ai.timeout_secs" => self.ai.timeout_secs = number(key, value)?,
            "ai.summary_char_limit" => self.ai.summary_char_limit = number(key, value)?,
            _ => bail!("Unknown config key: {}", key),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_creates_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = Config::default();
        config.set("ai.model", "local-model").unwrap();
        config.set("qr_size", "256").unwrap();
        config.set("random_string.symbols", "true").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.ai.model, "local-model");
        assert_eq!(loaded.qr_size, 256);
        assert!(loaded.random_string.classes.symbols);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"copy_results": true, "ai": {"model": "m"}}"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert!(config.copy_results);
        assert_eq!(config.ai.model, "m");
        assert_eq!(config.ai.summary_char_limit, 20_000);
        assert_eq!(config.qr_size, 400);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(Config::load_from(&path).is_err());

        let mut config = Config::load_or_default_from(&path);
        assert_eq!(config, Config::default());
        // the broken file is left alone until a setting is saved over it
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");

        config.set("qr_size", "300").unwrap();
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().qr_size, 300);
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut config = Config::default();
        assert!(config.set("qr_size", "big").is_err());
        assert!(config.set("copy_results", "maybe").is_err());
        assert!(config.set("theme", "dark").is_err());
        config.set("ai.base_url", "http://localhost:8080/v1/").unwrap();
        assert_eq!(config.ai.base_url, "http://localhost:8080/v1");
    }
}
