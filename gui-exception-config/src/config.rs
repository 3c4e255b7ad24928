//! The `Config` struct, its validation, and YAML persistence.
//!
//! Covers:
//! - `load` / `load_from` (missing file falls back to defaults)
//! - `save_to` (atomic write via temp file + rename)
//! - XDG-style path helpers (`config_path`, `config_dir`)

use crate::error::ConfigError;
use crate::types::{Convention, KeywordsConfig, LogLevel, default_conventions, keyword_problem};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Analyzer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Frame conventions to recognise, in the order they are tried
    pub conventions: Vec<Convention>,

    /// Extra localized keywords on top of the built-in English/French sets
    pub keywords: KeywordsConfig,

    /// Verbosity of diagnostic output
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            conventions: default_conventions(),
            keywords: KeywordsConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the enabled conventions
    pub fn with_conventions(mut self, conventions: Vec<Convention>) -> Self {
        self.conventions = conventions;
        self
    }

    /// Replace the extra keywords
    pub fn with_keywords(mut self, keywords: KeywordsConfig) -> Self {
        self.keywords = keywords;
        self
    }

    /// Set the log level
    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    /// Check semantic constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.conventions.is_empty() {
            return Err(ConfigError::Validation(
                "conventions: at least one convention must be enabled".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for convention in &self.conventions {
            if !seen.insert(convention) {
                return Err(ConfigError::Validation(format!(
                    "conventions: '{}' is listed more than once",
                    convention.display_name()
                )));
            }
        }

        let groups = [
            ("keywords.frame_markers", &self.keywords.frame_markers),
            ("keywords.path_markers", &self.keywords.path_markers),
            ("keywords.line_markers", &self.keywords.line_markers),
        ];
        for (field, words) in groups {
            for word in words.iter() {
                if let Some(problem) = keyword_problem(word) {
                    return Err(ConfigError::Validation(format!(
                        "{field}: invalid keyword {word:?}: {problem}"
                    )));
                }
            }
        }

        Ok(())
    }

    /// Load configuration from the default location, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`.
    ///
    /// A missing file is not an error: defaults are returned. A file that
    /// exists but cannot be read, parsed or validated is.
    pub fn load_from(path: &Path) -> Result<Self> {
        log::info!("Config path: {:?}", path);

        if !path.exists() {
            log::info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(ConfigError::from)?;
        let config = Self::from_yaml(&contents)?;
        log::info!(
            "Loaded config: {} convention(s), log level {}",
            config.conventions.len(),
            config.log_level.display_name()
        );
        Ok(config)
    }

    /// Parse and validate configuration from YAML text.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to a struct with defaults.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml_ng::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::from)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::from)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(ConfigError::from)?;
        fs::rename(&temp_path, path).map_err(ConfigError::from)?;

        log::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Get the configuration file path (using XDG convention)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("gui-exception")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // Use XDG convention on all platforms: ~/.config/gui-exception/config.yaml
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("gui-exception")
            } else {
                PathBuf::from(".")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert_eq!(config.conventions, vec![Convention::Unix, Convention::Windows]);
        assert!(config.keywords.is_empty());
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_conventions_rejected() {
        let config = Config::new().with_conventions(Vec::new());
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_duplicate_convention_rejected() {
        let config = Config::new().with_conventions(vec![Convention::Unix, Convention::Unix]);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("more than once"), "{err}");
    }

    #[test]
    fn test_bad_keyword_names_field() {
        let config = Config::new().with_keywords(KeywordsConfig {
            line_markers: vec!["Zeile".into(), "li ne".into()],
            ..Default::default()
        });
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("keywords.line_markers"), "{err}");
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = Config::from_yaml("log_level: debug\n").unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.conventions, default_conventions());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Config::from_yaml("  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_convention_is_parse_error() {
        let err = Config::from_yaml("conventions: [unix, vms]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
