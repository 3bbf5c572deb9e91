//! Configuration management for tallydb.
//!
//! Supports TOML configuration files; command-line flags override
//! individual values.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Error;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub backup: BackupConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Input source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_input_path")]
    pub path: String,
}

/// Backup configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BackupConfig {
    #[serde(default = "default_backup_enabled")]
    pub enabled: bool,
    #[serde(default = "default_backup_path")]
    pub path: String,
}

/// Display configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_display_width")]
    pub width: usize,
    #[serde(default = "default_colors_enabled")]
    pub colors: bool,
    /// Per-step pacing delay for the ingestion progress bar, in
    /// milliseconds. 0 disables pacing.
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_input_path() -> String {
    "purchases.txt".to_string()
}

fn default_backup_enabled() -> bool {
    true
}

fn default_backup_path() -> String {
    "frequency.dat".to_string()
}

fn default_display_width() -> usize {
    80
}

fn default_colors_enabled() -> bool {
    true
}

fn default_pause_ms() -> u64 {
    15
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: InputConfig::default(),
            backup: BackupConfig::default(),
            display: DisplayConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            path: default_input_path(),
        }
    }
}

impl Default for BackupConfig {
    fn default() -> Self {
        BackupConfig {
            enabled: default_backup_enabled(),
            path: default_backup_path(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            width: default_display_width(),
            colors: default_colors_enabled(),
            pause_ms: default_pause_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| Error::Config(format!("{}: {}", path.as_ref().display(), e)))?;

        toml::from_str(&contents).map_err(|e| Error::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.input.path, "purchases.txt");
        assert!(config.backup.enabled);
        assert_eq!(config.backup.path, "frequency.dat");
        assert_eq!(config.display.width, 80);
        assert_eq!(config.display.pause_ms, 15);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [input]
            path = "today.txt"

            [display]
            colors = false
            "#,
        )
        .unwrap();
        assert_eq!(config.input.path, "today.txt");
        assert!(!config.display.colors);
        assert_eq!(config.display.width, 80);
        assert_eq!(config.backup.path, "frequency.dat");
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Config::from_file("no-such-config.toml"),
            Err(Error::Config(_))
        ));
    }
}
