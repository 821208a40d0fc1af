//! Configuration file handling for color-namer.
//!
//! Loads configuration from `<config dir>/color-namer/config.toml` or a custom path.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::analyzer::{AnalyzerSettings, DEFAULT_SQUARE_SIZE};
use crate::color::{ColorName, Locale, NameTable};
use crate::sampler::WindowSize;

/// Configuration file structure for color-namer.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub locale: LocaleConfig,
    /// Display name overrides keyed by color category (`gray = "grey"`)
    #[serde(default)]
    pub names: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Side of the sampling window (odd)
    #[serde(default = "default_window")]
    pub window: usize,
    /// Side of the square frames are resized to; 0 keeps the frame size
    #[serde(default = "default_square_size")]
    pub square_size: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window: default_window(),
            square_size: default_square_size(),
        }
    }
}

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct LocaleConfig {
    #[serde(default)]
    pub language: Locale,
}

fn default_window() -> usize {
    WindowSize::DEFAULT.get()
}

fn default_square_size() -> usize {
    DEFAULT_SQUARE_SIZE
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file '{}' not found", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read config file '{}': {source}", path.display())]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", path.display())]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl Config {
    /// Load configuration from a file path, or the default path if `None`.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            Self::read(&path)
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Load configuration from a path the user named explicitly; the file
    /// must exist.
    pub fn load_from_explicit(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Self::read(path)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Analyzer settings described by the `[analysis]` table.
    pub fn analyzer_settings(&self) -> Result<AnalyzerSettings, ConfigError> {
        let window = WindowSize::new(self.analysis.window).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "analysis.window must be an odd number >= 1, got {}",
                self.analysis.window
            ))
        })?;
        let square_size = match self.analysis.square_size {
            0 => None,
            side => Some(side),
        };
        Ok(AnalyzerSettings {
            window,
            square_size,
        })
    }

    /// Name table for `locale` with the `[names]` overrides applied.
    pub fn name_table(&self, locale: Locale) -> Result<NameTable, ConfigError> {
        let mut table = NameTable::for_locale(locale);
        for (key, label) in &self.names {
            let name: ColorName = key
                .parse()
                .map_err(|e| ConfigError::Invalid(format!("[names]: {}", e)))?;
            table.set(name, label.clone());
        }
        Ok(table)
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("color-namer").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/color-namer/config.toml")
        })
}

/// Contents written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# color-namer configuration

[analysis]
# Side of the sampled center window (odd number)
window = 7
# Frames are resized to a square of this side before sampling (0 = keep size)
square_size = 500

[locale]
# Color name language: en, fr
language = "en"

[names]
# Override individual color names, e.g.
# gray = "Grey"
"#;
