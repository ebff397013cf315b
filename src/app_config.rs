use anyhow::{anyhow, Context, Result};
use log::{warn, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::language_utils::PolishLanguage;

/// Application configuration module
/// This module handles loading, validating and saving the settings used by
/// the command line tool.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Polish prompt settings
    #[serde(default)]
    pub polish: PolishConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings for the polish prompt
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PolishConfig {
    /// Language tag used when none is given on the command line
    #[serde(default = "default_polish_language")]
    pub default_language: String,

    /// Reject tags other than Chinese or English instead of falling back
    /// to English
    #[serde(default)]
    pub strict_language: bool,
}

impl Default for PolishConfig {
    fn default() -> Self {
        Self {
            default_language: default_polish_language(),
            strict_language: false,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

fn default_polish_language() -> String {
    "zh".to_string()
}

impl Config {
    /// Load the configuration at `path`, writing the defaults there first
    /// if the file does not exist.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {}", path.display()))?;

            let reader = BufReader::new(file);
            let config: Config = serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

            return Ok(config);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write default config to file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        let tag = &self.polish.default_language;

        if self.polish.strict_language {
            PolishLanguage::parse_strict(tag)
                .with_context(|| format!("Invalid default polish language: {}", tag))?;
        } else if tag != "zh" && tag != "en" {
            // The permissive mapping would silently turn anything else into English
            return Err(anyhow!(
                "Default polish language must be 'zh' or 'en' unless strict_language is enabled, got '{}'",
                tag
            ));
        }

        Ok(())
    }

    /// Resolve the polish language from an optional command line tag,
    /// falling back to the configured default.
    pub fn resolve_polish_language(&self, tag: Option<&str>) -> Result<PolishLanguage> {
        let tag = tag.unwrap_or(&self.polish.default_language);

        if self.polish.strict_language {
            Ok(PolishLanguage::parse_strict(tag)?)
        } else {
            Ok(PolishLanguage::from_tag(tag))
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            polish: PolishConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
