//! Report configuration (.failure-report.toml)
//!
//! Settings are layered: built-in defaults, then the config file, then CLI
//! flags.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::report::RenderOptions;

/// Config file looked up when no path is given
pub const DEFAULT_CONFIG_PATH: &str = ".failure-report.toml";

/// Error types for config operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    IoError(#[from] io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Output format of `render`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Collapsible text trees
    #[default]
    Text,
    /// Versioned JSON document
    Json,
}

/// `[render]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Deepest level whose children are printed (absent = fully expanded)
    #[serde(default)]
    pub expand_depth: Option<usize>,

    #[serde(default)]
    pub ascii: bool,
}

/// Report configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    #[serde(default)]
    pub render: RenderConfig,
}

/// Values given on the command line; `None` keeps the configured value
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    pub format: Option<OutputFormat>,
    pub expand_depth: Option<usize>,
    pub ascii: bool,
}

impl ReportConfig {
    /// Load and parse config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse config from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: ReportConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load an explicit config file, or the default one if it exists.
    ///
    /// An explicit path must exist; a missing default file means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG_PATH);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.render.expand_depth == Some(0) {
            return Err(ConfigError::ValidationError(
                "'render.expand_depth' must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply CLI flags on top of this config
    pub fn with_overrides(mut self, overrides: CliOverrides) -> Result<Self, ConfigError> {
        if let Some(format) = overrides.format {
            self.render.format = format;
        }
        if overrides.expand_depth.is_some() {
            self.render.expand_depth = overrides.expand_depth;
        }
        if overrides.ascii {
            self.render.ascii = true;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            expand_depth: self.render.expand_depth,
            ascii: self.render.ascii,
        }
    }
}
