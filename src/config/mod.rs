//! Configuration management.
//!
//! Layered lowest to highest: built-in defaults, an optional TOML config
//! file, `TKC_*` environment variables. Positional arguments override all
//! of these at resolution time.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::encoding::Encoding;
use crate::error::{Result, TkcError};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Tokenizer selection defaults
    #[serde(default)]
    pub tokenizer: TokenizerConfig,
}

/// Tokenizer selection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Model assumed when no name argument is given
    pub default_model: String,

    /// Encoding used when a name resolves to neither a model nor an
    /// encoding
    pub fallback_encoding: Encoding,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            default_model: "gpt-3.5-turbo".to_string(),
            fallback_encoding: Encoding::Cl100kBase,
        }
    }
}

impl Config {
    /// Load configuration: defaults, then the user config file when
    /// present, then environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.is_file() => Self::from_file(path)?,
            _ => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| TkcError::Config(format!("failed to read config file: {e}")))?;

        Ok(toml::from_str(&content)?)
    }

    /// Apply `TKC_*` environment variable overrides
    fn apply_env(&mut self) {
        if let Ok(model) = std::env::var("TKC_DEFAULT_MODEL") {
            self.tokenizer.default_model = model;
        }
        if let Ok(name) = std::env::var("TKC_FALLBACK_ENCODING") {
            match Encoding::from_name(&name) {
                Some(encoding) => self.tokenizer.fallback_encoding = encoding,
                None => {
                    tracing::debug!(%name, "TKC_FALLBACK_ENCODING is not a known encoding, ignored");
                }
            }
        }
    }

    /// Platform config file location (`<config dir>/tkc/config.toml`)
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tkc").join("config.toml"))
    }
}
