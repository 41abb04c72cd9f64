//! Style file (YAML) parsing.
//!
//! A style file holds defaults for a run: output path, module size, colours,
//! data mode, logo, and framing. Command-line flags win over the file, and
//! the file wins over builtin defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{QrError, Result};
use crate::types::PayloadMode;

/// Defaults loaded from a style file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Output image path.
    pub out: Option<PathBuf>,

    /// Pixels per module.
    pub size: Option<u32>,

    /// Fill colour (hex, CSS name, or brand name).
    pub fill: Option<String>,

    /// Background colour (hex, CSS name, or brand name).
    pub bg: Option<String>,

    /// How to interpret the input text.
    pub mode: Option<PayloadMode>,

    /// Logo image. Relative paths are resolved against the style file's directory.
    pub logo: Option<PathBuf>,

    /// Draw the rounded frame (default: true).
    pub frame: Option<bool>,

    /// Derive colours from the logo (default: false).
    pub auto_style: Option<bool>,
}

impl StyleConfig {
    /// Load a style file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| QrError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read style file: {}", e),
            help: None,
        })?;

        let mut config = Self::parse(&content)?;

        if let (Some(logo), Some(base)) = (&config.logo, path.parent()) {
            if logo.is_relative() {
                config.logo = Some(base.join(logo));
            }
        }

        Ok(config)
    }

    /// Parse a style file from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| QrError::Parse {
            message: format!("Invalid style file: {}", e),
            help: Some("Check the YAML syntax and field names".to_string()),
        })?;

        if config.size == Some(0) {
            return Err(QrError::Parse {
                message: "Invalid style file: size must be at least 1".to_string(),
                help: None,
            });
        }

        Ok(config)
    }
}
