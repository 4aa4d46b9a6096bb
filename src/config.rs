//! TOML configuration for a placekey codec.
//!
//! ```toml
//! # Default: reject indices that are not at the target resolution
//! on_resolution_mismatch = "error"
//!
//! # Or: log a warning and encode anyway (lossy)
//! on_resolution_mismatch = "warn"
//!
//! # Default: a where-part must also decode to a valid cell
//! validation = "index"
//!
//! # Or: pattern checks only
//! validation = "shape"
//! ```

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Behavior when an index is not at the target resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnResolutionMismatch {
    /// Return `InvalidResolution` (default, lossless)
    #[default]
    Error,
    /// Emit a warning and encode anyway
    Warn,
}

/// How much `format_is_valid` checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Shape patterns and the provider's cell validity (default)
    #[default]
    Index,
    /// Shape patterns only
    Shape,
}

/// Parsed codec configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaceKeyConfig {
    pub on_resolution_mismatch: OnResolutionMismatch,
    pub validation: ValidationMode,
}

/// Raw TOML structure.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPlaceKeyConfig {
    /// "error" (default) or "warn"
    on_resolution_mismatch: Option<String>,
    /// "index" (default) or "shape"
    validation: Option<String>,
}

impl PlaceKeyConfig {
    /// Parse from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        let config = Self::from_str(&content)?;
        debug!(path = %path.display(), ?config, "loaded placekey config");
        Ok(config)
    }

    /// Parse from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawPlaceKeyConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let on_resolution_mismatch = match raw.on_resolution_mismatch.as_deref() {
            None | Some("error") => OnResolutionMismatch::Error,
            Some("warn") => OnResolutionMismatch::Warn,
            Some(other) => {
                return Err(ConfigError::Validation(format!(
                    "Invalid on_resolution_mismatch value '{}': expected 'error' or 'warn'",
                    other
                )));
            }
        };

        let validation = match raw.validation.as_deref() {
            None | Some("index") => ValidationMode::Index,
            Some("shape") => ValidationMode::Shape,
            Some(other) => {
                return Err(ConfigError::Validation(format!(
                    "Invalid validation value '{}': expected 'index' or 'shape'",
                    other
                )));
            }
        };

        Ok(Self {
            on_resolution_mismatch,
            validation,
        })
    }
}

/// Errors during config parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(String),
    /// TOML parse error
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}
