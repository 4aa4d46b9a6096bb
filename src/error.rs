//! Error types for placekey encoding and decoding.

use placekey_h3::ProviderError;
use thiserror::Error;

use crate::config::ConfigError;

/// Placekey errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlaceKeyError {
    /// Coordinate outside latitude [-90, 90] or longitude [-180, 180].
    #[error("invalid lat/lng range: ({lat}, {lng})")]
    InvalidLatLngRange { lat: f64, lng: f64 },

    /// Where-part (or code) does not have the expected shape.
    #[error("invalid placekey format: {0}")]
    InvalidFormat(String),

    /// More than one '@' separator.
    #[error("invalid placekey parts: '{0}'")]
    InvalidParts(String),

    /// Index resolution differs from the codec's target resolution.
    #[error("invalid index resolution: expected {expected}, found {found}")]
    InvalidResolution { expected: u8, found: u8 },

    /// Decoded index is not a valid cell.
    #[error("invalid cell index: {0:#x}")]
    IndexInvalid(u64),

    /// Index string is not hexadecimal.
    #[error("invalid index string: '{0}'")]
    InvalidHex(String),

    /// Spatial index provider failure.
    #[error("spatial index provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for placekey operations.
pub type Result<T> = std::result::Result<T, PlaceKeyError>;
