//! # Placekey
//!
//! Encodes geographic coordinates as short, shareable, profanity-filtered
//! strings on top of the H3 hexagonal grid, and decodes them back.
//!
//! ## Format
//!
//! ```text
//! ┌──────────────────┬───┬──────────────────────────────┐
//! │ what (optional)  │ @ │ where                        │
//! │ xxx or xxx-yyy   │   │ xxx-yyy-zzz                  │
//! │ POI label        │   │ resolution 10 H3 cell        │
//! └──────────────────┴───┴──────────────────────────────┘
//! ```
//!
//! Only the where-part carries location. It is the base-28 rendering of a
//! 43-bit payload cut from the cell index (see [`layout`]), left-padded with
//! `a` and passed through a profanity filter (see [`filter`]).
//!
//! ## Usage
//!
//! ```ignore
//! use placekey::PlaceKeyCodec;
//!
//! let codec = PlaceKeyCodec::h3o()?;
//! let key = codec.from_geo(37.779274, -122.419262)?; // "@5vg-7gq-tvz"
//! let center = codec.to_geo(&key)?;
//!
//! // Or through the process-wide default codec:
//! let key = placekey::from_geo(0.0, 0.0)?; // "@dvt-smp-tvz"
//! ```

pub mod alphabet;
pub mod codec;
pub mod config;
pub mod distance;
pub mod error;
pub mod filter;
pub mod key;
pub mod layout;
pub mod tuple;
pub mod validate;

use std::sync::OnceLock;

pub use codec::{PlaceKeyCodec, encode_index};
pub use config::{ConfigError, OnResolutionMismatch, PlaceKeyConfig, ValidationMode};
pub use distance::{geo_distance, prefix_distance_map};
pub use error::{PlaceKeyError, Result};
pub use key::{PlaceKey, split_parts};
pub use layout::{
    BASE_RESOLUTION, Header, MAX_RESOLUTION, TARGET_RESOLUTION, resolution_of, shorten, unshorten,
};
pub use placekey_h3::{GeoCoord, H3oProvider, ProviderError, SpatialIndexProvider};

/// Process-wide codec over [`H3oProvider`], built on first use.
///
/// The header is computed exactly once; later calls share it.
pub fn default_codec() -> Result<&'static PlaceKeyCodec> {
    static CODEC: OnceLock<Result<PlaceKeyCodec>> = OnceLock::new();
    CODEC.get_or_init(PlaceKeyCodec::h3o).as_ref().map_err(Clone::clone)
}

/// Coordinate → where-part, via [`default_codec`].
pub fn from_geo(lat: f64, lng: f64) -> Result<String> {
    default_codec()?.from_geo(lat, lng)
}

/// Placekey → cell center, via [`default_codec`].
pub fn to_geo(key: &str) -> Result<GeoCoord> {
    default_codec()?.to_geo(key)
}

/// Hexadecimal cell index → where-part, via [`default_codec`].
pub fn from_h3_string(hex: &str) -> Result<String> {
    default_codec()?.from_h3_string(hex)
}

/// Placekey → hexadecimal cell index, via [`default_codec`].
pub fn to_h3_string(key: &str) -> Result<String> {
    default_codec()?.to_h3_string(key)
}

/// Full format check, via [`default_codec`]. `false` if the codec cannot be
/// built.
pub fn format_is_valid(key: &str) -> bool {
    default_codec().is_ok_and(|codec| codec.format_is_valid(key))
}
