//! Spatial index provider for placekey.
//!
//! The placekey codec never computes geometry itself. Everything it needs from
//! the hexagonal grid goes through [`SpatialIndexProvider`]:
//!
//! - coordinate → cell index at a given resolution
//! - cell index → cell center
//! - cell index → boundary polygon
//! - cell index well-formedness
//!
//! [`H3oProvider`] implements the trait on top of the pure-Rust `h3o` crate.
//! Other engines (a native H3 binding, a remote service, a test double) plug
//! in by implementing the same four methods.

mod backend;

pub use backend::H3oProvider;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Finest resolution the grid supports.
pub const MAX_RESOLUTION: u8 = 15;

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoCoord {
    /// Latitude in degrees, north positive.
    pub lat: f64,
    /// Longitude in degrees, east positive.
    pub lng: f64,
}

impl GeoCoord {
    #[inline]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<(f64, f64)> for GeoCoord {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// Errors reported by a spatial index provider.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// The engine rejected the coordinate (non-finite or out of range).
    #[error("invalid coordinate: ({lat}, {lng})")]
    InvalidCoordinate { lat: f64, lng: f64 },

    /// Resolution outside 0..=15.
    #[error("invalid resolution: {0} (must be between 0 and {max})", max = MAX_RESOLUTION)]
    InvalidResolution(u8),

    /// The value is not a well-formed cell index.
    #[error("invalid cell index: {0:#x}")]
    InvalidIndex(u64),
}

/// Result type for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Capability interface over a hierarchical hexagonal grid engine.
///
/// Implementations must be shareable across threads: the codec holds one
/// provider and serves concurrent callers through `&self`.
pub trait SpatialIndexProvider: Send + Sync {
    /// Index the cell containing `coord` at `resolution`.
    fn coordinate_to_index(&self, coord: GeoCoord, resolution: u8) -> Result<u64>;

    /// Center of the cell identified by `index`.
    fn index_to_coordinate(&self, index: u64) -> Result<GeoCoord>;

    /// Boundary polygon of the cell, vertices in counter-clockwise order.
    fn index_to_boundary(&self, index: u64) -> Result<Vec<GeoCoord>>;

    /// Whether `index` is a well-formed cell index.
    fn is_valid_index(&self, index: u64) -> bool;
}

impl<P: SpatialIndexProvider + ?Sized> SpatialIndexProvider for &P {
    #[inline]
    fn coordinate_to_index(&self, coord: GeoCoord, resolution: u8) -> Result<u64> {
        (**self).coordinate_to_index(coord, resolution)
    }

    #[inline]
    fn index_to_coordinate(&self, index: u64) -> Result<GeoCoord> {
        (**self).index_to_coordinate(index)
    }

    #[inline]
    fn index_to_boundary(&self, index: u64) -> Result<Vec<GeoCoord>> {
        (**self).index_to_boundary(index)
    }

    #[inline]
    fn is_valid_index(&self, index: u64) -> bool {
        (**self).is_valid_index(index)
    }
}

impl<P: SpatialIndexProvider + ?Sized> SpatialIndexProvider for Arc<P> {
    #[inline]
    fn coordinate_to_index(&self, coord: GeoCoord, resolution: u8) -> Result<u64> {
        (**self).coordinate_to_index(coord, resolution)
    }

    #[inline]
    fn index_to_coordinate(&self, index: u64) -> Result<GeoCoord> {
        (**self).index_to_coordinate(index)
    }

    #[inline]
    fn index_to_boundary(&self, index: u64) -> Result<Vec<GeoCoord>> {
        (**self).index_to_boundary(index)
    }

    #[inline]
    fn is_valid_index(&self, index: u64) -> bool {
        (**self).is_valid_index(index)
    }
}

impl<P: SpatialIndexProvider + ?Sized> SpatialIndexProvider for Box<P> {
    #[inline]
    fn coordinate_to_index(&self, coord: GeoCoord, resolution: u8) -> Result<u64> {
        (**self).coordinate_to_index(coord, resolution)
    }

    #[inline]
    fn index_to_coordinate(&self, index: u64) -> Result<GeoCoord> {
        (**self).index_to_coordinate(index)
    }

    #[inline]
    fn index_to_boundary(&self, index: u64) -> Result<Vec<GeoCoord>> {
        (**self).index_to_boundary(index)
    }

    #[inline]
    fn is_valid_index(&self, index: u64) -> bool {
        (**self).is_valid_index(index)
    }
}
