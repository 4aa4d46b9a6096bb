//! The placekey codec: coordinates and cell indices to where-parts and back.
//!
//! ```text
//! encode: (lat, lng) ─▶ provider ─▶ index ─▶ shorten ─▶ base-28 ─▶ clean ─▶ @xxx-yyy-zzz
//! decode: @xxx-yyy-zzz ─▶ strip ─▶ dirty ─▶ base-28 ─▶ unshorten(header) ─▶ index
//! ```

use placekey_h3::{GeoCoord, H3oProvider, ProviderError, SpatialIndexProvider};
use tracing::{debug, trace, warn};

use crate::alphabet::{decode_short, encode_short};
use crate::config::{OnResolutionMismatch, PlaceKeyConfig, ValidationMode};
use crate::distance::geo_distance;
use crate::error::{PlaceKeyError, Result};
use crate::filter::{clean, dirty};
use crate::key::split_parts;
use crate::layout::{Header, TARGET_RESOLUTION, resolution_of, shorten, unshorten};
use crate::tuple::{format_where, strip_where};
use crate::validate::{what_shape_is_valid, where_shape_is_valid};

/// Encode a cell index as a where-part without any resolution check.
///
/// Encoding needs no header: the header bits are discarded by [`shorten`].
pub fn encode_index(index: u64) -> String {
    let payload = shorten(index);
    let code = clean(&encode_short(payload));
    trace!(index = format_args!("{:#x}", index), payload, %code, "encoded index");
    format_where(&code)
}

/// Map "not a cell" from the provider onto the codec's own error.
fn index_error(e: ProviderError) -> PlaceKeyError {
    match e {
        ProviderError::InvalidIndex(index) => PlaceKeyError::IndexInvalid(index),
        other => PlaceKeyError::Provider(other),
    }
}

/// Encoder/decoder bound to one spatial index provider.
///
/// The header is derived from the provider once, in the constructor, and
/// never changes afterwards. Every method takes `&self`, so one codec can
/// serve any number of threads.
#[derive(Debug, Clone)]
pub struct PlaceKeyCodec<P = H3oProvider> {
    provider: P,
    header: Header,
    config: PlaceKeyConfig,
}

impl PlaceKeyCodec<H3oProvider> {
    /// Codec over the bundled `h3o` provider with default configuration.
    pub fn h3o() -> Result<Self> {
        Self::new(H3oProvider::new())
    }
}

impl<P: SpatialIndexProvider> PlaceKeyCodec<P> {
    pub fn new(provider: P) -> Result<Self> {
        Self::with_config(provider, PlaceKeyConfig::default())
    }

    /// Build a codec, computing the header from the provider's index of the
    /// coordinate origin at [`TARGET_RESOLUTION`].
    pub fn with_config(provider: P, config: PlaceKeyConfig) -> Result<Self> {
        let origin = provider.coordinate_to_index(GeoCoord::new(0.0, 0.0), TARGET_RESOLUTION)?;
        let header = Header::from_origin_index(origin);
        debug!(
            header = header.value(),
            resolution = TARGET_RESOLUTION,
            "computed placekey header"
        );
        Ok(Self {
            provider,
            header,
            config,
        })
    }

    #[inline]
    pub fn header(&self) -> Header {
        self.header
    }

    #[inline]
    pub fn config(&self) -> &PlaceKeyConfig {
        &self.config
    }

    #[inline]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    // =========================================================================
    // Encoding
    // =========================================================================

    /// Convert a coordinate in degrees into a where-part.
    pub fn from_geo(&self, lat: f64, lng: f64) -> Result<String> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(PlaceKeyError::InvalidLatLngRange { lat, lng });
        }
        let index = self
            .provider
            .coordinate_to_index(GeoCoord::new(lat, lng), TARGET_RESOLUTION)?;
        Ok(encode_index(index))
    }

    /// Convert a cell index into a where-part.
    ///
    /// Rejects indices not at [`TARGET_RESOLUTION`] unless the configuration
    /// tolerates the mismatch.
    pub fn from_h3_int(&self, index: u64) -> Result<String> {
        self.check_resolution(index)?;
        Ok(encode_index(index))
    }

    /// Convert any typed cell index that converts into `u64`.
    #[inline]
    pub fn from_h3_index(&self, index: impl Into<u64>) -> Result<String> {
        self.from_h3_int(index.into())
    }

    /// Convert a hexadecimal cell index (`8a754e64992ffff`, `0x` optional).
    pub fn from_h3_string(&self, hex: &str) -> Result<String> {
        let digits = hex
            .strip_prefix("0x")
            .or_else(|| hex.strip_prefix("0X"))
            .unwrap_or(hex);
        let index =
            u64::from_str_radix(digits, 16).map_err(|_| PlaceKeyError::InvalidHex(hex.to_string()))?;
        self.from_h3_int(index)
    }

    /// Encode without checking the index resolution.
    ///
    /// Indices at another resolution yield a well-formed but wrong where-part.
    #[inline]
    pub fn encode_index_unchecked(&self, index: u64) -> String {
        encode_index(index)
    }

    fn check_resolution(&self, index: u64) -> Result<()> {
        let found = resolution_of(index);
        if found == TARGET_RESOLUTION {
            return Ok(());
        }
        match self.config.on_resolution_mismatch {
            OnResolutionMismatch::Error => Err(PlaceKeyError::InvalidResolution {
                expected: TARGET_RESOLUTION,
                found,
            }),
            OnResolutionMismatch::Warn => {
                warn!(
                    index = format_args!("{:#x}", index),
                    expected = TARGET_RESOLUTION,
                    found,
                    "encoding index at a different resolution; result will not round-trip"
                );
                Ok(())
            }
        }
    }

    // =========================================================================
    // Decoding
    // =========================================================================

    /// Decode a bare where-part (leading `@` optional) into a cell index.
    pub fn decode_where(&self, where_part: &str) -> Result<u64> {
        if !where_shape_is_valid(where_part) {
            return Err(PlaceKeyError::InvalidFormat(format!(
                "where-part '{}' is malformed",
                where_part
            )));
        }
        let code = dirty(&strip_where(where_part));
        let payload = decode_short(&code)?;
        let index = unshorten(payload, self.header);
        trace!(%where_part, payload, index = format_args!("{:#x}", index), "decoded where-part");
        Ok(index)
    }

    /// Decode a placekey (what-part ignored) into a cell index.
    pub fn to_h3_int(&self, key: &str) -> Result<u64> {
        let (_, where_part) = split_parts(key)?;
        self.decode_where(where_part)
    }

    /// Decode a placekey into a lowercase hexadecimal cell index.
    pub fn to_h3_string(&self, key: &str) -> Result<String> {
        Ok(format!("{:x}", self.to_h3_int(key)?))
    }

    /// Center of the cell a placekey points at.
    pub fn to_geo(&self, key: &str) -> Result<GeoCoord> {
        let index = self.to_h3_int(key)?;
        self.provider.index_to_coordinate(index).map_err(index_error)
    }

    /// Boundary polygon of the cell a placekey points at.
    pub fn to_geo_boundary(&self, key: &str) -> Result<Vec<GeoCoord>> {
        let index = self.to_h3_int(key)?;
        self.provider.index_to_boundary(index).map_err(index_error)
    }

    /// Distance in meters between the centers of two placekeys' cells.
    pub fn distance(&self, key1: &str, key2: &str) -> Result<f64> {
        let a = self.to_geo(key1)?;
        let b = self.to_geo(key2)?;
        Ok(geo_distance(a, b))
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Whether a full placekey is well formed.
    ///
    /// The where-part must pass [`where_part_is_valid`](Self::where_part_is_valid);
    /// a non-empty what-part must pass the what-part pattern.
    pub fn format_is_valid(&self, key: &str) -> bool {
        match split_parts(key) {
            Ok((what, where_part)) => {
                self.where_part_is_valid(where_part)
                    && what.is_none_or(|what| self.what_part_is_valid(what))
            }
            Err(_) => false,
        }
    }

    /// Shape check, plus the provider's cell check in
    /// [`ValidationMode::Index`].
    pub fn where_part_is_valid(&self, where_part: &str) -> bool {
        if !where_shape_is_valid(where_part) {
            return false;
        }
        match self.config.validation {
            ValidationMode::Shape => true,
            ValidationMode::Index => self
                .decode_where(where_part)
                .is_ok_and(|index| self.provider.is_valid_index(index)),
        }
    }

    #[inline]
    pub fn what_part_is_valid(&self, what: &str) -> bool {
        what_shape_is_valid(what)
    }
}
