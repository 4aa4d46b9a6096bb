//! `h3o`-backed provider.

use h3o::{CellIndex, LatLng, Resolution};

use crate::{GeoCoord, ProviderError, Result, SpatialIndexProvider};

/// Spatial index provider backed by the pure-Rust `h3o` engine.
///
/// `h3o` keeps no per-session native state, so the provider is a zero-sized
/// handle that can be cloned and shared freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct H3oProvider;

impl H3oProvider {
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    fn cell(index: u64) -> Result<CellIndex> {
        CellIndex::try_from(index).map_err(|_| ProviderError::InvalidIndex(index))
    }
}

#[inline]
fn to_geo(ll: LatLng) -> GeoCoord {
    GeoCoord {
        lat: ll.lat(),
        lng: ll.lng(),
    }
}

impl SpatialIndexProvider for H3oProvider {
    fn coordinate_to_index(&self, coord: GeoCoord, resolution: u8) -> Result<u64> {
        let resolution = Resolution::try_from(resolution)
            .map_err(|_| ProviderError::InvalidResolution(resolution))?;
        let ll = LatLng::new(coord.lat, coord.lng).map_err(|_| ProviderError::InvalidCoordinate {
            lat: coord.lat,
            lng: coord.lng,
        })?;
        Ok(u64::from(ll.to_cell(resolution)))
    }

    fn index_to_coordinate(&self, index: u64) -> Result<GeoCoord> {
        let cell = Self::cell(index)?;
        Ok(to_geo(LatLng::from(cell)))
    }

    fn index_to_boundary(&self, index: u64) -> Result<Vec<GeoCoord>> {
        let cell = Self::cell(index)?;
        Ok(cell.boundary().iter().copied().map(to_geo).collect())
    }

    #[inline]
    fn is_valid_index(&self, index: u64) -> bool {
        CellIndex::try_from(index).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-7;

    fn close(a: GeoCoord, lat: f64, lng: f64) -> bool {
        (a.lat - lat).abs() <= TOLERANCE && (a.lng - lng).abs() <= TOLERANCE
    }

    #[test]
    fn origin_at_resolution_10() {
        let index = H3oProvider
            .coordinate_to_index(GeoCoord::new(0.0, 0.0), 10)
            .unwrap();
        assert_eq!(index, 0x8a754e64992ffff);
    }

    #[test]
    fn san_francisco_city_hall() {
        let index = H3oProvider
            .coordinate_to_index(GeoCoord::new(37.779274, -122.419262), 10)
            .unwrap();
        assert_eq!(index, 0x8a2830828767fff);
    }

    #[test]
    fn rejects_bad_resolution() {
        let err = H3oProvider
            .coordinate_to_index(GeoCoord::new(0.0, 0.0), 16)
            .unwrap_err();
        assert_eq!(err, ProviderError::InvalidResolution(16));
    }

    #[test]
    fn rejects_non_finite_coordinate() {
        let err = H3oProvider
            .coordinate_to_index(GeoCoord::new(f64::NAN, 0.0), 10)
            .unwrap_err();
        assert!(matches!(err, ProviderError::InvalidCoordinate { .. }));
    }

    #[test]
    fn hexagon_center_and_boundary() {
        let index = 0x8a2a1072b59ffff;
        let center = H3oProvider.index_to_coordinate(index).unwrap();
        assert!((center.lat - 40.68942184369931).abs() < 1e-6);
        assert!((center.lng - -74.04443139990863).abs() < 1e-6);

        let boundary = H3oProvider.index_to_boundary(index).unwrap();
        assert_eq!(boundary.len(), 6);
        assert!(
            boundary
                .iter()
                .any(|v| close(*v, 40.6900586009536, -74.04415176176158))
        );
        assert!(
            boundary
                .iter()
                .any(|v| close(*v, 40.688785090724046, -74.04471103053613))
        );
    }

    #[test]
    fn pentagon_has_five_vertices() {
        let boundary = H3oProvider.index_to_boundary(0x8ac200000007fff).unwrap();
        assert_eq!(boundary.len(), 5);
    }

    #[test]
    fn validity_check() {
        assert!(H3oProvider.is_valid_index(0x8a754e64992ffff));
        // Resolution 10 header with non-unused digits 11 and 12.
        assert!(!H3oProvider.is_valid_index(0x8a01448f3d807ff));
        assert!(!H3oProvider.is_valid_index(0));
    }

    #[test]
    fn invalid_index_is_reported() {
        assert_eq!(
            H3oProvider.index_to_coordinate(0).unwrap_err(),
            ProviderError::InvalidIndex(0)
        );
        assert!(H3oProvider.index_to_boundary(0).is_err());
    }
}
