//! Great-circle distance and the shared-prefix distance table.

use std::collections::BTreeMap;

use placekey_h3::GeoCoord;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Upper bound on the distance in meters between two cells whose where-parts
/// share a prefix of the given length (separators not counted).
pub const PREFIX_DISTANCES: [(usize, f64); 9] = [
    (1, 1.274e7),
    (2, 2.777e6),
    (3, 1.065e6),
    (4, 1.524e5),
    (5, 2.177e4),
    (6, 8227.0),
    (7, 1176.0),
    (8, 444.3),
    (9, 63.47),
];

/// Shared prefix length → maximal distance in meters.
pub fn prefix_distance_map() -> BTreeMap<usize, f64> {
    PREFIX_DISTANCES.into_iter().collect()
}

/// Haversine distance in meters.
pub fn geo_distance(a: GeoCoord, b: GeoCoord) -> f64 {
    let (lat1, lng1) = (a.lat.to_radians(), a.lng.to_radians());
    let (lat2, lng2) = (b.lat.to_radians(), b.lng.to_radians());
    let hav_lat = 0.5 * (1.0 - (lat1 - lat2).cos());
    let hav_lng = 0.5 * (1.0 - (lng1 - lng2).cos());
    let radical = (hav_lat + lat1.cos() * lat2.cos() * hav_lng).sqrt();
    2.0 * EARTH_RADIUS_KM * radical.asin() * 1000.0
}
