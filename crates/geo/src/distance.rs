//! Flat-earth distance helpers used for nearby-user lookups.
//!
//! Both ignore the curvature of the earth; the error grows with distance and
//! is negligible at the few-kilometer scale these are used for.
use crate::Coordinate;
use crate::fuzzer::{
    KM_PER_DEGREE_LATITUDE, longitude_difference, longitude_scale_km, offsets_for_km,
};

/// Approximate distance between two points in meters.
///
/// The longitude scale is the average of the scales at both latitudes, and
/// points on either side of the antimeridian are measured the short way.
pub fn approximate_distance_m(a: Coordinate, b: Coordinate) -> f64 {
    let lat_m = KM_PER_DEGREE_LATITUDE * 1000.0;
    let lng_m = (longitude_scale_km(a.latitude) + longitude_scale_km(b.latitude)) / 2.0 * 1000.0;

    let d_lat = (a.latitude - b.latitude) * lat_m;
    let d_lng = longitude_difference(a.longitude, b.longitude) * lng_m;
    d_lat.hypot(d_lng)
}

/// Axis-aligned box in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub lat_min: f64,
    pub lng_min: f64,
    pub lat_max: f64,
    pub lng_max: f64,
}

impl Bounds {
    pub fn contains(&self, point: Coordinate) -> bool {
        (self.lat_min..=self.lat_max).contains(&point.latitude)
            && (self.lng_min..=self.lng_max).contains(&point.longitude)
    }
}

/// Square of `distance_km` around `center`, for coarse range queries.
///
/// The sign of `distance_km` is ignored.
pub fn search_bounds(center: Coordinate, distance_km: f64) -> Bounds {
    let offsets = offsets_for_km(center.latitude, distance_km.abs());
    Bounds {
        lat_min: center.latitude - offsets.latitude,
        lng_min: center.longitude - offsets.longitude,
        lat_max: center.latitude + offsets.latitude,
        lng_max: center.longitude + offsets.longitude,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate::new(latitude, longitude).expect("coordinate")
    }

    #[test]
    fn one_degree_north_is_one_latitude_degree() {
        let d = approximate_distance_m(at(10.0, 20.0), at(11.0, 20.0));
        assert!((d - 110_574.0).abs() < 1e-6);
    }

    #[test]
    fn distance_is_symmetric() {
        let berlin = at(52.52, 13.405);
        let potsdam = at(52.3906, 13.0645);
        let there = approximate_distance_m(berlin, potsdam);
        let back = approximate_distance_m(potsdam, berlin);
        assert_eq!(there, back);
        assert!((25_000.0..30_000.0).contains(&there), "distance {there}");
    }

    #[test]
    fn bounds_are_centered_and_square_in_km() {
        let center = at(52.52, 13.405);
        let bounds = search_bounds(center, 10.0);
        assert!(bounds.contains(center));
        assert!(((bounds.lat_max - bounds.lat_min) * KM_PER_DEGREE_LATITUDE - 20.0).abs() < 1e-9);
        assert!(
            ((bounds.lng_max - bounds.lng_min) * longitude_scale_km(52.52) - 20.0).abs() < 1e-9
        );
        assert!(!bounds.contains(at(52.8, 13.405)));
    }

    #[test]
    fn distance_across_antimeridian_takes_short_way() {
        let east = at(52.52, 179.99);
        let west = at(52.52, -179.99);
        let d = approximate_distance_m(east, west);
        let expected = 0.02 * longitude_scale_km(52.52) * 1000.0;
        assert!((d - expected).abs() < 1e-3, "distance {d}, expected {expected}");
    }
}
