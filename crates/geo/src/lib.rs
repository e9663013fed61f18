//! Geolocation fuzzing.
//!
//! `geo-fuzz` turns a raw [`PositionReading`] into a deliberately imprecise
//! [`Coordinate`] before it is submitted anywhere. All functions are pure
//! apart from the random source held by [`GeoFuzzer`].
mod coordinate;
pub mod distance;
mod error;
pub mod fuzzer;

pub use coordinate::{Coordinate, FuzzRadiusKm, PositionReading};
pub use distance::{Bounds, approximate_distance_m, search_bounds};
pub use error::FuzzError;
pub use fuzzer::{
    DegreeOffsets, FuzzResult, FuzzStrategy, GeoFuzzer, KM_PER_DEGREE_LATITUDE,
    KM_PER_DEGREE_LONGITUDE, degree_offsets,
};
