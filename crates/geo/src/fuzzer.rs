//! Randomized perturbation of a true coordinate.
//!
//! The radius is converted to a degree offset per axis. Latitude degrees have a
//! fixed length; longitude degrees shrink with the cosine of the latitude, so
//! the longitude offset widens toward the poles and is capped at 180°.
//!
//! [`FuzzStrategy::BoundingBox`] draws each axis independently and uniformly
//! from `[-offset, +offset]`. The result is uniform over a rectangle, and the
//! diagonal displacement can reach √2 times the radius. [`FuzzStrategy::UniformDisk`]
//! samples uniformly inside the ellipse inscribed in that rectangle, which
//! keeps the displacement within the radius.
use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strum::{AsRefStr, Display, EnumString};

use crate::{Coordinate, FuzzError, FuzzRadiusKm, PositionReading};

/// Kilometers per degree of latitude.
pub const KM_PER_DEGREE_LATITUDE: f64 = 110.574;
/// Kilometers per degree of longitude at the equator.
pub const KM_PER_DEGREE_LONGITUDE: f64 = 111.320;

const MAX_LONGITUDE_OFFSET: f64 = 180.0;

/// Maximum displacement in degrees along each axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DegreeOffsets {
    pub latitude: f64,
    pub longitude: f64,
}

/// Degree-equivalent of `radius` on each axis at `latitude`.
pub fn degree_offsets(latitude: f64, radius: FuzzRadiusKm) -> DegreeOffsets {
    offsets_for_km(latitude, radius.km())
}

pub(crate) fn offsets_for_km(latitude: f64, km: f64) -> DegreeOffsets {
    let km_per_degree_longitude = longitude_scale_km(latitude);
    let longitude = if km_per_degree_longitude > 0.0 {
        (km / km_per_degree_longitude).min(MAX_LONGITUDE_OFFSET)
    } else {
        MAX_LONGITUDE_OFFSET
    };

    DegreeOffsets {
        latitude: km / KM_PER_DEGREE_LATITUDE,
        longitude,
    }
}

/// Length of one degree of longitude, in km, at `latitude` degrees.
pub(crate) fn longitude_scale_km(latitude: f64) -> f64 {
    KM_PER_DEGREE_LONGITUDE * latitude.to_radians().cos().abs()
}

/// How the random offset is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FuzzStrategy {
    /// Independent uniform offset per axis.
    #[default]
    #[strum(serialize = "box")]
    BoundingBox,
    /// Uniform over the disk of the requested radius.
    #[strum(serialize = "disk")]
    UniformDisk,
}

/// A fuzzed coordinate together with what produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FuzzResult {
    pub original: Coordinate,
    pub fuzzed: Coordinate,
    pub offsets: DegreeOffsets,
    pub strategy: FuzzStrategy,
}

impl FuzzResult {
    /// Signed `(latitude, longitude)` displacement in degrees.
    ///
    /// The longitude component takes the short way across the antimeridian.
    pub fn delta(&self) -> (f64, f64) {
        (
            self.fuzzed.latitude - self.original.latitude,
            longitude_difference(self.fuzzed.longitude, self.original.longitude),
        )
    }
}

/// Draws fuzzed coordinates from a random source.
///
/// Seed the generator for reproducible results in tests.
#[derive(Debug)]
pub struct GeoFuzzer<R> {
    rng: R,
    strategy: FuzzStrategy,
}

impl GeoFuzzer<StdRng> {
    /// Fuzzer seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GeoFuzzer<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            strategy: FuzzStrategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: FuzzStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> FuzzStrategy {
        self.strategy
    }

    /// Validates `reading` and fuzzes it by up to `radius`.
    ///
    /// Fails before drawing anything if either axis is missing.
    pub fn fuzz(
        &mut self,
        reading: PositionReading,
        radius: FuzzRadiusKm,
    ) -> Result<FuzzResult, FuzzError> {
        let coordinate = reading.validate()?;
        Ok(self.fuzz_coordinate(coordinate, radius))
    }

    pub fn fuzz_coordinate(&mut self, original: Coordinate, radius: FuzzRadiusKm) -> FuzzResult {
        let offsets = degree_offsets(original.latitude, radius);
        let (d_lat, d_lng) = match self.strategy {
            FuzzStrategy::BoundingBox => (
                self.rng.gen_range(-offsets.latitude..=offsets.latitude),
                self.rng.gen_range(-offsets.longitude..=offsets.longitude),
            ),
            FuzzStrategy::UniformDisk => {
                let r = self.rng.gen_range(0.0..1.0_f64).sqrt();
                let theta = self.rng.gen_range(0.0..TAU);
                (
                    r * theta.cos() * offsets.latitude,
                    r * theta.sin() * offsets.longitude,
                )
            }
        };

        let fuzzed = normalize(original.latitude + d_lat, original.longitude + d_lng);
        tracing::trace!(
            %radius,
            strategy = %self.strategy,
            d_lat,
            d_lng,
            "coordinate fuzzed"
        );

        FuzzResult {
            original,
            fuzzed,
            offsets,
            strategy: self.strategy,
        }
    }
}

/// `to - from` in degrees, wrapped into `[-180, 180]`.
pub(crate) fn longitude_difference(to: f64, from: f64) -> f64 {
    let diff = to - from;
    if diff.abs() > Coordinate::MAX_LONGITUDE {
        (diff + 180.0).rem_euclid(360.0) - 180.0
    } else {
        diff
    }
}

/// Clamps latitude to the poles and wraps longitude into `[-180, 180]`.
fn normalize(latitude: f64, longitude: f64) -> Coordinate {
    let latitude = latitude.clamp(-Coordinate::MAX_LATITUDE, Coordinate::MAX_LATITUDE);
    let longitude = if longitude.abs() > Coordinate::MAX_LONGITUDE {
        (longitude + 180.0).rem_euclid(360.0) - 180.0
    } else {
        longitude
    };
    Coordinate {
        latitude,
        longitude,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radius(km: f64) -> FuzzRadiusKm {
        FuzzRadiusKm::new(km).expect("valid radius")
    }

    #[test]
    fn offsets_at_equator() {
        let offsets = degree_offsets(0.0, radius(111.320));
        assert!((offsets.longitude - 1.0).abs() < 1e-12);
        assert!((offsets.latitude - 111.320 / 110.574).abs() < 1e-12);
    }

    #[test]
    fn longitude_offset_widens_toward_poles() {
        let r = radius(5.0);
        let equator = degree_offsets(0.0, r).longitude;
        let berlin = degree_offsets(52.52, r).longitude;
        let arctic = degree_offsets(78.0, r).longitude;
        assert!(equator < berlin && berlin < arctic);
        assert_eq!(degree_offsets(90.0, radius(5000.0)).longitude, 180.0);
    }

    #[test]
    fn zero_radius_returns_original() {
        let mut fuzzer = GeoFuzzer::seeded(7);
        let result = fuzzer
            .fuzz(PositionReading::new(52.52, 13.405), FuzzRadiusKm::ZERO)
            .expect("fuzz");
        assert_eq!(result.fuzzed, result.original);
    }

    #[test]
    fn missing_latitude_fails_before_drawing() {
        let mut fuzzer = GeoFuzzer::seeded(7);
        let reading = PositionReading {
            latitude: None,
            longitude: Some(13.405),
        };
        assert_eq!(
            fuzzer.fuzz(reading, radius(5.0)),
            Err(FuzzError::MissingLatitude)
        );
    }

    #[test]
    fn disk_strategy_stays_inside_ellipse() {
        let mut fuzzer = GeoFuzzer::seeded(42).with_strategy(FuzzStrategy::UniformDisk);
        let origin = Coordinate::new(52.52, 13.405).expect("coordinate");
        for _ in 0..1_000 {
            let result = fuzzer.fuzz_coordinate(origin, radius(5.0));
            let (d_lat, d_lng) = result.delta();
            let unit = (d_lat / result.offsets.latitude).powi(2)
                + (d_lng / result.offsets.longitude).powi(2);
            assert!(unit <= 1.0 + 1e-9, "outside disk: {unit}");
        }
    }

    #[test]
    fn strategy_names() {
        assert_eq!("box".parse::<FuzzStrategy>(), Ok(FuzzStrategy::BoundingBox));
        assert_eq!("disk".parse::<FuzzStrategy>(), Ok(FuzzStrategy::UniformDisk));
        assert_eq!(FuzzStrategy::UniformDisk.to_string(), "disk");
        assert!("circle".parse::<FuzzStrategy>().is_err());
    }

    #[test]
    fn normalize_wraps_longitude() {
        let c = normalize(90.5, 181.0);
        assert_eq!(c.latitude, 90.0);
        assert!((c.longitude + 179.0).abs() < 1e-9);
    }
}
