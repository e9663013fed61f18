//! Positions, validated coordinates and fuzz radii.
use std::fmt;
use std::str::FromStr;

use crate::FuzzError;

/// A reading as reported by a location service, before validation.
///
/// Either axis may be missing. A value of exactly `0.0` is treated as missing
/// as well: services that fail silently report the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionReading {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl PositionReading {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    /// Validates the reading into a [`Coordinate`].
    pub fn validate(self) -> Result<Coordinate, FuzzError> {
        let latitude = present(self.latitude).ok_or(FuzzError::MissingLatitude)?;
        let longitude = present(self.longitude).ok_or(FuzzError::MissingLongitude)?;
        Coordinate::new(latitude, longitude)
    }
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| !v.is_nan() && *v != 0.0)
}

impl From<Coordinate> for PositionReading {
    fn from(coordinate: Coordinate) -> Self {
        Self::new(coordinate.latitude, coordinate.longitude)
    }
}

/// A latitude/longitude pair in degrees, within the valid range.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const MAX_LATITUDE: f64 = 90.0;
    pub const MAX_LONGITUDE: f64 = 180.0;

    pub fn new(latitude: f64, longitude: f64) -> Result<Self, FuzzError> {
        let in_range = latitude.is_finite()
            && longitude.is_finite()
            && latitude.abs() <= Self::MAX_LATITUDE
            && longitude.abs() <= Self::MAX_LONGITUDE;
        if !in_range {
            return Err(FuzzError::OutOfRange {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Fuzz radius in kilometers. Always finite and non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FuzzRadiusKm(f64);

impl FuzzRadiusKm {
    pub const ZERO: Self = Self(0.0);

    pub fn new(km: f64) -> Result<Self, FuzzError> {
        if km.is_finite() && km >= 0.0 {
            Ok(Self(km))
        } else {
            Err(FuzzError::InvalidRadius {
                value: km.to_string(),
            })
        }
    }

    pub fn km(self) -> f64 {
        self.0
    }

    pub fn meters(self) -> f64 {
        self.0 * 1000.0
    }
}

impl FromStr for FuzzRadiusKm {
    type Err = FuzzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let km = s.trim().parse::<f64>().map_err(|_| FuzzError::InvalidRadius {
            value: s.to_string(),
        })?;
        Self::new(km).map_err(|_| FuzzError::InvalidRadius {
            value: s.to_string(),
        })
    }
}

impl fmt::Display for FuzzRadiusKm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km", self.0)
    }
}
