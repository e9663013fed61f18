//! Server-side reading of a submitted location form.
use geo_fuzz::{Coordinate, FuzzError, PositionReading};
use serde::{Deserialize, Serialize};

use super::form::{FUZZY_FIELD, LAT_FIELD, LNG_FIELD};
use super::FormSubmission;
use crate::config::DEFAULT_FUZZ_KM;

/// The values a profile stores from a location POST.
///
/// Parsing is lenient: anything that is not a finite number reads as `0.0`.
/// A missing `fuzzy` field reads as the default radius, missing coordinates
/// as `0.0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationUpdate {
    pub fuzzy: f64,
    pub lat: f64,
    pub lng: f64,
}

impl LocationUpdate {
    pub fn from_fields<'a>(fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut update = Self {
            fuzzy: DEFAULT_FUZZ_KM,
            lat: 0.0,
            lng: 0.0,
        };
        for (name, value) in fields {
            match name {
                FUZZY_FIELD => update.fuzzy = force_float(value),
                LAT_FIELD => update.lat = force_float(value),
                LNG_FIELD => update.lng = force_float(value),
                _ => {}
            }
        }
        update
    }

    pub fn from_submission(submission: &FormSubmission) -> Self {
        Self::from_fields(
            submission
                .fields
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str())),
        )
    }

    /// The stored position, if it is one.
    pub fn coordinate(&self) -> Result<Coordinate, FuzzError> {
        PositionReading::new(self.lat, self.lng).validate()
    }
}

fn force_float(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let update = LocationUpdate::from_fields(std::iter::empty());
        assert_eq!(
            update,
            LocationUpdate {
                fuzzy: 2.0,
                lat: 0.0,
                lng: 0.0
            }
        );
        assert_eq!(update.coordinate(), Err(FuzzError::MissingLatitude));
    }

    #[test]
    fn garbage_reads_as_zero() {
        let update = LocationUpdate::from_fields([
            ("fuzzy", "lots"),
            ("lat", "52.52"),
            ("lng", "NaN"),
            ("csrfmiddlewaretoken", "abc"),
        ]);
        assert_eq!(update.fuzzy, 0.0);
        assert_eq!(update.lat, 52.52);
        assert_eq!(update.lng, 0.0);
    }
}
