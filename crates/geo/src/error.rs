use thiserror::Error;

/// Reasons a position cannot be fuzzed.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum FuzzError {
    #[error("no valid latitude found")]
    MissingLatitude,

    #[error("no valid longitude found")]
    MissingLongitude,

    #[error("coordinate out of range: latitude {latitude}, longitude {longitude}")]
    OutOfRange { latitude: f64, longitude: f64 },

    #[error("invalid fuzz radius '{value}': expected a non-negative number of kilometers")]
    InvalidRadius { value: String },
}
