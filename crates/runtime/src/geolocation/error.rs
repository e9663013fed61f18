use geo_fuzz::FuzzError;
use thiserror::Error;

/// Failures reported by a location service.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("User denied Geolocation")]
    PermissionDenied,

    #[error("position unavailable: {0}")]
    Unavailable(String),
}

/// Failure to hand the form to the server.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("form submission to '{action}' failed: {reason}")]
pub struct SubmitError {
    pub action: String,
    pub reason: String,
}

/// Why a geolocation submission attempt was aborted.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GeolocationError {
    #[error("geolocation lookup is not supported")]
    Unsupported,

    #[error(transparent)]
    Position(#[from] PositionError),

    #[error(transparent)]
    Fuzz(#[from] FuzzError),

    #[error(transparent)]
    Submit(#[from] SubmitError),
}
