//! Unified error type surfaced by the runtime API.
//!
//! Wraps document and geolocation failures so clients can bubble them up with
//! consistent context.
use thiserror::Error;
use widget_core::DocumentError;

pub use crate::geolocation::{GeolocationError, PositionError, SubmitError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Geolocation(#[from] GeolocationError),
}
