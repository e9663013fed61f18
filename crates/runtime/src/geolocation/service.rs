//! The platform's single-shot location lookup.
use async_trait::async_trait;
use geo_fuzz::PositionReading;

use super::PositionError;

/// Source of the device's current position.
///
/// Implementations may suspend indefinitely (for example while a permission
/// prompt is open); callers impose no timeout.
#[async_trait]
pub trait LocationService: Send + Sync {
    /// Whether the platform offers location lookup at all.
    fn is_supported(&self) -> bool {
        true
    }

    /// One position reading. Not a continuous watch.
    async fn current_position(&self) -> Result<PositionReading, PositionError>;
}

/// A service that always reports the same outcome.
///
/// Used by the command line client and for testing fixtures.
#[derive(Clone, Debug)]
pub struct FixedLocation {
    outcome: Result<PositionReading, PositionError>,
}

impl FixedLocation {
    pub fn new(reading: PositionReading) -> Self {
        Self {
            outcome: Ok(reading),
        }
    }

    pub fn failing(error: PositionError) -> Self {
        Self {
            outcome: Err(error),
        }
    }
}

#[async_trait]
impl LocationService for FixedLocation {
    async fn current_position(&self) -> Result<PositionReading, PositionError> {
        self.outcome.clone()
    }
}

/// A platform without location support.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoLocationSupport;

#[async_trait]
impl LocationService for NoLocationSupport {
    fn is_supported(&self) -> bool {
        false
    }

    async fn current_position(&self) -> Result<PositionReading, PositionError> {
        Err(PositionError::Unavailable("location lookup unsupported".into()))
    }
}
