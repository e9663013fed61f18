//! Runtime configuration loaded from environment variables.
use std::env;

use geo_fuzz::{FuzzRadiusKm, FuzzStrategy};

use crate::events::DEFAULT_CAPACITY;

/// Radius used when the form's `fuzzy` field is blank.
pub const DEFAULT_FUZZ_KM: f64 = 2.0;

pub const DEFAULT_FORM_ACTION: &str = "/me/locate/";

#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub geo: GeoConfig,
    /// Buffered events per topic.
    pub event_bus_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            geo: GeoConfig::default(),
            event_bus_capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Geolocation submission settings.
#[derive(Clone, Debug)]
pub struct GeoConfig {
    pub default_fuzz_km: FuzzRadiusKm,
    pub strategy: FuzzStrategy,
    /// URL the location form posts to.
    pub form_action: String,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            default_fuzz_km: FuzzRadiusKm::new(DEFAULT_FUZZ_KM).unwrap_or(FuzzRadiusKm::ZERO),
            strategy: FuzzStrategy::default(),
            form_action: DEFAULT_FORM_ACTION.to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Defaults overridden by any set and parseable environment variable.
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(radius) = read_env::<FuzzRadiusKm>("GEO_DEFAULT_FUZZY_KM") {
            config.geo.default_fuzz_km = radius;
        }
        if let Some(strategy) = read_env::<FuzzStrategy>("GEO_FUZZ_STRATEGY") {
            config.geo.strategy = strategy;
        }
        if let Ok(action) = env::var("GEO_FORM_ACTION")
            && !action.trim().is_empty()
        {
            config.geo.form_action = action;
        }

        if let Some(capacity) = read_env::<usize>("EVENT_BUS_CAPACITY") {
            config.event_bus_capacity = capacity.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let raw = env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable environment variable");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RuntimeConfig::default();
        assert_eq!(config.geo.default_fuzz_km.km(), 2.0);
        assert_eq!(config.geo.strategy, FuzzStrategy::BoundingBox);
        assert_eq!(config.geo.form_action, "/me/locate/");
        assert_eq!(config.event_bus_capacity, 100);
    }
}
