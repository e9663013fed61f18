//! Event types for different topics.

use geo_fuzz::{Coordinate, FuzzStrategy};
use serde::{Deserialize, Serialize};
use widget_core::{HostId, WidgetKind};

/// Dropdown menu state changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MenuEvent {
    /// The menu's activator opened it.
    Opened { host: HostId },

    /// The menu closed, either through its own activator or because the
    /// page-wide listener dismissed it.
    Closed { host: HostId, dismissed: bool },
}

/// Component lifecycle on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderEvent {
    /// A custom tag was upgraded and rendered.
    Upgraded { host: HostId, kind: WidgetKind },

    /// Hosts removed from the page, nested hosts included.
    Removed { hosts: Vec<HostId> },
}

/// Progress of one geolocation submission attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GeolocationEvent {
    /// A position was requested from the location service.
    Requested,

    /// The fuzzed position was written to the form and submitted.
    Submitted {
        fuzzed: Coordinate,
        radius_km: f64,
        strategy: FuzzStrategy,
        action: String,
    },

    /// The attempt was aborted; nothing was submitted.
    Failed { reason: String },
}
