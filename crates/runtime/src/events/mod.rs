//! Topic-based event bus for page and geolocation events.
//!
//! Events are published to specific topics, and consumers subscribe only to
//! the topics they need.

mod bus;
mod types;

pub use bus::{DEFAULT_CAPACITY, Event, EventBus, Topic};
pub use types::{GeolocationEvent, MenuEvent, RenderEvent};
