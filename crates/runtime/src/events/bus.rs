//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use strum::{Display, EnumIter};
use tokio::sync::broadcast;

use super::types::{GeolocationEvent, MenuEvent, RenderEvent};

/// Default number of buffered events per topic.
pub const DEFAULT_CAPACITY: usize = 100;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Topic {
    /// Dropdown open/close
    Menu,
    /// Geolocation submission attempts
    Geolocation,
    /// Component upgrades and removals
    Render,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Menu(MenuEvent),
    Geolocation(GeolocationEvent),
    Render(RenderEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Menu(_) => Topic::Menu,
            Event::Geolocation(_) => Topic::Geolocation,
            Event::Render(_) => Topic::Render,
        }
    }
}

impl From<MenuEvent> for Event {
    fn from(event: MenuEvent) -> Self {
        Event::Menu(event)
    }
}

impl From<GeolocationEvent> for Event {
    fn from(event: GeolocationEvent) -> Self {
        Event::Geolocation(event)
    }
}

impl From<RenderEvent> for Event {
    fn from(event: RenderEvent) -> Self {
        Event::Render(event)
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Channels for every topic are created up front and
/// never change, so cloning the bus shares them.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<HashMap<Topic, broadcast::Sender<Event>>>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let channels = <Topic as strum::IntoEnumIterator>::iter()
            .map(|topic| (topic, broadcast::channel(capacity).0))
            .collect();

        Self {
            channels: Arc::new(channels),
        }
    }

    /// Publish an event to its corresponding topic
    ///
    /// Publishing is best-effort: with no subscribers the event is dropped.
    pub fn publish(&self, event: impl Into<Event>) {
        let event = event.into();
        let topic = event.topic();

        if let Some(tx) = self.channels.get(&topic)
            && tx.send(event).is_err()
        {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        match self.channels.get(&topic) {
            Some(tx) => tx.subscribe(),
            // Every topic is created in `with_capacity`; a detached receiver
            // simply never yields.
            None => broadcast::channel(1).1,
        }
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }

    /// Number of live receivers on `topic`.
    pub fn receiver_count(&self, topic: Topic) -> usize {
        self.channels
            .get(&topic)
            .map(broadcast::Sender::receiver_count)
            .unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("topics", &self.channels.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use widget_core::HostId;

    #[tokio::test]
    async fn subscribers_only_see_their_topic() {
        let bus = EventBus::with_capacity(8);
        let mut menu_rx = bus.subscribe(Topic::Menu);
        let mut geo_rx = bus.subscribe(Topic::Geolocation);

        bus.publish(MenuEvent::Opened { host: HostId(1) });
        bus.publish(GeolocationEvent::Requested);

        assert_eq!(
            menu_rx.recv().await.expect("menu event"),
            Event::Menu(MenuEvent::Opened { host: HostId(1) })
        );
        assert_eq!(
            geo_rx.recv().await.expect("geolocation event"),
            Event::Geolocation(GeolocationEvent::Requested)
        );
        assert!(menu_rx.try_recv().is_err());
    }

    #[test]
    fn publish_without_subscribers_is_dropped() {
        let bus = EventBus::new();
        bus.publish(GeolocationEvent::Requested);
        assert_eq!(bus.receiver_count(Topic::Geolocation), 0);
    }

    #[test]
    fn clones_share_channels() {
        let bus = EventBus::new();
        let _rx = bus.subscribe(Topic::Render);
        assert_eq!(bus.clone().receiver_count(Topic::Render), 1);
    }
}
