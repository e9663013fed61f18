//! A loaded page publishing its component and menu activity.
use widget_core::{
    ClickOutcome, ClickTarget, ComponentRegistry, Document, HostId, MenuState, Node,
};

use crate::Result;
use crate::events::{EventBus, MenuEvent, RenderEvent};

/// Wraps a [`Document`] and reports what happens on it to the event bus.
///
/// Pages live on a single thread; only the bus is shared.
#[derive(Debug)]
pub struct Page {
    document: Document,
    events: EventBus,
}

impl Page {
    pub fn new(registry: ComponentRegistry, events: EventBus) -> Self {
        Self {
            document: Document::new(registry),
            events,
        }
    }

    pub fn with_builtin_widgets(events: EventBus) -> Self {
        Self::new(ComponentRegistry::with_builtin_widgets(), events)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Loads server-rendered markup and upgrades every registered tag.
    pub fn load(&mut self, nodes: impl IntoIterator<Item = Node>) -> Vec<HostId> {
        let ids = self.document.load(nodes);
        for &host in &ids {
            if let Some(instance) = self.document.instance(host) {
                self.events.publish(RenderEvent::Upgraded {
                    host,
                    kind: instance.kind(),
                });
            }
        }
        ids
    }

    pub fn click(&mut self, target: ClickTarget) -> Result<ClickOutcome> {
        let outcome = self.document.click(target)?;

        if let Some((host, state)) = outcome.toggled {
            self.events.publish(match state {
                MenuState::Open => MenuEvent::Opened { host },
                MenuState::Closed => MenuEvent::Closed {
                    host,
                    dismissed: false,
                },
            });
        }
        for &host in &outcome.dismissed {
            self.events.publish(MenuEvent::Closed {
                host,
                dismissed: true,
            });
        }

        Ok(outcome)
    }

    /// Removes a host (and its nested hosts) from the page.
    pub fn remove(&mut self, host: HostId) -> Result<Vec<HostId>> {
        let hosts = self.document.remove(host)?;
        self.events.publish(RenderEvent::Removed {
            hosts: hosts.clone(),
        });
        Ok(hosts)
    }

    pub fn menu_state(&self, host: HostId) -> Option<MenuState> {
        self.document.menu_state(host)
    }

    pub fn to_html(&self) -> String {
        self.document.to_html()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{Event, Topic};
    use widget_core::{Element, WidgetKind};

    #[tokio::test]
    async fn menu_clicks_are_published() {
        let events = EventBus::new();
        let mut rx = events.subscribe(Topic::Menu);
        let mut page = Page::with_builtin_widgets(events);

        let ids = page.load([
            Node::from(Element::new("c14l-menu")),
            Node::from(Element::new("c14l-menu")),
        ]);
        page.click(ClickTarget::Activator(ids[0])).expect("open first");
        page.click(ClickTarget::Activator(ids[1])).expect("open second");

        let mut received = Vec::new();
        while let Ok(event) = rx.try_recv() {
            received.push(event);
        }
        assert_eq!(
            received,
            vec![
                Event::Menu(MenuEvent::Opened { host: ids[0] }),
                Event::Menu(MenuEvent::Opened { host: ids[1] }),
                Event::Menu(MenuEvent::Closed {
                    host: ids[0],
                    dismissed: true
                }),
            ]
        );
    }

    #[tokio::test]
    async fn upgrades_and_removals_are_published() {
        let events = EventBus::new();
        let mut rx = events.subscribe(Topic::Render);
        let mut page = Page::with_builtin_widgets(events);

        let ids = page.load([Node::from(
            Element::new("c14l-userhead").with_attr("pics", "a.jpg"),
        )]);
        page.remove(ids[0]).expect("remove");

        assert_eq!(
            rx.recv().await.expect("upgrade"),
            Event::Render(RenderEvent::Upgraded {
                host: ids[0],
                kind: WidgetKind::UserHead
            })
        );
        assert_eq!(
            rx.recv().await.expect("removal"),
            Event::Render(RenderEvent::Removed { hosts: ids })
        );
    }
}
