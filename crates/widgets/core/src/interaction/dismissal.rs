//! Page-wide "click anywhere" dismissal.
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::component::ComponentInstance;
use crate::dom::HostId;
use crate::interaction::MenuTransition;

/// The single document-level click subscriber.
///
/// Holds non-owning references to every live menu instance. Menus never
/// reference each other; mutual exclusion comes from this listener closing
/// every menu except the one the click belongs to. An instance dropped by the
/// document simply stops upgrading and is pruned on the next dispatch.
#[derive(Debug, Default)]
pub struct DismissalListener {
    subscribers: Vec<Weak<RefCell<ComponentInstance>>>,
}

impl DismissalListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, instance: &Rc<RefCell<ComponentInstance>>) {
        self.subscribers.push(Rc::downgrade(instance));
    }

    /// Number of menu instances still alive.
    pub fn live_count(&self) -> usize {
        self.subscribers
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    /// Closes every live menu except `keep` and returns the ones that were
    /// open.
    pub fn dispatch(&mut self, keep: Option<HostId>) -> Vec<HostId> {
        self.subscribers.retain(|weak| weak.strong_count() > 0);

        let mut dismissed = Vec::new();
        for instance in self.subscribers.iter().filter_map(Weak::upgrade) {
            let mut instance = instance.borrow_mut();
            if Some(instance.id()) == keep {
                continue;
            }
            if instance.apply_menu(MenuTransition::OutsideClick).is_some() {
                dismissed.push(instance.id());
            }
        }

        if !dismissed.is_empty() {
            tracing::debug!(?dismissed, "menus dismissed");
        }
        dismissed
    }
}
