//! The page: light tree, upgraded component instances and click dispatch.
use std::cell::{Ref, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::component::{ComponentInstance, ComponentRegistry, WidgetKind, detach_placeholder};
use crate::dom::{
    Element, HostId, HostRenderer, Node, is_void, write_end_tag, write_nodes, write_start_tag,
};
use crate::error::{DocumentError, Result};
use crate::interaction::{
    ClickOutcome, ClickTarget, DismissalListener, MenuState, MenuTransition,
};

/// Owns every component instance on the page.
///
/// Custom tags are upgraded when nodes are loaded. Upgrading is post-order,
/// so a widget nested in another widget's light content is already a host
/// placeholder when its parent redistributes children, and moves along with
/// them.
#[derive(Debug)]
pub struct Document {
    registry: ComponentRegistry,
    nodes: Vec<Node>,
    instances: BTreeMap<HostId, Rc<RefCell<ComponentInstance>>>,
    dismissal: DismissalListener,
    next_id: u32,
}

impl Document {
    pub fn new(registry: ComponentRegistry) -> Self {
        Self {
            registry,
            nodes: Vec::new(),
            instances: BTreeMap::new(),
            dismissal: DismissalListener::new(),
            next_id: 0,
        }
    }

    /// Document with every builtin widget registered.
    pub fn with_builtin_widgets() -> Self {
        Self::new(ComponentRegistry::with_builtin_widgets())
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Appends `nodes` to the page, upgrading every registered custom tag.
    ///
    /// Returns the ids of the created instances in upgrade order.
    pub fn load(&mut self, nodes: impl IntoIterator<Item = Node>) -> Vec<HostId> {
        let mut created = Vec::new();
        for node in nodes {
            let node = self.upgrade(node, &mut created);
            self.nodes.push(node);
        }
        tracing::info!(count = created.len(), "components upgraded");
        created
    }

    fn upgrade(&mut self, node: Node, created: &mut Vec<HostId>) -> Node {
        let Node::Element(mut element) = node else {
            return node;
        };

        for child in element.take_children() {
            let child = self.upgrade(child, created);
            element.append_child(child);
        }

        let Some(definition) = self.registry.lookup(&element).cloned() else {
            return Node::Element(element);
        };

        let id = HostId(self.next_id);
        self.next_id += 1;

        let instance = Rc::new(RefCell::new(ComponentInstance::new(id, &definition, element)));
        if definition.kind() == WidgetKind::Menu {
            self.dismissal.subscribe(&instance);
        }
        self.instances.insert(id, instance);
        created.push(id);
        Node::Host(id)
    }

    /// Light-tree nodes at the top level of the page.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn host_ids(&self) -> impl Iterator<Item = HostId> + '_ {
        self.instances.keys().copied()
    }

    pub fn contains(&self, id: HostId) -> bool {
        self.instances.contains_key(&id)
    }

    pub fn instance(&self, id: HostId) -> Option<Ref<'_, ComponentInstance>> {
        self.instances.get(&id).map(|instance| instance.borrow())
    }

    /// Ids of live instances registered under `tag`.
    pub fn hosts_by_tag(&self, tag: &str) -> Vec<HostId> {
        self.instances
            .iter()
            .filter(|(_, instance)| instance.borrow().tag() == tag)
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn menu_state(&self, id: HostId) -> Option<MenuState> {
        self.instances.get(&id)?.borrow().menu_state()
    }

    /// Number of menus the page-wide listener still tracks.
    pub fn live_menus(&self) -> usize {
        self.dismissal.live_count()
    }

    /// Finds an element by id in the light tree.
    ///
    /// Encapsulated scopes are never searched.
    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.nodes
            .iter()
            .filter_map(Node::as_element)
            .find_map(|el| el.element_by_id(id))
    }

    /// Dispatches one click.
    ///
    /// The clicked menu's own activator handler runs first and stops
    /// propagation for that menu, so the page-wide listener that runs next
    /// closes every other open menu but never the one just toggled. A click
    /// inside a host is not "outside" for that host.
    pub fn click(&mut self, target: ClickTarget) -> Result<ClickOutcome> {
        let mut outcome = ClickOutcome::default();

        let keep = match target {
            ClickTarget::Activator(id) => {
                let instance = self
                    .instances
                    .get(&id)
                    .ok_or(DocumentError::UnknownHost(id))?;
                outcome.toggled = instance
                    .borrow_mut()
                    .apply_menu(MenuTransition::ActivatorClicked)
                    .map(|state| (id, state));
                Some(id)
            }
            ClickTarget::Within(id) => {
                if !self.instances.contains_key(&id) {
                    return Err(DocumentError::UnknownHost(id));
                }
                Some(id)
            }
            ClickTarget::Outside => None,
        };

        outcome.dismissed = self.dismissal.dispatch(keep);
        tracing::debug!(?target, ?outcome, "click dispatched");
        Ok(outcome)
    }

    /// Removes a host and every host nested inside it.
    ///
    /// Dropping the instance is what unsubscribes a menu from the page-wide
    /// listener.
    pub fn remove(&mut self, id: HostId) -> Result<Vec<HostId>> {
        if !self.instances.contains_key(&id) {
            return Err(DocumentError::UnknownHost(id));
        }

        if !detach_placeholder(&mut self.nodes, id) {
            for instance in self.instances.values() {
                if instance.borrow_mut().detach_host(id) {
                    break;
                }
            }
        }

        let mut removed = Vec::new();
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(instance) = self.instances.remove(&next) {
                pending.extend(instance.borrow().nested_hosts());
                removed.push(next);
            }
        }

        tracing::debug!(?removed, "hosts removed");
        Ok(removed)
    }

    /// Serializes the page, writing each encapsulated scope as declarative
    /// shadow DOM.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_nodes(&self.nodes, self, &mut out);
        out
    }
}

impl HostRenderer for Document {
    fn render_host(&self, id: HostId, out: &mut String) {
        let Some(instance) = self.instances.get(&id) else {
            return;
        };
        let instance = instance.borrow();
        let host = instance.host();

        write_start_tag(host, out);
        if is_void(host.tag()) {
            return;
        }
        if let Some(root) = instance.shadow_root() {
            out.push_str("<template shadowrootmode=\"open\">");
            write_nodes(root.nodes(), self, out);
            out.push_str("</template>");
        }
        write_nodes(host.children(), self, out);
        write_end_tag(host, out);
    }
}
