//! A rendered occurrence of a custom tag.
use crate::component::{AttributeSnapshot, ComponentDefinition, Fragment, ShadowRoot, WidgetKind};
use crate::dom::{Element, HostId, Node};
use crate::error::ShadowError;
use crate::interaction::{MenuController, MenuState, MenuTransition};
use crate::widgets::menu;

/// One upgraded custom tag.
///
/// Construction runs exactly once: the attribute snapshot is taken, the light
/// content is consumed and cleared from the host, the widget renders, and only
/// then is the encapsulated scope attached. No partially rendered instance is
/// ever observable.
#[derive(Debug)]
pub struct ComponentInstance {
    id: HostId,
    tag: String,
    kind: WidgetKind,
    host: Element,
    attributes: AttributeSnapshot,
    shadow: Option<ShadowRoot>,
    menu: Option<MenuController>,
}

impl ComponentInstance {
    /// Upgrades `host` using `definition`.
    pub fn new(id: HostId, definition: &ComponentDefinition, mut host: Element) -> Self {
        let attributes = AttributeSnapshot::capture(&host);
        let children = host.take_children();
        let rendered = definition.render(&attributes, children);

        let kind = definition.kind();
        let mut instance = Self {
            id,
            tag: definition.tag().to_string(),
            kind,
            host,
            attributes,
            shadow: None,
            menu: (kind == WidgetKind::Menu).then(MenuController::new),
        };

        for node in rendered.light {
            instance.host.append_child(node);
        }
        if let Some(fragment) = rendered.shadow
            && let Err(err) = instance.attach_shadow(fragment)
        {
            tracing::warn!(%id, error = %err, "shadow root not attached");
        }

        tracing::debug!(%id, tag = %instance.tag, kind = %kind, "component upgraded");
        instance
    }

    /// Attaches the encapsulated scope. Fails if one is already attached.
    pub fn attach_shadow(&mut self, fragment: Fragment) -> Result<(), ShadowError> {
        ShadowRoot::attach(&mut self.shadow, &self.tag, fragment)
    }

    pub fn id(&self) -> HostId {
        self.id
    }

    /// Registered tag name (for customized built-ins, the `is` value).
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    /// The host element after upgrade.
    ///
    /// Hosts with an encapsulated scope have no light children left; hosts
    /// that render in place carry their rendered content here.
    pub fn host(&self) -> &Element {
        &self.host
    }

    pub fn attributes(&self) -> &AttributeSnapshot {
        &self.attributes
    }

    pub fn shadow_root(&self) -> Option<&ShadowRoot> {
        self.shadow.as_ref()
    }

    pub fn menu_state(&self) -> Option<MenuState> {
        self.menu.as_ref().map(MenuController::state)
    }

    pub fn is_menu(&self) -> bool {
        self.menu.is_some()
    }

    /// Drives the menu controller and mirrors the new state into the
    /// rendered list's visibility class.
    ///
    /// Returns the new state when it changed; `None` for no-ops and for
    /// instances that are not menus.
    pub(crate) fn apply_menu(&mut self, transition: MenuTransition) -> Option<MenuState> {
        let controller = self.menu.as_mut()?;
        if !controller.apply(transition) {
            return None;
        }
        let state = controller.state();

        if let Some(list) = self
            .shadow
            .as_mut()
            .and_then(|root| root.element_by_id_mut(menu::LIST_ID))
        {
            if state.is_open() {
                list.add_class(menu::OPEN_CLASS);
            } else {
                list.remove_class(menu::OPEN_CLASS);
            }
        }

        tracing::trace!(id = %self.id, %transition, %state, "menu transition");
        Some(state)
    }

    /// Host placeholders nested in this instance's light content or scope.
    pub fn nested_hosts(&self) -> Vec<HostId> {
        let mut ids = Vec::new();
        for node in self.host.children() {
            node.collect_hosts(&mut ids);
        }
        if let Some(root) = &self.shadow {
            for node in root.nodes() {
                node.collect_hosts(&mut ids);
            }
        }
        ids
    }

    /// Removes the placeholder for `id` from this instance's trees.
    pub(crate) fn detach_host(&mut self, id: HostId) -> bool {
        if detach_placeholder(self.host.children_mut(), id) {
            return true;
        }
        match self.shadow.as_mut() {
            Some(root) => detach_placeholder(root.nodes_mut(), id),
            None => false,
        }
    }
}

/// Removes the first `Node::Host(id)` found in `nodes`, searching depth first.
pub(crate) fn detach_placeholder(nodes: &mut Vec<Node>, id: HostId) -> bool {
    if let Some(index) = nodes.iter().position(|node| *node == Node::Host(id)) {
        nodes.remove(index);
        return true;
    }
    nodes
        .iter_mut()
        .filter_map(Node::as_element_mut)
        .any(|element| detach_placeholder(element.children_mut(), id))
}
