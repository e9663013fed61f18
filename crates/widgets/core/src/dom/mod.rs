//! Minimal element tree used for light content, templates and shadow roots.
//!
//! The tree is deliberately small: elements with ordered attributes, text
//! nodes, and [`Node::Host`] placeholders that stand in for an upgraded custom
//! tag whose [`ComponentInstance`](crate::ComponentInstance) is owned by the
//! [`Document`](crate::Document).
//!
//! Lookups such as [`Element::element_by_id`] only walk an element's own
//! children. A host placeholder is opaque, so nothing here can reach into
//! another component's encapsulated scope.
mod html;

pub use html::{HostRenderer, escape_attribute, escape_text, to_html};
pub(crate) use html::{is_void, write_end_tag, write_nodes, write_start_tag};

/// Identifier of an upgraded custom tag within a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostId(pub u32);

impl std::fmt::Display for HostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "host#{}", self.0)
    }
}

/// A node in the element tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Placeholder for an upgraded custom tag owned by the document.
    Host(HostId),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Concatenated text of this node and its descendants.
    ///
    /// Host placeholders contribute nothing: their content is encapsulated.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            Node::Host(_) => {}
        }
    }

    /// Host ids referenced anywhere in this subtree, in document order.
    pub fn host_ids(&self) -> Vec<HostId> {
        let mut ids = Vec::new();
        self.collect_hosts(&mut ids);
        ids
    }

    pub(crate) fn collect_hosts(&self, ids: &mut Vec<HostId>) {
        match self {
            Node::Host(id) => ids.push(*id),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_hosts(ids);
                }
            }
            Node::Text(_) => {}
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// An element with a lowercase tag name, ordered attributes and children.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Node::Text(text.into()))
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Anchors are the only elements the header decorates.
    pub fn is_hyperlink(&self) -> bool {
        self.tag == "a"
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.get_attribute(name).is_some()
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into().to_ascii_lowercase();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let index = self
            .attributes
            .iter()
            .position(|(key, _)| key.eq_ignore_ascii_case(name))?;
        Some(self.attributes.remove(index).1)
    }

    pub fn id(&self) -> Option<&str> {
        self.get_attribute("id")
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    pub fn append_child(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    pub fn prepend_child(&mut self, node: impl Into<Node>) {
        self.children.insert(0, node.into());
    }

    /// Removes and returns every child, leaving the element empty.
    pub fn take_children(&mut self) -> Vec<Node> {
        std::mem::take(&mut self.children)
    }

    /// Replaces all children with a single text node.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children.clear();
        self.children.push(Node::Text(text.into()));
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    /// Element children only, skipping text and host placeholders.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Finds this element or a descendant with the given `id`.
    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.child_elements()
            .find_map(|child| child.element_by_id(id))
    }

    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children
            .iter_mut()
            .filter_map(Node::as_element_mut)
            .find_map(|child| child.element_by_id_mut(id))
    }

    /// First descendant (excluding self) with the given tag, depth first.
    pub fn first_by_tag(&self, tag: &str) -> Option<&Element> {
        self.child_elements().find_map(|child| {
            if child.tag == tag {
                Some(child)
            } else {
                child.first_by_tag(tag)
            }
        })
    }

    pub fn first_by_tag_mut(&mut self, tag: &str) -> Option<&mut Element> {
        for child in self.children.iter_mut().filter_map(Node::as_element_mut) {
            if child.tag == tag {
                return Some(child);
            }
            if let Some(found) = child.first_by_tag_mut(tag) {
                return Some(found);
            }
        }
        None
    }

    /// First descendant carrying `class`, depth first.
    pub fn first_by_class_mut(&mut self, class: &str) -> Option<&mut Element> {
        for child in self.children.iter_mut().filter_map(Node::as_element_mut) {
            if child.has_class(class) {
                return Some(child);
            }
            if let Some(found) = child.first_by_class_mut(class) {
                return Some(found);
            }
        }
        None
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.get_attribute("class")
            .unwrap_or_default()
            .split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|existing| existing == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let mut classes: Vec<&str> = self.classes().collect();
        classes.push(class);
        let joined = classes.join(" ");
        self.set_attribute("class", joined);
    }

    pub fn remove_class(&mut self, class: &str) {
        if !self.has_class(class) {
            return;
        }
        let remaining: Vec<&str> = self.classes().filter(|c| *c != class).collect();
        if remaining.is_empty() {
            self.remove_attribute("class");
        } else {
            let joined = remaining.join(" ");
            self.set_attribute("class", joined);
        }
    }

    /// Toggles `class` and returns whether it is now present.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    /// Reads one inline style declaration.
    pub fn style(&self, property: &str) -> Option<&str> {
        self.get_attribute("style")?
            .split(';')
            .filter_map(|decl| decl.split_once(':'))
            .find(|(name, _)| name.trim() == property)
            .map(|(_, value)| value.trim())
    }

    /// Sets one inline style declaration, keeping the others in order.
    pub fn set_style(&mut self, property: &str, value: &str) {
        let mut declarations: Vec<(String, String)> = self
            .get_attribute("style")
            .unwrap_or_default()
            .split(';')
            .filter_map(|decl| decl.split_once(':'))
            .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
            .collect();

        match declarations.iter_mut().find(|(name, _)| name == property) {
            Some((_, existing)) => *existing = value.to_string(),
            None => declarations.push((property.to_string(), value.to_string())),
        }

        let style = declarations
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("; ");
        self.set_attribute("style", style);
    }

    pub fn to_html(&self) -> String {
        let node = Node::Element(self.clone());
        to_html(std::slice::from_ref(&node), &())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_names_are_case_insensitive() {
        let mut el = Element::new("A").with_attr("HREF", "/x");
        assert_eq!(el.tag(), "a");
        assert_eq!(el.get_attribute("href"), Some("/x"));
        el.set_attribute("href", "/y");
        assert_eq!(el.attributes().count(), 1);
        assert_eq!(el.get_attribute("Href"), Some("/y"));
    }

    #[test]
    fn class_list_toggles() {
        let mut ul = Element::new("ul").with_attr("id", "ul");
        assert!(ul.toggle_class("isopen"));
        assert!(ul.has_class("isopen"));
        assert!(!ul.toggle_class("isopen"));
        assert!(!ul.has_class("isopen"));
        assert_eq!(ul.get_attribute("class"), None);
    }

    #[test]
    fn element_by_id_does_not_cross_hosts() {
        let tree = Element::new("div")
            .with_child(Node::Host(HostId(1)))
            .with_child(Element::new("span").with_attr("id", "inner"));
        assert!(tree.element_by_id("inner").is_some());
        assert!(tree.element_by_id("missing").is_none());
        assert_eq!(Node::from(tree).host_ids(), vec![HostId(1)]);
    }

    #[test]
    fn set_style_keeps_declaration_order() {
        let mut span = Element::new("span");
        span.set_style("color", "white");
        span.set_style("padding", "0 0.5rem");
        span.set_style("color", "red");
        assert_eq!(
            span.get_attribute("style"),
            Some("color: red; padding: 0 0.5rem")
        );
        assert_eq!(span.style("padding"), Some("0 0.5rem"));
    }

    #[test]
    fn text_content_skips_hosts() {
        let el = Element::new("p")
            .with_text("a")
            .with_child(Node::Host(HostId(7)))
            .with_child(Element::new("b").with_text("c"));
        assert_eq!(el.text_content(), "ac");
    }
}
