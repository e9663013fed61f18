//! Static templates cloned into every component instance.
use crate::dom::{Element, Node};

/// Static markup plus style, created once per component definition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Template {
    style: Option<String>,
    content: Vec<Node>,
}

impl Template {
    pub fn new(content: impl IntoIterator<Item = Node>) -> Self {
        Self {
            style: None,
            content: content.into_iter().collect(),
        }
    }

    /// Template with a single root element.
    pub fn element(root: Element) -> Self {
        Self::new([Node::Element(root)])
    }

    pub fn with_style(mut self, css: impl Into<String>) -> Self {
        self.style = Some(css.into());
        self
    }

    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    /// Produces a fresh deep copy of the template content.
    ///
    /// The style sheet, when present, becomes the first node of the fragment.
    pub fn instantiate(&self) -> Fragment {
        let mut nodes = Vec::with_capacity(self.content.len() + 1);
        if let Some(css) = &self.style {
            nodes.push(Node::Element(Element::new("style").with_text(css.clone())));
        }
        nodes.extend(self.content.iter().cloned());
        Fragment { nodes }
    }
}

/// An instantiated template, not yet attached anywhere.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fragment {
    nodes: Vec<Node>,
}

impl Fragment {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.nodes
            .iter()
            .filter_map(Node::as_element)
            .find_map(|el| el.element_by_id(id))
    }

    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.nodes
            .iter_mut()
            .filter_map(Node::as_element_mut)
            .find_map(|el| el.element_by_id_mut(id))
    }

    /// The first element that is not the style sheet.
    pub fn into_root_element(self) -> Option<Element> {
        self.nodes.into_iter().find_map(|node| match node {
            Node::Element(el) if el.tag() != "style" => Some(el),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instantiate_yields_independent_copies() {
        let template = Template::element(Element::new("ul").with_attr("id", "ul"))
            .with_style("#ul { margin: 0; }");

        let mut first = template.instantiate();
        let second = template.instantiate();
        if let Some(ul) = first.element_by_id_mut("ul") {
            ul.append_child(Element::new("li"));
        }

        assert_eq!(first.nodes().len(), 2);
        assert_eq!(first.element_by_id("ul").map(|ul| ul.children().len()), Some(1));
        assert_eq!(second.element_by_id("ul").map(|ul| ul.children().len()), Some(0));
    }

    #[test]
    fn root_element_skips_style() {
        let template = Template::element(Element::new("li")).with_style("li {}");
        let root = template.instantiate().into_root_element();
        assert_eq!(root.map(|el| el.tag().to_string()), Some("li".to_string()));
    }
}
