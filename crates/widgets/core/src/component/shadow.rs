//! Encapsulated render scope owned by a single component instance.
use crate::component::Fragment;
use crate::dom::{Element, Node};
use crate::error::ShadowError;

/// Private subtree of a component instance.
///
/// Document-level lookups never descend into a shadow root. Only the owning
/// instance mutates it; everyone else gets read access through
/// [`ComponentInstance::shadow_root`](crate::ComponentInstance::shadow_root).
#[derive(Debug, PartialEq, Eq)]
pub struct ShadowRoot {
    nodes: Vec<Node>,
}

impl ShadowRoot {
    /// Attaches `fragment` as the shadow root in `slot`.
    ///
    /// A host gets exactly one shadow root.
    pub(crate) fn attach(
        slot: &mut Option<ShadowRoot>,
        host_tag: &str,
        fragment: Fragment,
    ) -> Result<(), ShadowError> {
        if slot.is_some() {
            return Err(ShadowError::AlreadyAttached {
                tag: host_tag.to_string(),
            });
        }
        *slot = Some(ShadowRoot {
            nodes: fragment.into_nodes(),
        });
        Ok(())
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut Vec<Node> {
        &mut self.nodes
    }

    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.nodes
            .iter()
            .filter_map(Node::as_element)
            .find_map(|el| el.element_by_id(id))
    }

    pub(crate) fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.nodes
            .iter_mut()
            .filter_map(Node::as_element_mut)
            .find_map(|el| el.element_by_id_mut(id))
    }

    /// The scope's style sheet, if the template carried one.
    pub fn style(&self) -> Option<String> {
        self.nodes
            .iter()
            .filter_map(Node::as_element)
            .find(|el| el.tag() == "style")
            .map(Element::text_content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Template;

    #[test]
    fn attaches_only_once() {
        let template = Template::element(Element::new("div").with_attr("id", "pics"));
        let mut slot = None;

        ShadowRoot::attach(&mut slot, "c14l-userhead", template.instantiate())
            .expect("first attach succeeds");
        let second = ShadowRoot::attach(&mut slot, "c14l-userhead", template.instantiate());

        assert_eq!(
            second,
            Err(ShadowError::AlreadyAttached {
                tag: "c14l-userhead".to_string()
            })
        );
        assert!(slot.and_then(|root| root.element_by_id("pics").cloned()).is_some());
    }
}
