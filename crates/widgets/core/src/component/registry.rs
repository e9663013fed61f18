//! Registry of component definitions keyed by tag name.
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::component::ComponentDefinition;
use crate::dom::Element;
use crate::error::RegistryError;
use crate::widgets::{self, Widget};

/// Names the HTML specification reserves even though they contain a hyphen.
const RESERVED_NAMES: &[&str] = &[
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

/// Tag name → definition. A tag can be defined once.
#[derive(Clone, Debug, Default)]
pub struct ComponentRegistry {
    definitions: BTreeMap<String, Arc<ComponentDefinition>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every widget this application defines.
    pub fn with_builtin_widgets() -> Self {
        let mut registry = Self::new();
        for definition in widgets::builtin_definitions() {
            if let Err(err) = registry.define(definition) {
                tracing::error!(error = %err, "builtin widget not registered");
            }
        }
        registry
    }

    pub fn define(&mut self, definition: ComponentDefinition) -> Result<(), RegistryError> {
        let tag = definition.tag().to_string();
        if !is_valid_custom_element_name(&tag) {
            return Err(RegistryError::InvalidTagName { tag });
        }
        if self.definitions.contains_key(&tag) {
            return Err(RegistryError::AlreadyDefined { tag });
        }

        tracing::debug!(%tag, kind = %definition.kind(), "component defined");
        self.definitions.insert(tag, Arc::new(definition));
        Ok(())
    }

    pub fn define_widget<W: Widget>(&mut self) -> Result<(), RegistryError> {
        self.define(W::definition())
    }

    pub fn get(&self, tag: &str) -> Option<&Arc<ComponentDefinition>> {
        self.definitions.get(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Definition that upgrades `element`, if any.
    ///
    /// Autonomous tags match by tag name; customized built-ins match
    /// `<base is="tag">` where `base` is the extended element.
    pub fn lookup(&self, element: &Element) -> Option<&Arc<ComponentDefinition>> {
        if let Some(definition) = self.definitions.get(element.tag())
            && definition.extends().is_none()
        {
            return Some(definition);
        }

        let is = element.get_attribute("is")?;
        self.definitions
            .get(is)
            .filter(|definition| definition.extends() == Some(element.tag()))
    }
}

/// Valid custom element names start with a lowercase ASCII letter, contain a
/// hyphen, have no uppercase letters, and are not reserved.
pub fn is_valid_custom_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_lowercase = chars.next().is_some_and(|c| c.is_ascii_lowercase());

    starts_lowercase
        && name.contains('-')
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_'))
        && !RESERVED_NAMES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{Header, Menu, SubredditChip};

    #[test]
    fn builtin_widgets_are_registered() {
        let registry = ComponentRegistry::with_builtin_widgets();
        let tags: Vec<&str> = registry.tags().collect();
        assert_eq!(
            tags,
            [
                "c14l-header",
                "c14l-menu",
                "c14l-srchip",
                "c14l-srlist",
                "c14l-userhead"
            ]
        );
    }

    #[test]
    fn duplicate_tag_is_rejected() {
        let mut registry = ComponentRegistry::new();
        registry.define_widget::<Menu>().expect("first definition");
        assert_eq!(
            registry.define_widget::<Menu>(),
            Err(RegistryError::AlreadyDefined {
                tag: "c14l-menu".to_string()
            })
        );
    }

    #[test]
    fn custom_element_names() {
        assert!(is_valid_custom_element_name("c14l-header"));
        assert!(is_valid_custom_element_name("x-1.2_b"));
        assert!(!is_valid_custom_element_name("header"));
        assert!(!is_valid_custom_element_name("C14L-header"));
        assert!(!is_valid_custom_element_name("1-header"));
        assert!(!is_valid_custom_element_name("font-face"));
    }

    #[test]
    fn lookup_matches_customized_builtins_by_is() {
        let mut registry = ComponentRegistry::new();
        registry.define_widget::<Header>().expect("header");
        registry.define_widget::<SubredditChip>().expect("chip");

        let chip = Element::new("a").with_attr("is", "c14l-srchip");
        let wrong_base = Element::new("span").with_attr("is", "c14l-srchip");
        let bare = Element::new("c14l-srchip");

        assert!(registry.lookup(&chip).is_some());
        assert!(registry.lookup(&wrong_base).is_none());
        assert!(registry.lookup(&bare).is_none());
        assert!(registry.lookup(&Element::new("c14l-header")).is_some());
    }
}
