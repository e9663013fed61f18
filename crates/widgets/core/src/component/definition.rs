//! Component definitions: the immutable, registered description of a custom
//! tag.
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::component::{AttributeSnapshot, Fragment, Template};
use crate::dom::Node;

/// The widget kinds this application defines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum WidgetKind {
    Header,
    Menu,
    UserHead,
    SubredditChip,
    SubredditList,
}

/// What a widget produced from its attributes and light content.
#[derive(Debug, Default)]
pub struct Rendered {
    /// Content for the encapsulated scope.
    pub shadow: Option<Fragment>,
    /// Replacement light content for hosts that render in place.
    pub light: Vec<Node>,
}

impl Rendered {
    pub fn shadow(fragment: Fragment) -> Self {
        Self {
            shadow: Some(fragment),
            light: Vec::new(),
        }
    }

    pub fn light(nodes: Vec<Node>) -> Self {
        Self {
            shadow: None,
            light: nodes,
        }
    }
}

/// Builds the rendered output for one instance.
pub type RenderFn = fn(&ComponentDefinition, &AttributeSnapshot, Vec<Node>) -> Rendered;

/// Registered description of a custom tag.
///
/// Templates are created once here and cloned for every instance.
#[derive(Clone, Debug)]
pub struct ComponentDefinition {
    tag: String,
    kind: WidgetKind,
    extends: Option<String>,
    template: Template,
    item_template: Option<Template>,
    render: RenderFn,
}

impl ComponentDefinition {
    pub fn new(tag: impl Into<String>, kind: WidgetKind, template: Template, render: RenderFn) -> Self {
        Self {
            tag: tag.into(),
            kind,
            extends: None,
            template,
            item_template: None,
            render,
        }
    }

    pub fn with_item_template(mut self, template: Template) -> Self {
        self.item_template = Some(template);
        self
    }

    /// Marks this definition as a customized built-in of `base`, matched by
    /// `<base is="tag">`.
    pub fn extending(mut self, base: impl Into<String>) -> Self {
        self.extends = Some(base.into());
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    pub fn extends(&self) -> Option<&str> {
        self.extends.as_deref()
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Per-item template, or an empty one for widgets that do not wrap
    /// children.
    pub fn item_template(&self) -> &Template {
        static EMPTY: std::sync::OnceLock<Template> = std::sync::OnceLock::new();
        self.item_template
            .as_ref()
            .unwrap_or_else(|| EMPTY.get_or_init(Template::default))
    }

    pub fn has_item_template(&self) -> bool {
        self.item_template.is_some()
    }

    pub(crate) fn render(&self, snapshot: &AttributeSnapshot, children: Vec<Node>) -> Rendered {
        (self.render)(self, snapshot, children)
    }
}
