//! Subreddit chip: a customized `<a is="c14l-srchip">` rendering its own
//! label in place.
use crate::component::{
    AttributeSnapshot, BindAttributes, ComponentDefinition, Rendered, Template, WidgetKind,
};
use crate::dom::{Element, Node};
use crate::widgets::{ChipFlags, ChipVariant, TagPlacement, Widget};

pub const LABEL_CLASS: &str = "sr-name";
pub const MODERATOR_TITLE: &str = "moderator of this subreddit";

/// `<a is="c14l-srchip" [isbanned] [ismuted] [ismod] [isnsfw]>name</a>`.
pub struct SubredditChip;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChipAttributes {
    pub flags: ChipFlags,
}

impl ChipAttributes {
    pub fn variant(&self) -> ChipVariant {
        ChipVariant::from_flags(self.flags)
    }
}

impl BindAttributes for ChipAttributes {
    const RECOGNIZED: &'static [&'static str] = &ChipFlags::ATTRIBUTES;

    fn bind(snapshot: &AttributeSnapshot) -> Self {
        Self {
            flags: ChipFlags::from_snapshot(snapshot),
        }
    }
}

impl Widget for SubredditChip {
    const TAG: &'static str = "c14l-srchip";
    const KIND: WidgetKind = WidgetKind::SubredditChip;
    const EXTENDS: Option<&'static str> = Some("a");

    type Attributes = ChipAttributes;

    fn template() -> Template {
        Template::element(Element::new("span").with_attr("class", LABEL_CLASS))
    }

    fn render(
        definition: &ComponentDefinition,
        attributes: ChipAttributes,
        children: Vec<Node>,
    ) -> Rendered {
        let name: String = children.iter().map(Node::text_content).collect();
        let Some(mut label) = definition.template().instantiate().into_root_element() else {
            return Rendered::default();
        };

        label.set_text(format!("r/{}", name.trim()));
        for (property, value) in [
            ("background-color", "green"),
            ("border-radius", "5px"),
            ("color", "white"),
            ("display", "inline-block"),
            ("font-size", "0.8rem"),
            ("font-weight", "bold"),
            ("line-height", "2rem"),
            ("padding", "0 0.5rem"),
            ("margin", "0.25rem"),
        ] {
            label.set_style(property, value);
        }

        match attributes.variant() {
            ChipVariant::Moderator => {
                label.set_style("background-color", "yellow");
                label.set_style("color", "red");
                label.set_attribute("title", MODERATOR_TITLE);
            }
            variant => {
                if let Some((tag, placement)) = variant.tag_span() {
                    match placement {
                        TagPlacement::Before => label.prepend_child(tag),
                        TagPlacement::After => label.append_child(tag),
                    }
                }
            }
        }

        Rendered::light(vec![Node::Element(label)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentInstance;
    use crate::dom::HostId;

    fn label(host: Element) -> Element {
        let instance = ComponentInstance::new(HostId(3), &SubredditChip::definition(), host);
        assert!(instance.shadow_root().is_none());
        assert_eq!(instance.host().children().len(), 1);
        instance.host().child_elements().next().cloned().expect("label")
    }

    fn chip(name: &str) -> Element {
        Element::new("a")
            .with_attr("is", "c14l-srchip")
            .with_attr("href", format!("/r/{name}/"))
            .with_text(name)
    }

    #[test]
    fn plain_chip_prefixes_name() {
        let label = label(chip("rust"));
        assert!(label.has_class(LABEL_CLASS));
        assert_eq!(label.text_content(), "r/rust");
        assert_eq!(label.style("background-color"), Some("green"));
    }

    #[test]
    fn moderator_variant_restyles_label() {
        let label = label(chip("rust").with_attr("ismod", ""));
        assert_eq!(label.style("background-color"), Some("yellow"));
        assert_eq!(label.style("color"), Some("red"));
        assert_eq!(label.get_attribute("title"), Some(MODERATOR_TITLE));
    }

    #[test]
    fn banned_wins_over_moderator() {
        let label = label(chip("rust").with_attr("ismod", "").with_attr("isbanned", ""));
        assert_eq!(label.text_content(), "banned fromr/rust");
        assert_eq!(label.get_attribute("title"), None);
    }

    #[test]
    fn nsfw_tag_is_appended() {
        let label = label(chip("rust").with_attr("isnsfw", ""));
        assert_eq!(label.text_content(), "r/rustNSFW");
    }
}
