//! Stacked user photos.
use crate::component::redistribute::layer_urls;
use crate::component::{
    AttributeSnapshot, BindAttributes, ComponentDefinition, Rendered, Template, WidgetKind,
};
use crate::dom::{Element, Node};
use crate::widgets::Widget;

const STYLE: &str = r#"
#pics { background: white; display: block; height: 280px; margin: 32px 0; padding: 0; position: relative; overflow: hidden; }
#pics div { background-position: center center; background-repeat: no-repeat; background-size: cover; display: inline-block; height: 280px; left: 0; position: absolute; top: 0; transition: 0.5s ease-out; width: 280px; }
#pics:hover div:nth-child(2) { left: calc(1 * 280px); }
#pics:hover div:nth-child(3) { left: calc(2 * 280px); }
"#;

pub const PICS_ID: &str = "pics";

/// `<c14l-userhead pics="url1 url2 ...">`.
pub struct UserHead;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserHeadAttributes {
    /// Whitespace separated photo URLs, copied verbatim.
    pub pics: String,
}

impl BindAttributes for UserHeadAttributes {
    const RECOGNIZED: &'static [&'static str] = &["pics"];

    fn bind(snapshot: &AttributeSnapshot) -> Self {
        Self {
            pics: snapshot.text("pics"),
        }
    }
}

impl Widget for UserHead {
    const TAG: &'static str = "c14l-userhead";
    const KIND: WidgetKind = WidgetKind::UserHead;

    type Attributes = UserHeadAttributes;

    fn template() -> Template {
        Template::element(Element::new("div").with_attr("id", PICS_ID)).with_style(STYLE)
    }

    /// One layer per URL, first listed URL appended last so it paints on top.
    fn render(
        definition: &ComponentDefinition,
        attributes: UserHeadAttributes,
        _children: Vec<Node>,
    ) -> Rendered {
        let mut fragment = definition.template().instantiate();

        if let Some(pics) = fragment.element_by_id_mut(PICS_ID) {
            for url in layer_urls(&attributes.pics) {
                let mut layer = Element::new("div");
                layer.set_style("background-image", &format!("url({url})"));
                pics.append_child(layer);
            }
        }

        Rendered::shadow(fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentInstance;
    use crate::dom::HostId;

    fn layers(host: Element) -> Vec<String> {
        let instance = ComponentInstance::new(HostId(2), &UserHead::definition(), host);
        instance
            .shadow_root()
            .and_then(|root| root.element_by_id(PICS_ID))
            .map(|pics| {
                pics.child_elements()
                    .filter_map(|layer| layer.style("background-image"))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn photos_are_layered_in_reverse() {
        let host = Element::new("c14l-userhead").with_attr("pics", "a b c");
        assert_eq!(layers(host), ["url(c)", "url(b)", "url(a)"]);
    }

    #[test]
    fn missing_pics_renders_empty_stack() {
        assert!(layers(Element::new("c14l-userhead")).is_empty());
        assert!(layers(Element::new("c14l-userhead").with_attr("pics", "   ")).is_empty());
    }
}
