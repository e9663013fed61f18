//! Site header: logo, site name, and decorated navigation links.
use crate::component::redistribute::decorate_links;
use crate::component::{
    AttributeSnapshot, BindAttributes, ComponentDefinition, Rendered, Template, WidgetKind,
};
use crate::dom::{Element, Node};
use crate::widgets::Widget;

const STYLE: &str = r#"
#header { background-color: rgba(0,82,128,1); height: 64px; margin: 0; padding: 0; position: relative; white-space: nowrap; }
#sitelogo { color: white; margin: 0; padding: 0; position: absolute; top: 0; left: 0; }
#siteiconlink > img { border: 0; height: 48px; margin: 0; padding: 8px 16px; vertical-align: middle; }
#sitenamelink { color: inherit; text-decoration: inherit; font-size: 1.5rem; line-height: 64px; letter-spacing: 0.3rem; vertical-align: middle; }
#sitelinks { font-size: 1rem; line-height: 56px; margin: 0; padding: 0; position: absolute; top: 0; right: 0; }
#sitelinks .item { color: white; display: inline-block; margin: 0; padding: 4px 16px; position: relative; text-align: center; }
#sitelinks .item .number { border-radius: 50%; color: white; display: block; min-width: 1.5rem; height: 1.5rem; position: absolute; top: 0; right: 0; text-align: center; }
"#;

pub const LINKS_ID: &str = "sitelinks";
pub const ICON_LINK_ID: &str = "siteiconlink";
pub const NAME_LINK_ID: &str = "sitenamelink";

/// `<c14l-header logo="..." name="...">` with anchor children.
pub struct Header;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderAttributes {
    /// Logo image URL.
    pub logo: String,
    /// Display name, also used as the logo's alt text.
    pub name: String,
}

impl BindAttributes for HeaderAttributes {
    const RECOGNIZED: &'static [&'static str] = &["logo", "name"];

    fn bind(snapshot: &AttributeSnapshot) -> Self {
        Self {
            logo: snapshot.text("logo"),
            name: snapshot.text("name"),
        }
    }
}

impl Widget for Header {
    const TAG: &'static str = "c14l-header";
    const KIND: WidgetKind = WidgetKind::Header;

    type Attributes = HeaderAttributes;

    fn template() -> Template {
        let logo = Element::new("div")
            .with_attr("id", "sitelogo")
            .with_child(
                Element::new("a")
                    .with_attr("id", ICON_LINK_ID)
                    .with_attr("href", "/")
                    .with_child(Element::new("img").with_attr("src", "").with_attr("alt", "")),
            )
            .with_child(
                Element::new("a")
                    .with_attr("id", NAME_LINK_ID)
                    .with_attr("href", "/"),
            );

        Template::element(
            Element::new("header")
                .with_attr("id", "header")
                .with_child(logo)
                .with_child(Element::new("div").with_attr("id", LINKS_ID)),
        )
        .with_style(STYLE)
    }

    fn item_template() -> Option<Template> {
        Some(Template::element(
            Element::new("a")
                .with_attr("class", "item")
                .with_attr("href", "")
                .with_child(Element::new("span").with_attr("class", "text"))
                .with_child(Element::new("span").with_attr("class", "number")),
        ))
    }

    fn render(
        definition: &ComponentDefinition,
        attributes: HeaderAttributes,
        children: Vec<Node>,
    ) -> Rendered {
        let mut fragment = definition.template().instantiate();

        if let Some(img) = fragment
            .element_by_id_mut(ICON_LINK_ID)
            .and_then(|link| link.first_by_tag_mut("img"))
        {
            img.set_attribute("src", attributes.logo.as_str());
            img.set_attribute("alt", attributes.name.as_str());
        }
        if let Some(name) = fragment.element_by_id_mut(NAME_LINK_ID) {
            name.set_text(attributes.name.as_str());
        }
        if let Some(links) = fragment.element_by_id_mut(LINKS_ID) {
            decorate_links(children, definition.item_template(), links);
        }

        Rendered::shadow(fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentInstance;
    use crate::dom::HostId;

    fn upgrade(host: Element) -> ComponentInstance {
        ComponentInstance::new(HostId(0), &Header::definition(), host)
    }

    #[test]
    fn binds_logo_and_name() {
        let instance = upgrade(
            Element::new("c14l-header")
                .with_attr("logo", "/static/logo.png")
                .with_attr("name", "dtr5"),
        );
        let root = instance.shadow_root().expect("shadow root");

        let img = root
            .element_by_id(ICON_LINK_ID)
            .and_then(|link| link.first_by_tag("img"))
            .expect("logo image");
        assert_eq!(img.get_attribute("src"), Some("/static/logo.png"));
        assert_eq!(img.get_attribute("alt"), Some("dtr5"));
        assert_eq!(
            root.element_by_id(NAME_LINK_ID).map(Element::text_content),
            Some("dtr5".to_string())
        );
        assert!(instance.host().children().is_empty());
    }

    #[test]
    fn missing_attributes_render_empty_slots() {
        let instance = upgrade(Element::new("c14l-header"));
        let root = instance.shadow_root().expect("shadow root");
        let img = root
            .element_by_id(ICON_LINK_ID)
            .and_then(|link| link.first_by_tag("img"))
            .expect("logo image");
        assert_eq!(img.get_attribute("src"), Some(""));
        assert_eq!(
            root.element_by_id(NAME_LINK_ID).map(Element::text_content),
            Some(String::new())
        );
    }

    #[test]
    fn links_are_decorated_and_others_pass_through() {
        let host = Element::new("c14l-header")
            .with_child(
                Element::new("a")
                    .with_attr("href", "/me/")
                    .with_attr("counter", "2")
                    .with_text("me"),
            )
            .with_child(Element::new("span").with_attr("class", "sep"))
            .with_child(Element::new("a").with_attr("href", "/logout/").with_text("logout"));
        let instance = upgrade(host);
        let links = instance
            .shadow_root()
            .and_then(|root| root.element_by_id(LINKS_ID))
            .expect("links container");

        let tags: Vec<&str> = links.child_elements().map(Element::tag).collect();
        assert_eq!(tags, ["a", "span", "a"]);

        let first = links.child_elements().next().expect("first link");
        assert!(first.has_class("item"));
        assert_eq!(first.get_attribute("href"), Some("/me/"));
        assert_eq!(first.text_content(), "me2");

        let last = links.child_elements().nth(2).expect("last link");
        assert_eq!(last.text_content(), "logout");
    }
}
