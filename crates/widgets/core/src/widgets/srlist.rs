//! Subreddit list: one row per subreddit link, each row marked with the
//! subreddit's status tag and a link out to reddit.
use crate::component::redistribute::wrap_each;
use crate::component::{
    AttributeSnapshot, BindAttributes, ComponentDefinition, Rendered, Template, WidgetKind,
};
use crate::dom::{Element, Node};
use crate::widgets::{ChipFlags, ChipVariant, TagPlacement, Widget};

const STYLE: &str = r#"
#ul { list-style: none; margin: 0; padding: 0; }
#ul > li { background-color: #888; display: inline-block; font-size: 0; margin: 4px; padding: 0; overflow: hidden; }
#ul > li > a { border: 0; display: inline-block; font-size: 1.25rem; line-height: 2.25rem; padding: 0 8px; text-decoration: inherit; color: white; }
#ul > li > a[href^="https://"] { border-left: 1px solid gray; background-color: rgba(255,255,255,0.28); }
#ul > li > .banned-tag, #ul > li > .muted-tag, #ul > li > .mod-tag, #ul > li > .nsfw-tag { background-color: gray; color: white; display: inline-block; font-size: 1.25rem; line-height: 2.25rem; margin: 0; padding: 0 8px; }
#ul > li > .mod-tag { background-color: transparent; color: red; padding-right: 0; }
#ul.smaller > li > a, #ul.smaller > li > .mod-tag { font-size: 1rem; line-height: 2rem; }
"#;

pub const LIST_ID: &str = "ul";
pub const SMALLER_CLASS: &str = "smaller";
const REDDIT_BASE: &str = "https://www.reddit.com/r/";

/// `<c14l-srlist [smaller]>` with one `<a href=...>name</a>` child per
/// subreddit.
pub struct SubredditList;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubredditListAttributes {
    /// Compact rendering.
    pub smaller: bool,
}

impl BindAttributes for SubredditListAttributes {
    const RECOGNIZED: &'static [&'static str] = &["smaller"];

    fn bind(snapshot: &AttributeSnapshot) -> Self {
        Self {
            smaller: snapshot.has("smaller"),
        }
    }
}

impl Widget for SubredditList {
    const TAG: &'static str = "c14l-srlist";
    const KIND: WidgetKind = WidgetKind::SubredditList;

    type Attributes = SubredditListAttributes;

    fn template() -> Template {
        Template::element(Element::new("ul").with_attr("id", LIST_ID)).with_style(STYLE)
    }

    fn item_template() -> Option<Template> {
        Some(Template::element(Element::new("li")))
    }

    fn render(
        definition: &ComponentDefinition,
        attributes: SubredditListAttributes,
        children: Vec<Node>,
    ) -> Rendered {
        let mut fragment = definition.template().instantiate();

        if let Some(list) = fragment.element_by_id_mut(LIST_ID) {
            if attributes.smaller {
                list.add_class(SMALLER_CLASS);
            }
            wrap_each(children, definition.item_template(), list, fill_row);
        }

        Rendered::shadow(fragment)
    }
}

/// Fills one row from a light child.
///
/// Hyperlinks get the status tag for their first matching flag and a reddit
/// link; any other child is placed in the row unchanged.
fn fill_row(row: &mut Element, child: Node) {
    let mut link = match child {
        Node::Element(link) if link.is_hyperlink() => link,
        other => {
            row.append_child(other);
            return;
        }
    };

    let variant = ChipVariant::from_flags(ChipFlags::from_element(&link));
    let name = link.text_content().trim().trim_start_matches("r/").to_string();
    for attribute in ChipFlags::ATTRIBUTES {
        link.remove_attribute(attribute);
    }
    link.set_text(format!("r/{name}"));

    let tag = variant.tag_span();
    if let Some((span, TagPlacement::Before)) = &tag {
        row.append_child(span.clone());
    }
    row.append_child(link);
    if let Some((span, TagPlacement::After)) = tag {
        row.append_child(span);
    }

    row.append_child(
        Element::new("a")
            .with_attr("href", format!("{REDDIT_BASE}{name}"))
            .with_attr("title", format!("r/{name} on reddit"))
            .with_child(Element::new("span").with_attr("class", "fa fa-reddit")),
    );
}
