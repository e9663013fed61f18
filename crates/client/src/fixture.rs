//! Page markup as JSON, and the built-in demo page.
//!
//! A page file is a JSON object with a `nodes` array. Each node is either a
//! string (text) or an element:
//!
//! ```json
//! { "tag": "c14l-menu", "attrs": [["class", "nav"]], "children": ["..."] }
//! ```
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use widget_core::{Element, Node};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFixture {
    pub nodes: Vec<NodeSpec>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeSpec {
    Text(String),
    Element(ElementSpec),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSpec {
    pub tag: String,
    /// Name/value pairs in source order.
    #[serde(default)]
    pub attrs: Vec<(String, String)>,
    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

impl From<NodeSpec> for Node {
    fn from(spec: NodeSpec) -> Self {
        match spec {
            NodeSpec::Text(text) => Node::Text(text),
            NodeSpec::Element(element) => Node::Element(element.into()),
        }
    }
}

impl From<ElementSpec> for Element {
    fn from(spec: ElementSpec) -> Self {
        let mut element = Element::new(spec.tag);
        for (name, value) in spec.attrs {
            element.set_attribute(name, value);
        }
        for child in spec.children {
            element.append_child(Node::from(child));
        }
        element
    }
}

impl PageFixture {
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes.into_iter().map(Node::from).collect()
    }
}

/// Reads a page file.
pub fn load_page(path: &Path) -> Result<Vec<Node>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read page file: {}", path.display()))?;
    let fixture: PageFixture = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse page file: {}", path.display()))?;
    Ok(fixture.into_nodes())
}

/// The page file if one is given, the demo page otherwise.
pub fn page_or_demo(path: Option<&Path>) -> Result<Vec<Node>> {
    match path {
        Some(path) => load_page(path),
        None => Ok(demo_page()),
    }
}

/// A profile page using every widget, with two menus in the header.
pub fn demo_page() -> Vec<Node> {
    let link = |href: &str, text: &str| Element::new("a").with_attr("href", href).with_text(text);

    let account_menu = Element::new("c14l-menu")
        .with_child(link("/me/", "profile"))
        .with_child(link("/me/locate/", "location"))
        .with_child(link("/logout/", "logout"));
    let browse_menu = Element::new("c14l-menu")
        .with_child(link("/results/", "search"))
        .with_child(link("/favs/", "favorites"));

    let header = Element::new("c14l-header")
        .with_attr("logo", "/static/reddmeet-logo.png")
        .with_attr("name", "reddmeet")
        .with_child(link("/inbox/", "inbox").with_attr("counter", "2"))
        .with_child(account_menu)
        .with_child(browse_menu);

    let userhead = Element::new("c14l-userhead").with_attr(
        "pics",
        "https://i.imgur.com/a.jpg https://i.imgur.com/b.jpg https://i.imgur.com/c.jpg",
    );

    let chip = |name: &str, flag: Option<&str>| {
        let mut chip = Element::new("a")
            .with_attr("is", "c14l-srchip")
            .with_attr("href", format!("/r/{name}/"));
        if let Some(flag) = flag {
            chip.set_attribute(flag, "");
        }
        chip.with_text(name)
    };
    let chips = Element::new("p")
        .with_attr("id", "favs")
        .with_child(chip("rust", Some("ismod")))
        .with_child(chip("berlin", None))
        .with_child(chip("pics", Some("isnsfw")));

    let srlist = Element::new("c14l-srlist")
        .with_child(link("/r/rust/", "rust").with_attr("ismod", ""))
        .with_child(link("/r/golang/", "golang").with_attr("isbanned", ""))
        .with_child(link("/r/askreddit/", "askreddit").with_attr("ismuted", ""))
        .with_child(link("/r/pics/", "pics").with_attr("isnsfw", ""));

    vec![
        header.into(),
        userhead.into(),
        chips.into(),
        srlist.into(),
    ]
}
