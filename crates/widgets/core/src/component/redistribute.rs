//! Child redistribution: moving a host's light content into its rendered
//! subtree.
//!
//! Three strategies exist, selected by widget kind:
//! - [`wrap_each`]: every child goes into a fresh copy of the per-item template
//! - [`decorate_links`]: hyperlinks become decorated links, everything else
//!   passes through unchanged
//! - [`layer_urls`]: a whitespace separated URL list, reversed for layering
//!
//! Order is always preserved (reversal in `layer_urls` is part of its
//! contract). Nothing is deduplicated, and the only children skipped are
//! whitespace-only text nodes (see [`light_children`]).
use crate::component::Template;
use crate::dom::{Element, Node};

/// Light-content children of a host, in document order.
///
/// Whitespace-only text between elements is markup formatting rather than
/// content and is dropped here; every other node is kept.
pub fn light_children(children: Vec<Node>) -> Vec<Node> {
    children
        .into_iter()
        .filter(|node| !matches!(node, Node::Text(text) if text.trim().is_empty()))
        .collect()
}

/// Wraps each child into a new instance of `item` and appends it to
/// `container`.
///
/// Whitespace-only text between children is skipped, so formatting newlines
/// in the authored markup never become empty rows.
///
/// `fill` places the child inside the freshly instantiated item root. When the
/// item template has no root element the child is appended to the container
/// as-is.
pub fn wrap_each<F>(children: Vec<Node>, item: &Template, container: &mut Element, mut fill: F)
where
    F: FnMut(&mut Element, Node),
{
    for child in light_children(children) {
        match item.instantiate().into_root_element() {
            Some(mut row) => {
                fill(&mut row, child);
                container.append_child(row);
            }
            None => container.append_child(child),
        }
    }
}

/// Decorates hyperlink children with `link` and passes everything else
/// through.
///
/// The decorated link takes the child's `href`, its inner content as the
/// `.text` slot and its `counter` attribute as the `.number` badge. Absent
/// attributes produce empty slots.
pub fn decorate_links(children: Vec<Node>, link: &Template, container: &mut Element) {
    for child in light_children(children) {
        match child {
            Node::Element(mut anchor) if anchor.is_hyperlink() => {
                let Some(mut decorated) = link.instantiate().into_root_element() else {
                    container.append_child(anchor);
                    continue;
                };

                let href = anchor.get_attribute("href").unwrap_or_default().to_string();
                let counter = anchor
                    .get_attribute("counter")
                    .unwrap_or_default()
                    .to_string();
                decorated.set_attribute("href", href);

                if let Some(badge) = decorated.first_by_class_mut("number") {
                    badge.set_text(counter);
                }
                if let Some(text) = decorated.first_by_class_mut("text") {
                    for node in anchor.take_children() {
                        text.append_child(node);
                    }
                }
                container.append_child(decorated);
            }
            other => container.append_child(other),
        }
    }
}

/// Splits a whitespace separated URL list and reverses it.
///
/// The first listed URL ends up last so that, once appended in this order, it
/// is painted on top of the stack.
pub fn layer_urls(list: &str) -> Vec<String> {
    list.split_whitespace().rev().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::HostId;

    fn item() -> Template {
        Template::element(Element::new("li"))
    }

    #[test]
    fn wrap_each_preserves_order() {
        let children = vec![
            Node::from(Element::new("a").with_text("one")),
            Node::text("\n  "),
            Node::from(Element::new("a").with_text("two")),
            Node::text("three"),
        ];
        let mut ul = Element::new("ul");
        wrap_each(children, &item(), &mut ul, |li, child| li.append_child(child));

        let rows: Vec<String> = ul.child_elements().map(Element::text_content).collect();
        assert_eq!(rows, ["one", "two", "three"]);
        assert!(ul.child_elements().all(|row| row.tag() == "li"));
    }

    #[test]
    fn wrap_each_skips_only_whitespace_text() {
        let children = vec![
            Node::text("\n    "),
            Node::from(Element::new("a").with_text("me")),
            Node::text(" \t\n"),
            Node::text("  padded  "),
            Node::text("\n"),
        ];
        let mut ul = Element::new("ul");
        wrap_each(children, &item(), &mut ul, |li, child| li.append_child(child));

        let rows: Vec<String> = ul.child_elements().map(Element::text_content).collect();
        assert_eq!(rows, ["me", "  padded  "]);
    }

    #[test]
    fn decorate_links_passes_other_children_through() {
        let link = Template::element(
            Element::new("a")
                .with_attr("class", "item")
                .with_attr("href", "")
                .with_child(Element::new("span").with_attr("class", "text"))
                .with_child(Element::new("span").with_attr("class", "number")),
        );
        let children = vec![
            Node::from(
                Element::new("a")
                    .with_attr("href", "/inbox")
                    .with_attr("counter", "3")
                    .with_text("inbox"),
            ),
            Node::Host(HostId(4)),
            Node::from(Element::new("a").with_text("bare")),
        ];
        let mut links = Element::new("div");
        decorate_links(children, &link, &mut links);

        assert_eq!(links.children().len(), 3);
        let first = links.children()[0].as_element().expect("decorated link");
        assert_eq!(first.get_attribute("href"), Some("/inbox"));
        assert_eq!(first.text_content(), "inbox3");
        assert_eq!(links.children()[1], Node::Host(HostId(4)));

        let bare = links.children()[2].as_element().expect("decorated link");
        assert_eq!(bare.get_attribute("href"), Some(""));
        assert_eq!(bare.text_content(), "bare");
    }

    #[test]
    fn layer_urls_reverses_and_drops_empty_tokens() {
        assert_eq!(layer_urls("  a  b\tc "), ["c", "b", "a"]);
        assert!(layer_urls("   ").is_empty());
    }
}
