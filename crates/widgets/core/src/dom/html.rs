//! HTML serialization of the element tree.
use super::{Element, HostId, Node};

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["area", "br", "hr", "img", "input", "link", "meta"];

/// Elements whose text children are written verbatim.
const RAW_TEXT_ELEMENTS: &[&str] = &["style", "script"];

/// Writes the markup for a host placeholder.
///
/// The document implements this to serialize each upgraded component with its
/// encapsulated scope; `()` writes nothing.
pub trait HostRenderer {
    fn render_host(&self, id: HostId, out: &mut String);
}

impl HostRenderer for () {
    fn render_host(&self, _id: HostId, _out: &mut String) {}
}

/// Serializes `nodes` in order.
pub fn to_html(nodes: &[Node], hosts: &impl HostRenderer) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(node, hosts, false, &mut out);
    }
    out
}

pub(crate) fn write_nodes(nodes: &[Node], hosts: &impl HostRenderer, out: &mut String) {
    for node in nodes {
        write_node(node, hosts, false, out);
    }
}

fn write_node(node: &Node, hosts: &impl HostRenderer, raw_text: bool, out: &mut String) {
    match node {
        Node::Text(text) if raw_text => out.push_str(text),
        Node::Text(text) => out.push_str(&escape_text(text)),
        Node::Host(id) => hosts.render_host(*id, out),
        Node::Element(element) => {
            write_start_tag(element, out);
            if is_void(element.tag()) {
                return;
            }

            let raw = RAW_TEXT_ELEMENTS.contains(&element.tag());
            for child in element.children() {
                write_node(child, hosts, raw, out);
            }

            write_end_tag(element, out);
        }
    }
}

pub(crate) fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

pub(crate) fn write_start_tag(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.tag());
    for (name, value) in element.attributes() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attribute(value));
        out.push('"');
    }
    out.push('>');
}

pub(crate) fn write_end_tag(element: &Element, out: &mut String) {
    out.push_str("</");
    out.push_str(element.tag());
    out.push('>');
}

pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
