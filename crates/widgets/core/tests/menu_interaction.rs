//! Integration tests for dropdown menus sharing one page.
//!
//! Each menu owns its open/closed state; the page-wide listener is the only
//! thing that closes other menus.

use widget_core::{ClickTarget, Document, Element, HostId, MenuState, Node};

fn menu(items: &[&str]) -> Node {
    let mut host = Element::new("c14l-menu");
    for item in items {
        host.append_child(Element::new("a").with_attr("href", "#").with_text(*item));
    }
    host.into()
}

fn two_menus() -> (Document, HostId, HostId) {
    let mut doc = Document::with_builtin_widgets();
    let ids = doc.load([menu(&["profile", "logout"]), menu(&["inbox", "sent"])]);
    assert_eq!(ids.len(), 2);
    (doc, ids[0], ids[1])
}

fn list_is_open(doc: &Document, id: HostId) -> bool {
    let instance = doc.instance(id).expect("menu instance");
    instance
        .shadow_root()
        .and_then(|root| root.element_by_id("ul"))
        .map(|ul| ul.has_class("isopen"))
        .unwrap_or(false)
}

#[test]
fn test_menus_are_mutually_exclusive() {
    let (mut doc, a, b) = two_menus();
    println!("menus loaded: a={a} b={b}");

    // ================================================================
    // Open A
    // ================================================================
    let outcome = doc.click(ClickTarget::Activator(a)).expect("click A");
    assert_eq!(outcome.toggled, Some((a, MenuState::Open)));
    assert!(outcome.dismissed.is_empty());
    assert!(list_is_open(&doc, a));
    assert!(!list_is_open(&doc, b));

    // ================================================================
    // Open B: A is dismissed by the page-wide listener
    // ================================================================
    let outcome = doc.click(ClickTarget::Activator(b)).expect("click B");
    println!("  ✓ outcome: {outcome:?}");
    assert_eq!(outcome.toggled, Some((b, MenuState::Open)));
    assert_eq!(outcome.dismissed, vec![a]);
    assert_eq!(doc.menu_state(a), Some(MenuState::Closed));
    assert_eq!(doc.menu_state(b), Some(MenuState::Open));
    assert!(!list_is_open(&doc, a));
    assert!(list_is_open(&doc, b));

    // ================================================================
    // Click outside: everything closes
    // ================================================================
    let outcome = doc.click(ClickTarget::Outside).expect("click outside");
    assert_eq!(outcome.toggled, None);
    assert_eq!(outcome.dismissed, vec![b]);
    assert_eq!(doc.menu_state(a), Some(MenuState::Closed));
    assert_eq!(doc.menu_state(b), Some(MenuState::Closed));
}

#[test]
fn test_activator_toggles_closed_again() {
    let (mut doc, a, _) = two_menus();

    doc.click(ClickTarget::Activator(a)).expect("open");
    let outcome = doc.click(ClickTarget::Activator(a)).expect("close");

    assert_eq!(outcome.toggled, Some((a, MenuState::Closed)));
    assert!(outcome.dismissed.is_empty());
    assert!(!list_is_open(&doc, a));
}

#[test]
fn test_click_within_menu_keeps_it_open() {
    let (mut doc, a, b) = two_menus();
    doc.click(ClickTarget::Activator(a)).expect("open A");
    doc.click(ClickTarget::Activator(b)).expect("open B");

    let outcome = doc.click(ClickTarget::Within(b)).expect("click inside B");
    assert_eq!(outcome.toggled, None);
    assert!(outcome.dismissed.is_empty());
    assert_eq!(doc.menu_state(b), Some(MenuState::Open));
}

#[test]
fn test_outside_click_with_nothing_open_is_a_no_op() {
    let (mut doc, a, b) = two_menus();
    let before = doc.to_html();

    let outcome = doc.click(ClickTarget::Outside).expect("click");

    assert!(outcome.dismissed.is_empty());
    assert_eq!(doc.menu_state(a), Some(MenuState::Closed));
    assert_eq!(doc.menu_state(b), Some(MenuState::Closed));
    assert_eq!(doc.to_html(), before);
}

#[test]
fn test_removed_menu_stops_receiving_dismissals() {
    let (mut doc, a, b) = two_menus();
    doc.click(ClickTarget::Activator(a)).expect("open A");

    let removed = doc.remove(a).expect("remove A");
    assert_eq!(removed, vec![a]);
    assert_eq!(doc.live_menus(), 1);

    doc.click(ClickTarget::Activator(b)).expect("open B");
    let outcome = doc.click(ClickTarget::Outside).expect("click outside");
    assert_eq!(outcome.dismissed, vec![b]);
    assert!(doc.click(ClickTarget::Activator(a)).is_err());
}

#[test]
fn test_menu_nested_in_header_is_removed_with_it() {
    let mut doc = Document::with_builtin_widgets();
    let header = Element::new("c14l-header")
        .with_attr("logo", "/static/logo.png")
        .with_attr("name", "dtr5")
        .with_child(menu(&["settings"]));
    let ids = doc.load([Node::from(header)]);

    // Post-order: the nested menu is upgraded first.
    assert_eq!(ids.len(), 2);
    let (nested_menu, header) = (ids[0], ids[1]);
    assert_eq!(doc.live_menus(), 1);

    let mut removed = doc.remove(header).expect("remove header");
    removed.sort();
    assert_eq!(removed, vec![nested_menu, header]);
    assert_eq!(doc.live_menus(), 0);
    assert!(doc.nodes().is_empty());
}
