//! Dropdown menu: an activator plus a list with one row per light child.
//!
//! Open/closed state lives in the instance's
//! [`MenuController`](crate::interaction::MenuController); the rendered list
//! carries [`OPEN_CLASS`] exactly while the menu is open.
use crate::component::redistribute::wrap_each;
use crate::component::{ComponentDefinition, Rendered, Template, WidgetKind};
use crate::dom::{Element, Node};
use crate::widgets::Widget;

const STYLE: &str = r#"
nav { color: gray; cursor: pointer; display: block; width: 2.5rem; height: 2.5rem; float: right; position: relative; text-align: center; }
#activator { cursor: pointer; display: inline-block; position: absolute; top: 0; bottom: 0; left: 0; right: 0; }
#ul { background-color: #fff; border-radius: 2px; box-shadow: 0 1px 6px 0 rgba(0,0,0,0.6); display: none; list-style: none; margin: 0; padding: 0; position: absolute; right: 8px; top: 32px; width: 250px; z-index: 50; }
#ul.isopen { display: block; }
#ul > li { border-top: 1px solid #ccc; margin: 0; padding: 0; }
#ul > li:first-child { border-top: 0; }
#ul > li > form, #ul > li > span, #ul > li > a { color: inherit; cursor: pointer; display: block; padding: 1rem; text-decoration: inherit; }
"#;

/// Id of the clickable activator inside the scope.
pub const ACTIVATOR_ID: &str = "activator";
/// Id of the row list inside the scope.
pub const LIST_ID: &str = "ul";
/// Class marking the list visible.
pub const OPEN_CLASS: &str = "isopen";

/// `<c14l-menu>` with one row per child.
pub struct Menu;

impl Widget for Menu {
    const TAG: &'static str = "c14l-menu";
    const KIND: WidgetKind = WidgetKind::Menu;

    type Attributes = ();

    fn template() -> Template {
        Template::element(
            Element::new("nav")
                .with_child(Element::new("div").with_attr("id", ACTIVATOR_ID))
                .with_child(Element::new("ul").with_attr("id", LIST_ID)),
        )
        .with_style(STYLE)
    }

    fn item_template() -> Option<Template> {
        Some(Template::element(Element::new("li")))
    }

    fn render(definition: &ComponentDefinition, _attributes: (), children: Vec<Node>) -> Rendered {
        let mut fragment = definition.template().instantiate();

        if let Some(list) = fragment.element_by_id_mut(LIST_ID) {
            list.remove_class(OPEN_CLASS);
            wrap_each(children, definition.item_template(), list, |row, child| {
                row.append_child(child)
            });
        }

        Rendered::shadow(fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentInstance;
    use crate::dom::HostId;
    use crate::interaction::MenuState;

    fn menu_host(rows: &[&str]) -> Element {
        rows.iter().fold(Element::new("c14l-menu"), |host, label| {
            host.with_child(Element::new("a").with_attr("href", "#").with_text(*label))
        })
    }

    #[test]
    fn one_row_per_child_in_order() {
        let instance =
            ComponentInstance::new(HostId(1), &Menu::definition(), menu_host(&["a", "b", "c"]));
        let list = instance
            .shadow_root()
            .and_then(|root| root.element_by_id(LIST_ID))
            .expect("menu list");

        let rows: Vec<String> = list.child_elements().map(Element::text_content).collect();
        assert_eq!(rows, ["a", "b", "c"]);
        assert!(list.child_elements().all(|row| row.tag() == "li"));
        assert!(!list.has_class(OPEN_CLASS));
        assert_eq!(instance.menu_state(), Some(MenuState::Closed));
    }

    #[test]
    fn empty_menu_renders_empty_list() {
        let instance = ComponentInstance::new(HostId(1), &Menu::definition(), menu_host(&[]));
        let list = instance
            .shadow_root()
            .and_then(|root| root.element_by_id(LIST_ID))
            .expect("menu list");
        assert!(list.children().is_empty());
        assert!(
            instance
                .shadow_root()
                .and_then(|root| root.element_by_id(ACTIVATOR_ID))
                .is_some()
        );
    }
}
