//! The widgets this application defines.
//!
//! Each widget is a unit type implementing [`Widget`]: a tag name, an
//! enumerated attribute configuration, its templates, and a render function
//! that fills the template from attributes and light content.
mod chip;
mod header;
pub mod menu;
mod srchip;
mod srlist;
mod userhead;

pub use chip::{ChipFlags, ChipVariant, TagPlacement};
pub use header::{Header, HeaderAttributes};
pub use menu::Menu;
pub use srchip::{ChipAttributes, SubredditChip};
pub use srlist::{SubredditList, SubredditListAttributes};
pub use userhead::{UserHead, UserHeadAttributes};

use crate::component::{
    AttributeSnapshot, BindAttributes, ComponentDefinition, Rendered, Template, WidgetKind,
    trace_missing,
};
use crate::dom::Node;

/// A custom tag with a fixed attribute set and a render function.
pub trait Widget {
    const TAG: &'static str;
    const KIND: WidgetKind;
    /// Base element for customized built-ins (`<a is="...">`).
    const EXTENDS: Option<&'static str> = None;

    type Attributes: BindAttributes;

    fn template() -> Template;

    fn item_template() -> Option<Template> {
        None
    }

    fn render(
        definition: &ComponentDefinition,
        attributes: Self::Attributes,
        children: Vec<Node>,
    ) -> Rendered;

    fn definition() -> ComponentDefinition
    where
        Self: Sized,
    {
        let mut definition =
            ComponentDefinition::new(Self::TAG, Self::KIND, Self::template(), render_widget::<Self>);
        if let Some(item) = Self::item_template() {
            definition = definition.with_item_template(item);
        }
        if let Some(base) = Self::EXTENDS {
            definition = definition.extending(base);
        }
        definition
    }
}

fn render_widget<W: Widget>(
    definition: &ComponentDefinition,
    snapshot: &AttributeSnapshot,
    children: Vec<Node>,
) -> Rendered {
    trace_missing::<W::Attributes>(W::TAG, snapshot);
    W::render(definition, W::Attributes::bind(snapshot), children)
}

/// Definitions for every widget, in registration order.
pub fn builtin_definitions() -> Vec<ComponentDefinition> {
    vec![
        Header::definition(),
        Menu::definition(),
        UserHead::definition(),
        SubredditChip::definition(),
        SubredditList::definition(),
    ]
}
