//! Declarative page widgets with encapsulated rendering.
//!
//! `widget-core` is the synchronous model behind every page: a light DOM of
//! [`Node`]s, a [`ComponentRegistry`] mapping custom tags to
//! [`ComponentDefinition`]s, and a [`Document`] that upgrades matching tags
//! into [`ComponentInstance`]s. Each instance renders once from its attribute
//! snapshot and light content into an isolated [`ShadowRoot`].
//!
//! Dropdown menus are the only stateful widget; their open/closed state and
//! page-wide dismissal live in [`interaction`].
pub mod component;
pub mod document;
pub mod dom;
pub mod error;
pub mod interaction;
pub mod widgets;

pub use component::{
    AttributeSnapshot, BindAttributes, ComponentDefinition, ComponentInstance, ComponentRegistry,
    Fragment, RenderFn, Rendered, ShadowRoot, Template, WidgetKind, is_valid_custom_element_name,
};
pub use document::Document;
pub use dom::{Element, HostId, HostRenderer, Node, escape_attribute, escape_text, to_html};
pub use error::{DocumentError, RegistryError, ShadowError};
pub use interaction::{
    ClickOutcome, ClickTarget, DismissalListener, MenuController, MenuState, MenuTransition,
};
pub use widgets::{
    ChipFlags, ChipVariant, Header, Menu, SubredditChip, SubredditList, UserHead, Widget,
    builtin_definitions,
};
