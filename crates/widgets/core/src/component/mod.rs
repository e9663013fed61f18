//! The declarative component model shared by every widget.
//!
//! - [`Template`] / [`Fragment`]: static markup instantiated per instance
//! - [`ComponentDefinition`] / [`ComponentRegistry`]: what each tag renders
//! - [`AttributeSnapshot`] / [`BindAttributes`]: attribute binding
//! - [`redistribute`]: moving light content into the rendered subtree
//! - [`ShadowRoot`]: the encapsulated scope
//! - [`ComponentInstance`]: one upgraded tag
mod attributes;
mod definition;
mod instance;
pub mod redistribute;
mod registry;
mod shadow;
mod template;

pub use attributes::{AttributeSnapshot, BindAttributes};
pub(crate) use attributes::trace_missing;
pub use definition::{ComponentDefinition, RenderFn, Rendered, WidgetKind};
pub use instance::ComponentInstance;
pub(crate) use instance::detach_placeholder;
pub use registry::{ComponentRegistry, is_valid_custom_element_name};
pub use shadow::ShadowRoot;
pub use template::{Fragment, Template};
