//! Command implementations for the client
//!
//! Each command is a separate module that implements its own CLI args and
//! execution logic.

mod click;
mod locate;
mod render;

pub use click::{Click, ClickSpec};
pub use locate::Locate;
pub use render::Render;
