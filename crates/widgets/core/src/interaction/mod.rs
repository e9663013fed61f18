//! Dropdown interaction: per-menu state machine and page-wide dismissal.
mod dismissal;
mod state;

pub use dismissal::DismissalListener;
pub use state::{MenuController, MenuState, MenuTransition};

use crate::dom::HostId;

/// Where a click landed, after retargeting to the outermost host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClickTarget {
    /// The activator of the menu hosted by this element.
    Activator(HostId),
    /// Anywhere else inside this host.
    Within(HostId),
    /// Outside every host.
    Outside,
}

/// Result of dispatching one click.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClickOutcome {
    /// Menu whose activator was clicked, with its new state.
    pub toggled: Option<(HostId, MenuState)>,
    /// Menus forced closed by the page-wide listener.
    pub dismissed: Vec<HostId>,
}
