//! Open/closed state machine for a single dropdown menu.
use strum::{AsRefStr, Display};

/// Visibility state of a dropdown menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }
}

/// Inputs driving a [`MenuController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum MenuTransition {
    /// The user clicked this menu's activator.
    ActivatorClicked,
    /// A click landed outside this menu's host.
    OutsideClick,
}

/// State machine for one menu: `Closed` ⇄ `Open`.
///
/// There is no terminal state; the controller lives as long as its instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuController {
    state: MenuState,
}

impl MenuController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Applies `transition` and returns `true` when the state changed.
    pub fn apply(&mut self, transition: MenuTransition) -> bool {
        let next = match transition {
            MenuTransition::ActivatorClicked => self.state.toggled(),
            MenuTransition::OutsideClick => MenuState::Closed,
        };
        let changed = next != self.state;
        self.state = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(MenuController::new().state(), MenuState::Closed);
    }

    #[test]
    fn activator_toggles() {
        let mut menu = MenuController::new();
        assert!(menu.apply(MenuTransition::ActivatorClicked));
        assert_eq!(menu.state(), MenuState::Open);
        assert!(menu.apply(MenuTransition::ActivatorClicked));
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn outside_click_only_closes() {
        let mut menu = MenuController::new();
        assert!(!menu.apply(MenuTransition::OutsideClick));
        assert_eq!(menu.state(), MenuState::Closed);

        menu.apply(MenuTransition::ActivatorClicked);
        assert!(menu.apply(MenuTransition::OutsideClick));
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn state_names() {
        assert_eq!(MenuState::Open.as_ref(), "open");
        assert_eq!(MenuTransition::OutsideClick.to_string(), "outside_click");
    }
}
