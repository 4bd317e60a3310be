//! Open/closed state of the view switcher dropdown.
//!
//! The machine has two states and one transition function. Callbacks are
//! expressed as [`MenuEffect`] values so the caller decides how to fire them;
//! the component fires the effect before storing the next state.

use hearth_shared::AppView;
use tracing::debug;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub enum MenuState {
  #[default]
  Closed,
  Open
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum MenuEvent {
  Toggle,
  SelectView(AppView),
  SelectSettings,
  /// Pointer-down whose target lies outside the menu element.
  PointerDownOutside
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum MenuEffect {
  None,
  ViewChanged(AppView),
  OpenSettings
}

impl MenuState {
  pub fn is_open(self) -> bool {
    self == Self::Open
  }

  #[must_use]
  pub fn apply(
    self,
    event: MenuEvent
  ) -> (Self, MenuEffect) {
    let (next, effect) =
      match (self, event) {
        | (Self::Closed, MenuEvent::Toggle) => {
          (Self::Open, MenuEffect::None)
        }
        | (Self::Open, MenuEvent::Toggle) => {
          (Self::Closed, MenuEffect::None)
        }
        | (
          Self::Open,
          MenuEvent::SelectView(view)
        ) => (
          Self::Closed,
          MenuEffect::ViewChanged(view)
        ),
        | (
          Self::Open,
          MenuEvent::SelectSettings
        ) => (
          Self::Closed,
          MenuEffect::OpenSettings
        ),
        | (
          Self::Open,
          MenuEvent::PointerDownOutside
        ) => {
          (Self::Closed, MenuEffect::None)
        }
        | (Self::Closed, _) => {
          (Self::Closed, MenuEffect::None)
        }
      };

    if next != self {
      debug!(
        from = ?self,
        to = ?next,
        ?event,
        "menu transition"
      );
    }
    (next, effect)
  }
}

/// Whether the entry for `view` is emphasized for the current selection.
pub fn is_active_entry(
  view: AppView,
  current: Option<AppView>
) -> bool {
  current == Some(view)
}
