pub mod dismiss;
pub mod draft;
pub mod menu;
pub mod notify;
pub mod settings;
pub mod submit;
pub mod theme;

pub use dismiss::{
  DismissOnce,
  DismissReason
};
pub use draft::{
  DraftEdit,
  DraftError,
  TaskDraft
};
pub use menu::{
  MenuEffect,
  MenuEvent,
  MenuState
};
pub use notify::Notifier;
pub use settings::Settings;
pub use submit::{
  InFlightFlag,
  StoreError,
  SubmitOutcome,
  TaskStore,
  submit_draft
};
pub use theme::Theme;
