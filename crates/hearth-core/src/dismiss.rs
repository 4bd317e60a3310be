use std::cell::Cell;

use tracing::debug;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum DismissReason {
  Cancel,
  Close,
  Created
}

impl DismissReason {
  pub fn as_str(self) -> &'static str {
    match self {
      | Self::Cancel => "cancel",
      | Self::Close => "close",
      | Self::Created => "created"
    }
  }
}

/// Close callback that runs at most once, whichever control asks first.
pub struct DismissOnce<F>
where
  F: Fn()
{
  on_close: F,
  done:     Cell<bool>
}

impl<F> DismissOnce<F>
where
  F: Fn()
{
  pub fn new(on_close: F) -> Self {
    Self {
      on_close,
      done: Cell::new(false)
    }
  }

  /// Runs the callback unless it already ran. Returns whether it ran.
  pub fn fire(
    &self,
    reason: DismissReason
  ) -> bool {
    if self.done.replace(true) {
      debug!(
        reason = reason.as_str(),
        "dismiss already handled"
      );
      return false;
    }
    debug!(
      reason = reason.as_str(),
      "dismissing"
    );
    (self.on_close)();
    true
  }

  pub fn is_done(&self) -> bool {
    self.done.get()
  }
}
