use std::cell::Cell;
use std::future::Future;

use hearth_shared::{
  NewTask,
  TaskDto
};
use thiserror::Error;
use tracing::{
  debug,
  info,
  warn
};

use crate::draft::{
  DraftError,
  TaskDraft
};
use crate::notify::Notifier;

#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum StoreError {
  #[error("failed to encode args: {0}")]
  Encode(String),
  #[error("invoke error: {0}")]
  Invoke(String),
  #[error("decode error: {0}")]
  Decode(String)
}

/// Creation side of the task store.
///
/// Implementations report their own failures to the user; callers only
/// learn that creation did not happen.
pub trait TaskStore {
  fn create_task(
    &self,
    task: NewTask
  ) -> impl Future<
    Output = Result<TaskDto, StoreError>
  >;
}

/// Flag gating re-entrant submission while a create call is pending.
pub trait InFlightFlag {
  fn is_set(&self) -> bool;
  fn set(&self, busy: bool);
}

impl InFlightFlag for Cell<bool> {
  fn is_set(&self) -> bool {
    self.get()
  }

  fn set(&self, busy: bool) {
    Cell::set(self, busy);
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
  /// The store created the task; the dialog should dismiss.
  Created(TaskDto),
  /// Local validation failed and was reported through the notifier.
  Rejected(DraftError),
  /// The store failed; it has already reported the problem.
  Failed(StoreError),
  /// A previous submission is still pending.
  Ignored
}

impl SubmitOutcome {
  pub fn should_dismiss(&self) -> bool {
    matches!(self, Self::Created(_))
  }
}

struct InFlightGuard<'a, F>
where
  F: InFlightFlag + ?Sized
{
  flag: &'a F
}

impl<'a, F> InFlightGuard<'a, F>
where
  F: InFlightFlag + ?Sized
{
  fn raise(flag: &'a F) -> Self {
    flag.set(true);
    Self { flag }
  }
}

impl<F> Drop for InFlightGuard<'_, F>
where
  F: InFlightFlag + ?Sized
{
  fn drop(&mut self) {
    self.flag.set(false);
  }
}

/// Validates the draft and hands the assembled task to the store.
///
/// The in-flight flag is raised only once validation passes and is lowered
/// when this future completes or is dropped.
#[tracing::instrument(skip_all)]
pub async fn submit_draft<S, N, F>(
  draft: &TaskDraft,
  store: &S,
  notifier: &N,
  in_flight: &F
) -> SubmitOutcome
where
  S: TaskStore + ?Sized,
  N: Notifier + ?Sized,
  F: InFlightFlag + ?Sized
{
  if in_flight.is_set() {
    debug!(
      "ignored submit while a create \
       call is pending"
    );
    return SubmitOutcome::Ignored;
  }

  let task = match draft.to_new_task() {
    | Ok(task) => task,
    | Err(error) => {
      warn!(%error, "task draft rejected");
      notifier.error(&error.to_string());
      return SubmitOutcome::Rejected(
        error
      );
    }
  };

  let _guard =
    InFlightGuard::raise(in_flight);
  debug!(
    title_len = task.title.len(),
    desc_len = task.description.len(),
    images = task.images.len(),
    repeating = task.is_repeating,
    "creating task"
  );

  match store.create_task(task).await {
    | Ok(created) => {
      info!(id = %created.id, "task created");
      SubmitOutcome::Created(created)
    }
    | Err(error) => {
      warn!(%error, "task creation failed");
      SubmitOutcome::Failed(error)
    }
  }
}
