use hearth_core::notify::Notifier;
use hearth_core::submit::{
  StoreError,
  TaskStore
};
use hearth_shared::{
  NewTask,
  TaskCreateArgs,
  TaskDto
};
use serde::{
  Serialize,
  de::DeserializeOwned
};
use tauri_wasm::{
  args,
  invoke
};

use crate::components::toaster::ToastNotifier;

pub async fn invoke_tauri<R, A>(
  cmd: &str,
  args_payload: &A
) -> Result<R, StoreError>
where
  R: DeserializeOwned,
  A: Serialize + ?Sized
{
  let payload = args(args_payload)
    .map_err(|e| {
      StoreError::Encode(e.to_string())
    })?;
  let value = invoke(cmd)
    .with_args(payload)
    .await
    .map_err(|e| {
      StoreError::Invoke(format!("{e:?}"))
    })?;

  serde_wasm_bindgen::from_value(value)
    .map_err(|e| {
      StoreError::Decode(e.to_string())
    })
}

/// Task store backed by the host's `task_create` command. Reports its own
/// outcome through the toast stack.
#[derive(Clone, PartialEq)]
pub struct TauriTaskStore {
  notifier: ToastNotifier
}

impl TauriTaskStore {
  pub fn new(
    notifier: ToastNotifier
  ) -> Self {
    Self { notifier }
  }
}

impl TaskStore for TauriTaskStore {
  async fn create_task(
    &self,
    task: NewTask
  ) -> Result<TaskDto, StoreError> {
    let args = TaskCreateArgs { task };
    match invoke_tauri::<TaskDto, _>(
      "task_create",
      &args
    )
    .await
    {
      | Ok(created) => {
        tracing::info!(
          id = %created.id,
          created_at = %created.created_at,
          "task_create succeeded"
        );
        self
          .notifier
          .success("Task created");
        Ok(created)
      }
      | Err(error) => {
        tracing::error!(
          %error,
          "task_create failed"
        );
        self.notifier.error(&format!(
          "Failed to create task: {error}"
        ));
        Err(error)
      }
    }
  }
}
