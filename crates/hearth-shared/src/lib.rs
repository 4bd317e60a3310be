use chrono::{
  DateTime,
  NaiveDate,
  Utc
};
use serde::{
  Deserialize,
  Serialize
};
use uuid::Uuid;

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub enum TaskStatus {
  #[serde(rename = "To do")]
  ToDo,
  #[serde(rename = "In progress")]
  InProgress,
  #[serde(rename = "Done")]
  Done
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
  Low,
  Medium,
  High
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskImportance {
  Low,
  Normal,
  High
}

/// Top-level screens the navigation menu can switch between.
#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
  Default,
)]
#[serde(rename_all = "lowercase")]
pub enum AppView {
  #[default]
  Tasks,
  Observations,
  Fuel
}

impl AppView {
  pub const ALL: [AppView; 3] = [
    AppView::Tasks,
    AppView::Observations,
    AppView::Fuel
  ];

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Tasks => "tasks",
      | Self::Observations => {
        "observations"
      }
      | Self::Fuel => "fuel"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Tasks => "Tasks",
      | Self::Observations => {
        "Observations"
      }
      | Self::Fuel => "Fuel"
    }
  }

  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    Self::ALL
      .into_iter()
      .find(|view| view.as_key() == key)
  }
}

/// A task as submitted for creation. Identity is assigned by the store.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
  pub title:             String,
  pub description:       String,
  pub due_date:          NaiveDate,
  pub status:            TaskStatus,
  pub priority:          TaskPriority,
  pub importance:        TaskImportance,
  #[serde(default)]
  pub images:            Vec<String>,
  pub assignee_id:       Option<Uuid>,
  #[serde(default)]
  pub is_repeating:      bool,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub repeat_every_days: Option<u32>
}

impl NewTask {
  pub const INITIAL_IMPORTANCE:
    TaskImportance =
    TaskImportance::Normal;
  pub const INITIAL_PRIORITY:
    TaskPriority = TaskPriority::Medium;
  pub const INITIAL_STATUS: TaskStatus =
    TaskStatus::ToDo;
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
  pub id:         Uuid,
  pub created_at: DateTime<Utc>,
  #[serde(flatten)]
  pub task:       NewTask
}

impl TaskDto {
  pub fn from_new(
    task: NewTask,
    created_at: DateTime<Utc>
  ) -> Self {
    Self {
      id: Uuid::new_v4(),
      created_at,
      task
    }
  }
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct TaskCreateArgs {
  pub task: NewTask
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_task() -> NewTask {
    NewTask {
      title:             "Buy milk"
        .to_string(),
      description:       String::new(),
      due_date:          NaiveDate::from_ymd_opt(
        2024, 1, 1
      )
      .expect("valid date"),
      status:            NewTask::INITIAL_STATUS,
      priority:          NewTask::INITIAL_PRIORITY,
      importance:        NewTask::INITIAL_IMPORTANCE,
      images:            vec![],
      assignee_id:       None,
      is_repeating:      false,
      repeat_every_days: None
    }
  }

  #[test]
  fn new_task_wire_form_uses_store_field_names() {
    let value = serde_json::to_value(
      sample_task()
    )
    .expect("serialize task");

    assert_eq!(value["title"], "Buy milk");
    assert_eq!(
      value["dueDate"],
      "2024-01-01"
    );
    assert_eq!(value["status"], "To do");
    assert_eq!(
      value["priority"],
      "medium"
    );
    assert_eq!(
      value["importance"],
      "normal"
    );
    assert!(value["assigneeId"].is_null());
    assert!(
      value
        .get("repeatEveryDays")
        .is_none()
    );
  }

  #[test]
  fn repeat_interval_is_written_when_present()
  {
    let mut task = sample_task();
    task.is_repeating = true;
    task.repeat_every_days = Some(3);

    let value = serde_json::to_value(&task)
      .expect("serialize task");
    assert_eq!(value["isRepeating"], true);
    assert_eq!(
      value["repeatEveryDays"],
      3
    );
  }

  #[test]
  fn task_dto_flattens_record_fields() {
    let raw = r#"{
      "id": "6f1c8d0e-7c1b-4f43-9a55-2b0d8f3c1a11",
      "createdAt": "2024-01-01T08:00:00Z",
      "title": "Check tyre pressure",
      "description": "",
      "dueDate": "2024-01-02",
      "status": "In progress",
      "priority": "high",
      "importance": "low",
      "assigneeId": null
    }"#;

    let dto: TaskDto =
      serde_json::from_str(raw)
        .expect("parse dto");
    assert_eq!(
      dto.task.status,
      TaskStatus::InProgress
    );
    assert_eq!(
      dto.task.priority,
      TaskPriority::High
    );
    assert!(dto.task.images.is_empty());
    assert!(!dto.task.is_repeating);
  }

  #[test]
  fn app_view_keys_resolve_back() {
    for view in AppView::ALL {
      assert_eq!(
        AppView::from_key(view.as_key()),
        Some(view)
      );
    }
    assert_eq!(
      AppView::from_key("settings"),
      None
    );
  }
}
