use chrono::NaiveDate;
use hearth_shared::NewTask;
use thiserror::Error;
use tracing::debug;

/// Format produced by `<input type="date">`.
pub const DATE_INPUT_FORMAT: &str =
  "%Y-%m-%d";

#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum DraftError {
  #[error("Please enter a task title")]
  EmptyTitle,
  #[error("Please choose a valid date")]
  InvalidDueDate(String)
}

/// One edit to a [`TaskDraft`], applied against whatever the draft holds
/// when it arrives.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftEdit {
  Title(String),
  Description(String),
  DueDate(String),
  Repeating(bool),
  RepeatEveryDaysInput(String),
  AppendImages(Vec<String>),
  RemoveImage(usize)
}

/// Editable state of the task creation form.
///
/// Every field is edited independently. The repeat interval keeps its value
/// while `is_repeating` is off so toggling the checkbox back on restores it,
/// but it is only carried into the assembled record while repeating.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
  title:             String,
  description:       String,
  due_date:          String,
  is_repeating:      bool,
  repeat_every_days: u32,
  images:            Vec<String>
}

impl TaskDraft {
  pub fn new(today: NaiveDate) -> Self {
    Self {
      title:             String::new(),
      description:       String::new(),
      due_date:          today
        .format(DATE_INPUT_FORMAT)
        .to_string(),
      is_repeating:      false,
      repeat_every_days: 1,
      images:            vec![]
    }
  }

  pub fn title(&self) -> &str {
    &self.title
  }

  pub fn description(&self) -> &str {
    &self.description
  }

  pub fn due_date(&self) -> &str {
    &self.due_date
  }

  pub fn is_repeating(&self) -> bool {
    self.is_repeating
  }

  pub fn repeat_every_days(&self) -> u32 {
    self.repeat_every_days
  }

  pub fn images(&self) -> &[String] {
    &self.images
  }

  pub fn set_title(
    &mut self,
    value: impl Into<String>
  ) {
    self.title = value.into();
  }

  pub fn set_description(
    &mut self,
    value: impl Into<String>
  ) {
    self.description = value.into();
  }

  pub fn set_due_date(
    &mut self,
    value: impl Into<String>
  ) {
    self.due_date = value.into();
  }

  pub fn set_repeating(
    &mut self,
    repeating: bool
  ) {
    self.is_repeating = repeating;
  }

  pub fn set_repeat_every_days(
    &mut self,
    days: i64
  ) {
    self.repeat_every_days =
      clamp_repeat_days(days);
  }

  /// Applies raw text from the numeric input. Anything that does not start
  /// with an integer counts as 1.
  pub fn set_repeat_every_days_input(
    &mut self,
    raw: &str
  ) {
    let days = parse_leading_int(raw)
      .unwrap_or(1);
    self.set_repeat_every_days(days);
    debug!(
      raw,
      days = self.repeat_every_days,
      "repeat interval edited"
    );
  }

  pub fn set_images(
    &mut self,
    images: Vec<String>
  ) {
    self.images = images;
  }

  /// Adds freshly read images after the ones already attached.
  pub fn append_images(
    &mut self,
    images: Vec<String>
  ) {
    self.images.extend(images);
  }

  /// Removes the image at `index`; out of range is a no-op.
  pub fn remove_image(
    &mut self,
    index: usize
  ) -> bool {
    if index >= self.images.len() {
      return false;
    }
    self.images.remove(index);
    true
  }

  /// Applies one edit to this draft.
  pub fn apply(&mut self, edit: DraftEdit) {
    match edit {
      | DraftEdit::Title(value) => {
        self.set_title(value)
      }
      | DraftEdit::Description(value) => {
        self.set_description(value)
      }
      | DraftEdit::DueDate(value) => {
        self.set_due_date(value)
      }
      | DraftEdit::Repeating(repeating) => {
        self.set_repeating(repeating)
      }
      | DraftEdit::RepeatEveryDaysInput(
        raw
      ) => {
        self
          .set_repeat_every_days_input(&raw)
      }
      | DraftEdit::AppendImages(images) => {
        self.append_images(images)
      }
      | DraftEdit::RemoveImage(index) => {
        if !self.remove_image(index) {
          debug!(
            index,
            images = self.images.len(),
            "stale image removal ignored"
          );
        }
      }
    }
  }

  pub fn validate(
    &self
  ) -> Result<(), DraftError> {
    self.checked_due_date().map(|_| ())
  }

  /// Builds the record handed to the task store.
  pub fn to_new_task(
    &self
  ) -> Result<NewTask, DraftError> {
    let due_date =
      self.checked_due_date()?;

    Ok(NewTask {
      title: self
        .title
        .trim()
        .to_string(),
      description: self
        .description
        .trim()
        .to_string(),
      due_date,
      status: NewTask::INITIAL_STATUS,
      priority: NewTask::INITIAL_PRIORITY,
      importance:
        NewTask::INITIAL_IMPORTANCE,
      images: self.images.clone(),
      assignee_id: None,
      is_repeating: self.is_repeating,
      repeat_every_days: self
        .is_repeating
        .then_some(
          self.repeat_every_days
        )
    })
  }

  fn checked_due_date(
    &self
  ) -> Result<NaiveDate, DraftError> {
    if self.title.trim().is_empty() {
      return Err(DraftError::EmptyTitle);
    }
    self.parsed_due_date()
  }

  fn parsed_due_date(
    &self
  ) -> Result<NaiveDate, DraftError> {
    NaiveDate::parse_from_str(
      self.due_date.trim(),
      DATE_INPUT_FORMAT
    )
    .map_err(|_| {
      DraftError::InvalidDueDate(
        self.due_date.clone()
      )
    })
  }
}

fn clamp_repeat_days(days: i64) -> u32 {
  u32::try_from(days.max(1))
    .unwrap_or(u32::MAX)
}

fn parse_leading_int(
  raw: &str
) -> Option<i64> {
  let trimmed = raw.trim_start();
  let (sign, rest) = match trimmed
    .strip_prefix('-')
  {
    | Some(rest) => (-1, rest),
    | None => {
      (
        1,
        trimmed
          .strip_prefix('+')
          .unwrap_or(trimmed)
      )
    }
  };

  let digits: String = rest
    .chars()
    .take_while(char::is_ascii_digit)
    .collect();
  if digits.is_empty() {
    return None;
  }

  let magnitude = digits
    .parse::<i64>()
    .unwrap_or(i64::MAX);
  Some(sign * magnitude)
}

#[cfg(test)]
mod tests {
  use hearth_shared::{
    TaskImportance,
    TaskPriority,
    TaskStatus
  };

  use super::*;

  fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1)
      .expect("valid date")
  }

  #[test]
  fn fresh_draft_defaults_to_today_and_one_day()
  {
    let draft = TaskDraft::new(today());
    assert_eq!(
      draft.due_date(),
      "2024-01-01"
    );
    assert_eq!(
      draft.repeat_every_days(),
      1
    );
    assert!(!draft.is_repeating());
    assert!(draft.images().is_empty());
  }

  #[test]
  fn repeat_interval_never_drops_below_one()
  {
    let mut draft = TaskDraft::new(today());
    for raw in [
      "0", "-4", "", "abc", "  ", "-",
      "1e3"
    ] {
      draft
        .set_repeat_every_days_input(raw);
      assert!(
        draft.repeat_every_days() >= 1,
        "input {raw:?}"
      );
    }

    draft.set_repeat_every_days(-20);
    assert_eq!(
      draft.repeat_every_days(),
      1
    );
  }

  #[test]
  fn repeat_interval_reads_leading_integer()
  {
    let mut draft = TaskDraft::new(today());
    draft.set_repeat_every_days_input("7");
    assert_eq!(
      draft.repeat_every_days(),
      7
    );
    draft
      .set_repeat_every_days_input("2.9");
    assert_eq!(
      draft.repeat_every_days(),
      2
    );
    draft.set_repeat_every_days_input(
      " 14 days"
    );
    assert_eq!(
      draft.repeat_every_days(),
      14
    );
    draft.set_repeat_every_days_input(
      "99999999999999999999"
    );
    assert_eq!(
      draft.repeat_every_days(),
      u32::MAX
    );
  }

  #[test]
  fn blank_titles_are_rejected() {
    let mut draft = TaskDraft::new(today());
    for title in ["", " ", "\t\n  "] {
      draft.set_title(title);
      assert_eq!(
        draft.to_new_task(),
        Err(DraftError::EmptyTitle)
      );
    }
  }

  #[test]
  fn assembled_record_is_trimmed_with_fixed_defaults()
  {
    let mut draft = TaskDraft::new(today());
    draft.set_title("  Buy milk ");
    draft.set_description(
      "\n semi-skimmed  "
    );
    draft.set_images(vec![
      "data:image/png;base64,AAAA"
        .to_string(),
    ]);

    let task = draft
      .to_new_task()
      .expect("valid draft");
    assert_eq!(task.title, "Buy milk");
    assert_eq!(
      task.description,
      "semi-skimmed"
    );
    assert_eq!(task.due_date, today());
    assert_eq!(
      task.status,
      TaskStatus::ToDo
    );
    assert_eq!(
      task.priority,
      TaskPriority::Medium
    );
    assert_eq!(
      task.importance,
      TaskImportance::Normal
    );
    assert_eq!(task.images.len(), 1);
    assert_eq!(task.assignee_id, None);
  }

  #[test]
  fn interval_is_dropped_when_not_repeating()
  {
    let mut draft = TaskDraft::new(today());
    draft.set_title("Water plants");
    draft.set_repeat_every_days(5);

    let task = draft
      .to_new_task()
      .expect("valid draft");
    assert!(!task.is_repeating);
    assert_eq!(task.repeat_every_days, None);

    draft.set_repeating(true);
    let task = draft
      .to_new_task()
      .expect("valid draft");
    assert_eq!(
      task.repeat_every_days,
      Some(5)
    );
  }

  #[test]
  fn unparseable_due_date_is_rejected() {
    let mut draft = TaskDraft::new(today());
    draft.set_title("Service car");
    draft.set_due_date("");
    assert!(matches!(
      draft.to_new_task(),
      Err(DraftError::InvalidDueDate(_))
    ));
  }

  #[test]
  fn late_image_read_keeps_newer_edits() {
    let mut draft = TaskDraft::new(today());
    draft.apply(DraftEdit::AppendImages(
      vec!["data:a".to_string()]
    ));

    // Another file is picked, then the form is edited before it loads.
    draft.apply(DraftEdit::Title(
      "Buy milk".to_string()
    ));
    draft.apply(DraftEdit::Description(
      "semi-skimmed".to_string()
    ));
    draft.apply(DraftEdit::RemoveImage(0));
    draft.apply(DraftEdit::AppendImages(
      vec!["data:b".to_string()]
    ));

    assert_eq!(draft.title(), "Buy milk");
    assert_eq!(
      draft.description(),
      "semi-skimmed"
    );
    assert_eq!(
      draft.images(),
      ["data:b".to_string()]
    );
  }

  #[test]
  fn out_of_range_image_removal_is_ignored()
  {
    let mut draft = TaskDraft::new(today());
    draft.apply(DraftEdit::AppendImages(
      vec!["data:a".to_string()]
    ));
    draft.apply(DraftEdit::RemoveImage(3));
    assert_eq!(draft.images().len(), 1);
    assert!(!draft.remove_image(1));
  }

  #[test]
  fn empty_title_wins_over_bad_date() {
    let mut draft = TaskDraft::new(today());
    draft.set_due_date("not a date");
    assert_eq!(
      draft.to_new_task(),
      Err(DraftError::EmptyTitle)
    );
    draft.set_title("Check tyres");
    assert_eq!(
      draft.validate(),
      Err(DraftError::InvalidDueDate(
        "not a date".to_string()
      ))
    );
  }
}
