use std::cell::{Cell, RefCell};

use chrono::{NaiveDate, Utc};
use hearth_core::dismiss::{DismissOnce, DismissReason};
use hearth_core::draft::TaskDraft;
use hearth_core::notify::Notifier;
use hearth_core::submit::{StoreError, SubmitOutcome, TaskStore, submit_draft};
use hearth_shared::{NewTask, TaskDto, TaskImportance, TaskPriority, TaskStatus};

#[derive(Default)]
struct MemoryStore {
    created: RefCell<Vec<NewTask>>,
    reject: bool,
}

impl TaskStore for MemoryStore {
    async fn create_task(&self, task: NewTask) -> Result<TaskDto, StoreError> {
        self.created.borrow_mut().push(task.clone());
        if self.reject {
            return Err(StoreError::Invoke("row level security".to_string()));
        }
        Ok(TaskDto::from_new(task, Utc::now()))
    }
}

#[derive(Default)]
struct RecordingNotifier {
    errors: RefCell<Vec<String>>,
    successes: RefCell<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn success(&self, message: &str) {
        self.successes.borrow_mut().push(message.to_string());
    }
}

/// Submits and, like the dialog, dismisses through the latch on success.
async fn submit_and_dismiss<F: Fn()>(
    draft: &TaskDraft,
    store: &MemoryStore,
    notifier: &RecordingNotifier,
    in_flight: &Cell<bool>,
    dismiss: &DismissOnce<F>,
) -> SubmitOutcome {
    let outcome = submit_draft(draft, store, notifier, in_flight).await;
    if outcome.should_dismiss() {
        dismiss.fire(DismissReason::Created);
    }
    outcome
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 12, 30).expect("valid date")
}

#[tokio::test]
async fn empty_title_raises_notice_and_keeps_dialog_open() {
    let store = MemoryStore::default();
    let notifier = RecordingNotifier::default();
    let in_flight = Cell::new(false);
    let dismissals = Cell::new(0);
    let dismiss = DismissOnce::new(|| dismissals.set(dismissals.get() + 1));

    let draft = TaskDraft::new(today());
    let outcome = submit_and_dismiss(&draft, &store, &notifier, &in_flight, &dismiss).await;

    assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
    assert_eq!(notifier.errors.borrow().len(), 1);
    assert_eq!(store.created.borrow().len(), 0);
    assert_eq!(dismissals.get(), 0);
    assert!(!in_flight.get());
}

#[tokio::test]
async fn whitespace_titles_never_reach_the_store() {
    let store = MemoryStore::default();
    let notifier = RecordingNotifier::default();
    let in_flight = Cell::new(false);

    for title in ["", " ", "   ", "\t", "\n \r\n"] {
        let mut draft = TaskDraft::new(today());
        draft.set_title(title);
        submit_draft(&draft, &store, &notifier, &in_flight).await;
    }

    assert!(store.created.borrow().is_empty());
    assert_eq!(notifier.errors.borrow().len(), 5);
}

#[tokio::test]
async fn buy_milk_is_created_once_and_dismisses() {
    let store = MemoryStore::default();
    let notifier = RecordingNotifier::default();
    let in_flight = Cell::new(false);
    let dismissals = Cell::new(0);
    let dismiss = DismissOnce::new(|| dismissals.set(dismissals.get() + 1));

    let mut draft = TaskDraft::new(today());
    draft.set_title("Buy milk");
    draft.set_due_date("2024-01-01");

    let outcome = submit_and_dismiss(&draft, &store, &notifier, &in_flight, &dismiss).await;

    let created = store.created.borrow();
    assert_eq!(created.len(), 1);
    let task = &created[0];
    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.status, TaskStatus::ToDo);
    assert_eq!(task.priority, TaskPriority::Medium);
    assert_eq!(task.importance, TaskImportance::Normal);
    assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"));
    assert_eq!(task.repeat_every_days, None);

    match outcome {
        SubmitOutcome::Created(dto) => assert_eq!(dto.task.title, "Buy milk"),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(dismissals.get(), 1);
    assert!(notifier.errors.borrow().is_empty());
    assert!(!in_flight.get());
}

#[tokio::test]
async fn padded_title_is_sent_trimmed() {
    let store = MemoryStore::default();
    let notifier = RecordingNotifier::default();
    let in_flight = Cell::new(false);

    let mut draft = TaskDraft::new(today());
    draft.set_title("   Refuel van  ");
    draft.set_repeating(true);
    draft.set_repeat_every_days_input("14");

    submit_draft(&draft, &store, &notifier, &in_flight).await;

    let created = store.created.borrow();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].title, "Refuel van");
    assert!(created[0].is_repeating);
    assert_eq!(created[0].repeat_every_days, Some(14));
}

#[tokio::test]
async fn store_failure_leaves_dialog_editable() {
    let store = MemoryStore {
        reject: true,
        ..MemoryStore::default()
    };
    let notifier = RecordingNotifier::default();
    let in_flight = Cell::new(false);
    let dismissals = Cell::new(0);
    let dismiss = DismissOnce::new(|| dismissals.set(dismissals.get() + 1));

    let mut draft = TaskDraft::new(today());
    draft.set_title("Log observation");

    let outcome = submit_and_dismiss(&draft, &store, &notifier, &in_flight, &dismiss).await;
    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(dismissals.get(), 0);
    assert!(!in_flight.get());

    // A retry after the failure goes through to the store again.
    submit_and_dismiss(&draft, &store, &notifier, &in_flight, &dismiss).await;
    assert_eq!(store.created.borrow().len(), 2);
}

#[tokio::test]
async fn close_during_pending_create_dismisses_once() {
    let store = MemoryStore::default();
    let notifier = RecordingNotifier::default();
    let in_flight = Cell::new(false);
    let dismissals = Cell::new(0);
    let dismiss = DismissOnce::new(|| dismissals.set(dismissals.get() + 1));

    let mut draft = TaskDraft::new(today());
    draft.set_title("Top up coolant");

    // The close control is pressed before the create call resolves.
    assert!(dismiss.fire(DismissReason::Close));
    let outcome = submit_and_dismiss(&draft, &store, &notifier, &in_flight, &dismiss).await;

    assert!(outcome.should_dismiss());
    assert_eq!(store.created.borrow().len(), 1);
    assert_eq!(dismissals.get(), 1);
}

#[test]
fn cancel_then_close_dismisses_once() {
    let dismissals = Cell::new(0);
    let dismiss = DismissOnce::new(|| dismissals.set(dismissals.get() + 1));

    assert!(dismiss.fire(DismissReason::Cancel));
    assert!(!dismiss.fire(DismissReason::Close));
    assert!(!dismiss.fire(DismissReason::Created));
    assert_eq!(dismissals.get(), 1);
}
