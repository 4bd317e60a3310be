use std::cell::RefCell;
use std::collections::VecDeque;

/// Sink for user-facing messages.
pub trait Notifier {
  fn error(&self, message: &str);
  fn success(&self, message: &str);
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum ToastLevel {
  Success,
  Error
}

impl ToastLevel {
  pub fn as_class(self) -> &'static str {
    match self {
      | Self::Success => "toast-success",
      | Self::Error => "toast-error"
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
  pub id:      u64,
  pub level:   ToastLevel,
  pub message: String
}

/// Bounded stack of visible toasts, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastQueue {
  toasts:   VecDeque<Toast>,
  next_id:  u64,
  capacity: usize
}

impl Default for ToastQueue {
  fn default() -> Self {
    Self::with_capacity(
      Self::DEFAULT_CAPACITY
    )
  }
}

impl ToastQueue {
  pub const DEFAULT_CAPACITY: usize = 4;

  pub fn with_capacity(
    capacity: usize
  ) -> Self {
    Self {
      toasts: VecDeque::new(),
      next_id: 1,
      capacity: capacity.max(1)
    }
  }

  /// Adds a toast and returns its id. The oldest toast is evicted when the
  /// stack is full.
  pub fn push(
    &mut self,
    level: ToastLevel,
    message: impl Into<String>
  ) -> u64 {
    let id = self.next_id;
    self.next_id =
      self.next_id.wrapping_add(1);

    while self.toasts.len()
      >= self.capacity
    {
      self.toasts.pop_front();
    }
    self.toasts.push_back(Toast {
      id,
      level,
      message: message.into()
    });
    id
  }

  pub fn dismiss(
    &mut self,
    id: u64
  ) -> bool {
    let before = self.toasts.len();
    self
      .toasts
      .retain(|toast| toast.id != id);
    before != self.toasts.len()
  }

  pub fn iter(
    &self
  ) -> impl Iterator<Item = &Toast> {
    self.toasts.iter()
  }

  pub fn len(&self) -> usize {
    self.toasts.len()
  }

  pub fn is_empty(&self) -> bool {
    self.toasts.is_empty()
  }

  pub fn last_id(&self) -> Option<u64> {
    self
      .toasts
      .back()
      .map(|toast| toast.id)
  }
}

impl Notifier for RefCell<ToastQueue> {
  fn error(&self, message: &str) {
    self
      .borrow_mut()
      .push(ToastLevel::Error, message);
  }

  fn success(&self, message: &str) {
    self
      .borrow_mut()
      .push(ToastLevel::Success, message);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ids_increase_and_dismiss_removes_one()
  {
    let mut queue = ToastQueue::default();
    let first = queue.push(
      ToastLevel::Error,
      "first"
    );
    let second = queue.push(
      ToastLevel::Success,
      "second"
    );
    assert!(second > first);

    assert!(queue.dismiss(first));
    assert!(!queue.dismiss(first));
    assert_eq!(queue.len(), 1);
    assert_eq!(
      queue.last_id(),
      Some(second)
    );
  }

  #[test]
  fn full_stack_drops_oldest() {
    let mut queue =
      ToastQueue::with_capacity(2);
    queue.push(ToastLevel::Error, "a");
    queue.push(ToastLevel::Error, "b");
    queue.push(ToastLevel::Error, "c");

    let messages: Vec<&str> = queue
      .iter()
      .map(|toast| toast.message.as_str())
      .collect();
    assert_eq!(messages, vec!["b", "c"]);
  }

  #[test]
  fn queue_notifier_keeps_both_levels() {
    let toasts =
      RefCell::new(ToastQueue::default());
    toasts.error(
      "Please enter a task title"
    );
    toasts.success("Task created");

    let levels: Vec<ToastLevel> = toasts
      .borrow()
      .iter()
      .map(|toast| toast.level)
      .collect();
    assert_eq!(
      levels,
      vec![
        ToastLevel::Error,
        ToastLevel::Success
      ]
    );
  }
}
