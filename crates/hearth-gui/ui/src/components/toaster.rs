use std::rc::Rc;

use gloo::timers::callback::Timeout;
use hearth_core::notify::{
  Notifier,
  Toast,
  ToastLevel,
  ToastQueue
};
use hearth_core::theme::Theme;
use yew::{
  Callback,
  Html,
  Properties,
  Reducible,
  UseReducerDispatcher,
  classes,
  function_component,
  hook,
  html,
  use_context,
  use_effect_with
};

use crate::settings::use_dark_mode;

const TOAST_LIFETIME_MS: u32 = 4_000;

#[derive(Clone, PartialEq, Default)]
pub struct ToastStack {
  queue: ToastQueue
}

pub enum ToastAction {
  Push(ToastLevel, String),
  Dismiss(u64)
}

impl Reducible for ToastStack {
  type Action = ToastAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next = (*self).clone();
    match action {
      | ToastAction::Push(level, message) => {
        let id =
          next.queue.push(level, message);
        tracing::debug!(id, "toast shown");
      }
      | ToastAction::Dismiss(id) => {
        if !next.queue.dismiss(id) {
          return self;
        }
      }
    }
    next.into()
  }
}

/// [`Notifier`] that feeds the toast stack. Without a mounted stack the
/// messages only go to the log.
#[derive(Clone, PartialEq)]
pub struct ToastNotifier {
  dispatcher:
    Option<UseReducerDispatcher<ToastStack>>
}

impl ToastNotifier {
  pub fn new(
    dispatcher: UseReducerDispatcher<
      ToastStack
    >
  ) -> Self {
    Self {
      dispatcher: Some(dispatcher)
    }
  }

  fn push(
    &self,
    level: ToastLevel,
    message: &str
  ) {
    match &self.dispatcher {
      | Some(dispatcher) => dispatcher
        .dispatch(ToastAction::Push(
          level,
          message.to_string()
        )),
      | None => tracing::warn!(
        ?level,
        text = message,
        "no toast stack mounted"
      )
    }
  }
}

impl Notifier for ToastNotifier {
  fn error(&self, message: &str) {
    self.push(ToastLevel::Error, message);
  }

  fn success(&self, message: &str) {
    self
      .push(ToastLevel::Success, message);
  }
}

#[hook]
pub fn use_notifier() -> ToastNotifier {
  use_context::<ToastNotifier>()
    .unwrap_or(ToastNotifier {
      dispatcher: None
    })
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
  pub stack:      ToastStack,
  pub dispatcher:
    UseReducerDispatcher<ToastStack>
}

#[function_component(Toaster)]
pub fn toaster(
  props: &ToasterProps
) -> Html {
  html! {
      <div class="fixed bottom-4 right-4 z-[60] flex flex-col gap-2">
          {
              for props.stack.queue.iter().map(|toast| html! {
                  <ToastItem
                      key={toast.id}
                      toast={toast.clone()}
                      dispatcher={props.dispatcher.clone()}
                  />
              })
          }
      </div>
  }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
  toast:      Toast,
  dispatcher:
    UseReducerDispatcher<ToastStack>
}

#[function_component(ToastItem)]
fn toast_item(
  props: &ToastItemProps
) -> Html {
  let theme =
    Theme::resolve(use_dark_mode());
  let id = props.toast.id;

  {
    let dispatcher =
      props.dispatcher.clone();
    use_effect_with(id, move |id| {
      let id = *id;
      let timeout = Timeout::new(
        TOAST_LIFETIME_MS,
        move || {
          dispatcher.dispatch(
            ToastAction::Dismiss(id)
          );
        }
      );
      move || drop(timeout)
    });
  }

  let on_dismiss = {
    let dispatcher =
      props.dispatcher.clone();
    Callback::from(move |_: yew::MouseEvent| {
      dispatcher
        .dispatch(ToastAction::Dismiss(id));
    })
  };

  html! {
      <div
          class={classes!(
              "px-4", "py-3", "rounded-md", "shadow-lg", "text-sm", "flex", "items-center", "gap-3",
              theme.toast,
              props.toast.level.as_class()
          )}
          role="status"
      >
          <span class="flex-1">{ &props.toast.message }</span>
          <button type="button" class="opacity-60 hover:opacity-100" onclick={on_dismiss}>{ "✕" }</button>
      </div>
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn dismissing_unknown_toast_keeps_same_stack()
  {
    let stack = Rc::new(
      ToastStack::default()
    )
    .reduce(ToastAction::Push(
      ToastLevel::Error,
      "Please enter a task title"
        .to_string()
    ));
    assert_eq!(stack.queue.len(), 1);

    let same = Rc::clone(&stack)
      .reduce(ToastAction::Dismiss(999));
    assert!(Rc::ptr_eq(&stack, &same));

    let id = stack
      .queue
      .last_id()
      .expect("pushed toast");
    let cleared = stack
      .reduce(ToastAction::Dismiss(id));
    assert!(cleared.queue.is_empty());
  }
}
