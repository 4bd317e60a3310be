use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use hearth_core::dismiss::{
  DismissOnce,
  DismissReason
};
use hearth_core::draft::{
  DraftEdit,
  TaskDraft
};
use hearth_core::submit::{
  InFlightFlag,
  submit_draft
};
use hearth_core::theme::Theme;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  Reducible,
  TargetCast,
  UseStateHandle,
  classes,
  function_component,
  html,
  use_effect_with,
  use_memo,
  use_mut_ref,
  use_reducer,
  use_state
};

use crate::api::TauriTaskStore;
use crate::components::ImagePicker;
use crate::components::toaster::use_notifier;
use crate::dom::{
  ScrollLock,
  ui_debug
};
use crate::settings::use_dark_mode;

const INPUT_BASE: &str = "w-full px-3 \
                          py-2 rounded-md \
                          shadow-sm \
                          focus:ring-blue-500 \
                          focus:border-blue-500";

/// In-flight flag shared by the form and the pending submission. The latch
/// is read synchronously so a second submit queued before the next render
/// still sees the first one.
#[derive(Clone)]
struct SubmittingFlag {
  shown: UseStateHandle<bool>,
  latch: Rc<RefCell<bool>>
}

impl InFlightFlag for SubmittingFlag {
  fn is_set(&self) -> bool {
    *self.latch.borrow()
  }

  fn set(&self, busy: bool) {
    *self.latch.borrow_mut() = busy;
    self.shown.set(busy);
  }
}

/// Draft owned by the dialog. Edits land on the latest state, so an image
/// read that finishes late cannot roll back fields typed in the meantime.
#[derive(Clone, PartialEq)]
struct DraftModel(TaskDraft);

impl Reducible for DraftModel {
  type Action = DraftEdit;

  fn reduce(
    self: Rc<Self>,
    edit: Self::Action
  ) -> Rc<Self> {
    let mut next = self.0.clone();
    next.apply(edit);
    Rc::new(Self(next))
  }
}

#[derive(Properties, PartialEq)]
pub struct TaskCreationDialogProps {
  pub on_close: Callback<()>
}

#[function_component(TaskCreationDialog)]
pub fn task_creation_dialog(
  props: &TaskCreationDialogProps
) -> Html {
  let theme =
    Theme::resolve(use_dark_mode());
  let notifier = use_notifier();
  let draft = use_reducer(|| {
    DraftModel(TaskDraft::new(
      Utc::now().date_naive()
    ))
  });
  let submitting = use_state(|| false);
  let latch = use_mut_ref(|| false);
  let dismiss = {
    let on_close = props.on_close.clone();
    use_memo((), move |_| {
      DismissOnce::new(move || {
        ui_debug(
          "dialog.dismiss",
          "on_close"
        );
        on_close.emit(());
      })
    })
  };

  use_effect_with((), |_| {
    let lock = ScrollLock::acquire();
    move || drop(lock)
  });

  let flag = SubmittingFlag {
    shown: submitting.clone(),
    latch
  };
  let is_submitting = *submitting;

  let on_title = {
    let edits = draft.dispatcher();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        edits.dispatch(DraftEdit::Title(
          input.value()
        ));
      }
    )
  };
  let on_description = {
    let edits = draft.dispatcher();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlTextAreaElement =
          e.target_unchecked_into();
        edits.dispatch(
          DraftEdit::Description(
            input.value()
          )
        );
      }
    )
  };
  let on_due_date = {
    let edits = draft.dispatcher();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        edits.dispatch(DraftEdit::DueDate(
          input.value()
        ));
      }
    )
  };
  let on_repeating = {
    let edits = draft.dispatcher();
    Callback::from(
      move |e: web_sys::Event| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        edits.dispatch(
          DraftEdit::Repeating(
            input.checked()
          )
        );
      }
    )
  };
  let on_repeat_days = {
    let edits = draft.dispatcher();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        edits.dispatch(
          DraftEdit::RepeatEveryDaysInput(
            input.value()
          )
        );
      }
    )
  };
  let on_images_added = {
    let edits = draft.dispatcher();
    Callback::from(
      move |images: Vec<String>| {
        edits.dispatch(
          DraftEdit::AppendImages(images)
        );
      }
    )
  };
  let on_image_removed = {
    let edits = draft.dispatcher();
    Callback::from(move |index: usize| {
      edits.dispatch(
        DraftEdit::RemoveImage(index)
      );
    })
  };

  let on_cancel = {
    let dismiss = dismiss.clone();
    Callback::from(move |_: MouseEvent| {
      dismiss.fire(DismissReason::Cancel);
    })
  };
  let on_close_click = {
    let dismiss = dismiss.clone();
    Callback::from(move |_: MouseEvent| {
      dismiss.fire(DismissReason::Close);
    })
  };

  let on_submit = {
    let draft = draft.clone();
    let flag = flag.clone();
    let dismiss = dismiss.clone();
    Callback::from(
      move |e: web_sys::SubmitEvent| {
        e.prevent_default();
        let snapshot = draft.0.clone();
        let flag = flag.clone();
        let dismiss = dismiss.clone();
        let notifier = notifier.clone();
        let store = TauriTaskStore::new(
          notifier.clone()
        );
        ui_debug(
          "dialog.submit",
          &format!(
            "title_len={}, desc_len={}, \
             repeating={}",
            snapshot.title().len(),
            snapshot.description().len(),
            snapshot.is_repeating()
          )
        );

        wasm_bindgen_futures::spawn_local(
          async move {
            let outcome = submit_draft(
              &snapshot, &store,
              &notifier, &flag
            )
            .await;
            if outcome.should_dismiss() {
              dismiss
                .fire(DismissReason::Created);
            }
          }
        );
      }
    )
  };

  html! {
      <div class="fixed inset-0 bg-black bg-opacity-50 z-50 flex items-start justify-center overflow-y-auto">
          <div class="min-h-screen py-8 px-4 flex items-center justify-center pointer-events-none">
              <div class={classes!("rounded-lg", "shadow-xl", "w-full", "max-w-lg", "pointer-events-auto", theme.dialog_surface)}>
                  <form onsubmit={on_submit}>
                      <div class={classes!("flex", "justify-between", "items-center", "p-6", "border-b", theme.dialog_header)}>
                          <h2 class={classes!("text-2xl", "font-bold", theme.dialog_title)}>{ "New Task" }</h2>
                          <button
                              type="button"
                              class={classes!("p-2", "rounded-full", theme.icon_button)}
                              onclick={on_close_click}
                          >
                              <span class="w-6 h-6">{ "✕" }</span>
                          </button>
                      </div>

                      <div class="p-6 space-y-6">
                          <div>
                              <label for="title" class={classes!("block", "text-sm", "font-medium", "mb-1", theme.field_label)}>
                                  { "Title" }
                              </label>
                              <input
                                  type="text"
                                  id="title"
                                  value={draft.0.title().to_string()}
                                  oninput={on_title}
                                  class={classes!(INPUT_BASE, theme.text_input)}
                                  placeholder="Enter task title"
                              />
                          </div>

                          <div>
                              <label for="description" class={classes!("block", "text-sm", "font-medium", "mb-1", theme.field_label)}>
                                  { "Description" }
                              </label>
                              <textarea
                                  id="description"
                                  rows="4"
                                  value={draft.0.description().to_string()}
                                  oninput={on_description}
                                  class={classes!(INPUT_BASE, theme.text_input)}
                                  placeholder="Enter task description"
                              />
                          </div>

                          <div>
                              <label for="toDoDate" class={classes!("block", "text-sm", "font-medium", "mb-1", theme.field_label)}>
                                  { "To Do Date" }
                              </label>
                              <input
                                  type="date"
                                  id="toDoDate"
                                  value={draft.0.due_date().to_string()}
                                  oninput={on_due_date}
                                  class={classes!(INPUT_BASE, theme.text_input)}
                              />
                          </div>

                          <div class="space-y-4">
                              <div class="flex items-center">
                                  <input
                                      type="checkbox"
                                      id="isRepeating"
                                      checked={draft.0.is_repeating()}
                                      onchange={on_repeating}
                                      class={classes!("h-4", "w-4", "rounded", "focus:ring-blue-500", theme.checkbox)}
                                  />
                                  <label for="isRepeating" class={classes!("ml-2", "block", "text-sm", theme.checkbox_label)}>
                                      { "Repeating Task" }
                                  </label>
                              </div>
                              {
                                  if draft.0.is_repeating() {
                                      html! {
                                          <div class="flex items-center gap-2">
                                              <label for="repeatEveryDays" class={classes!("text-sm", theme.inline_label)}>
                                                  { "Repeat every" }
                                              </label>
                                              <input
                                                  type="number"
                                                  id="repeatEveryDays"
                                                  min="1"
                                                  value={draft.0.repeat_every_days().to_string()}
                                                  oninput={on_repeat_days}
                                                  class={classes!(
                                                      "w-20", "px-2", "py-1", "rounded-md", "shadow-sm",
                                                      "focus:ring-blue-500", "focus:border-blue-500",
                                                      theme.text_input
                                                  )}
                                              />
                                              <span class={classes!("text-sm", theme.inline_label)}>{ "days" }</span>
                                          </div>
                                      }
                                  } else {
                                      html! {}
                                  }
                              }
                          </div>

                          <ImagePicker
                              images={draft.0.images().to_vec()}
                              {on_images_added}
                              {on_image_removed}
                              disabled={is_submitting}
                          />
                      </div>

                      <div class={classes!("flex", "justify-end", "gap-3", "px-6", "py-4", "rounded-b-lg", theme.dialog_footer)}>
                          <button
                              type="button"
                              class={classes!(
                                  "px-4", "py-2", "text-sm", "font-medium", "rounded-md", "shadow-sm",
                                  "focus:outline-none", "focus:ring-2", "focus:ring-offset-2", "focus:ring-blue-500",
                                  theme.cancel_button
                              )}
                              onclick={on_cancel}
                              disabled={is_submitting}
                          >
                              { "Cancel" }
                          </button>
                          <button
                              type="submit"
                              class={classes!(
                                  "inline-flex", "items-center", "px-4", "py-2", "text-sm", "font-medium",
                                  "text-white", "bg-blue-600", "border", "border-transparent", "rounded-md",
                                  "shadow-sm", "hover:bg-blue-700", "focus:outline-none", "focus:ring-2",
                                  "focus:ring-offset-2", "focus:ring-blue-500", "disabled:opacity-50",
                                  theme.submit_ring
                              )}
                              disabled={is_submitting}
                          >
                              {
                                  if is_submitting {
                                      html! {
                                          <>
                                              <span class="w-4 h-4 mr-2 animate-spin">{ "⟳" }</span>
                                              { "Creating..." }
                                          </>
                                      }
                                  } else {
                                      html! {
                                          <>
                                              <span class="w-4 h-4 mr-2">{ "💾" }</span>
                                              { "Create Task" }
                                          </>
                                      }
                                  }
                              }
                          </button>
                      </div>
                  </form>
              </div>
          </div>
      </div>
  }
}
