use hearth_core::theme::Theme;
use hearth_shared::AppView;
use yew::{
  Callback,
  ContextProvider,
  Html,
  MouseEvent,
  classes,
  function_component,
  html,
  use_effect_with,
  use_reducer,
  use_state
};

use crate::components::toaster::{
  ToastNotifier,
  ToastStack
};
use crate::components::{
  SettingsModal,
  TaskCreationDialog,
  Toaster,
  ViewSwitcherMenu
};
use crate::dom::ui_debug;
use crate::settings::{
  SettingsHandle,
  load_settings,
  save_settings
};

fn view_blurb(view: AppView) -> &'static str {
  match view {
    | AppView::Tasks => {
      "Plan chores and errands, one-off \
       or repeating."
    }
    | AppView::Observations => {
      "Notes on things worth keeping an \
       eye on."
    }
    | AppView::Fuel => {
      "Fill-ups, litres and prices."
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let settings = use_state(load_settings);
  let toasts =
    use_reducer(ToastStack::default);
  let active_view = {
    let initial = settings.default_view;
    use_state(move || initial)
  };
  let dialog_open = use_state(|| false);
  let settings_open =
    use_state(|| false);

  {
    use_effect_with(
      *settings,
      move |settings| {
        save_settings(settings);
        tracing::debug!(
          dark_mode = settings.dark_mode,
          default_view =
            settings.default_view.as_key(),
          "persisted settings"
        );
        || ()
      }
    );
  }

  let notifier = ToastNotifier::new(
    toasts.dispatcher()
  );
  let theme =
    Theme::resolve(settings.dark_mode);
  let view = *active_view;

  let on_view_change = {
    let active_view = active_view.clone();
    Callback::from(move |next: AppView| {
      tracing::info!(
        view = next.as_key(),
        "switching view"
      );
      active_view.set(next);
    })
  };
  let on_open_settings = {
    let settings_open =
      settings_open.clone();
    Callback::from(move |()| {
      settings_open.set(true)
    })
  };
  let on_close_settings = {
    let settings_open =
      settings_open.clone();
    Callback::from(move |()| {
      settings_open.set(false)
    })
  };
  let on_new_task = {
    let dialog_open = dialog_open.clone();
    Callback::from(move |_: MouseEvent| {
      ui_debug(
        "app.dialog.open",
        "new task dialog requested"
      );
      dialog_open.set(true);
    })
  };
  let on_close_dialog = {
    let dialog_open = dialog_open.clone();
    Callback::from(move |()| {
      dialog_open.set(false)
    })
  };

  html! {
      <ContextProvider<SettingsHandle> context={settings.clone()}>
          <ContextProvider<ToastNotifier> context={notifier}>
              <div class={classes!("min-h-screen", theme.page)}>
                  <header class="flex items-center justify-between px-6 py-4">
                      <h1 class="text-2xl font-bold">{ "Hearth" }</h1>
                      <div class="flex items-center gap-3">
                          {
                              if view == AppView::Tasks {
                                  html! {
                                      <button
                                          type="button"
                                          class="px-4 py-2 text-sm font-medium text-white bg-blue-600 rounded-md hover:bg-blue-700"
                                          onclick={on_new_task}
                                      >
                                          { "New Task" }
                                      </button>
                                  }
                              } else {
                                  html! {}
                              }
                          }
                          <ViewSwitcherMenu
                              current_view={Some(view)}
                              {on_view_change}
                              {on_open_settings}
                          />
                      </div>
                  </header>
                  <main class="px-6 py-4">
                      <h2 class="text-xl font-semibold mb-2">{ view.label() }</h2>
                      <p class="opacity-70">{ view_blurb(view) }</p>
                  </main>
                  {
                      if *dialog_open {
                          html! { <TaskCreationDialog on_close={on_close_dialog} /> }
                      } else {
                          html! {}
                      }
                  }
                  {
                      if *settings_open {
                          html! { <SettingsModal on_close={on_close_settings} /> }
                      } else {
                          html! {}
                      }
                  }
                  <Toaster stack={(*toasts).clone()} dispatcher={toasts.dispatcher()} />
              </div>
          </ContextProvider<ToastNotifier>>
      </ContextProvider<SettingsHandle>>
  }
}
