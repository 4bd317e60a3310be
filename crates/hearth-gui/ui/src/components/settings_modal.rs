use hearth_core::theme::Theme;
use hearth_shared::AppView;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  classes,
  function_component,
  html,
  use_context
};

use crate::settings::SettingsHandle;

#[derive(Properties, PartialEq)]
pub struct SettingsModalProps {
  pub on_close: Callback<()>
}

#[function_component(SettingsModal)]
pub fn settings_modal(
  props: &SettingsModalProps
) -> Html {
  let Some(settings) =
    use_context::<SettingsHandle>()
  else {
    tracing::warn!(
      "settings modal opened without a \
       settings store"
    );
    return html! {};
  };
  let theme =
    Theme::resolve(settings.dark_mode);

  let on_dark_mode = {
    let settings = settings.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        settings.set(
          settings
            .with_dark_mode(input.checked())
        );
      }
    )
  };
  let on_default_view = {
    let settings = settings.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let select: web_sys::HtmlSelectElement =
          e.target_unchecked_into();
        if let Some(view) =
          AppView::from_key(&select.value())
        {
          settings.set(
            settings
              .with_default_view(view)
          );
        }
      }
    )
  };
  let on_close = {
    let on_close = props.on_close.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_close.emit(())
      }
    )
  };

  html! {
      <div class="fixed inset-0 bg-black bg-opacity-50 z-50 flex items-center justify-center" onclick={on_close.clone()}>
          <div
              class={classes!("rounded-lg", "shadow-xl", "w-full", "max-w-sm", "p-6", "space-y-4", theme.dialog_surface)}
              onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
          >
              <h2 class={classes!("text-xl", "font-bold", theme.dialog_title)}>{ "Settings" }</h2>
              <div class="flex items-center">
                  <input
                      type="checkbox"
                      id="darkMode"
                      checked={settings.dark_mode}
                      onchange={on_dark_mode}
                      class={classes!("h-4", "w-4", "rounded", theme.checkbox)}
                  />
                  <label for="darkMode" class={classes!("ml-2", "block", "text-sm", theme.checkbox_label)}>
                      { "Dark mode" }
                  </label>
              </div>
              <div>
                  <label for="defaultView" class={classes!("block", "text-sm", "font-medium", "mb-1", theme.field_label)}>
                      { "Start on" }
                  </label>
                  <select
                      id="defaultView"
                      onchange={on_default_view}
                      class={classes!("w-full", "px-3", "py-2", "rounded-md", theme.text_input)}
                  >
                      {
                          for AppView::ALL.into_iter().map(|view| html! {
                              <option
                                  value={view.as_key()}
                                  selected={settings.default_view == view}
                              >
                                  { view.label() }
                              </option>
                          })
                      }
                  </select>
              </div>
              <div class="flex justify-end">
                  <button
                      type="button"
                      class={classes!("px-4", "py-2", "text-sm", "font-medium", "rounded-md", theme.cancel_button)}
                      onclick={on_close}
                  >
                      { "Close" }
                  </button>
              </div>
          </div>
      </div>
  }
}
