use std::rc::Rc;

use gloo::events::EventListener;
use hearth_core::menu::{
  MenuEffect,
  MenuEvent,
  MenuState,
  is_active_entry
};
use hearth_core::theme::Theme;
use hearth_shared::AppView;
use wasm_bindgen::JsCast;
use yew::{
  Callback,
  Html,
  Properties,
  Reducible,
  classes,
  function_component,
  html,
  use_effect_with,
  use_node_ref,
  use_reducer_eq
};

use crate::dom::ui_debug;
use crate::settings::use_dark_mode;

#[derive(Clone, Copy, PartialEq, Default)]
struct MenuModel {
  state: MenuState
}

impl Reducible for MenuModel {
  type Action = MenuEvent;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let (state, _effect) =
      self.state.apply(action);
    Rc::new(Self { state })
  }
}

#[derive(Properties, PartialEq)]
pub struct ViewSwitcherMenuProps {
  pub current_view:     Option<AppView>,
  pub on_view_change:   Callback<AppView>,
  pub on_open_settings: Callback<()>
}

fn view_icon(view: AppView) -> &'static str {
  match view {
    | AppView::Tasks => "📋",
    | AppView::Observations => "👁",
    | AppView::Fuel => "💧"
  }
}

#[function_component(ViewSwitcherMenu)]
pub fn view_switcher_menu(
  props: &ViewSwitcherMenuProps
) -> Html {
  let theme =
    Theme::resolve(use_dark_mode());
  let model =
    use_reducer_eq(MenuModel::default);
  let menu_ref = use_node_ref();

  {
    let dispatcher = model.dispatcher();
    let menu_ref = menu_ref.clone();
    use_effect_with((), move |_| {
      let document =
        gloo::utils::document();
      let listener = EventListener::new(
        &document,
        "mousedown",
        move |event| {
          let Some(menu) = menu_ref.get()
          else {
            return;
          };
          let target = event
            .target()
            .and_then(|target| {
              target
                .dyn_into::<web_sys::Node>()
                .ok()
            });
          if !menu.contains(target.as_ref()) {
            dispatcher.dispatch(
              MenuEvent::PointerDownOutside
            );
          }
        }
      );
      ui_debug(
        "menu.listener.attach",
        "outside pointer listener attached"
      );
      move || {
        drop(listener);
        ui_debug(
          "menu.listener.detach",
          "outside pointer listener removed"
        );
      }
    });
  }

  // Fires the callback for the transition first, then stores the new state.
  let send = {
    let model = model.clone();
    let on_view_change =
      props.on_view_change.clone();
    let on_open_settings =
      props.on_open_settings.clone();
    Callback::from(
      move |event: MenuEvent| {
        let (_, effect) =
          model.state.apply(event);
        match effect {
          | MenuEffect::ViewChanged(view) => {
            ui_debug(
              "menu.select.view",
              view.as_key()
            );
            on_view_change.emit(view);
          }
          | MenuEffect::OpenSettings => {
            ui_debug(
              "menu.select.settings",
              "settings requested"
            );
            on_open_settings.emit(());
          }
          | MenuEffect::None => {}
        }
        model.dispatch(event);
      }
    )
  };

  let is_open = model.state.is_open();
  let on_toggle = {
    let send = send.clone();
    Callback::from(move |_: yew::MouseEvent| {
      send.emit(MenuEvent::Toggle)
    })
  };
  let make_item = |view: AppView| {
    let active = is_active_entry(
      view,
      props.current_view
    );
    let send = send.clone();
    html! {
        <button
            type="button"
            class={classes!(
                "w-full", "text-left", "px-4", "py-2", "text-sm", "flex", "items-center", "gap-2",
                theme.menu_entry(active)
            )}
            aria-current={active.then_some("page")}
            onclick={move |_| send.emit(MenuEvent::SelectView(view))}
        >
            <span class="w-4 h-4">{ view_icon(view) }</span>
            { view.label() }
        </button>
    }
  };
  let on_settings = {
    let send = send.clone();
    Callback::from(move |_: yew::MouseEvent| {
      send.emit(MenuEvent::SelectSettings)
    })
  };

  html! {
      <div ref={menu_ref} class="relative">
          <button
              type="button"
              class={classes!("p-2", "rounded-full", theme.menu_trigger)}
              aria-expanded={if is_open { "true" } else { "false" }}
              onclick={on_toggle}
          >
              <span class="w-6 h-6">{ if is_open { "✕" } else { "☰" } }</span>
          </button>
          {
              if is_open {
                  html! {
                      <div class={classes!(
                          "absolute", "right-0", "mt-2", "w-48", "rounded-lg", "shadow-lg", "py-1", "z-50",
                          theme.menu_panel
                      )}>
                          { for AppView::ALL.into_iter().map(make_item) }
                          <div class={classes!("my-1", "border-t", theme.menu_divider)} />
                          <button
                              type="button"
                              class={classes!(
                                  "w-full", "text-left", "px-4", "py-2", "text-sm", "flex", "items-center", "gap-2",
                                  theme.menu_item
                              )}
                              onclick={on_settings}
                          >
                              <span class="w-4 h-4">{ "⚙" }</span>
                              { "Settings" }
                          </button>
                      </div>
                  }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
