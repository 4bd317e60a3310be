use hearth_core::settings::{
  SETTINGS_STORAGE_KEY,
  Settings
};
use yew::{
  UseStateHandle,
  hook,
  use_context
};

pub type SettingsHandle =
  UseStateHandle<Settings>;

pub fn load_settings() -> Settings {
  let stored = web_sys::window()
    .and_then(|window| {
      window
        .local_storage()
        .ok()
        .flatten()
    })
    .and_then(|storage| {
      storage
        .get_item(SETTINGS_STORAGE_KEY)
        .ok()
        .flatten()
    });

  Settings::from_storage_value(
    stored.as_deref()
  )
}

pub fn save_settings(
  settings: &Settings
) {
  let raw = match settings.to_json() {
    | Ok(raw) => raw,
    | Err(error) => {
      tracing::error!(
        %error,
        "failed encoding settings"
      );
      return;
    }
  };

  if let Some(storage) =
    web_sys::window().and_then(
      |window| {
        window
          .local_storage()
          .ok()
          .flatten()
      }
    )
  {
    let _ = storage.set_item(
      SETTINGS_STORAGE_KEY,
      &raw
    );
  }
}

/// Dark-mode flag from the settings store. Light when no store is mounted.
#[hook]
pub fn use_dark_mode() -> bool {
  use_context::<SettingsHandle>()
    .is_some_and(|settings| {
      settings.dark_mode
    })
}
