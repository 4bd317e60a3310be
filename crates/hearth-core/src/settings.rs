use std::fs;
use std::path::Path;

use anyhow::Context;
use hearth_shared::AppView;
use serde::{
  Deserialize,
  Serialize
};
use thiserror::Error;
use tracing::{
  debug,
  error,
  info
};

pub const SETTINGS_STORAGE_KEY: &str =
  "hearth.settings";

#[derive(Debug, Error)]
pub enum SettingsError {
  #[error("invalid settings json: {0}")]
  Json(#[from] serde_json::Error)
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  Default,
)]
#[serde(default)]
pub struct Settings {
  pub dark_mode:    bool,
  pub default_view: AppView
}

impl Settings {
  pub fn from_json(
    raw: &str
  ) -> Result<Self, SettingsError> {
    Ok(serde_json::from_str(raw)?)
  }

  pub fn to_json(
    &self
  ) -> Result<String, SettingsError> {
    Ok(serde_json::to_string(self)?)
  }

  /// Decodes the value stored under [`SETTINGS_STORAGE_KEY`]. Missing or
  /// corrupt values fall back to defaults.
  pub fn from_storage_value(
    stored: Option<&str>
  ) -> Self {
    let Some(raw) = stored else {
      debug!(
        "no stored settings; using \
         defaults"
      );
      return Self::default();
    };

    match Self::from_json(raw) {
      | Ok(settings) => settings,
      | Err(error) => {
        error!(
          %error,
          "failed parsing settings from \
           local storage"
        );
        Self::default()
      }
    }
  }

  #[tracing::instrument]
  pub fn load_file(
    path: &Path
  ) -> anyhow::Result<Self> {
    let text = fs::read_to_string(path)
      .with_context(|| {
        format!(
          "failed to read {}",
          path.display()
        )
      })?;
    let settings: Settings =
      toml::from_str(&text)
        .with_context(|| {
          format!(
            "failed to parse {}",
            path.display()
          )
        })?;
    info!(
      dark_mode = settings.dark_mode,
      default_view =
        settings.default_view.as_key(),
      "loaded settings file"
    );
    Ok(settings)
  }

  #[must_use]
  pub fn with_dark_mode(
    mut self,
    dark_mode: bool
  ) -> Self {
    self.dark_mode = dark_mode;
    self
  }

  #[must_use]
  pub fn with_default_view(
    mut self,
    view: AppView
  ) -> Self {
    self.default_view = view;
    self
  }
}
