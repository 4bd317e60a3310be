use gloo::console::log;
use tracing::debug;
use web_sys::HtmlElement;

pub fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}

fn body() -> Option<HtmlElement> {
  web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .and_then(|document| document.body())
}

/// Keeps the page body from scrolling while held. Dropping the lock puts the
/// previous inline `overflow` value back.
pub struct ScrollLock {
  body:     HtmlElement,
  previous: String
}

impl ScrollLock {
  pub fn acquire() -> Option<Self> {
    let body = body()?;
    let style = body.style();
    let previous = style
      .get_property_value("overflow")
      .unwrap_or_default();

    if let Err(error) = style
      .set_property("overflow", "hidden")
    {
      tracing::warn!(
        ?error,
        "failed to lock page scroll"
      );
      return None;
    }
    debug!(
      previous = %previous,
      "page scroll locked"
    );

    Some(Self { body, previous })
  }
}

impl Drop for ScrollLock {
  fn drop(&mut self) {
    let style = self.body.style();
    let restored =
      if self.previous.is_empty() {
        style
          .remove_property("overflow")
          .map(|_| ())
      } else {
        style.set_property(
          "overflow",
          &self.previous
        )
      };

    match restored {
      | Ok(()) => {
        debug!("page scroll restored")
      }
      | Err(error) => tracing::warn!(
        ?error,
        "failed to restore page scroll"
      )
    }
  }
}
