/// Utility-class sets for the dialog and the menu, resolved once from the
/// dark-mode flag and read by every element.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct Theme {
  pub dialog_surface:    &'static str,
  pub dialog_header:     &'static str,
  pub dialog_title:      &'static str,
  pub icon_button:       &'static str,
  pub field_label:       &'static str,
  pub text_input:        &'static str,
  pub checkbox:          &'static str,
  pub checkbox_label:    &'static str,
  pub inline_label:      &'static str,
  pub dialog_footer:     &'static str,
  pub cancel_button:     &'static str,
  pub submit_ring:       &'static str,
  pub menu_trigger:      &'static str,
  pub menu_panel:        &'static str,
  pub menu_item:         &'static str,
  pub menu_item_active:  &'static str,
  pub menu_divider:      &'static str,
  pub page:              &'static str,
  pub toast:             &'static str
}

impl Theme {
  pub const DARK: Theme = Theme {
    dialog_surface:   "bg-gray-800",
    dialog_header:    "border-gray-700",
    dialog_title:     "text-white",
    icon_button:
      "hover:bg-gray-700 text-gray-400",
    field_label:      "text-gray-200",
    text_input:
      "bg-gray-700 border-gray-600 \
       text-white",
    checkbox:
      "bg-gray-700 border-gray-600 \
       text-blue-600",
    checkbox_label:   "text-gray-200",
    inline_label:     "text-gray-300",
    dialog_footer:    "bg-gray-900",
    cancel_button:
      "bg-gray-700 text-gray-200 \
       hover:bg-gray-600 \
       focus:ring-offset-gray-900",
    submit_ring:
      "focus:ring-offset-gray-900",
    menu_trigger:
      "text-gray-300 hover:bg-gray-800",
    menu_panel:
      "bg-gray-800 border border-gray-700",
    menu_item:
      "text-gray-300 hover:bg-gray-700",
    menu_item_active:
      "bg-blue-900/20 text-blue-400",
    menu_divider:     "border-gray-700",
    page:
      "bg-gray-900 text-gray-100",
    toast:
      "bg-gray-800 text-gray-100 \
       border border-gray-700"
  };
  pub const LIGHT: Theme = Theme {
    dialog_surface:   "bg-white",
    dialog_header:    "border-gray-200",
    dialog_title:     "text-gray-900",
    icon_button:
      "hover:bg-gray-100 text-gray-500",
    field_label:      "text-gray-700",
    text_input:
      "border-gray-300 text-gray-900",
    checkbox:
      "border-gray-300 text-blue-600",
    checkbox_label:   "text-gray-900",
    inline_label:     "text-gray-700",
    dialog_footer:    "bg-gray-50",
    cancel_button:
      "bg-white text-gray-700 border \
       border-gray-300 hover:bg-gray-50",
    submit_ring:      "",
    menu_trigger:
      "text-gray-600 hover:bg-gray-200",
    menu_panel:
      "bg-white border border-gray-200",
    menu_item:
      "text-gray-700 hover:bg-gray-100",
    menu_item_active:
      "bg-blue-50 text-blue-700",
    menu_divider:     "border-gray-200",
    page:
      "bg-gray-100 text-gray-900",
    toast:
      "bg-white text-gray-900 border \
       border-gray-200"
  };

  pub fn resolve(dark_mode: bool) -> Self {
    if dark_mode {
      Self::DARK
    } else {
      Self::LIGHT
    }
  }

  pub fn menu_entry(
    &self,
    active: bool
  ) -> &'static str {
    if active {
      self.menu_item_active
    } else {
      self.menu_item
    }
  }
}
