pub mod image_picker;
pub mod settings_modal;
pub mod task_creation_dialog;
pub mod toaster;
pub mod view_switcher_menu;

pub use image_picker::ImagePicker;
pub use settings_modal::SettingsModal;
pub use task_creation_dialog::TaskCreationDialog;
pub use toaster::Toaster;
pub use view_switcher_menu::ViewSwitcherMenu;
