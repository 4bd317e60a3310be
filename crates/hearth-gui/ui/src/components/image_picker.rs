use std::cell::{
  Cell,
  RefCell
};
use std::rc::Rc;

use gloo::file::File;
use gloo::file::callbacks::{
  FileReader,
  read_as_data_url
};
use hearth_core::theme::Theme;
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  classes,
  function_component,
  html,
  use_mut_ref
};

use crate::settings::use_dark_mode;

#[derive(Properties, PartialEq)]
pub struct ImagePickerProps {
  pub images:           Vec<String>,
  /// Data URLs read from one selection, to append after `images`.
  pub on_images_added:  Callback<Vec<String>>,
  pub on_image_removed: Callback<usize>,
  #[prop_or_default]
  pub disabled:         bool
}

/// Readers for one selection. Dropping a reader aborts it, so the batch is
/// kept until every file has been read.
#[derive(Default)]
struct ReadBatch {
  readers:   Vec<FileReader>,
  remaining: Rc<Cell<usize>>
}

#[function_component(ImagePicker)]
pub fn image_picker(
  props: &ImagePickerProps
) -> Html {
  let theme =
    Theme::resolve(use_dark_mode());
  let batch =
    use_mut_ref(ReadBatch::default);

  let on_files = {
    let batch = batch.clone();
    let on_images_added =
      props.on_images_added.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        let Some(list) = input.files()
        else {
          return;
        };
        let files: Vec<File> = (0..list
          .length())
          .filter_map(|idx| list.get(idx))
          .map(File::from)
          .collect();
        input.set_value("");
        if files.is_empty() {
          return;
        }

        let mut current =
          batch.borrow_mut();
        if current.remaining.get() > 0 {
          tracing::warn!(
            pending = current.remaining.get(),
            "image selection ignored while \
             a previous one is loading"
          );
          return;
        }
        current.readers.clear();
        current.remaining.set(files.len());

        let collected: Rc<
          RefCell<Vec<String>>
        > = Rc::new(RefCell::new(
          Vec::new()
        ));
        for file in files {
          let name = file.name();
          let collected = collected.clone();
          let remaining =
            current.remaining.clone();
          let on_images_added =
            on_images_added.clone();
          let reader = read_as_data_url(
            &file,
            move |result| {
              match result {
                | Ok(data_url) => collected
                  .borrow_mut()
                  .push(data_url),
                | Err(error) => {
                  tracing::error!(
                    %error,
                    file = %name,
                    "failed reading image"
                  )
                }
              }
              remaining.set(
                remaining
                  .get()
                  .saturating_sub(1)
              );
              if remaining.get() == 0 {
                on_images_added.emit(
                  collected.take()
                );
              }
            }
          );
          current.readers.push(reader);
        }
      }
    )
  };

  html! {
      <div class="space-y-2">
          <label class={classes!("block", "text-sm", "font-medium", theme.field_label)}>{ "Images" }</label>
          <div class="flex flex-wrap gap-2">
              {
                  for props.images.iter().enumerate().map(|(idx, src)| {
                      let on_remove = {
                          let on_image_removed = props.on_image_removed.clone();
                          Callback::from(move |_: yew::MouseEvent| {
                              on_image_removed.emit(idx)
                          })
                      };
                      html! {
                          <div class="relative w-20 h-20">
                              <img src={src.clone()} class="w-20 h-20 object-cover rounded-md" alt="" />
                              <button
                                  type="button"
                                  class="absolute -top-2 -right-2 bg-red-600 text-white rounded-full w-5 h-5 text-xs"
                                  onclick={on_remove}
                                  disabled={props.disabled}
                              >
                                  { "✕" }
                              </button>
                          </div>
                      }
                  })
              }
          </div>
          <input
              type="file"
              accept="image/*"
              multiple={true}
              disabled={props.disabled}
              onchange={on_files}
          />
      </div>
  }
}
