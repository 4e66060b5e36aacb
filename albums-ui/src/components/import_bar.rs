//! Import bar: file picker plus the "Finalize Import" action

use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::html::FileData;
use dioxus::prelude::*;

/// File input and finalize button.
///
/// The owner clears the picked file by changing `input_key`, which swaps in a
/// fresh input element.
#[component]
pub fn ImportBarView(
    input_key: String,
    /// `accept` attribute of the file input
    accept: String,
    /// Whether a file is chosen, which is when finalizing is offered
    can_finalize: bool,
    on_file_selected: EventHandler<FileData>,
    on_finalize: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "flex items-center justify-end",
            div { class: "flex items-center mb-4",
                p { class: "text-sm mr-2", "Import CSV File:" }
                {file_input(input_key, accept, on_file_selected)}
            }
            if can_finalize {
                Button {
                    variant: ButtonVariant::Success,
                    size: ButtonSize::Medium,
                    class: "mb-4 ml-2".to_string(),
                    onclick: move |_| on_finalize.call(()),
                    "Finalize Import"
                }
            }
        }
    }
}

// Keyed root so a new key replaces the element instead of patching it
fn file_input(key: String, accept: String, on_file_selected: EventHandler<FileData>) -> Element {
    rsx! {
        input {
            key: "{key}",
            r#type: "file",
            accept: "{accept}",
            class: "w-60 text-sm",
            "data-testid": "import-file-input",
            onchange: move |evt: FormEvent| {
                if let Some(file) = evt.files().into_iter().next() {
                    on_file_selected.call(file);
                }
            },
        }
    }
}
