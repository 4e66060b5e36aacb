//! Editable preview of staged import rows

use crate::components::{Button, ButtonSize, ButtonVariant, TextInput, TextInputSize};
use crate::display_types::Album;
use dioxus::prelude::*;

/// Staged rows with an editable title and a remove action per row.
///
/// Renders nothing while there are no rows.
#[component]
pub fn PreviewEditorView(
    rows: Vec<Album>,
    /// Called with (row index, new title)
    on_title_change: EventHandler<(usize, String)>,
    /// Called with the row index to drop
    on_remove: EventHandler<usize>,
) -> Element {
    if rows.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "mb-6", "data-testid": "import-preview",
            h3 { class: "font-semibold mb-2", "Preview Imported Albums:" }
            table { class: "min-w-full border-collapse border border-gray-200",
                thead {
                    tr {
                        th { class: "border border-gray-300 p-2", "Title" }
                        th { class: "border border-gray-300 p-2", "Actions" }
                    }
                }
                tbody {
                    for (index , row) in rows.into_iter().enumerate() {
                        tr { key: "{index}",
                            td { class: "border border-gray-300 p-2",
                                TextInput {
                                    value: row.title,
                                    size: TextInputSize::Small,
                                    aria_label: format!("Title of imported row {}", index + 1),
                                    on_input: move |title: String| on_title_change.call((index, title)),
                                }
                            }
                            td { class: "border border-gray-300 p-2",
                                div { class: "flex justify-center",
                                    Button {
                                        variant: ButtonVariant::Danger,
                                        size: ButtonSize::Small,
                                        onclick: move |_| on_remove.call(index),
                                        "Remove"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
