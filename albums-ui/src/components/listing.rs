//! Albums listing view: import bar, preview editor, search and table

use crate::components::{
    AlbumsTableView, Button, ButtonSize, ButtonVariant, ImportBarView, PreviewEditorView,
    TextInput, TextInputSize,
};
use crate::stores::listing::{ListingState, ListingStateStoreExt};
use dioxus::html::FileData;
use dioxus::prelude::*;

/// Albums listing (pure, props-based).
///
/// Reads everything from the listing store; every change goes out through a
/// callback so the page decides how files are read and where deletes go.
#[component]
pub fn AlbumsListingView(
    state: ReadStore<ListingState>,
    /// `accept` attribute for the file input
    accept: String,
    on_file_selected: EventHandler<FileData>,
    on_finalize: EventHandler<()>,
    on_preview_title_change: EventHandler<(usize, String)>,
    on_preview_remove: EventHandler<usize>,
    on_filter_change: EventHandler<String>,
    on_toggle_row: EventHandler<usize>,
    on_toggle_all: EventHandler<bool>,
    on_bulk_delete: EventHandler<()>,
    on_view_details: EventHandler<String>,
) -> Element {
    let input_key = state.file_input().read().key();
    let can_finalize = state.import().read().can_finalize();
    let preview = state.import().read().preview_rows().to_vec();
    let filter = state.global_filter().read().clone();
    let is_empty = state.albums().read().is_empty();

    let (rows, all_selected, show_bulk_delete) = {
        let listing = state.read();
        (
            listing.visible_rows(),
            listing.is_all_selected(),
            listing.show_bulk_delete(),
        )
    };

    rsx! {
        div { class: "p-4", "data-testid": "albums-listing",
            ImportBarView {
                input_key,
                accept,
                can_finalize,
                on_file_selected,
                on_finalize,
            }

            PreviewEditorView {
                rows: preview,
                on_title_change: on_preview_title_change,
                on_remove: on_preview_remove,
            }

            div { class: "flex items-center justify-between mb-4",
                div { class: "w-80",
                    TextInput {
                        value: filter,
                        size: TextInputSize::Medium,
                        placeholder: "Search Albums...",
                        aria_label: "Search albums".to_string(),
                        on_input: move |value: String| on_filter_change.call(value),
                    }
                }
                if show_bulk_delete {
                    Button {
                        variant: ButtonVariant::Danger,
                        size: ButtonSize::Medium,
                        onclick: move |_| on_bulk_delete.call(()),
                        "Delete Selected"
                    }
                }
            }

            AlbumsTableView {
                rows,
                all_selected,
                on_toggle_row,
                on_toggle_all,
                on_view_details,
            }

            if is_empty {
                p { class: "text-gray-500 text-center py-6", "data-testid": "albums-empty",
                    "No albums yet. Import a CSV or XLSX file to get started."
                }
            }
        }
    }
}
