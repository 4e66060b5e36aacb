//! Albums listing page

use crate::service::ListingService;
use crate::Route;
use albums_ui::AlbumsListingView;
use dioxus::html::FileData;
use dioxus::prelude::*;

#[component]
pub fn Albums() -> Element {
    let service = use_context::<ListingService>();
    let mut state = service.state;
    let accept = service.config.accept.clone();

    let reader = service.clone();
    let finalizer = service.clone();

    rsx! {
        AlbumsListingView {
            state,
            accept,
            on_file_selected: move |file: FileData| reader.read_file(file),
            on_finalize: move |_| finalizer.finalize_import(),
            on_preview_title_change: move |(index, title): (usize, String)| {
                state.write().edit_preview_title(index, title);
            },
            on_preview_remove: move |index: usize| {
                state.write().remove_preview_row(index);
            },
            on_filter_change: move |filter: String| {
                state.write().set_global_filter(filter);
            },
            on_toggle_row: move |index: usize| {
                state.write().toggle_row(index);
            },
            on_toggle_all: move |selected: bool| {
                state.write().set_all_selected(selected);
            },
            on_bulk_delete: move |_| service.bulk_delete(),
            on_view_details: move |album_id: String| {
                navigator().push(Route::AlbumDetail { album_id });
            },
        }
    }
}
