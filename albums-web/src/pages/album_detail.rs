//! Album detail page

use crate::service::ListingService;
use crate::Route;
use albums_ui::AlbumDetailView;
use dioxus::prelude::*;

#[component]
pub fn AlbumDetail(album_id: String) -> Element {
    let service = use_context::<ListingService>();
    let album = service.state.read().find_album(&album_id).cloned();

    rsx! {
        AlbumDetailView {
            album,
            on_back: move |_| {
                navigator().push(Route::Albums {});
            },
        }
    }
}
