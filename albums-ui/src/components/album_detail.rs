//! Album detail view

use crate::components::BackButton;
use crate::display_types::Album;
use albums_core::album::display_value;
use dioxus::prelude::*;

/// Title, id and every carried-through field of one album
#[component]
pub fn AlbumDetailView(album: Option<Album>, on_back: EventHandler<()>) -> Element {
    rsx! {
        div { class: "p-4", "data-testid": "album-detail",
            BackButton { on_click: move |_| on_back.call(()) }

            {
                match album {
                    Some(album) => rsx! {
                        AlbumFields { album }
                    },
                    None => rsx! {
                        p { class: "text-gray-500", "Album not found" }
                    },
                }
            }
        }
    }
}

#[component]
fn AlbumFields(album: Album) -> Element {
    let id = album.id.clone().unwrap_or_default();
    let fields: Vec<(String, String)> = album
        .extra
        .iter()
        .map(|(field, value)| (field.clone(), display_value(value)))
        .collect();

    rsx! {
        h1 { class: "text-2xl font-bold mb-2", "{album.title}" }
        if !id.is_empty() {
            p { class: "text-sm text-gray-500 mb-4", "id: {id}" }
        }
        if !fields.is_empty() {
            dl { class: "grid grid-cols-2 gap-x-6 gap-y-1 max-w-xl",
                for (field , value) in fields {
                    div { key: "{field}", class: "contents",
                        dt { class: "font-medium text-gray-700", "{field}" }
                        dd { class: "text-gray-900", "{value}" }
                    }
                }
            }
        }
    }
}
