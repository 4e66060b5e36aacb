pub mod config;
pub mod fixtures;
pub mod pages;
pub mod service;

use dioxus::prelude::*;
use pages::{AlbumDetail, Albums, AppLayout};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Albums {},
    #[route("/albums/:album_id")]
    AlbumDetail { album_id: String },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
