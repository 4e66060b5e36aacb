use crate::fixtures;
use crate::service::ListingService;
use crate::Route;
use albums_ui::stores::ListingState;
use dioxus::prelude::*;

/// Owns the listing service so it outlives navigation to the detail page
#[component]
pub fn AppLayout() -> Element {
    let listing = use_store(|| ListingState::new(fixtures::initial_albums()));
    use_context_provider(|| ListingService::new(listing));

    rsx! {
        div { class: "max-w-5xl mx-auto",
            h1 { class: "text-xl font-semibold p-4", "Albums" }
            Outlet::<Route> {}
        }
    }
}
