//! Back navigation for detail pages

use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

#[component]
pub fn BackButton(
    #[props(default = "Back to Albums".to_string())] label: String,
    on_click: EventHandler<()>,
) -> Element {
    rsx! {
        nav { class: "mb-6", "data-testid": "back-button",
            Button {
                variant: ButtonVariant::Ghost,
                size: ButtonSize::Medium,
                onclick: move |_| on_click.call(()),
                ChevronLeft {}
                "{label}"
            }
        }
    }
}

#[component]
fn ChevronLeft() -> Element {
    rsx! {
        svg {
            class: "w-4 h-4 mr-1",
            view_box: "0 0 20 20",
            fill: "currentColor",
            path {
                fill_rule: "evenodd",
                clip_rule: "evenodd",
                d: "M12.7 5.3a1 1 0 010 1.4L9.4 10l3.3 3.3a1 1 0 01-1.4 1.4l-4-4a1 1 0 010-1.4l4-4a1 1 0 011.4 0z",
            }
        }
    }
}
