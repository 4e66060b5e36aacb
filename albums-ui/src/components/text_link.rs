//! Inline link that calls back instead of following an href

use dioxus::prelude::*;

#[component]
pub fn TextLink(onclick: EventHandler<()>, children: Element) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "text-sm text-blue-600 underline-offset-2 hover:underline hover:text-blue-800",
            onclick: move |_| onclick.call(()),
            {children}
        }
    }
}
