//! Checkbox component

use dioxus::prelude::*;

/// Bare checkbox reporting its new checked state
#[component]
pub fn Checkbox(
    checked: bool,
    onchange: EventHandler<bool>,
    #[props(default)] aria_label: Option<String>,
) -> Element {
    rsx! {
        input {
            r#type: "checkbox",
            class: "cursor-pointer",
            checked,
            aria_label: aria_label.as_deref(),
            onchange: move |e| onchange.call(e.checked()),
        }
    }
}
