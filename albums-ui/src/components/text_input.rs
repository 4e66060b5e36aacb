//! Reusable text input component

use dioxus::prelude::*;

/// Text input size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TextInputSize {
    /// Fits inside a table cell
    Small,
    /// Standalone field
    Medium,
}

#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    size: TextInputSize,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] class: Option<String>,
) -> Element {
    let padding = match size {
        TextInputSize::Small => "px-2 py-1 text-sm",
        TextInputSize::Medium => "px-3 py-2",
    };
    let extra = class.as_deref().unwrap_or("");
    let class = format!(
        "w-full border border-gray-300 rounded focus:outline-none focus:ring-1 focus:ring-indigo-400 {padding} {extra}"
    );

    rsx! {
        input {
            r#type: "text",
            class: "{class}",
            value: "{value}",
            placeholder,
            aria_label: aria_label.as_deref(),
            oninput: move |e| on_input.call(e.value()),
        }
    }
}
