//! Reusable button component

use dioxus::prelude::*;

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Green background - for committing staged work
    Success,
    /// Red background - for destructive actions
    Danger,
    /// No background - text only with hover
    Ghost,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    /// Compact padding, used inside table cells
    Small,
    /// Standard padding
    Medium,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Success => "bg-green-500 hover:bg-green-400 text-white",
            ButtonVariant::Danger => "bg-red-500 hover:bg-red-400 text-white",
            ButtonVariant::Ghost => "text-gray-500 hover:text-gray-900 hover:bg-gray-100",
        }
    }
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Small => "px-2 py-1 text-sm",
            ButtonSize::Medium => "px-3 py-2",
        }
    }
}

#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] class: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let extra = class.as_deref().unwrap_or("");
    let class = format!(
        "inline-flex items-center whitespace-nowrap rounded transition-colors {} {} {extra}",
        variant.class(),
        size.class(),
    );

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}
