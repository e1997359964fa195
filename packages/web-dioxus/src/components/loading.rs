//! Loading components

use dioxus::prelude::*;
use nuber_core::Theme;

/// Full-page loading indicator shown while the session query is in flight
#[component]
pub fn LoadingSpinner() -> Element {
    let theme = use_context::<Theme>();

    rsx! {
        div {
            class: "loading",
            div {
                class: "loading-dots",
                span { class: "loading-dot", style: "background: {theme.yellow_color}" }
                span { class: "loading-dot", style: "background: {theme.yellow_color}; animation-delay: 0.1s" }
                span { class: "loading-dot", style: "background: {theme.yellow_color}; animation-delay: 0.2s" }
            }
            p { class: "loading-label", "Loading..." }
        }
    }
}
