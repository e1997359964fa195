//! Landing page for an anonymous visitor

use dioxus::prelude::*;

use crate::routes::route_for;

#[component]
pub fn OutHome() -> Element {
    rsx! {
        div {
            class: "out-home",
            header {
                class: "out-home-logo",
                h1 { class: "out-home-title", "Nuber" }
                span { class: "out-home-status", "You are out" }
            }
            section {
                class: "out-home-footer",
                Link {
                    to: route_for("/phone-login"),
                    class: "out-home-phone",
                    p { class: "out-home-subtitle", "Get moving with Nuber" }
                    div { class: "out-home-fake-input", "\u{1F1F0}\u{1F1F7} +82 Enter your mobile number" }
                }
                Link {
                    to: route_for("/social-login"),
                    class: "out-home-social",
                    "Or connect with social"
                }
            }
        }
    }
}
