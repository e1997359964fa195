//! Page header with a back link

use dioxus::prelude::*;

use crate::routes::route_for;

#[component]
pub fn Header(title: String, #[props(default = "/".to_string())] back_to: String) -> Element {
    rsx! {
        header {
            class: "header",
            Link {
                to: route_for(&back_to),
                class: "header-back",
                "\u{2190}"
            }
            h2 { class: "header-title", "{title}" }
        }
    }
}
