use dioxus::prelude::*;

use crate::components::Header;

#[component]
pub fn Ride() -> Element {
    rsx! {
        div {
            class: "ride",
            Header { title: "Ride".to_string() }
        }
    }
}
