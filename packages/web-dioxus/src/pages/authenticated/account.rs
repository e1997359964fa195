use dioxus::prelude::*;

use crate::components::Header;

#[component]
pub fn EditAccount() -> Element {
    rsx! {
        div {
            class: "edit-account",
            Header { title: "Edit Account".to_string() }
        }
    }
}
