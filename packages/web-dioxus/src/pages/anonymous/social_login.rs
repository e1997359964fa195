use dioxus::prelude::*;

use crate::components::Header;

#[component]
pub fn SocialLogin() -> Element {
    rsx! {
        div {
            class: "social-login",
            Header { title: "Choose an account".to_string() }
        }
    }
}
