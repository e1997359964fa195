//! Home page for a logged-in rider

use dioxus::prelude::*;

use crate::routes::route_for;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home",
            span { class: "home-status", "You are in" }
            nav {
                class: "home-menu",
                Link { to: route_for("/ride"), class: "home-link", "Request a ride" }
                Link { to: route_for("/places"), class: "home-link", "Places" }
                Link { to: route_for("/edit-account"), class: "home-link", "Edit account" }
                Link { to: route_for("/settings"), class: "home-link", "Settings" }
            }
        }
    }
}
