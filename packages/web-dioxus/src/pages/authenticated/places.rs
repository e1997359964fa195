//! Saved places and address lookup

use dioxus::prelude::*;

use crate::components::Header;
use crate::routes::route_for;

#[component]
pub fn Places() -> Element {
    rsx! {
        div {
            class: "places",
            Header { title: "Places".to_string() }
            Link { to: route_for("/add-place"), class: "places-add", "Add some places!" }
        }
    }
}

#[component]
pub fn AddPlace() -> Element {
    rsx! {
        div {
            class: "add-place",
            Header { title: "Add Place".to_string(), back_to: "/places".to_string() }
            Link { to: route_for("/find-address"), class: "add-place-map", "Pick place from map" }
        }
    }
}

#[component]
pub fn FindAddress() -> Element {
    rsx! {
        div {
            class: "find-address",
            Header { title: "Find Address".to_string(), back_to: "/add-place".to_string() }
        }
    }
}
