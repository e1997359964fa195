//! Toast stack

use dioxus::prelude::*;

use crate::state::use_toasts;

/// Renders pending toasts, newest last. Click to dismiss.
#[component]
pub fn Toasts() -> Element {
    let state = use_toasts();
    let toasts = state.toasts.read().clone();

    rsx! {
        div {
            class: "toasts",
            for toast in toasts {
                ToastItem { key: "{toast.id}", id: toast.id, message: toast.message }
            }
        }
    }
}

#[component]
fn ToastItem(id: u64, message: String) -> Element {
    let state = use_toasts();

    rsx! {
        div {
            class: "toast-error",
            onclick: move |_| state.dismiss(id),
            "{message}"
        }
    }
}
