//! Account settings

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::Header;

#[component]
pub fn Settings() -> Element {
    let auth = use_auth();

    let handle_logout = move |_| {
        let auth = auth.clone();
        spawn(async move {
            auth.log_out().await;
        });
    };

    rsx! {
        div {
            class: "settings",
            Header { title: "Account Settings".to_string() }
            button {
                class: "settings-logout",
                onclick: handle_logout,
                "Log Out"
            }
        }
    }
}
