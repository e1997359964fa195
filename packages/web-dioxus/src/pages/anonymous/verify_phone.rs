//! Verification code entry for a submitted phone number

use dioxus::prelude::*;

use crate::components::Header;

#[component]
pub fn VerifyPhone(number: String) -> Element {
    let mut code = use_signal(String::new);

    rsx! {
        div {
            class: "verify-phone",
            Header { title: "Verify Phone Number".to_string(), back_to: "/phone-login".to_string() }
            p {
                class: "verify-phone-hint",
                "Enter the verification code sent to {number}"
            }
            input {
                r#type: "text",
                class: "verify-phone-input",
                placeholder: "Enter verification code",
                value: "{code}",
                oninput: move |e| code.set(e.value()),
            }
        }
    }
}
