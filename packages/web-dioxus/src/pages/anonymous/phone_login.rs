//! Phone number login form

use dioxus::prelude::*;
use nuber_core::phone::{submit, PhoneAction, PhoneForm, COUNTRIES};

use crate::components::Header;
use crate::routes::route_for;
use crate::state::use_toasts;

/// Collects a country code and local number, then moves on to verification
#[component]
pub fn PhoneLogin() -> Element {
    let toasts = use_toasts();
    let navigator = use_navigator();

    let mut form = use_signal(PhoneForm::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let current = form.read().clone();
        submit(&current, &toasts, |phone| {
            navigator.push(route_for(&format!("/verify-phone/{}", phone)));
        });
    };

    let country_code = form.read().country_code().to_string();
    let local_number = form.read().local_number().to_string();

    rsx! {
        div {
            class: "phone-login",
            Header { title: "Enter your mobile number".to_string() }

            form {
                class: "phone-login-form",
                onsubmit: handle_submit,

                select {
                    class: "phone-login-country",
                    value: "{country_code}",
                    onchange: move |e| {
                        let next = form.read().apply(PhoneAction::SetCountryCode(e.value()));
                        form.set(next);
                    },
                    for country in COUNTRIES.iter() {
                        option {
                            key: "{country.dial_code}",
                            value: "{country.dial_code}",
                            selected: country.dial_code == country_code,
                            "{country.flag} {country.name} ({country.dial_code})"
                        }
                    }
                }

                input {
                    r#type: "tel",
                    class: "phone-login-number",
                    placeholder: "053 690 2129",
                    value: "{local_number}",
                    oninput: move |e| {
                        let next = form.read().apply(PhoneAction::SetLocalNumber(e.value()));
                        form.set(next);
                    },
                }

                button {
                    r#type: "submit",
                    class: "button-primary phone-login-submit",
                    "\u{2192}"
                }
            }
        }
    }
}
