//! Route gate: resolves the current path against the active route table

use dioxus::prelude::*;
use nuber_core::{select_routes, Page, Resolution};

use crate::auth::use_auth;
use crate::pages::{
    AddPlace, EditAccount, FindAddress, Home, OutHome, PhoneLogin, Places, Ride, Settings,
    SocialLogin, VerifyPhone,
};
use crate::routes::route_for;
use super::LoadingSpinner;

/// Renders the page `path` resolves to, once the session is known
#[component]
pub fn Gate(path: String) -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    // No route is chosen until the session query resolves
    if auth.is_loading() {
        return rsx! {
            div {
                class: "gate-loading",
                LoadingSpinner {}
            }
        };
    }

    let routes = select_routes(auth.is_authenticated());

    match routes.resolve(&path) {
        Resolution::Render { page, params, .. } => {
            let number = params.get("number").unwrap_or_default().to_string();
            rsx! {
                PageView { page: *page, number: number }
            }
        }
        Resolution::Redirect { to, .. } => {
            spawn(async move {
                navigator.replace(route_for(to));
            });
            rsx! {}
        }
    }
}

#[component]
fn PageView(page: Page, number: String) -> Element {
    match page {
        Page::Home => rsx! { Home {} },
        Page::Ride => rsx! { Ride {} },
        Page::EditAccount => rsx! { EditAccount {} },
        Page::Settings => rsx! { Settings {} },
        Page::Places => rsx! { Places {} },
        Page::AddPlace => rsx! { AddPlace {} },
        Page::FindAddress => rsx! { FindAddress {} },
        Page::OutHome => rsx! { OutHome {} },
        Page::PhoneLogin => rsx! { PhoneLogin {} },
        Page::VerifyPhone => rsx! { VerifyPhone { number: number } },
        Page::SocialLogin => rsx! { SocialLogin {} },
    }
}
