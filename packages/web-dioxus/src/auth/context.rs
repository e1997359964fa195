//! Authentication context provider

use std::rc::Rc;

use dioxus::prelude::*;
use nuber_core::Config;
use tracing::warn;

use super::session::Session;

/// Authentication context that provides the session flag to the entire app
#[derive(Clone)]
pub struct AuthContext {
    /// Answer of the last session query
    pub is_logged_in: Signal<bool>,
    /// Whether the session query is still in flight
    pub loading: Signal<bool>,
    session: Rc<Session>,
}

impl AuthContext {
    pub fn is_authenticated(&self) -> bool {
        *self.is_logged_in.read()
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.read()
    }

    /// Ask the session oracle again and re-gate the route tree
    pub async fn refresh(&self) {
        let mut loading = self.loading;
        let mut is_logged_in = self.is_logged_in;

        loading.set(true);
        let state = self.session.load().await;
        is_logged_in.set(state.is_logged_in());
        loading.set(false);
    }

    /// Drop the stored token and re-gate
    pub async fn log_out(&self) {
        if let Err(e) = self.session.log_out() {
            warn!(error = %e, "failed to clear session token");
        }
        self.refresh().await;
    }
}

/// Auth provider component that wraps the app
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let config = use_context::<Config>();

    let is_logged_in = use_signal(|| false);
    let loading = use_signal(|| true);

    let auth = use_context_provider(|| AuthContext {
        is_logged_in,
        loading,
        session: Rc::new(Session::from_config(&config)),
    });

    // Load initial auth state
    use_hook(move || {
        spawn(async move {
            auth.refresh().await;
        })
    });

    children
}

/// Hook to access the auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}
