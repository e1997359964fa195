//! Root application component

use dioxus::prelude::*;
use nuber_core::theme::global_stylesheet;
use nuber_core::Config;
use tracing::{info, warn};

use crate::auth::AuthProvider;
use crate::components::Toasts;
use crate::routes::Route;
use crate::state::ToastState;

/// Root application component
///
/// Configuration and theme are provided here, at the composition root, and
/// read by descendants through context.
#[component]
pub fn App() -> Element {
    let config = use_context_provider(load_config);
    let theme = use_context_provider(|| config.theme.clone());
    use_context_provider(ToastState::new);

    let stylesheet = global_stylesheet(&theme);

    rsx! {
        // Global styles
        style { "{stylesheet}" }

        // Auth context provider wraps the entire app
        AuthProvider {
            Router::<Route> {}
        }

        Toasts {}
    }
}

fn load_config() -> Config {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "invalid configuration, using defaults");
            Config::default()
        }
    };

    info!(
        api_url = %config.api_url,
        session_source = ?config.session_source,
        "client configured"
    );

    config
}
