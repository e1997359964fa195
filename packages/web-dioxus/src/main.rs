//! Nuber - Dioxus Web Client
//!
//! Ride-hailing client. The session oracle is asked once at startup; its
//! answer picks the route table every path is resolved against.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod app;
mod auth;
mod components;
mod graphql;
mod pages;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Launch the Dioxus app
    dioxus::launch(app::App);
}
