//! Route definitions for the application
//!
//! The dioxus router only captures the path. Which screen it shows is decided
//! by the gate against the route table the session selects.

use dioxus::prelude::*;

use crate::components::Gate;

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Root {},

    #[route("/:..segments")]
    Shell { segments: Vec<String> },
}

/// Router target for an in-app path such as `/verify-phone/+8212345678`
pub fn route_for(path: &str) -> Route {
    let segments: Vec<String> = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if segments.is_empty() {
        Route::Root {}
    } else {
        Route::Shell { segments }
    }
}

#[component]
fn Root() -> Element {
    rsx! {
        Gate { path: "/".to_string() }
    }
}

#[component]
fn Shell(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        Gate { path: path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path() {
        assert_eq!(route_for("/"), Route::Root {});
        assert_eq!(route_for(""), Route::Root {});
    }

    #[test]
    fn test_nested_path() {
        assert_eq!(
            route_for("/verify-phone/+821023456789"),
            Route::Shell {
                segments: vec!["verify-phone".to_string(), "+821023456789".to_string()]
            }
        );
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        assert_eq!(
            route_for("/ride/"),
            Route::Shell {
                segments: vec!["ride".to_string()]
            }
        );
    }
}
