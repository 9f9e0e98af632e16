use std::sync::Arc;

use dioxus::prelude::*;
use portfolio_core::Portfolio;

use crate::components::use_scroll_tracker;
use crate::context::{get_settings, ScrollProgress, SharedPortfolio};
use crate::pages::{Home, NotFound};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The portfolio page; sections are reached through in-page anchors
/// - anything else - Not-found page linking back home
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, content and settings context, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(|| -> SharedPortfolio { Arc::new(Portfolio::default_content()) });
    use_context_provider(get_settings);

    let progress = use_signal(|| 0.0_f64);
    use_context_provider(|| ScrollProgress(progress));
    use_scroll_tracker(progress);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_routes_home() {
        assert!(matches!("/".parse::<Route>(), Ok(Route::Home {})));
    }

    #[test]
    fn unknown_paths_route_to_not_found() {
        match "/blog/post".parse::<Route>() {
            Ok(Route::NotFound { segments }) => assert_eq!(segments, vec!["blog", "post"]),
            _ => panic!("expected NotFound"),
        }
    }
}
