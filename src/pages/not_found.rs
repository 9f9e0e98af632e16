//! Fallback page for unknown routes.

use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!("No route for {}", path);

    rsx! {
        main { class: "not-found",
            div { class: "not-found-code text-gradient", "404" }
            p { class: "body-text", "Nothing lives at {path}." }
            Link { class: "btn-primary", to: Route::Home {}, "Back to the portfolio" }
        }
    }
}
