//! Navigation Bar Component
//!
//! Fixed glass bar with the brand mark on the left and one in-page link per
//! section on the right. Slides down from above the viewport on load.

use dioxus::prelude::*;

use crate::context::use_portfolio;

/// Brand mark shown at the left of the bar
pub const BRAND: &str = "<Dev />";

/// Navigation bar component
#[component]
pub fn NavBar() -> Element {
    let content = use_portfolio();

    rsx! {
        nav { class: "nav-bar glass", "aria-label": "Sections",
            div { class: "nav-inner",
                a { class: "nav-brand text-gradient", href: "#", "{BRAND}" }
                div { class: "nav-links",
                    for link in content.nav.iter() {
                        a {
                            key: "{link.anchor}",
                            class: "nav-link",
                            href: link.href(),
                            "{link.label}"
                            span { class: "nav-underline" }
                        }
                    }
                }
            }
        }
    }
}
