//! Page footer

use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            p { class: "footer-text",
                "< Built with "
                span { class: "accent", "\u{2764}" }
                " />"
            }
        }
    }
}
