//! Home page - the whole portfolio on one scrolling page.
//!
//! Section order follows the content's section list; the navigation bar
//! links into it by anchor.

use dioxus::prelude::*;
use portfolio_core::Section;

use crate::components::{
    About, Certifications, Contact, Footer, Hero, NavBar, Projects, ScrollProgressBar, Skills,
};
use crate::context::use_portfolio;

#[component]
fn PageSection(section: Section) -> Element {
    match section {
        Section::About => rsx! { About {} },
        Section::Skills => rsx! { Skills {} },
        Section::Projects => rsx! { Projects {} },
        Section::Certifications => rsx! { Certifications {} },
        Section::Contact => rsx! { Contact {} },
    }
}

#[component]
pub fn Home() -> Element {
    let content = use_portfolio();

    rsx! {
        ScrollProgressBar {}
        NavBar {}
        Hero {}
        main { class: "page",
            for section in content.sections.iter().copied() {
                PageSection { key: "{section}", section }
            }
        }
        Footer {}
    }
}
