//! Projects Section
//!
//! One card per project in data order. Cards link out to the project and
//! lift slightly on hover.

use dioxus::prelude::*;
use portfolio_core::effects::Motion;
use portfolio_core::Icon as IconKind;
use portfolio_core::{Project, Section};
use portfolio_ui::{is_external, Icon, Reveal, RevealSection, SectionHeading, TechTags};

use crate::context::{use_motion, use_portfolio};

#[component]
fn ProjectCard(project: Project) -> Element {
    let external = is_external(&project.link);

    rsx! {
        a {
            class: "project-card glass",
            href: "{project.link}",
            target: if external { "_blank" },
            rel: if external { "noopener noreferrer" },
            div { class: "card-icons",
                Icon { kind: IconKind::Code, size: 24, class: "icon accent".to_string() }
                Icon { kind: IconKind::ExternalLink, size: 16, class: "icon muted".to_string() }
            }
            h3 { class: "card-title", "{project.title}" }
            p { class: "card-body", "{project.description}" }
            TechTags { tags: project.tech.clone() }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    let content = use_portfolio();
    let instant = use_motion().reduced_motion;

    rsx! {
        RevealSection { id: Section::Projects.anchor().to_string(), instant,
            Reveal { motion: Motion::FadeUp, instant,
                SectionHeading {
                    title: "Projects".to_string(),
                    subtitle: "Some of my recent work".to_string(),
                }
            }
            div { class: "project-grid",
                for (i, project) in content.projects.iter().enumerate() {
                    Reveal {
                        key: "{project.title}",
                        motion: Motion::ScaleIn,
                        index: i,
                        instant,
                        class: "project-slot".to_string(),
                        ProjectCard { project: project.clone() }
                    }
                }
            }
        }
    }
}
