//! Contact Section
//!
//! Email call to action plus icon links to the developer's profiles.

use dioxus::prelude::*;
use portfolio_core::effects::Motion;
use portfolio_core::Icon as IconKind;
use portfolio_core::Section;
use portfolio_ui::{ButtonVariant, Icon, LinkButton, Reveal, RevealSection, SectionHeading};

use crate::context::{use_motion, use_portfolio};

const INVITATION: &str = "Have a project in mind or just want to say hi? Feel free to reach out!";

#[component]
pub fn Contact() -> Element {
    let content = use_portfolio();
    let instant = use_motion().reduced_motion;

    rsx! {
        RevealSection { id: Section::Contact.anchor().to_string(), instant,
            div { class: "contact",
                Reveal { motion: Motion::FadeUp, instant,
                    SectionHeading {
                        title: "Get In Touch".to_string(),
                        subtitle: INVITATION.to_string(),
                    }
                }
                Reveal {
                    motion: Motion::ScaleIn,
                    index: 1,
                    instant,
                    class: "contact-card glass glow".to_string(),
                    LinkButton {
                        href: content.profile.mailto(),
                        icon: IconKind::Mail,
                        class: "contact-cta".to_string(),
                        "Say Hello"
                    }
                    div { class: "social-row",
                        for social in content.socials.iter() {
                            LinkButton {
                                key: "{social.label}",
                                href: social.href.clone(),
                                variant: ButtonVariant::Icon,
                                aria_label: social.label.clone(),
                                Icon { kind: social.icon }
                            }
                        }
                    }
                }
            }
        }
    }
}
