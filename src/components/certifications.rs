//! Certifications Section
//!
//! Image cards for each certification in data order; each opens the full
//! certificate in a new browsing context.

use dioxus::prelude::*;
use portfolio_core::effects::Motion;
use portfolio_core::Icon as IconKind;
use portfolio_core::{Certification, Section};
use portfolio_ui::{Icon, Reveal, RevealSection, SectionHeading};

use crate::context::{use_motion, use_portfolio};

#[component]
fn CertificationCard(cert: Certification) -> Element {
    rsx! {
        a {
            class: "cert-card glass",
            href: "{cert.link}",
            target: "_blank",
            rel: "noopener noreferrer",
            div { class: "cert-image",
                img { src: "{cert.image}", alt: "{cert.title}", loading: "lazy" }
            }
            div { class: "cert-body",
                div { class: "cert-issuer",
                    Icon { kind: IconKind::Award, size: 18, class: "icon accent".to_string() }
                    span { "{cert.issuer}" }
                }
                h3 { class: "card-title", "{cert.title}" }
            }
        }
    }
}

#[component]
pub fn Certifications() -> Element {
    let content = use_portfolio();
    let instant = use_motion().reduced_motion;

    rsx! {
        RevealSection { id: Section::Certifications.anchor().to_string(), instant,
            Reveal { motion: Motion::FadeUp, instant,
                SectionHeading {
                    title: "Certifications".to_string(),
                    subtitle: "Recognized achievements & credentials".to_string(),
                }
            }
            div { class: "cert-grid",
                for (i, cert) in content.certifications.iter().enumerate() {
                    Reveal {
                        key: "{cert.title}",
                        motion: Motion::ScaleIn,
                        index: i,
                        instant,
                        class: "cert-slot".to_string(),
                        CertificationCard { cert: cert.clone() }
                    }
                }
            }
        }
    }
}
