//! Hero Section
//!
//! Full-height opening screen: particle field, parallax dot grid,
//! availability badge, photo, greeting, typed headline, rotating role and
//! the primary calls to action.

use dioxus::prelude::*;
use portfolio_core::effects::parallax_percent;
use portfolio_core::Icon as IconKind;
use portfolio_core::Section;
use portfolio_ui::{
    ButtonVariant, DotGrid, Icon, LinkButton, Particles, RotatingText, StatusBadge, TypingText,
};

use crate::context::{use_motion, use_portfolio, use_scroll_progress};

/// Dot grid that drifts with page scroll
#[component]
fn ParallaxGrid() -> Element {
    let progress = use_scroll_progress();
    rsx! {
        DotGrid { offset_percent: parallax_percent(progress()) }
    }
}

#[component]
pub fn Hero() -> Element {
    let content = use_portfolio();
    let motion = use_motion();
    let profile = &content.profile;
    let still = motion.reduced_motion;

    rsx! {
        header { class: "hero",
            Particles {
                count: motion.particle_count,
                seed: motion.particle_seed,
                still,
            }
            if still {
                DotGrid { offset_percent: 0.0 }
            } else {
                ParallaxGrid {}
            }

            div { class: "hero-content",
                div { class: "hero-badge enter-scale",
                    StatusBadge { label: profile.availability.clone(), pulse: !still }
                }

                img {
                    class: "hero-photo enter-scale",
                    src: "{profile.photo}",
                    alt: "{profile.name}",
                }

                h1 { class: "hero-title enter-rise",
                    "Hi, I'm "
                    span { class: "text-gradient", "{profile.name}" }
                }

                div { class: "hero-headline enter-rise",
                    TypingText {
                        key: "{profile.headline}",
                        text: profile.headline.clone(),
                        interval_ms: motion.typing_interval_ms,
                        instant: still,
                    }
                }

                div { class: "hero-role enter-rise",
                    span { class: "hero-role-prefix", "Currently: " }
                    RotatingText {
                        items: profile.roles.clone(),
                        interval_ms: motion.rotation_interval_ms,
                        paused: still,
                    }
                }

                div { class: "hero-actions enter-rise",
                    LinkButton { href: Section::Contact.href(), "Get In Touch" }
                    LinkButton {
                        href: Section::Projects.href(),
                        variant: ButtonVariant::Glass,
                        "View Work"
                    }
                    if let Some(resume) = &profile.resume {
                        LinkButton {
                            href: resume.href.clone(),
                            variant: ButtonVariant::Glass,
                            icon: IconKind::Download,
                            download: resume.filename.clone(),
                            "Résumé"
                        }
                    }
                }

                a {
                    class: "hero-scroll-cue",
                    href: Section::About.href(),
                    "aria-label": "Scroll to about",
                    Icon { kind: IconKind::ChevronDown, size: 28 }
                }
            }
        }
    }
}
