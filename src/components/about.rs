//! About Section
//!
//! Bio paragraphs and stat counters on the left, a code-style profile
//! card on the right.

use dioxus::prelude::*;
use portfolio_core::effects::Motion;
use portfolio_core::{CodeLine, Section};
use portfolio_ui::{Icon, Reveal, RevealSection, SectionHeading};

use crate::context::{use_motion, use_portfolio};

/// `key: value,` line of the code card; the last line has no trailing comma
#[component]
fn CodeCardLine(line: CodeLine, last: bool) -> Element {
    let value_class = if line.literal { "code-literal" } else { "code-string" };
    let value = if line.literal {
        line.value.clone()
    } else {
        format!("\"{}\"", line.value)
    };

    rsx! {
        "  "
        span { class: "code-key", "{line.key}" }
        ": "
        span { class: "{value_class}", "{value}" }
        if !last { "," }
        "\n"
    }
}

#[component]
pub fn About() -> Element {
    let content = use_portfolio();
    let motion = use_motion();
    let instant = motion.reduced_motion;
    let lines = content.profile.code_card.clone();
    let last_index = lines.len().saturating_sub(1);

    rsx! {
        RevealSection { id: Section::About.anchor().to_string(), instant,
            div { class: "about-grid",
                Reveal { motion: Motion::SlideLeft, instant,
                    SectionHeading { title: "About Me".to_string(), centered: false }
                    for paragraph in content.profile.bio.iter() {
                        p { class: "body-text", "{paragraph}" }
                    }
                    div { class: "stat-row",
                        for (i, stat) in content.stats.iter().enumerate() {
                            Reveal {
                                key: "{stat.label}",
                                motion: Motion::ScaleIn,
                                index: i,
                                instant,
                                class: "stat-card glass".to_string(),
                                span { class: "stat-icon", Icon { kind: stat.icon, size: 18 } }
                                div { class: "stat-value", "{stat.value}" }
                                div { class: "stat-label", "{stat.label}" }
                            }
                        }
                    }
                }

                Reveal { motion: Motion::SlideRight, instant,
                    div { class: "code-card glass glow",
                        div { class: "code-card-bar",
                            span { class: "window-dot red" }
                            span { class: "window-dot yellow" }
                            span { class: "window-dot green" }
                            span { class: "code-card-file", "about.rs" }
                        }
                        pre { class: "code-card-body",
                            code {
                                span { class: "code-keyword", "let" }
                                " "
                                span { class: "code-ident", "developer" }
                                " = Developer {{\n"
                                for (i, line) in lines.into_iter().enumerate() {
                                    CodeCardLine { key: "{i}", line, last: i == last_index }
                                }
                                "}};"
                            }
                        }
                    }
                }
            }
        }
    }
}
