//! Skills Section
//!
//! One skill card per entry in data order, followed by a marquee of the
//! same skills.

use dioxus::prelude::*;
use portfolio_core::effects::Motion;
use portfolio_core::Section;
use portfolio_ui::{Marquee, MarqueeItem, Reveal, RevealSection, SectionHeading, SkillBar};

use crate::context::{use_motion, use_portfolio};

#[component]
pub fn Skills() -> Element {
    let content = use_portfolio();
    let motion = use_motion();
    let instant = motion.reduced_motion;

    let marquee_items: Vec<MarqueeItem> = content
        .skills
        .iter()
        .map(|skill| MarqueeItem {
            icon: skill.icon,
            label: skill.name.clone(),
        })
        .collect();

    rsx! {
        RevealSection { id: Section::Skills.anchor().to_string(), instant,
            Reveal { motion: Motion::FadeUp, instant,
                SectionHeading {
                    title: "Skills".to_string(),
                    subtitle: "Technologies and tools I work with".to_string(),
                }
            }
            div { class: "skill-grid",
                for (i, skill) in content.skills.iter().enumerate() {
                    SkillBar { key: "{skill.name}", skill: skill.clone(), index: i, instant }
                }
            }
            Marquee {
                items: marquee_items,
                secs_per_item: motion.marquee_secs_per_item,
                paused: instant,
            }
        }
    }
}
