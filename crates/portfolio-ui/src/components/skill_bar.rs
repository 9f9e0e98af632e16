//! Skill Bar Component
//!
//! Card showing a skill's icon, name and proficiency. Once the card scrolls
//! into view it rises in and its bar fills from zero to the skill level,
//! staggered by list position.

use dioxus::prelude::*;
use portfolio_core::effects::Motion;
use portfolio_core::Skill;

use super::icon::Icon;
use super::reveal::{use_reveal, ITEM_ROOT_MARGIN};

/// Bar fill length in seconds
const FILL_SECS: f32 = 1.2;

/// Inline style for the bar fill
pub fn fill_style(level: u8, revealed: bool, index: usize) -> String {
    let width = if revealed { level.min(100) } else { 0 };
    let delay = Motion::FadeUp.delay_secs(index);
    format!("width: {width}%; transition: width {FILL_SECS:.1}s ease-out {delay:.2}s;")
}

/// Properties for the SkillBar component
#[derive(Clone, PartialEq, Props)]
pub struct SkillBarProps {
    pub skill: Skill,
    /// Position in the skill grid, drives the stagger
    pub index: usize,
    #[props(default = false)]
    pub instant: bool,
}

#[component]
pub fn SkillBar(props: SkillBarProps) -> Element {
    let handle = use_reveal(ITEM_ROOT_MARGIN, props.instant);
    let revealed = handle.is_revealed();
    let card_style = Motion::FadeUp.style(revealed, props.index);
    let skill = &props.skill;

    rsx! {
        div {
            id: handle.dom_id(),
            class: "skill-card glass",
            style: "{card_style}",
            onmounted: move |_| handle.observe(),
            div { class: "skill-header",
                span { class: "skill-icon", Icon { kind: skill.icon } }
                span { class: "skill-name", "{skill.name}" }
                if let Some(level) = skill.level {
                    span { class: "skill-level", "{level}%" }
                }
            }
            if let Some(level) = skill.level {
                div {
                    class: "skill-track",
                    role: "progressbar",
                    "aria-valuemin": "0",
                    "aria-valuemax": "100",
                    "aria-valuenow": "{level}",
                    "aria-label": "{skill.name} proficiency",
                    div {
                        class: "skill-fill",
                        style: fill_style(level, revealed, props.index),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::Icon as IconKind;

    #[test]
    fn fill_waits_for_reveal() {
        assert!(fill_style(85, false, 0).starts_with("width: 0%;"));
        assert!(fill_style(85, true, 0).starts_with("width: 85%;"));
    }

    #[test]
    fn fill_staggers_by_index() {
        assert_eq!(
            fill_style(50, true, 3),
            "width: 50%; transition: width 1.2s ease-out 0.30s;"
        );
    }

    #[test]
    fn renders_level_and_bar() {
        let html = dioxus_ssr::render_element(rsx! {
            SkillBar { skill: Skill::new("Rust", IconKind::Code, 75), index: 0, instant: true }
        });
        assert!(html.contains("Rust"));
        assert!(html.contains("75%"));
        assert!(html.contains(r#"aria-valuenow="75""#));
    }

    #[test]
    fn unrated_skill_has_no_bar() {
        let html = dioxus_ssr::render_element(rsx! {
            SkillBar { skill: Skill::unrated("Linux", IconKind::Terminal), index: 0 }
        });
        assert!(html.contains("Linux"));
        assert!(!html.contains("skill-track"));
    }
}
