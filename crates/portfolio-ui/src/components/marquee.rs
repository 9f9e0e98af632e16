//! Marquee Component
//!
//! Endless horizontal strip of icon + label chips. The list is rendered
//! twice and the track slides by half its width per loop; only the first
//! copy is exposed to assistive technology.

use dioxus::prelude::*;
use portfolio_core::effects::MarqueeTrack;
use portfolio_core::settings::DEFAULT_MARQUEE_SECS_PER_ITEM;
use portfolio_core::Icon as IconKind;

use super::icon::Icon;

/// One chip in the strip
#[derive(Clone, PartialEq, Debug)]
pub struct MarqueeItem {
    pub icon: IconKind,
    pub label: String,
}

/// Properties for the Marquee component
#[derive(Clone, PartialEq, Props)]
pub struct MarqueeProps {
    pub items: Vec<MarqueeItem>,
    #[props(default = DEFAULT_MARQUEE_SECS_PER_ITEM)]
    pub secs_per_item: f32,
    /// Scroll right instead of left
    #[props(default = false)]
    pub reverse: bool,
    /// Hold the strip still
    #[props(default = false)]
    pub paused: bool,
}

#[component]
pub fn Marquee(props: MarqueeProps) -> Element {
    let mut track = MarqueeTrack::new(props.items.clone(), props.secs_per_item);
    if props.reverse {
        track = track.reversed();
    }
    let original = track.items().len();
    let style = if props.paused {
        "animation: none;".to_string()
    } else {
        track.animation_style()
    };
    let chips: Vec<(usize, MarqueeItem)> = track.track().cloned().enumerate().collect();

    rsx! {
        div { class: "marquee",
            div { class: "marquee-track", style: "{style}",
                for (i, item) in chips {
                    div {
                        key: "{i}",
                        class: "marquee-item glass",
                        "aria-hidden": if i >= original { "true" },
                        Icon { kind: item.icon, size: 18 }
                        span { "{item.label}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<MarqueeItem> {
        ["Rust", "Go", "SQL"]
            .iter()
            .map(|label| MarqueeItem {
                icon: IconKind::Code,
                label: label.to_string(),
            })
            .collect()
    }

    #[test]
    fn renders_list_twice() {
        let html = dioxus_ssr::render_element(rsx! {
            Marquee { items: items(), secs_per_item: 2.0 }
        });
        assert_eq!(html.matches("marquee-item").count(), 6);
        assert_eq!(html.matches(">Rust<").count(), 2);
        assert!(html.contains("animation: marquee 6.0s linear infinite normal;"));
    }

    #[test]
    fn duplicate_half_hidden_from_screen_readers() {
        let html = dioxus_ssr::render_element(rsx! {
            Marquee { items: items() }
        });
        // Six icons are always hidden, plus the three duplicate chips.
        assert_eq!(html.matches(r#"aria-hidden="true""#).count(), 9);
    }

    #[test]
    fn paused_strip_has_no_animation() {
        let html = dioxus_ssr::render_element(rsx! {
            Marquee { items: items(), paused: true }
        });
        assert!(html.contains("animation: none;"));
    }
}
