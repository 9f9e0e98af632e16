//! Dot Grid Backdrop Component
//!
//! Faint grid of dots behind the hero. It drifts downward as the page
//! scrolls, at a slower rate than the content, for a parallax depth cue.

use dioxus::prelude::*;

/// Properties for the DotGrid component
#[derive(Clone, PartialEq, Props)]
pub struct DotGridProps {
    /// Vertical offset as a percentage of the backdrop height
    #[props(default = 0.0)]
    pub offset_percent: f64,
    /// Opacity of the pattern (default: 0.05)
    #[props(default = 0.05)]
    pub opacity: f32,
    /// Grid spacing in pixels (default: 40)
    #[props(default = 40)]
    pub spacing: u32,
}

/// Renders the dot grid as an absolutely positioned layer
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     section { class: "hero",
///         DotGrid { offset_percent: parallax_percent(progress) }
///     }
/// }
/// ```
#[component]
pub fn DotGrid(props: DotGridProps) -> Element {
    let offset = format!("{:.2}", props.offset_percent);
    let opacity = props.opacity;
    let spacing = props.spacing;

    rsx! {
        div {
            class: "dot-grid",
            style: "opacity: {opacity}; transform: translateY({offset}%);",
            "aria-hidden": "true",
            div {
                class: "dot-grid-pattern",
                style: "background-size: {spacing}px {spacing}px;",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_props() {
        let props = DotGridProps {
            offset_percent: 0.0,
            opacity: 0.05,
            spacing: 40,
        };
        assert_eq!(props.spacing, 40);
        assert!((props.opacity - 0.05).abs() < f32::EPSILON);
    }

    #[test]
    fn offset_in_transform() {
        let html = dioxus_ssr::render_element(rsx! {
            DotGrid { offset_percent: 15.0 }
        });
        assert!(html.contains("translateY(15.00%)"));
        assert!(html.contains("background-size: 40px 40px;"));
    }
}
