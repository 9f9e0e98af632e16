//! Availability Badge Component
//!
//! Small glass pill in the hero announcing whether the developer is open
//! to work, with a pulsing sparkle.

use dioxus::prelude::*;
use portfolio_core::Icon as IconKind;

use super::icon::Icon;

/// Properties for the StatusBadge component
#[derive(Clone, PartialEq, Props)]
pub struct StatusBadgeProps {
    /// Availability text, e.g. "Available for hire"
    pub label: String,
    /// Pulse the sparkle icon
    #[props(default = true)]
    pub pulse: bool,
}

/// Displays the availability pill
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     StatusBadge { label: "Available for hire".to_string() }
/// }
/// ```
#[component]
pub fn StatusBadge(props: StatusBadgeProps) -> Element {
    let icon_class = if props.pulse { "icon pulse" } else { "icon" };

    rsx! {
        div { class: "status-badge glass",
            role: "status",
            Icon {
                kind: IconKind::Sparkles,
                size: 14,
                class: icon_class.to_string(),
            }
            span { class: "status-label", "{props.label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_label_with_pulse() {
        let html = dioxus_ssr::render_element(rsx! {
            StatusBadge { label: "Open to internships".to_string() }
        });
        assert!(html.contains("Open to internships"));
        assert!(html.contains("icon pulse"));
        assert!(html.contains("role=\"status\""));
    }

    #[test]
    fn still_badge_does_not_pulse() {
        let html = dioxus_ssr::render_element(rsx! {
            StatusBadge { label: "Available for hire".to_string(), pulse: false }
        });
        assert!(!html.contains("pulse"));
    }
}
