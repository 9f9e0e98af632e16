//! Section Heading Component
//!
//! `# Title` heading with an accent underline bar and an optional muted
//! subtitle, shared by every page section.

use dioxus::prelude::*;

/// Properties for the SectionHeading component
#[derive(Clone, PartialEq, Props)]
pub struct SectionHeadingProps {
    pub title: String,
    #[props(default)]
    pub subtitle: Option<String>,
    /// Centre the heading (left-aligned in two-column layouts)
    #[props(default = true)]
    pub centered: bool,
}

#[component]
pub fn SectionHeading(props: SectionHeadingProps) -> Element {
    let class = if props.centered {
        "section-heading centered"
    } else {
        "section-heading"
    };

    rsx! {
        div { class: "{class}",
            h2 { class: "section-title",
                span { class: "accent", "# " }
                "{props.title}"
            }
            div { class: "accent-bar" }
            if let Some(subtitle) = &props.subtitle {
                p { class: "section-subtitle", "{subtitle}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_title_and_subtitle() {
        let html = dioxus_ssr::render_element(rsx! {
            SectionHeading {
                title: "Skills".to_string(),
                subtitle: "Technologies and tools I work with".to_string(),
            }
        });
        assert!(html.contains("Skills"));
        assert!(html.contains("section-subtitle"));
        assert!(html.contains("centered"));
    }

    #[test]
    fn subtitle_optional() {
        let html = dioxus_ssr::render_element(rsx! {
            SectionHeading { title: "About Me".to_string(), centered: false }
        });
        assert!(!html.contains("section-subtitle"));
        assert!(!html.contains("centered"));
    }
}
