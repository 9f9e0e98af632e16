//! Tech Tags Component
//!
//! Row of small accent pills naming the technologies behind a project.

use dioxus::prelude::*;

/// Properties for the TechTags component
#[derive(Clone, PartialEq, Props)]
pub struct TechTagsProps {
    pub tags: Vec<String>,
    /// Accessible name for the list
    #[props(default = "Technologies".to_string())]
    pub label: String,
}

/// Displays one pill per tag, in the given order
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TechTags { tags: vec!["Node.js".to_string(), "MongoDB".to_string()] }
/// }
/// ```
#[component]
pub fn TechTags(props: TechTagsProps) -> Element {
    rsx! {
        ul { class: "tech-tags", "aria-label": "{props.label}",
            for tag in props.tags.iter() {
                li { key: "{tag}", class: "tech-tag", "{tag}" }
            }
        }
    }
}
