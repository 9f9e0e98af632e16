//! Link Button Components
//!
//! Call-to-action links styled as buttons:
//! - Primary: filled accent background ("Get In Touch", "Say Hello")
//! - Glass: translucent panel ("View Work", résumé download)
//! - Icon: square glass tile holding a single icon (social links)

use dioxus::prelude::*;
use portfolio_core::Icon as IconKind;

use super::icon::Icon;

/// Link button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled accent button with hover glow
    #[default]
    Primary,
    /// Translucent glass button
    Glass,
    /// Square icon-only tile
    Icon,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Glass => "btn-glass",
            ButtonVariant::Icon => "btn-icon",
        }
    }
}

/// Whether a link leaves the page and should open in a new browsing context
pub fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://") || href.starts_with("mailto:")
}

/// Properties for the LinkButton component
#[derive(Clone, PartialEq, Props)]
pub struct LinkButtonProps {
    pub href: String,
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Optional leading icon
    #[props(default)]
    pub icon: Option<IconKind>,
    /// Suggested filename; turns the link into a download
    #[props(default)]
    pub download: Option<String>,
    /// Accessible label, needed when the button has no text
    #[props(default)]
    pub aria_label: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// Anchor styled as a button.
///
/// External links open in a new browsing context with
/// `rel="noopener noreferrer"`; in-page anchors and downloads stay put.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     LinkButton { href: "#contact", "Get In Touch" }
///     LinkButton {
///         href: "/assets/resume.pdf",
///         variant: ButtonVariant::Glass,
///         download: "Resume.pdf".to_string(),
///         "Résumé"
///     }
/// }
/// ```
#[component]
pub fn LinkButton(props: LinkButtonProps) -> Element {
    let base_class = props.variant.class();
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        base_class.to_string()
    } else {
        format!("{} {}", base_class, extra_class)
    };
    let external = is_external(&props.href) && props.download.is_none();

    rsx! {
        a {
            class: "{full_class}",
            href: "{props.href}",
            target: if external { "_blank" },
            rel: if external { "noopener noreferrer" },
            download: props.download.clone(),
            "aria-label": props.aria_label.clone(),
            if let Some(icon) = props.icon {
                Icon { kind: icon, size: 18 }
            }
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Glass.class(), "btn-glass");
        assert_eq!(ButtonVariant::Icon.class(), "btn-icon");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn external_links() {
        assert!(is_external("https://github.com/someone"));
        assert!(is_external("mailto:someone@example.com"));
        assert!(!is_external("#projects"));
        assert!(!is_external("/assets/resume.pdf"));
    }

    #[test]
    fn renders_external_link_in_new_context() {
        let html = dioxus_ssr::render_element(rsx! {
            LinkButton { href: "https://example.com", "Go" }
        });
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
    }

    #[test]
    fn renders_download_link() {
        let html = dioxus_ssr::render_element(rsx! {
            LinkButton {
                href: "/assets/resume.pdf",
                variant: ButtonVariant::Glass,
                download: "Resume.pdf".to_string(),
                "Résumé"
            }
        });
        assert!(html.contains(r#"download="Resume.pdf""#));
        assert!(!html.contains("_blank"));
        assert!(html.contains("btn-glass"));
    }
}
