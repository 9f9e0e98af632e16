//! Stroke icons for the symbolic `portfolio_core::Icon` references.
//!
//! 24×24 outline artwork drawn with `currentColor`, so icons inherit the
//! text colour of whatever contains them.

use dioxus::prelude::*;
use portfolio_core::Icon as IconKind;

/// SVG path data for each icon; several paths per icon are drawn in order
pub fn icon_paths(kind: IconKind) -> &'static [&'static str] {
    match kind {
        IconKind::Code => &["m16 18 6-6-6-6", "m8 6-6 6 6 6"],
        IconKind::Terminal => &["m4 17 6-6-6-6", "M12 19h8"],
        IconKind::Database => &[
            "M3 5c0 1.66 4 3 9 3s9-1.34 9-3-4-3-9-3-9 1.34-9 3",
            "M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5",
            "M3 12c0 1.66 4 3 9 3s9-1.34 9-3",
        ],
        IconKind::Globe => &[
            "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20",
            "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
            "M2 12h20",
        ],
        IconKind::Layers => &[
            "m12 2 10 5-10 5L2 7z",
            "m2 17 10 5 10-5",
            "m2 12 10 5 10-5",
        ],
        IconKind::Mail => &["M2 4h20v16H2z", "m22 7-10 6L2 7"],
        IconKind::Github => &[
            "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65S8.93 17.38 9 18v4",
            "M9 18c-4.51 2-5-2-7-2",
        ],
        IconKind::Linkedin => &[
            "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6",
            "M2 9h4v12H2z",
            "M4 2a2 2 0 1 0 0 4 2 2 0 1 0 0-4",
        ],
        IconKind::ExternalLink => &[
            "M15 3h6v6",
            "M10 14 21 3",
            "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
        ],
        IconKind::ChevronDown => &["m6 9 6 6 6-6"],
        IconKind::Award => &[
            "M12 2a6 6 0 1 0 0 12 6 6 0 1 0 0-12",
            "M15.48 12.89 17 22l-5-3-5 3 1.52-9.11",
        ],
        IconKind::Briefcase => &[
            "M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
            "M2 6h20v14H2z",
        ],
        IconKind::Sparkles => &[
            "M9.94 15.5A2 2 0 0 0 8.5 14.06l-6.14-1.58a.5.5 0 0 1 0-.96L8.5 9.94A2 2 0 0 0 9.94 8.5l1.58-6.14a.5.5 0 0 1 .96 0L14.06 8.5A2 2 0 0 0 15.5 9.94l6.14 1.58a.5.5 0 0 1 0 .96L15.5 14.06a2 2 0 0 0-1.44 1.44l-1.58 6.14a.5.5 0 0 1-.96 0z",
            "M20 3v4",
            "M22 5h-4",
        ],
        IconKind::Download => &[
            "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4",
            "m7 10 5 5 5-5",
            "M12 15V3",
        ],
    }
}

/// Properties for the Icon component
#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    pub kind: IconKind,
    /// Edge length in pixels
    #[props(default = 22)]
    pub size: u32,
    #[props(default)]
    pub class: Option<String>,
}

/// Decorative inline SVG icon; hidden from assistive technology
#[component]
pub fn Icon(props: IconProps) -> Element {
    let size = props.size;
    let class = props.class.as_deref().unwrap_or("icon");

    rsx! {
        svg {
            class: "{class}",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in icon_paths(props.kind).iter() {
                path { d: "{d}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [IconKind; 14] = [
        IconKind::Code,
        IconKind::Terminal,
        IconKind::Database,
        IconKind::Globe,
        IconKind::Layers,
        IconKind::Mail,
        IconKind::Github,
        IconKind::Linkedin,
        IconKind::ExternalLink,
        IconKind::ChevronDown,
        IconKind::Award,
        IconKind::Briefcase,
        IconKind::Sparkles,
        IconKind::Download,
    ];

    #[test]
    fn every_icon_has_artwork() {
        for kind in ALL {
            assert!(!icon_paths(kind).is_empty(), "{:?} has no paths", kind);
        }
    }

    #[test]
    fn renders_one_path_per_entry() {
        let html = dioxus_ssr::render_element(rsx! {
            Icon { kind: IconKind::Layers, size: 16 }
        });
        assert_eq!(html.matches("<path").count(), 3);
        assert!(html.contains(r#"aria-hidden="true""#));
    }
}
