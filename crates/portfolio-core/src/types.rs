//! Content records for the portfolio page

use serde::{Deserialize, Serialize};

/// Symbolic icon reference, resolved to artwork by the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Code,
    Terminal,
    Database,
    Globe,
    Layers,
    Mail,
    Github,
    Linkedin,
    ExternalLink,
    ChevronDown,
    Award,
    Briefcase,
    Sparkles,
    Download,
}

/// In-page sections, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    About,
    Skills,
    Projects,
    Certifications,
    Contact,
}

impl Section {
    /// Every section, in the order it appears on the page
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Certifications,
        Section::Contact,
    ];

    /// Element id used as the in-page anchor
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Certifications => "certifications",
            Section::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar
    pub fn label(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Certifications => "Certifications",
            Section::Contact => "Contact",
        }
    }

    /// `#anchor` form for href attributes
    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }

    /// Look a section up by its anchor (without the leading `#`)
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A technology the developer works with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: Icon,
    /// Proficiency 0-100; skills without a level render without a bar
    pub level: Option<u8>,
}

impl Skill {
    pub fn new(name: impl Into<String>, icon: Icon, level: u8) -> Self {
        Self {
            name: name.into(),
            icon,
            level: Some(level),
        }
    }

    /// Skill shown without a proficiency bar
    pub fn unrated(name: impl Into<String>, icon: Icon) -> Self {
        Self {
            name: name.into(),
            icon,
            level: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    /// Asset path of the certificate image
    pub image: String,
    pub link: String,
}

/// Navigation bar entry mapped to an in-page anchor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    /// Anchor without the leading `#`
    pub anchor: String,
}

impl NavLink {
    pub fn to(section: Section) -> Self {
        Self {
            label: section.label().to_string(),
            anchor: section.anchor().to_string(),
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: Icon,
    pub href: String,
    /// Accessible label (the icon carries no text)
    pub label: String,
}

/// Headline counter in the about section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub icon: Icon,
    pub label: String,
    pub value: String,
}

/// Downloadable résumé with the filename browsers should suggest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    pub href: String,
    pub filename: String,
}

/// One `key: value` line of the about-section code card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeLine {
    pub key: String,
    pub value: String,
    /// Literal values (`true`, `Infinity`) are highlighted apart from strings
    pub literal: bool,
}

/// Who the page is about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub photo: String,
    /// Typed out character by character in the hero
    pub headline: String,
    /// Rotated on a fixed interval below the headline
    pub roles: Vec<String>,
    pub availability: String,
    pub bio: Vec<String>,
    pub email: String,
    pub resume: Option<Resume>,
    pub code_card: Vec<CodeLine>,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_anchor_roundtrip() {
        for section in Section::ALL {
            assert_eq!(Section::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(Section::from_anchor("blog"), None);
    }

    #[test]
    fn test_section_href() {
        assert_eq!(Section::Certifications.href(), "#certifications");
        assert_eq!(Section::About.to_string(), "About");
    }

    #[test]
    fn test_nav_link_to_section() {
        let link = NavLink::to(Section::Contact);
        assert_eq!(link.label, "Contact");
        assert_eq!(link.href(), "#contact");
    }

    #[test]
    fn test_unrated_skill_has_no_level() {
        assert_eq!(Skill::unrated("Rust", Icon::Code).level, None);
        assert_eq!(Skill::new("Go", Icon::Code, 40).level, Some(40));
    }

    #[test]
    fn test_icon_serializes_kebab_case() {
        let json = serde_json::to_string(&Icon::ExternalLink).unwrap();
        assert_eq!(json, "\"external-link\"");
    }
}
