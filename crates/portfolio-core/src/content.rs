//! The portfolio content and its well-formedness checks.
//!
//! Content is hand-authored literal data built once at startup. Nothing
//! mutates it afterwards; the page only reads it.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{PortfolioError, Result};
use crate::types::{
    Certification, CodeLine, Icon, NavLink, Profile, Project, Resume, Section, Skill, SocialLink,
    Stat,
};

const PROFILE_PHOTO: &str = "/assets/profile-photo.jpeg";
const DELTA_CERTIFICATE: &str = "/assets/delta-certificate.png";
const DATA_SCIENCE_CERTIFICATE: &str = "/assets/data-science-certificate.jpg";

/// Everything the page renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Portfolio {
    pub profile: Profile,
    /// Sections rendered on the page, in order
    pub sections: Vec<Section>,
    pub nav: Vec<NavLink>,
    pub stats: Vec<Stat>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub socials: Vec<SocialLink>,
}

/// Counts reported by `portfolio --check`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentSummary {
    pub name: String,
    pub sections: Vec<String>,
    pub skills: usize,
    pub projects: usize,
    pub certifications: usize,
    pub socials: usize,
    pub roles: usize,
    pub resume: bool,
}

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|t| t.to_string()).collect()
}

fn code_line(key: &str, value: &str, literal: bool) -> CodeLine {
    CodeLine {
        key: key.to_string(),
        value: value.to_string(),
        literal,
    }
}

impl Portfolio {
    /// The literal content of the page
    pub fn default_content() -> Self {
        let email = "santanupradhan599@gmail.com";

        let profile = Profile {
            name: "Santanu Pradhan".to_string(),
            photo: PROFILE_PHOTO.to_string(),
            headline: "Backend Developer | Full Stack | Data Science Enthusiast".to_string(),
            roles: tags(&[
                "Backend Developer",
                "Full Stack Developer",
                "Data Science Enthusiast",
            ]),
            availability: "Available for hire".to_string(),
            bio: vec![
                "I'm Santanu Pradhan, a B.Tech CST student at Nalanda Institute of Technology, \
                 Bhubaneswar (CGPA 8.3). I specialize in backend development with Node.js, \
                 Express, and MongoDB."
                    .to_string(),
                "Previously interned as a Backend Developer at SLK Software, building scalable \
                 REST APIs, authentication systems, and database solutions. Passionate about \
                 real-time applications and open source."
                    .to_string(),
            ],
            email: email.to_string(),
            resume: Some(Resume {
                href: "/assets/resume.pdf".to_string(),
                filename: "Santanu_Pradhan_Resume.pdf".to_string(),
            }),
            code_card: vec![
                code_line("name", "Santanu Pradhan", false),
                code_line("role", "Backend Developer", false),
                code_line("passion", "Building scalable APIs", false),
                code_line("learning", "true", true),
                code_line("coffee", "Infinity", true),
            ],
        };

        let skills = vec![
            Skill::new("JavaScript", Icon::Code, 90),
            Skill::new("Node.js", Icon::Terminal, 88),
            Skill::new("React", Icon::Code, 85),
            Skill::new("Express.js", Icon::Terminal, 85),
            Skill::new("MongoDB", Icon::Database, 82),
            Skill::new("Python", Icon::Code, 78),
            Skill::new("SQL", Icon::Database, 78),
            Skill::new("TypeScript", Icon::Code, 80),
            Skill::new("HTML/CSS", Icon::Globe, 92),
            Skill::new("Docker", Icon::Layers, 70),
            Skill::new("Git", Icon::Layers, 85),
            Skill::new("Java", Icon::Code, 72),
        ];

        let projects = vec![
            Project {
                title: "Real-Time Collaborative Code Sharing".to_string(),
                description: "Real-time collaborative code-sharing platform using Node.js and \
                              Socket.IO with room-based WebSocket communication and chat \
                              functionality."
                    .to_string(),
                tech: tags(&["Node.js", "Express", "MongoDB", "React", "Socket.IO"]),
                link: "#".to_string(),
            },
            Project {
                title: "LeetCode Node Backend".to_string(),
                description: "Backend API for a LeetCode-style coding platform with structured \
                              problem retrieval, submission handling, and code evaluation \
                              services."
                    .to_string(),
                tech: tags(&["Node.js", "Express", "TypeScript"]),
                link: "#".to_string(),
            },
            Project {
                title: "Blood Vault".to_string(),
                description: "Centralized Blood Bank Management System with real-time inventory \
                              tracking, automated request workflows, and JWT-based role access \
                              control."
                    .to_string(),
                tech: tags(&["Node.js", "Express", "MongoDB", "React"]),
                link: "#".to_string(),
            },
        ];

        let certifications = vec![
            Certification {
                title: "Alpha Delta \u{2013} Full Stack Web Development".to_string(),
                issuer: "Apna College".to_string(),
                image: DELTA_CERTIFICATE.to_string(),
                link: DELTA_CERTIFICATE.to_string(),
            },
            Certification {
                title: "The Ultimate Job Ready Data Science Course".to_string(),
                issuer: "Code With Harry".to_string(),
                image: DATA_SCIENCE_CERTIFICATE.to_string(),
                link: DATA_SCIENCE_CERTIFICATE.to_string(),
            },
        ];

        let stats = vec![
            Stat {
                icon: Icon::Briefcase,
                label: "Projects".to_string(),
                value: "10+".to_string(),
            },
            Stat {
                icon: Icon::Code,
                label: "Technologies".to_string(),
                value: "15+".to_string(),
            },
            Stat {
                icon: Icon::Award,
                label: "Certifications".to_string(),
                value: certifications.len().to_string(),
            },
        ];

        let socials = vec![
            SocialLink {
                icon: Icon::Github,
                href: "https://github.com/santanupradhan".to_string(),
                label: "GitHub".to_string(),
            },
            SocialLink {
                icon: Icon::Linkedin,
                href: "https://linkedin.com/in/santanupradhan".to_string(),
                label: "LinkedIn".to_string(),
            },
            SocialLink {
                icon: Icon::Mail,
                href: format!("mailto:{}", email),
                label: "Email".to_string(),
            },
        ];

        Self {
            profile,
            sections: Section::ALL.to_vec(),
            nav: Section::ALL.into_iter().map(NavLink::to).collect(),
            stats,
            skills,
            projects,
            certifications,
            socials,
        }
    }

    /// Check that the literal data is well-formed.
    ///
    /// Returns the first problem found; content is small enough that fixing
    /// one at a time is fine.
    pub fn validate(&self) -> Result<()> {
        let profile = &self.profile;
        require("profile name", &profile.name)?;
        require("profile photo", &profile.photo)?;
        require("profile headline", &profile.headline)?;
        require("profile email", &profile.email)?;
        if profile.roles.is_empty() {
            return Err(PortfolioError::NoRoles);
        }
        for role in &profile.roles {
            require("role", role)?;
        }
        if let Some(resume) = &profile.resume {
            require("resume filename", &resume.filename)?;
            check_link("resume", &resume.href)?;
        }

        let mut seen = HashSet::new();
        for skill in &self.skills {
            require("skill name", &skill.name)?;
            if let Some(level) = skill.level {
                if level > 100 {
                    return Err(PortfolioError::InvalidLevel {
                        name: skill.name.clone(),
                        level,
                    });
                }
            }
            unique(&mut seen, "skill", &skill.name)?;
        }

        seen.clear();
        for project in &self.projects {
            require("project title", &project.title)?;
            require("project description", &project.description)?;
            check_link(&project.title, &project.link)?;
            unique(&mut seen, "project", &project.title)?;
        }

        seen.clear();
        for cert in &self.certifications {
            require("certification title", &cert.title)?;
            require("certification issuer", &cert.issuer)?;
            require("certification image", &cert.image)?;
            check_link(&cert.title, &cert.link)?;
            unique(&mut seen, "certification", &cert.title)?;
        }

        for stat in &self.stats {
            require("stat label", &stat.label)?;
            require("stat value", &stat.value)?;
        }

        for social in &self.socials {
            require("social label", &social.label)?;
            check_link(&social.label, &social.href)?;
        }

        for link in &self.nav {
            require("nav label", &link.label)?;
            let rendered = Section::from_anchor(&link.anchor)
                .map(|s| self.sections.contains(&s))
                .unwrap_or(false);
            if !rendered {
                return Err(PortfolioError::UnknownAnchor {
                    label: link.label.clone(),
                    anchor: link.anchor.clone(),
                });
            }
        }

        tracing::debug!(
            skills = self.skills.len(),
            projects = self.projects.len(),
            certifications = self.certifications.len(),
            "Portfolio content validated"
        );
        Ok(())
    }

    pub fn summary(&self) -> ContentSummary {
        ContentSummary {
            name: self.profile.name.clone(),
            sections: self.sections.iter().map(|s| s.anchor().to_string()).collect(),
            skills: self.skills.len(),
            projects: self.projects.len(),
            certifications: self.certifications.len(),
            socials: self.socials.len(),
            roles: self.profile.roles.len(),
            resume: self.profile.resume.is_some(),
        }
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::default_content()
    }
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PortfolioError::EmptyField(field.to_string()));
    }
    Ok(())
}

fn unique<'a>(seen: &mut HashSet<&'a str>, kind: &'static str, key: &'a str) -> Result<()> {
    if !seen.insert(key) {
        return Err(PortfolioError::DuplicateEntry {
            kind,
            key: key.to_string(),
        });
    }
    Ok(())
}

/// Links the page emits: web URLs, mail, in-page anchors, and root-relative assets.
/// Protocol-relative `//host` links are rejected.
fn check_link(owner: &str, href: &str) -> Result<()> {
    let accepted = ["https://", "http://", "mailto:", "#", "/"]
        .iter()
        .any(|prefix| href.starts_with(prefix));
    if !accepted || href.starts_with("//") || href.contains(char::is_whitespace) {
        return Err(PortfolioError::InvalidLink {
            owner: owner.to_string(),
            href: href.to_string(),
        });
    }
    Ok(())
}
