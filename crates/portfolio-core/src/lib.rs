//! Portfolio Core Library
//!
//! Content model and effect logic for a single-page developer portfolio.
//!
//! ## Overview
//!
//! The page is built from hand-authored literal data (profile, skills,
//! projects, certifications, links) and a handful of cosmetic effects. This
//! crate holds both halves without any UI dependency:
//!
//! - [`Portfolio`]: the content, plus [`Portfolio::validate`] to check it
//! - [`effects`]: typewriter, role rotation, particle field, reveal latch,
//!   marquee track, motion variants and scroll progress
//! - [`MotionSettings`]: timing knobs shared by the effects
//!
//! ## Quick Start
//!
//! ```
//! use portfolio_core::{Portfolio, effects::Typewriter};
//!
//! let content = Portfolio::default_content();
//! content.validate().unwrap();
//!
//! let mut typewriter = Typewriter::new(content.profile.headline.as_str());
//! while typewriter.advance() {}
//! assert_eq!(typewriter.visible(), content.profile.headline);
//! ```

pub mod content;
pub mod effects;
pub mod error;
pub mod settings;
pub mod types;

// Re-exports
pub use content::{ContentSummary, Portfolio};
pub use error::{PortfolioError, Result};
pub use settings::MotionSettings;
pub use types::{
    Certification, CodeLine, Icon, NavLink, Profile, Project, Resume, Section, Skill, SocialLink,
    Stat,
};
