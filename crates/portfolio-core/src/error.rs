//! Error types for the portfolio content model

use thiserror::Error;

/// Main error type for portfolio content and settings
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// Skill proficiency outside 0-100
    #[error("Skill '{name}' has level {level}, expected 0-100")]
    InvalidLevel { name: String, level: u8 },

    /// A required text field is blank
    #[error("Empty field: {0}")]
    EmptyField(String),

    /// Two entries of the same list share a key
    #[error("Duplicate {kind}: {key}")]
    DuplicateEntry { kind: &'static str, key: String },

    /// Navigation link pointing at a section the page does not render
    #[error("Nav link '{label}' targets unknown anchor '#{anchor}'")]
    UnknownAnchor { label: String, anchor: String },

    /// Link with a scheme the page does not emit
    #[error("Invalid link for {owner}: {href}")]
    InvalidLink { owner: String, href: String },

    /// Rotating role list is empty
    #[error("Role rotation needs at least one role")]
    NoRoles,

    /// Motion setting outside its accepted range
    #[error("Invalid setting {name}: {reason}")]
    InvalidSetting { name: &'static str, reason: String },
}

/// Result type alias for portfolio operations
pub type Result<T> = std::result::Result<T, PortfolioError>;
