//! Fixed-interval rotation through a list of role labels

use crate::error::{PortfolioError, Result};

/// Cycles a non-empty list, wrapping to the first entry after the last
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRotation {
    roles: Vec<String>,
    index: usize,
}

impl RoleRotation {
    pub fn new<I, S>(roles: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles: Vec<String> = roles.into_iter().map(Into::into).collect();
        if roles.is_empty() {
            return Err(PortfolioError::NoRoles);
        }
        Ok(Self { roles, index: 0 })
    }

    pub fn current(&self) -> &str {
        &self.roles[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    /// Move to the next role and return it
    pub fn advance(&mut self) -> &str {
        self.index = (self.index + 1) % self.roles.len();
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLES: [&str; 3] = [
        "Backend Developer",
        "Full Stack Developer",
        "Data Science Enthusiast",
    ];

    #[test]
    fn test_wraps_after_last() {
        let mut rotation = RoleRotation::new(ROLES).unwrap();
        assert_eq!(rotation.current(), "Backend Developer");
        assert_eq!(rotation.advance(), "Full Stack Developer");
        assert_eq!(rotation.advance(), "Data Science Enthusiast");
        assert_eq!(rotation.advance(), "Backend Developer");
        assert_eq!(rotation.index(), 0);
    }

    #[test]
    fn test_single_role_stays_put() {
        let mut rotation = RoleRotation::new(["Engineer"]).unwrap();
        assert_eq!(rotation.advance(), "Engineer");
    }

    #[test]
    fn test_empty_rejected() {
        let roles: Vec<String> = Vec::new();
        assert_eq!(RoleRotation::new(roles), Err(PortfolioError::NoRoles));
    }
}
