//! Entrance transitions applied when an element is revealed.
//!
//! Each variant has a hidden and a visible presentation; the UI swaps
//! between them and lets CSS transitions animate the change. Staggered
//! variants delay each list item by `index * stagger`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Motion {
    /// Opacity only
    #[default]
    Fade,
    /// Rise 40px while fading in
    FadeUp,
    /// Grow from 85% while fading in
    ScaleIn,
    /// Enter from 60px to the left
    SlideLeft,
    /// Enter from 60px to the right
    SlideRight,
}

impl Motion {
    pub fn hidden_transform(&self) -> &'static str {
        match self {
            Motion::Fade => "none",
            Motion::FadeUp => "translateY(40px)",
            Motion::ScaleIn => "scale(0.85)",
            Motion::SlideLeft => "translateX(-60px)",
            Motion::SlideRight => "translateX(60px)",
        }
    }

    /// Transition length in seconds
    pub fn duration_secs(&self) -> f32 {
        match self {
            Motion::Fade => 0.5,
            Motion::FadeUp => 0.6,
            Motion::ScaleIn => 0.5,
            Motion::SlideLeft | Motion::SlideRight => 0.7,
        }
    }

    /// Extra delay per list index in seconds
    pub fn stagger_secs(&self) -> f32 {
        match self {
            Motion::FadeUp => 0.1,
            Motion::ScaleIn => 0.08,
            Motion::Fade | Motion::SlideLeft | Motion::SlideRight => 0.0,
        }
    }

    pub fn delay_secs(&self, index: usize) -> f32 {
        self.stagger_secs() * index as f32
    }

    /// Inline style for the given state
    pub fn style(&self, visible: bool, index: usize) -> String {
        let duration = self.duration_secs();
        let delay = self.delay_secs(index);
        let (opacity, transform) = if visible {
            (1, "none")
        } else {
            (0, self.hidden_transform())
        };
        format!(
            "opacity: {opacity}; transform: {transform}; \
             transition: opacity {duration:.2}s ease-out {delay:.2}s, \
             transform {duration:.2}s ease-out {delay:.2}s;"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_style() {
        let style = Motion::FadeUp.style(false, 0);
        assert!(style.starts_with("opacity: 0; transform: translateY(40px);"));
    }

    #[test]
    fn test_visible_style_clears_transform() {
        let style = Motion::ScaleIn.style(true, 0);
        assert!(style.starts_with("opacity: 1; transform: none;"));
    }

    #[test]
    fn test_stagger() {
        assert!((Motion::FadeUp.delay_secs(3) - 0.3).abs() < 1e-6);
        assert!((Motion::ScaleIn.delay_secs(2) - 0.16).abs() < 1e-6);
        assert_eq!(Motion::SlideLeft.delay_secs(5), 0.0);
        assert!(Motion::FadeUp.style(true, 2).contains("ease-out 0.20s"));
    }
}
