//! Page scroll progress for the top progress bar and hero parallax

use serde::{Deserialize, Serialize};

/// Furthest the hero backdrop travels, as a percentage of its height
pub const PARALLAX_MAX_PERCENT: f64 = 30.0;

/// Raw scroll measurements reported by the document
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Fraction of the scrollable distance covered, clamped to `[0, 1]`.
    ///
    /// A page shorter than its viewport cannot scroll and reports 0.
    pub fn progress(&self) -> f64 {
        let scrollable = self.scroll_height - self.viewport_height;
        if scrollable.is_nan() || scrollable <= 0.0 || !self.scroll_y.is_finite() {
            return 0.0;
        }
        (self.scroll_y / scrollable).clamp(0.0, 1.0)
    }
}

/// Backdrop offset for a progress value, `0..=PARALLAX_MAX_PERCENT`
pub fn parallax_percent(progress: f64) -> f64 {
    progress.clamp(0.0, 1.0) * PARALLAX_MAX_PERCENT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_y: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_y,
            scroll_height: 3000.0,
            viewport_height: 1000.0,
        }
    }

    #[test]
    fn test_progress() {
        assert_eq!(metrics(0.0).progress(), 0.0);
        assert_eq!(metrics(1000.0).progress(), 0.5);
        assert_eq!(metrics(2000.0).progress(), 1.0);
    }

    #[test]
    fn test_progress_clamped() {
        assert_eq!(metrics(-50.0).progress(), 0.0);
        assert_eq!(metrics(5000.0).progress(), 1.0);
    }

    #[test]
    fn test_unscrollable_page() {
        let short = ScrollMetrics {
            scroll_y: 10.0,
            scroll_height: 500.0,
            viewport_height: 800.0,
        };
        assert_eq!(short.progress(), 0.0);
    }

    #[test]
    fn test_parallax() {
        assert_eq!(parallax_percent(0.0), 0.0);
        assert_eq!(parallax_percent(0.5), 15.0);
        assert_eq!(parallax_percent(2.0), 30.0);
    }
}
