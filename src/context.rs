//! Context providers for the portfolio page.
//!
//! The content and motion settings are fixed for the lifetime of the page,
//! so they are provided once at the root and read anywhere below it.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| SharedPortfolio::new(Portfolio::default_content()));
//! use_context_provider(get_settings);
//!
//! // In child components
//! let content = use_portfolio();
//! let motion = use_motion();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use portfolio_core::{MotionSettings, Portfolio};

/// Shared read-only content.
///
/// Wrapped in Arc so every `use_context` clone is a pointer copy.
pub type SharedPortfolio = Arc<Portfolio>;

/// Page scroll progress in `[0, 1]`
#[derive(Clone, Copy, PartialEq)]
pub struct ScrollProgress(pub Signal<f64>);

/// Get the motion settings for the application.
/// Uses the global settings set from command line args.
pub fn get_settings() -> MotionSettings {
    crate::get_settings()
}

/// Hook to access the page content from context.
pub fn use_portfolio() -> SharedPortfolio {
    use_context::<SharedPortfolio>()
}

/// Hook to access the motion settings from context.
pub fn use_motion() -> MotionSettings {
    use_context::<MotionSettings>()
}

/// Hook to access the scroll progress signal from context.
pub fn use_scroll_progress() -> Signal<f64> {
    use_context::<ScrollProgress>().0
}
