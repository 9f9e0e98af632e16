//! Portfolio UI Components
//!
//! Dioxus components for the portfolio page's presentation helpers. Each
//! effect keeps its state in a `portfolio-core` state machine and owns the
//! timer or viewport callback that drives it, so unmounting a component
//! also cancels its work.
//!
//! ## Effects
//!
//! - **Reveal**: one-shot entrance transition when an element first scrolls
//!   into view
//! - **TypingText**: character-by-character reveal with a blinking caret
//! - **RotatingText**: fixed-interval rotation through a list of labels
//! - **Marquee**: infinitely looping strip of duplicated items
//! - **Particles**: seeded field of drifting dots behind the hero
//!
//! Colours and keyframes live in the application stylesheet; components
//! only emit class names and inline motion styles.

pub mod components;
pub mod timer;

pub use components::*;
