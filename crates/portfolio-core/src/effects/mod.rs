//! State machines behind the page's motion effects.
//!
//! Everything here is deterministic and free of UI types. The components in
//! `portfolio-ui` hold one of these in a signal and drive it from a timer or
//! a viewport callback.

pub mod marquee;
pub mod motion;
pub mod particles;
pub mod reveal;
pub mod rotation;
pub mod scroll;
pub mod typewriter;

pub use marquee::MarqueeTrack;
pub use motion::Motion;
pub use particles::{Particle, ParticleField, Viewport};
pub use reveal::RevealLatch;
pub use rotation::RoleRotation;
pub use scroll::{parallax_percent, ScrollMetrics};
pub use typewriter::Typewriter;
