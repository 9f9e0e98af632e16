//! Reusable components for the portfolio page
//!
//! Effect components keep their state in a `portfolio-core` state machine;
//! colours, fonts and keyframes come from the application stylesheet.

mod button;
mod dot_grid;
mod icon;
mod marquee;
mod particle_field;
mod reveal;
mod rotating_text;
mod section_heading;
mod skill_bar;
mod status_badge;
mod tech_tags;
mod typing_text;

#[cfg(test)]
pub(crate) mod test_support;

pub use button::*;
pub use dot_grid::*;
pub use icon::*;
pub use marquee::*;
pub use particle_field::*;
pub use reveal::*;
pub use rotating_text::*;
pub use section_heading::*;
pub use skill_bar::*;
pub use status_badge::*;
pub use tech_tags::*;
pub use typing_text::*;
