//! Page sections and chrome for the portfolio.
//!
//! Each section reads content and motion settings from context; the
//! reusable effect components live in `portfolio-ui`.

mod about;
mod certifications;
mod contact;
mod footer;
mod hero;
mod nav_bar;
mod projects;
mod scroll_progress;
mod skills;

pub use about::About;
pub use certifications::Certifications;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use nav_bar::NavBar;
pub use projects::Projects;
pub use scroll_progress::{use_scroll_tracker, ScrollProgressBar};
pub use skills::Skills;
