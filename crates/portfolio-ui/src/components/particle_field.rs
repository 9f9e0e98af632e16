//! Particle Field Component
//!
//! Purely ornamental layer of small dots drifting upward and fading in and
//! out behind the hero. The field is generated once when the component is
//! created and reused on every render, so re-renders never jitter.

use dioxus::prelude::*;
use portfolio_core::effects::{Particle, ParticleField, Viewport};
use portfolio_core::settings::DEFAULT_PARTICLE_COUNT;

/// Properties for the Particles component
#[derive(Clone, PartialEq, Props)]
pub struct ParticlesProps {
    #[props(default = DEFAULT_PARTICLE_COUNT)]
    pub count: usize,
    /// Fixed seed for a reproducible field
    #[props(default)]
    pub seed: Option<u64>,
    #[props(default)]
    pub viewport: Option<Viewport>,
    /// Render particles at rest without animation
    #[props(default = false)]
    pub still: bool,
}

/// Inline style placing one particle and parameterising its loop
pub fn particle_style(particle: &Particle, still: bool) -> String {
    let position = format!(
        "left: {:.1}px; top: {:.1}px; --drift: {:.1}px;",
        particle.x, particle.y, particle.drift
    );
    if still {
        format!("{} opacity: 0.4;", position)
    } else {
        format!(
            "{} animation: particle-float {:.2}s linear {:.2}s infinite;",
            position, particle.duration, particle.delay
        )
    }
}

#[component]
pub fn Particles(props: ParticlesProps) -> Element {
    let count = props.count;
    let seed = props.seed;
    let viewport = props.viewport.unwrap_or_default();
    let field = use_hook(move || ParticleField::generate(count, viewport, seed));
    let still = props.still;

    rsx! {
        div { class: "particle-field", "aria-hidden": "true",
            for (i, particle) in field.particles().iter().enumerate() {
                div {
                    key: "{i}",
                    class: "particle",
                    style: particle_style(particle, still),
                }
            }
        }
    }
}
