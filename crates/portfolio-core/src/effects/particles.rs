//! Decorative particle field.
//!
//! Each particle gets a start position inside the viewport box, an upward
//! drift, a loop duration and a start delay. Values are drawn once when the
//! field is generated and never change afterwards; the same seed always
//! yields the same field.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Vertical travel per loop in px (negative is up)
pub const DRIFT_RANGE: Range<f32> = -300.0..-100.0;
/// Loop length in seconds
pub const DURATION_RANGE: Range<f32> = 3.0..7.0;
/// Delay before the first loop in seconds
pub const DELAY_RANGE: Range<f32> = 0.0..3.0;

/// Box particles are scattered across
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub drift: f32,
    pub duration: f32,
    pub delay: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleField {
    seed: u64,
    viewport: Viewport,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Generate `count` particles; a random seed is picked when `seed` is `None`
    pub fn generate(count: usize, viewport: Viewport, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);

        let particles = (0..count)
            .map(|_| Particle {
                x: sample(&mut rng, 0.0..viewport.width),
                y: sample(&mut rng, 0.0..viewport.height),
                drift: rng.random_range(DRIFT_RANGE),
                duration: rng.random_range(DURATION_RANGE),
                delay: rng.random_range(DELAY_RANGE),
            })
            .collect();

        tracing::trace!(count, seed, "Generated particle field");
        Self {
            seed,
            viewport,
            particles,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// `random_range` panics on an empty range; a zero-sized viewport pins to 0
fn sample(rng: &mut StdRng, range: Range<f32>) -> f32 {
    if range.is_empty() {
        range.start
    } else {
        rng.random_range(range)
    }
}
