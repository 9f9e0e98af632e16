//! Property-based tests for the effect state machines
//!
//! Uses proptest to verify the invariants each effect promises regardless
//! of input text, list sizes or seeds.

use portfolio_core::effects::particles::{DELAY_RANGE, DRIFT_RANGE, DURATION_RANGE};
use portfolio_core::effects::{
    MarqueeTrack, ParticleField, RevealLatch, RoleRotation, ScrollMetrics, Typewriter, Viewport,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Arbitrary text including multi-byte characters
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(".{0,200}").expect("valid regex")
}

/// Non-empty role lists
fn roles_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::string::string_regex("[a-zA-Z ]{1,30}").expect("valid regex"),
        1..8,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// A text of N characters yields N+1 states ending in the full text
    #[test]
    fn typewriter_has_n_plus_one_states(text in text_strategy()) {
        let mut tw = Typewriter::new(text.as_str());
        let mut states = vec![tw.visible().to_string()];
        while tw.advance() {
            states.push(tw.visible().to_string());
        }
        prop_assert_eq!(states.len(), text.chars().count() + 1);
        prop_assert_eq!(states.first().map(String::as_str), Some(""));
        prop_assert_eq!(states.last(), Some(&text));
    }

    /// Every state is a prefix of the next
    #[test]
    fn typewriter_states_are_growing_prefixes(text in text_strategy()) {
        let tw = Typewriter::new(text.as_str());
        let states: Vec<&str> = tw.states().collect();
        for pair in states.windows(2) {
            prop_assert!(pair[1].starts_with(pair[0]));
            prop_assert_eq!(pair[1].chars().count(), pair[0].chars().count() + 1);
        }
    }

    /// Advancing a finished typewriter changes nothing
    #[test]
    fn typewriter_idempotent_at_completion(text in text_strategy(), extra in 0usize..20) {
        let mut tw = Typewriter::finished(text.as_str());
        let before = tw.clone();
        for _ in 0..extra {
            prop_assert!(!tw.advance());
        }
        prop_assert_eq!(tw, before);
    }

    /// After `len` ticks the rotation is back at its first role
    #[test]
    fn rotation_wraps_after_full_cycle(roles in roles_strategy(), cycles in 1usize..4) {
        let mut rotation = RoleRotation::new(roles.clone()).unwrap();
        for _ in 0..roles.len() * cycles {
            rotation.advance();
        }
        prop_assert_eq!(rotation.current(), roles[0].as_str());
    }

    /// Tick k shows role k mod len
    #[test]
    fn rotation_visits_in_order(roles in roles_strategy(), ticks in 0usize..30) {
        let mut rotation = RoleRotation::new(roles.clone()).unwrap();
        for _ in 0..ticks {
            rotation.advance();
        }
        prop_assert_eq!(rotation.current(), roles[ticks % roles.len()].as_str());
    }

    /// Particles stay in their documented ranges
    #[test]
    fn particles_within_ranges(
        seed in any::<u64>(),
        count in 0usize..64,
        width in 1.0f32..4000.0,
        height in 1.0f32..4000.0,
    ) {
        let field = ParticleField::generate(count, Viewport { width, height }, Some(seed));
        prop_assert_eq!(field.len(), count);
        for p in field.particles() {
            prop_assert!(p.x >= 0.0 && p.x < width);
            prop_assert!(p.y >= 0.0 && p.y < height);
            prop_assert!(DRIFT_RANGE.contains(&p.drift));
            prop_assert!(DURATION_RANGE.contains(&p.duration));
            prop_assert!(DELAY_RANGE.contains(&p.delay));
        }
    }

    /// A fixed seed regenerates the exact same field
    #[test]
    fn particles_deterministic_per_seed(seed in any::<u64>(), count in 0usize..32) {
        let a = ParticleField::generate(count, Viewport::default(), Some(seed));
        let b = ParticleField::generate(count, Viewport::default(), Some(seed));
        prop_assert_eq!(a, b);
    }

    /// The second half of the marquee track mirrors the first
    #[test]
    fn marquee_second_half_mirrors_first(items in prop::collection::vec(any::<u16>(), 0..40)) {
        let track = MarqueeTrack::new(items.clone(), 2.5);
        let rendered: Vec<u16> = track.track().copied().collect();
        prop_assert_eq!(rendered.len(), items.len() * 2);
        prop_assert_eq!(&rendered[..items.len()], items.as_slice());
        prop_assert_eq!(&rendered[items.len()..], items.as_slice());
    }

    /// Progress is always inside [0, 1]
    #[test]
    fn scroll_progress_clamped(
        scroll_y in -1.0e6f64..1.0e6,
        scroll_height in 0.0f64..1.0e6,
        viewport_height in 0.0f64..1.0e6,
    ) {
        let progress = ScrollMetrics { scroll_y, scroll_height, viewport_height }.progress();
        prop_assert!((0.0..=1.0).contains(&progress));
    }

    /// However many times the viewport callback fires, the latch reports one reveal
    #[test]
    fn reveal_latch_fires_once(hits in 1usize..50) {
        let mut latch = RevealLatch::new();
        let fired = (0..hits).filter(|_| latch.trigger()).count();
        prop_assert_eq!(fired, 1);
        prop_assert!(latch.is_revealed());
    }
}
