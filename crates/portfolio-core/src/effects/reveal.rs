//! One-shot reveal-on-scroll latch

/// Per-element flag that flips from hidden to revealed exactly once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch that starts out revealed (reduced motion, no observer)
    pub fn revealed() -> Self {
        Self { revealed: true }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Record that the element entered the viewport.
    ///
    /// Returns `true` only for the first call.
    pub fn trigger(&mut self) -> bool {
        if self.revealed {
            return false;
        }
        self.revealed = true;
        true
    }
}
