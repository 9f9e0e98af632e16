//! Horizontally looping marquee track.
//!
//! The item list is laid out twice in a row and translated from 0 to -50%.
//! When the loop restarts the second copy sits exactly where the first one
//! started, so the motion looks continuous.

#[derive(Debug, Clone, PartialEq)]
pub struct MarqueeTrack<T> {
    items: Vec<T>,
    secs_per_item: f32,
    reverse: bool,
}

impl<T> MarqueeTrack<T> {
    pub fn new(items: Vec<T>, secs_per_item: f32) -> Self {
        Self {
            items,
            secs_per_item,
            reverse: false,
        }
    }

    pub fn reversed(mut self) -> Self {
        self.reverse = !self.reverse;
        self
    }

    pub fn is_reversed(&self) -> bool {
        self.reverse
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Items in render order: the list followed by its duplicate
    pub fn track(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().chain(self.items.iter())
    }

    pub fn track_len(&self) -> usize {
        self.items.len() * 2
    }

    /// Length of one full loop in seconds
    pub fn duration_secs(&self) -> f32 {
        self.items.len() as f32 * self.secs_per_item
    }

    /// Inline `animation` style driving the `marquee` keyframes
    pub fn animation_style(&self) -> String {
        let direction = if self.reverse { "reverse" } else { "normal" };
        format!(
            "animation: marquee {:.1}s linear infinite {};",
            self.duration_secs(),
            direction
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_duplicates_items() {
        let track = MarqueeTrack::new(vec!["a", "b", "c"], 2.0);
        let items: Vec<_> = track.track().copied().collect();
        assert_eq!(items, vec!["a", "b", "c", "a", "b", "c"]);
        assert_eq!(track.track_len(), 6);
    }

    #[test]
    fn test_duration_scales_with_items() {
        let track = MarqueeTrack::new(vec![1, 2, 3, 4], 2.5);
        assert_eq!(track.duration_secs(), 10.0);
        assert_eq!(
            track.animation_style(),
            "animation: marquee 10.0s linear infinite normal;"
        );
    }

    #[test]
    fn test_reverse() {
        let track = MarqueeTrack::new(vec![1], 1.0).reversed();
        assert!(track.is_reversed());
        assert!(track.animation_style().ends_with("reverse;"));
    }
}
