//! Character-by-character text reveal.
//!
//! For a text of N characters the typewriter walks through exactly N+1
//! states: the empty string, then one more character per step, ending at
//! the full text. Steps split on `char` boundaries so multi-byte text never
//! yields a partial code point.

/// One-way cursor over the prefixes of a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    /// Byte offset of every prefix end, `0` through `text.len()`
    boundaries: Vec<usize>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let boundaries = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        Self {
            text,
            boundaries,
            shown: 0,
        }
    }

    /// Typewriter already showing the full text
    pub fn finished(text: impl Into<String>) -> Self {
        let mut typewriter = Self::new(text);
        typewriter.finish();
        typewriter
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Currently visible prefix
    pub fn visible(&self) -> &str {
        &self.text[..self.boundaries[self.shown]]
    }

    /// Characters currently visible
    pub fn position(&self) -> usize {
        self.shown
    }

    /// Number of characters in the text
    pub fn char_len(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Number of distinct visible states (`char_len() + 1`)
    pub fn state_count(&self) -> usize {
        self.boundaries.len()
    }

    pub fn is_complete(&self) -> bool {
        self.shown + 1 == self.boundaries.len()
    }

    /// Reveal one more character.
    ///
    /// Returns `false` once the full text is visible; further calls change
    /// nothing.
    pub fn advance(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.shown += 1;
        true
    }

    /// Jump straight to the full text
    pub fn finish(&mut self) {
        self.shown = self.boundaries.len() - 1;
    }

    /// Every state from empty to full, regardless of the current position
    pub fn states(&self) -> impl Iterator<Item = &str> + '_ {
        self.boundaries.iter().map(move |&end| &self.text[..end])
    }
}
