//! Phrase: a target string indexed by grapheme cluster.
//!
//! The typewriter advances one user-perceived character at a time, so a
//! phrase stores the byte offset at which each grapheme ends. Taking a
//! prefix is then a slice, never a re-scan.

use unicode_segmentation::UnicodeSegmentation;

/// A phrase the typewriter can display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    text: String,
    /// Byte offset just past each grapheme.
    ends: Vec<usize>,
}

impl Phrase {
    /// Build a phrase, returning `None` for an empty string.
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.is_empty() {
            return None;
        }
        let ends = text
            .grapheme_indices(true)
            .map(|(start, g)| start + g.len())
            .collect();
        Some(Self { text, ends })
    }

    /// The full phrase.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of graphemes.
    #[inline]
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    /// Always false; empty phrases are never constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// The first `count` graphemes (clamped to the phrase length).
    #[inline]
    pub fn prefix(&self, count: usize) -> &str {
        match count.min(self.ends.len()) {
            0 => "",
            n => &self.text[..self.ends[n - 1]],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_rejected() {
        assert!(Phrase::new("").is_none());
    }

    #[test]
    fn test_prefix_ascii() {
        let phrase = Phrase::new("Rust").unwrap();
        assert_eq!(phrase.len(), 4);
        assert_eq!(phrase.prefix(0), "");
        assert_eq!(phrase.prefix(2), "Ru");
        assert_eq!(phrase.prefix(4), "Rust");
        assert_eq!(phrase.prefix(99), "Rust");
    }

    #[test]
    fn test_prefix_never_splits_graphemes() {
        // "e" + combining acute, then a family emoji (ZWJ sequence)
        let phrase = Phrase::new("e\u{301}👨‍👩‍👧!").unwrap();
        assert_eq!(phrase.len(), 3);
        assert_eq!(phrase.prefix(1), "e\u{301}");
        assert_eq!(phrase.prefix(2), "e\u{301}👨‍👩‍👧");
    }

    #[test]
    fn test_cjk() {
        let phrase = Phrase::new("日本語").unwrap();
        assert_eq!(phrase.len(), 3);
        assert_eq!(phrase.prefix(1), "日");
    }
}
