//! Shared utility types

use serde::{Deserialize, Serialize};

/// Tracks the longest word seen so far.
///
/// Ties keep the earliest word, so the result matches a single forward pass
/// over a word list.
///
/// # Example
///
/// ```
/// use qwerty_walk::utils::LongestWord;
///
/// let mut longest = LongestWord::default();
/// assert!(longest.word().is_none());
///
/// longest.offer("ASDF");
/// longest.offer("DESERT");
/// longest.offer("REWARD"); // same length, DESERT stays
/// longest.offer("WE");
///
/// assert_eq!(longest.word(), Some("DESERT"));
/// assert_eq!(longest.len(), 6);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongestWord {
    word: Option<String>,
    len: usize,
}

impl LongestWord {
    /// Offer a word, returning true if it became the new longest.
    pub fn offer(&mut self, word: &str) -> bool {
        self.offer_with_len(word, word.chars().count())
    }

    /// Like [`offer`](Self::offer) when the letter count is already known.
    pub fn offer_with_len(&mut self, word: &str, len: usize) -> bool {
        if self.word.is_some() && len <= self.len {
            return false;
        }
        self.word = Some(word.to_string());
        self.len = len;
        true
    }

    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    /// Length in letters of the longest word, 0 if none was offered
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offer_from_empty() {
        let mut longest = LongestWord::default();
        assert!(longest.offer("WE"));
        assert_eq!(longest.word(), Some("WE"));
        assert_eq!(longest.len(), 2);
    }

    #[test]
    fn longer_word_replaces() {
        let mut longest = LongestWord::default();
        longest.offer("WE");
        assert!(longest.offer("WERT"));
        assert_eq!(longest.word(), Some("WERT"));
    }

    #[test]
    fn shorter_word_unchanged() {
        let mut longest = LongestWord::default();
        longest.offer("WERT");
        assert!(!longest.offer("WE"));
        assert_eq!(longest.word(), Some("WERT"));
    }

    #[test]
    fn tie_keeps_first_seen() {
        let mut longest = LongestWord::default();
        longest.offer("ASDF");
        assert!(!longest.offer("QWER"));
        assert_eq!(longest.word(), Some("ASDF"));
    }

    #[test]
    fn empty_word_still_recorded_first() {
        let mut longest = LongestWord::default();
        assert!(longest.offer(""));
        assert!(!longest.is_empty());
        assert_eq!(longest.len(), 0);
        assert!(longest.offer("A"));
    }

    #[test]
    fn offer_with_len_uses_given_length() {
        let mut longest = LongestWord::default();
        longest.offer_with_len("DESERT", 6);
        assert!(!longest.offer_with_len("ASDF", 4));
        assert_eq!(longest.len(), 6);
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        let mut longest = LongestWord::default();
        longest.offer("ÉCLAT");
        assert_eq!(longest.len(), 5);
    }
}
