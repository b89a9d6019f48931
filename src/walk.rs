//! Key-walk validation
//!
//! A word is typeable when each letter sits on a key next to the previous
//! one. Only `neighbors(word[i])` is consulted for `word[i + 1]`, so the
//! check stays correct for tables that are not symmetric.

use crate::keyboard::{AdjacencyTable, QWERTY};

/// Outcome of validating one word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// Every consecutive pair is a neighbor pair
    pub typeable: bool,
    /// Number of letters in the word
    pub len: usize,
}

impl AdjacencyTable {
    /// Index `i` of the first pair `(word[i], word[i + 1])` that is not a
    /// neighbor step, or `None` if the whole word can be walked.
    pub fn first_break(&self, word: &str) -> Option<usize> {
        let mut letters = word.chars();
        let mut current = letters.next()?;
        for (i, next) in letters.enumerate() {
            if !self.is_neighbor(current, next) {
                return Some(i);
            }
            current = next;
        }
        None
    }

    /// Whether `word` can be typed moving only between adjacent keys.
    ///
    /// Empty and single-letter words are trivially typeable.
    pub fn is_typeable(&self, word: &str) -> bool {
        self.first_break(word).is_none()
    }

    pub fn validate(&self, word: &str) -> Verdict {
        Verdict {
            typeable: self.is_typeable(word),
            len: word.chars().count(),
        }
    }
}

/// [`AdjacencyTable::is_typeable`] on the QWERTY layout
pub fn is_typeable(word: &str) -> bool {
    QWERTY.is_typeable(word)
}

/// [`AdjacencyTable::first_break`] on the QWERTY layout
pub fn first_break(word: &str) -> Option<usize> {
    QWERTY.first_break(word)
}

/// [`AdjacencyTable::validate`] on the QWERTY layout
pub fn validate(word: &str) -> Verdict {
    QWERTY.validate(word)
}
