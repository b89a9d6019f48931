//! Letter keys and fixed-capacity letter sets

use std::fmt;

/// Number of letter keys on the layout
pub const LETTER_COUNT: usize = 26;

/// One of the 26 letter keys, stored as its alphabet index (A = 0).
///
/// The canonical case is uppercase: `Letter::from_char('d')` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Letter from an uppercase ASCII character
    pub const fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_uppercase() {
            Some(Self(c as u8 - b'A'))
        } else {
            None
        }
    }

    /// Letter from an uppercase ASCII byte
    pub const fn from_byte(b: u8) -> Option<Self> {
        if b.is_ascii_uppercase() {
            Some(Self(b - b'A'))
        } else {
            None
        }
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn as_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// All letters in alphabetical order
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..LETTER_COUNT as u8).map(Letter)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Set of letters, one bit per letter
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NeighborSet {
    bits: u32,
}

impl NeighborSet {
    pub const EMPTY: NeighborSet = NeighborSet { bits: 0 };

    /// Build a set from uppercase ASCII bytes; other bytes are ignored.
    pub const fn from_bytes(bytes: &[u8]) -> Self {
        let mut bits = 0u32;
        let mut i = 0;
        while i < bytes.len() {
            if let Some(letter) = Letter::from_byte(bytes[i]) {
                bits |= 1 << letter.0;
            }
            i += 1;
        }
        Self { bits }
    }

    pub const fn contains(&self, letter: Letter) -> bool {
        self.bits & (1 << letter.0) != 0
    }

    pub fn insert(&mut self, letter: Letter) {
        self.bits |= 1 << letter.0;
    }

    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = Letter> {
        Letter::all().filter(move |l| self.contains(*l))
    }
}

impl FromIterator<Letter> for NeighborSet {
    fn from_iter<T: IntoIterator<Item = Letter>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        iter.into_iter().for_each(|l| set.insert(l));
        set
    }
}

impl fmt::Debug for NeighborSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Letter::as_char)).finish()
    }
}

impl fmt::Display for NeighborSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: String = self.iter().map(Letter::as_char).collect();
        f.write_str(&letters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_accepts_uppercase_only() {
        assert_eq!(Letter::from_char('A').map(Letter::index), Some(0));
        assert_eq!(Letter::from_char('Z').map(Letter::index), Some(25));
        assert_eq!(Letter::from_char('a'), None);
        assert_eq!(Letter::from_char('-'), None);
        assert_eq!(Letter::from_char('É'), None);
    }

    #[test]
    fn letter_char_roundtrip_covers_alphabet() {
        let letters: String = Letter::all().map(Letter::as_char).collect();
        assert_eq!(letters, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn set_from_bytes_ignores_non_letters() {
        let set = NeighborSet::from_bytes(b"QW-s");
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_string(), "QW");
    }

    #[test]
    fn set_iterates_alphabetically() {
        let set: NeighborSet = "XSDC".chars().filter_map(Letter::from_char).collect();
        assert_eq!(set.to_string(), "CDSX");
        assert_eq!(format!("{:?}", set), "{'C', 'D', 'S', 'X'}");
    }

    #[test]
    fn empty_set() {
        assert!(NeighborSet::EMPTY.is_empty());
        assert_eq!(NeighborSet::default(), NeighborSet::EMPTY);
        assert_eq!(NeighborSet::EMPTY.iter().count(), 0);
    }
}
