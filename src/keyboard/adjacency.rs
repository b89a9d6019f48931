//! Letter adjacency table

use super::layout::Grid;
use super::letter::{Letter, NeighborSet, LETTER_COUNT};
use std::sync::LazyLock;

/// Process-wide QWERTY adjacency table, derived from the physical grid
pub static QWERTY: LazyLock<AdjacencyTable> = LazyLock::new(|| Grid::qwerty().adjacency());

/// Immutable mapping from each letter to the letters on neighboring keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyTable {
    sets: [NeighborSet; LETTER_COUNT],
}

impl AdjacencyTable {
    pub const fn from_sets(sets: [NeighborSet; LETTER_COUNT]) -> Self {
        Self { sets }
    }

    /// Build a table from hand-written neighbor lists, indexed A to Z.
    ///
    /// Each entry lists the uppercase neighbors of that letter; any other
    /// bytes (such as `-` placeholders) are ignored.
    pub const fn from_lists(lists: &[&[u8]; LETTER_COUNT]) -> Self {
        let mut sets = [NeighborSet::EMPTY; LETTER_COUNT];
        let mut i = 0;
        while i < LETTER_COUNT {
            sets[i] = NeighborSet::from_bytes(lists[i]);
            i += 1;
        }
        Self { sets }
    }

    /// Neighbors of `symbol`. Anything outside `A..=Z` has none.
    pub fn neighbors(&self, symbol: char) -> NeighborSet {
        Letter::from_char(symbol)
            .map(|letter| self.neighbors_of(letter))
            .unwrap_or_default()
    }

    pub fn neighbors_of(&self, letter: Letter) -> NeighborSet {
        self.sets[letter.index()]
    }

    /// Whether `to` is reachable in one step from `from`
    pub fn is_neighbor(&self, from: char, to: char) -> bool {
        match Letter::from_char(to) {
            Some(to) => self.neighbors(from).contains(to),
            None => false,
        }
    }

    /// Pairs `(x, y)` where `y` lists as a neighbor of `x` but not the
    /// other way around.
    pub fn symmetry_violations(&self) -> Vec<(Letter, Letter)> {
        Letter::all()
            .flat_map(|x| self.neighbors_of(x).iter().map(move |y| (x, y)))
            .filter(|&(x, y)| !self.neighbors_of(y).contains(x))
            .collect()
    }

    pub fn is_symmetric(&self) -> bool {
        self.symmetry_violations().is_empty()
    }

    /// Largest neighbor set size in the table
    pub fn max_degree(&self) -> usize {
        self.sets.iter().map(NeighborSet::len).max().unwrap_or(0)
    }
}

/// Neighbors of `symbol` on the QWERTY layout
pub fn neighbors(symbol: char) -> NeighborSet {
    QWERTY.neighbors(symbol)
}
