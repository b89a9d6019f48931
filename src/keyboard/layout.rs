//! Physical letter-key grid
//!
//! Describes where each letter key sits on a staggered QWERTY keyboard and
//! derives the neighbor relation from that geometry. Horizontal positions are
//! measured in quarter-key units so the row stagger stays integral.

use super::adjacency::AdjacencyTable;
use super::letter::{Letter, NeighborSet, LETTER_COUNT};

/// Width of a single key in quarter-key units
const KEY_WIDTH: i32 = 4;

/// Letter rows of the standard QWERTY layout, top to bottom
pub const QWERTY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Left edge of each row relative to the top row, in quarter keys.
///
/// The home row starts a quarter key right of Q, the bottom row three
/// quarters.
pub const QWERTY_STAGGER: [i32; 3] = [0, 1, 3];

/// Position of a key on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPosition {
    /// Row index (0 = top letter row)
    pub row: usize,
    /// Column index within the row
    pub col: usize,
    /// Left edge in quarter-key units
    pub x: i32,
}

impl KeyPosition {
    /// Keys share an edge: side by side in a row, or in consecutive rows
    /// with overlapping horizontal extents.
    pub fn touches(&self, other: &KeyPosition) -> bool {
        if self.row == other.row {
            return self.col.abs_diff(other.col) == 1;
        }
        self.row.abs_diff(other.row) == 1 && (self.x - other.x).abs() < KEY_WIDTH
    }
}

/// Staggered letter grid
#[derive(Debug, Clone)]
pub struct Grid {
    positions: [Option<KeyPosition>; LETTER_COUNT],
}

impl Grid {
    /// Build a grid from row strings and per-row stagger offsets.
    ///
    /// Characters that are not uppercase letters occupy a column but are not
    /// placed. Offsets missing for trailing rows default to zero.
    pub fn new(rows: &[&str], stagger: &[i32]) -> Self {
        let mut positions = [None; LETTER_COUNT];
        for (row, keys) in rows.iter().enumerate() {
            let offset = stagger.get(row).copied().unwrap_or(0);
            for (col, c) in keys.chars().enumerate() {
                if let Some(letter) = Letter::from_char(c) {
                    positions[letter.index()] = Some(KeyPosition {
                        row,
                        col,
                        x: offset + col as i32 * KEY_WIDTH,
                    });
                }
            }
        }
        Self { positions }
    }

    /// The standard QWERTY letter grid
    pub fn qwerty() -> Self {
        Self::new(&QWERTY_ROWS, &QWERTY_STAGGER)
    }

    pub fn position(&self, letter: Letter) -> Option<KeyPosition> {
        self.positions[letter.index()]
    }

    /// Neighbor set of every placed key; unplaced letters get none.
    pub fn adjacency(&self) -> AdjacencyTable {
        let mut sets = [NeighborSet::EMPTY; LETTER_COUNT];
        for letter in Letter::all() {
            let Some(pos) = self.position(letter) else {
                continue;
            };
            sets[letter.index()] = Letter::all()
                .filter(|other| {
                    self.position(*other)
                        .is_some_and(|other_pos| pos.touches(&other_pos))
                })
                .collect();
        }
        AdjacencyTable::from_sets(sets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn qwerty_places_every_letter() {
        let grid = Grid::qwerty();
        assert!(Letter::all().all(|l| grid.position(l).is_some()));
    }

    #[test]
    fn positions_follow_stagger() {
        let grid = Grid::qwerty();
        assert_eq!(
            grid.position(letter('Q')),
            Some(KeyPosition { row: 0, col: 0, x: 0 })
        );
        assert_eq!(
            grid.position(letter('D')),
            Some(KeyPosition { row: 1, col: 2, x: 9 })
        );
        assert_eq!(
            grid.position(letter('M')),
            Some(KeyPosition { row: 2, col: 6, x: 27 })
        );
    }

    #[test]
    fn diagonal_within_half_key_touches() {
        let grid = Grid::qwerty();
        let d = grid.position(letter('D')).unwrap();
        assert!(d.touches(&grid.position(letter('E')).unwrap()));
        assert!(d.touches(&grid.position(letter('R')).unwrap()));
        assert!(!d.touches(&grid.position(letter('W')).unwrap()));
    }

    #[test]
    fn rows_two_apart_never_touch() {
        let grid = Grid::qwerty();
        let w = grid.position(letter('W')).unwrap();
        let z = grid.position(letter('Z')).unwrap();
        assert!(!w.touches(&z));
    }

    #[test]
    fn placeholder_characters_keep_their_column() {
        let grid = Grid::new(&["A-B"], &[0]);
        assert_eq!(grid.position(letter('B')).map(|p| p.col), Some(2));
        let table = grid.adjacency();
        assert!(table.neighbors('A').is_empty());
    }

    #[test]
    fn unplaced_letters_have_no_neighbors() {
        let table = Grid::new(&["AB"], &[]).adjacency();
        assert_eq!(table.neighbors('A').to_string(), "B");
        assert!(table.neighbors('C').is_empty());
    }
}
