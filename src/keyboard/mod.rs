//! Letter keys, their physical layout and the adjacency between them

pub mod adjacency;
pub mod layout;
mod letter;

pub use adjacency::{neighbors, AdjacencyTable, QWERTY};
pub use layout::{Grid, KeyPosition};
pub use letter::{Letter, NeighborSet, LETTER_COUNT};
