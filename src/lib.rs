//! qwerty-walk - words typeable by walking between adjacent keys
//!
//! The core is an adjacency table over the 26 letter keys of a staggered
//! QWERTY keyboard and a validator that walks a word through it. Scanning,
//! reporting and configuration sit on top for the command-line tool.

pub mod keyboard;
pub mod walk;
pub mod scan;
pub mod report;
pub mod output;
pub mod config;
pub mod utils;

pub use config::Config;
pub use keyboard::{neighbors, AdjacencyTable, Letter, NeighborSet, QWERTY};
pub use walk::{is_typeable, Verdict};
