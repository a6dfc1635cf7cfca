//! State-space search for single-player sliding puzzles.
//!
//! A [`State`] exposes the four [`Move`]s and a goal test; [`breadth_first_search`] and
//! [`bounded_depth_first_search`] walk the states reachable from a start and return
//! the moves leading to the first goal they meet.

mod moves;
mod node;
mod puzzle;
mod search;
mod state;

pub use moves::Move;
pub use node::{Node, Path};
pub use puzzle::{ParsePuzzleError, Puzzle};
pub use search::{bounded_depth_first_search, breadth_first_search, Outcome};
pub use state::State;
