use crate::Move;
use std::hash::Hash;

/// A puzzle configuration the search can explore.
///
/// Search nodes compare and hash through their state, so two states that are
/// `==` are treated as the same vertex no matter how they were reached.
pub trait State: Clone + Eq + Hash {
    /// Returns the state reached by `mv`, or `None` if the move is illegal here.
    fn apply(&self, mv: Move) -> Option<Self>;

    fn is_goal(&self) -> bool;
}
