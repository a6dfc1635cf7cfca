use crate::{Move, State};
use std::{
    fmt,
    hash::{Hash, Hasher},
    rc::Rc,
};

/// Search node: a state plus the parent it was reached from and the move that got it
/// there.
///
/// Identity is the state alone: two nodes holding equal states are equal and hash the
/// same even if their parents and actions differ.
pub struct Node<S> {
    state: S,
    parent: Option<Rc<Node<S>>>,
    action: Option<Move>,
}

impl<S: State> Node<S> {
    /// Constructs a root node. Its action is the root sentinel.
    pub fn new(state: S) -> Self {
        Self {
            state,
            parent: None,
            action: None,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn parent(&self) -> Option<&Node<S>> {
        self.parent.as_deref()
    }

    /// The move that produced this node, or `None` for the root.
    pub fn action(&self) -> Option<Move> {
        self.action
    }

    pub fn is_goal(&self) -> bool {
        self.state.is_goal()
    }

    /// Moves to attempt from this node. Always the same four, in `Move::ALL` order.
    pub fn moves(&self) -> impl Iterator<Item = Move> {
        Move::ALL.into_iter()
    }

    /// Returns the children of `this`, one per legal move, in move order. Illegal moves
    /// are skipped.
    pub fn successors(this: &Rc<Self>) -> impl Iterator<Item = Self> + '_ {
        this.moves().filter_map(move |mv| {
            let state = this.state.apply(mv)?;
            Some(Self {
                state,
                parent: Some(Rc::clone(this)),
                action: Some(mv),
            })
        })
    }

    /// Walks the parent chain back to the root and returns the moves in play order.
    pub fn path(&self) -> Path {
        let mut moves: Vec<Move> = std::iter::successors(Some(self), |node| node.parent())
            .filter_map(|node| node.action())
            .collect();
        moves.reverse();
        Path { moves }
    }
}

impl<S: PartialEq> PartialEq for Node<S> {
    fn eq(&self, rhs: &Self) -> bool {
        self.state == rhs.state
    }
}

impl<S: Eq> Eq for Node<S> {}

impl<S: Hash> Hash for Node<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.hash(state)
    }
}

impl<S: fmt::Debug> fmt::Debug for Node<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Node")
            .field("state", &self.state)
            .field("action", &self.action)
            .finish()
    }
}

/// Sequence of moves leading from a start state to a goal.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Path {
    moves: Vec<Move>,
}

impl Path {
    /// Label standing in for the root, which no move produced.
    pub const ROOT_LABEL: &'static str = "None";

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Number of moves, not counting the root.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Move labels prefixed by `ROOT_LABEL`.
    pub fn labels(&self) -> Vec<&'static str> {
        std::iter::once(Self::ROOT_LABEL)
            .chain(self.moves.iter().map(Move::label))
            .collect()
    }

    /// Plays the moves from `start`. Returns `None` if any of them is illegal.
    pub fn replay<S: State>(&self, start: &S) -> Option<S> {
        self.moves
            .iter()
            .try_fold(start.clone(), |state, &mv| state.apply(mv))
    }
}

impl From<Vec<Move>> for Path {
    fn from(moves: Vec<Move>) -> Self {
        Self { moves }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.labels().join(", "))
    }
}

//////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test {
    use super::*;
    use crate::Puzzle;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_identity_ignores_provenance() {
        let goal = Puzzle::new(3);
        let root = Rc::new(Node::new(goal.clone()));
        let down = Node::successors(&root)
            .find(|n| n.action() == Some(Move::Down))
            .unwrap();
        let back = Node::successors(&Rc::new(down))
            .find(|n| n.action() == Some(Move::Up))
            .unwrap();

        let fresh = Node::new(goal);
        assert_eq!(back, fresh);
        assert_eq!(hash_of(&back), hash_of(&fresh));
        assert_ne!(back.action(), fresh.action());
        assert!(back.parent().is_some());
        assert!(fresh.parent().is_none());
    }

    #[test]
    fn test_unequal_states() {
        let root = Rc::new(Node::new(Puzzle::new(3)));
        let children: Vec<_> = Node::successors(&root).collect();
        assert_eq!(children.len(), 2);
        assert_ne!(children[0], children[1]);
        assert!(children.iter().all(|child| *child != *root));
    }

    #[test]
    fn test_successors_skip_illegal_moves() {
        // blank in the bottom-right corner: only Down and Right are legal
        let root = Rc::new(Node::new(Puzzle::new(3)));
        let actions: Vec<_> = Node::successors(&root).map(|n| n.action()).collect();
        assert_eq!(actions, [Some(Move::Down), Some(Move::Right)]);
    }

    #[test]
    fn test_root_path() {
        let root = Node::new(Puzzle::new(2));
        assert!(root.path().is_empty());
        assert_eq!(root.path().labels(), ["None"]);
        assert_eq!(root.moves().collect::<Vec<_>>(), Move::ALL);
    }

    #[test]
    fn test_path_reconstruction() {
        let start = Puzzle::new(3);
        let mut node = Rc::new(Node::new(start.clone()));
        for mv in [Move::Down, Move::Right, Move::Down] {
            let child = Node::successors(&node)
                .find(|n| n.action() == Some(mv))
                .unwrap();
            node = Rc::new(child);
        }
        let path = node.path();
        assert_eq!(path.labels(), ["None", "Down", "Right", "Down"]);
        assert_eq!(path.to_string(), "[None, Down, Right, Down]");
        assert_eq!(path.replay(&start).as_ref(), Some(node.state()));
    }

    #[test]
    fn test_replay_illegal() {
        let path = Path::from(vec![Move::Up]);
        assert_eq!(path.replay(&Puzzle::new(3)), None);
    }
}
