use crate::{Node, Path, State};
use std::{
    collections::{HashSet, VecDeque},
    fmt,
    rc::Rc,
};

/// Result of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A goal was reached by playing these moves from the start state.
    Found(Path),
    /// Every reachable state (within the depth ceiling, if any) was explored without
    /// meeting a goal.
    NoSolution,
}

impl Outcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Outcome::Found(path) => Some(path),
            Outcome::NoSolution => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Outcome::Found(path) => Some(path),
            Outcome::NoSolution => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Found(path) => fmt::Display::fmt(path, f),
            Outcome::NoSolution => f.write_str("no solution"),
        }
    }
}

/// Breadth-first search from `start`. The returned path is a shortest one; among equal
/// length paths the first in move order wins.
///
/// A state is enqueued at most once over the whole search.
pub fn breadth_first_search<S: State>(start: &S) -> Outcome {
    let root = Rc::new(Node::new(start.clone()));
    let mut seen: HashSet<Rc<Node<S>>> = HashSet::new();
    let mut frontier: VecDeque<Rc<Node<S>>> = VecDeque::new();
    seen.insert(Rc::clone(&root));
    frontier.push_back(root);

    let mut expanded = 0usize;
    while let Some(node) = frontier.pop_front() {
        if node.is_goal() {
            let path = node.path();
            log::debug!(
                "bfs: goal after {} expansions, {} states seen, {} moves",
                expanded,
                seen.len(),
                path.len()
            );
            return Outcome::Found(path);
        }
        expanded += 1;
        for child in Node::successors(&node) {
            let child = Rc::new(child);
            if seen.insert(Rc::clone(&child)) {
                frontier.push_back(child);
            }
        }
        log::trace!("bfs: frontier {} after expansion {}", frontier.len(), expanded);
    }

    log::debug!("bfs: exhausted {} states, no solution", seen.len());
    Outcome::NoSolution
}

/// Depth-first search from `start` that never applies more than `max_depth` moves
/// along a branch. Not guaranteed to find the shortest path, or any path whose goal
/// lies deeper than `max_depth`.
///
/// Children are skipped if an equal state has already been popped and expanded.
pub fn bounded_depth_first_search<S: State>(start: &S, max_depth: usize) -> Outcome {
    let root = Rc::new(Node::new(start.clone()));
    let mut visited: HashSet<Rc<Node<S>>> = HashSet::new();
    let mut frontier: Vec<(Rc<Node<S>>, usize)> = vec![(root, 0)];

    let mut expanded = 0usize;
    while let Some((node, depth)) = frontier.pop() {
        visited.insert(Rc::clone(&node));
        if node.is_goal() {
            let path = node.path();
            log::debug!(
                "dfs: goal at depth {} after {} expansions, {} states visited",
                depth,
                expanded,
                visited.len()
            );
            return Outcome::Found(path);
        }
        if depth < max_depth {
            expanded += 1;
            for child in Node::successors(&node) {
                if !visited.contains(&child) {
                    frontier.push((Rc::new(child), depth + 1));
                }
            }
        }
    }

    log::debug!(
        "dfs: exhausted {} states below depth {}, no solution",
        visited.len(),
        max_depth
    );
    Outcome::NoSolution
}

//////////////////////////////////////////////////////////////////////////////////////////
