use std::collections::{HashMap, HashSet};
use std::fmt;

mod frontier;

use frontier::Frontier;

use crate::graph::{GridGraph, Pos};

/// Which frontier discipline drives the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    BreadthFirst,
    DepthFirst,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::BreadthFirst => write!(f, "Breadth-First Search (BFS)"),
            SearchMode::DepthFirst => write!(f, "Depth-First Search (DFS)"),
        }
    }
}

/// Everything a traversal produces: whether the target was reached, the
/// discovery order of vertices (one entry per vertex, in the order they were
/// first seen), and the parent map recording which vertex first discovered
/// each one. The source has no parent entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub found: bool,
    pub visited: Vec<Pos>,
    pub parents: HashMap<Pos, Pos>,
}

/// Traverses the maze from `source` looking for `target`, breadth- or
/// depth-first depending on `mode`.
///
/// The frontier may hold a vertex more than once (a finalized vertex gets
/// re-pushed through the back edge of each neighbor expanded later); repeat
/// pops of a finalized vertex are skipped, and the parent map keeps the first
/// discovery only. When the target is popped the rest of the frontier is
/// discarded. An unreachable target is reported as `found: false`, never as
/// an error.
pub fn search(graph: &GridGraph, source: Pos, target: Pos, mode: SearchMode) -> SearchOutcome {
    let mut worklist = Frontier::for_mode(mode);
    let mut parents: HashMap<Pos, Pos> = HashMap::new();
    let mut finalized: HashSet<Pos> = HashSet::new();
    let mut visited = vec![source];
    let mut found = false;

    worklist.push(source);
    while let Some(next) = worklist.pop() {
        if next == target {
            found = true;
            worklist.clear();
            break;
        }
        if !finalized.insert(next) {
            continue;
        }
        for edge in graph.vertex(next).out_edges() {
            worklist.push(edge.to);
            if edge.to != source && !parents.contains_key(&edge.to) {
                parents.insert(edge.to, next);
                visited.push(edge.to);
            }
        }
    }

    tracing::debug!(
        %source,
        %target,
        %mode,
        found,
        discovered = visited.len(),
        "search finished"
    );
    SearchOutcome {
        found,
        visited,
        parents,
    }
}

/// Walks the parent map backward from `target` until `source` is reached,
/// returning the route with the target first and the source last (both
/// inclusive).
///
/// # Panics
///
/// Panics if the chain breaks before reaching the source. A successful search
/// always leaves an unbroken chain, so a break signals a traversal defect
/// rather than a recoverable condition.
pub fn reconstruct_path(target: Pos, parents: &HashMap<Pos, Pos>, source: Pos) -> Vec<Pos> {
    let mut path = vec![target];
    let mut current = target;
    while current != source {
        let parent = match parents.get(&current) {
            Some(&parent) => parent,
            None => panic!("parent map holds no entry for {current}; chain to {source} is broken"),
        };
        path.push(parent);
        current = parent;
    }
    path
}
