use std::collections::HashMap;

use crate::graph::Pos;

/// Union-find over vertex positions, used to detect cycles while the maze is
/// under construction. Every position maps to a representative; a root maps to
/// itself. Looking up a position that was never registered is a defect in the
/// generator and panics.
pub(super) struct DisjointSet {
    parents: HashMap<Pos, Pos>,
}

impl DisjointSet {
    /// Registers every member as its own singleton component.
    pub(super) fn new(members: impl IntoIterator<Item = Pos>) -> Self {
        DisjointSet {
            parents: members.into_iter().map(|p| (p, p)).collect(),
        }
    }

    /// Follows the parent chain to the self-mapped root. Uses iterative
    /// path-halving: each visited position is pointed at its grandparent, so
    /// chains shrink without a second pass or recursion.
    pub(super) fn find(&mut self, p: Pos) -> Pos {
        let mut current = p;
        loop {
            let parent = self.parent_of(current);
            if parent == current {
                return current;
            }
            let grandparent = self.parent_of(parent);
            self.parents.insert(current, grandparent);
            current = grandparent;
        }
    }

    /// Merges the components of `p` and `q` by pointing `q`'s root at `p`'s root.
    pub(super) fn union(&mut self, p: Pos, q: Pos) {
        let root_p = self.find(p);
        let root_q = self.find(q);
        self.parents.insert(root_q, root_p);
    }

    fn parent_of(&self, p: Pos) -> Pos {
        match self.parents.get(&p) {
            Some(&parent) => parent,
            None => panic!("position {p} was never registered in the disjoint set"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> (DisjointSet, Pos, Pos, Pos) {
        let (a, b, c) = (Pos::new(0, 0), Pos::new(1, 0), Pos::new(2, 0));
        (DisjointSet::new([a, b, c]), a, b, c)
    }

    #[test]
    fn singletons_are_their_own_representatives() {
        let (mut set, a, b, c) = abc();
        assert_eq!(set.find(a), a);
        assert_eq!(set.find(b), b);
        assert_eq!(set.find(c), c);
    }

    #[test]
    fn union_merges_two_components_and_leaves_the_third() {
        let (mut set, a, b, c) = abc();
        set.union(a, b);
        assert_eq!(set.find(a), set.find(b));
        assert_ne!(set.find(c), set.find(a));
    }

    #[test]
    fn union_points_the_second_root_at_the_first() {
        let (mut set, a, b, c) = abc();
        set.union(a, b);
        set.union(c, a);
        assert_eq!(set.find(a), c);
        assert_eq!(set.find(b), c);
    }

    #[test]
    fn find_resolves_chained_parents() {
        let (mut set, a, b, c) = abc();
        set.union(b, c);
        set.union(a, b);
        assert_eq!(set.find(c), a);
    }

    #[test]
    #[should_panic(expected = "never registered")]
    fn unregistered_position_panics() {
        let (mut set, _, _, _) = abc();
        set.find(Pos::new(9, 9));
    }
}
