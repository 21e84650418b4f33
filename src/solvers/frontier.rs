use std::collections::VecDeque;

use super::SearchMode;
use crate::graph::Pos;

/// The worklist discipline that distinguishes breadth-first from depth-first
/// traversal: a FIFO queue expands oldest discoveries first, a LIFO stack the
/// newest. The traversal itself is otherwise identical.
pub(super) enum Frontier {
    Fifo(VecDeque<Pos>),
    Lifo(Vec<Pos>),
}

impl Frontier {
    pub(super) fn for_mode(mode: SearchMode) -> Self {
        match mode {
            SearchMode::BreadthFirst => Frontier::Fifo(VecDeque::new()),
            SearchMode::DepthFirst => Frontier::Lifo(Vec::new()),
        }
    }

    pub(super) fn push(&mut self, pos: Pos) {
        match self {
            Frontier::Fifo(queue) => queue.push_back(pos),
            Frontier::Lifo(stack) => stack.push(pos),
        }
    }

    pub(super) fn pop(&mut self) -> Option<Pos> {
        match self {
            Frontier::Fifo(queue) => queue.pop_front(),
            Frontier::Lifo(stack) => stack.pop(),
        }
    }

    /// Discards everything still pending. Used once the target has been popped.
    pub(super) fn clear(&mut self) {
        match self {
            Frontier::Fifo(queue) => queue.clear(),
            Frontier::Lifo(stack) => stack.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_pops_in_insertion_order() {
        let mut frontier = Frontier::for_mode(SearchMode::BreadthFirst);
        frontier.push(Pos::new(0, 0));
        frontier.push(Pos::new(1, 0));
        frontier.push(Pos::new(2, 0));
        assert_eq!(frontier.pop(), Some(Pos::new(0, 0)));
        assert_eq!(frontier.pop(), Some(Pos::new(1, 0)));
        assert_eq!(frontier.pop(), Some(Pos::new(2, 0)));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn lifo_pops_in_reverse_insertion_order() {
        let mut frontier = Frontier::for_mode(SearchMode::DepthFirst);
        frontier.push(Pos::new(0, 0));
        frontier.push(Pos::new(1, 0));
        frontier.push(Pos::new(2, 0));
        assert_eq!(frontier.pop(), Some(Pos::new(2, 0)));
        assert_eq!(frontier.pop(), Some(Pos::new(1, 0)));
        assert_eq!(frontier.pop(), Some(Pos::new(0, 0)));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn clear_empties_the_pending_worklist() {
        let mut frontier = Frontier::for_mode(SearchMode::BreadthFirst);
        frontier.push(Pos::new(0, 0));
        frontier.push(Pos::new(1, 0));
        frontier.clear();
        assert_eq!(frontier.pop(), None);
    }
}
