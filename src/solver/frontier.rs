use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use super::tree::NodeId;

/// Discovered but not yet expanded nodes.
///
/// The order in which `pop` returns nodes is the only thing
/// that differs between the search algorithms.
pub(crate) trait Frontier {
    /// Whether a state can be queued again when it's reached by a cheaper path.
    /// Otherwise the first discovery of a state is final.
    const REVISIT_CHEAPER: bool;

    fn push(&mut self, node: NodeId, dist: u32, h: f64);

    fn pop(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;
}

/// Breadth-first - oldest first.
#[derive(Debug, Default)]
pub(crate) struct Fifo(VecDeque<NodeId>);

impl Frontier for Fifo {
    const REVISIT_CHEAPER: bool = false;

    fn push(&mut self, node: NodeId, _dist: u32, _h: f64) {
        self.0.push_back(node);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.0.pop_front()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Depth-first - newest first. An explicit stack so deep levels can't overflow the call stack.
#[derive(Debug, Default)]
pub(crate) struct Lifo(Vec<NodeId>);

impl Frontier for Lifo {
    const REVISIT_CHEAPER: bool = false;

    fn push(&mut self, node: NodeId, _dist: u32, _h: f64) {
        self.0.push(node);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.0.pop()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Greedy (by `h`) or A* (by `dist + h`) - lowest priority first, ties go to the older node.
#[derive(Debug)]
pub(crate) struct Prioritized {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
    include_dist: bool,
}

impl Prioritized {
    pub(crate) fn greedy() -> Self {
        Self::new(false)
    }

    pub(crate) fn a_star() -> Self {
        Self::new(true)
    }

    fn new(include_dist: bool) -> Self {
        Prioritized {
            heap: BinaryHeap::new(),
            next_seq: 0,
            include_dist,
        }
    }
}

impl Frontier for Prioritized {
    const REVISIT_CHEAPER: bool = true;

    fn push(&mut self, node: NodeId, dist: u32, h: f64) {
        let priority = if self.include_dist {
            f64::from(dist) + h
        } else {
            h
        };
        self.heap.push(Entry {
            priority,
            seq: self.next_seq,
            node,
        });
        self.next_seq += 1;
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|entry| entry.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Never compares states, `seq` is unique so the order is total.
#[derive(Debug)]
struct Entry {
    priority: f64,
    seq: u64,
    node: NodeId,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // intentionally reversed for BinaryHeap
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}
