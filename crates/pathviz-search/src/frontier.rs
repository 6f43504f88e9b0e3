//! Frontier containers, one per ordering policy.
//!
//! Priority entries live in a min-heap keyed by `(priority, insertion_order)`,
//! so equal priorities pop first-in first-out.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use pathviz_core::Cell;

use crate::strategy::Strategy;

/// A cell taken off the frontier together with the cost it was pushed with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub cell: Cell,
    /// Accumulated cost at push time. Always 0 for unweighted strategies.
    pub cost: u32,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    priority: u32,
    /// Monotonically increasing; lower = pushed earlier.
    seq: u64,
    cell: Cell,
    cost: u32,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.seq.cmp(&other.seq))
    }
}

#[derive(Debug, Clone)]
enum Queue {
    Fifo(VecDeque<Cell>),
    Lifo(Vec<Cell>),
    Priority(BinaryHeap<Reverse<Entry>>),
}

/// Candidate cells awaiting expansion, ordered per [`Strategy`]:
/// first-in first-out for breadth-first, last-in first-out for depth-first,
/// lowest priority first (ties by insertion order) for Dijkstra and A*.
#[derive(Debug, Clone)]
pub struct Frontier {
    queue: Queue,
    seq: u64,
}

impl Frontier {
    /// An empty frontier with the ordering `strategy` needs.
    pub fn for_strategy(strategy: Strategy) -> Self {
        let queue = match strategy {
            Strategy::BreadthFirst => Queue::Fifo(VecDeque::new()),
            Strategy::DepthFirst => Queue::Lifo(Vec::new()),
            Strategy::Dijkstra | Strategy::AStar => Queue::Priority(BinaryHeap::new()),
        };
        Self { queue, seq: 0 }
    }

    /// Push `cell`. `cost` and `priority` are ignored by the FIFO and LIFO
    /// orderings.
    pub fn push(&mut self, cell: Cell, cost: u32, priority: u32) {
        match &mut self.queue {
            Queue::Fifo(queue) => queue.push_back(cell),
            Queue::Lifo(stack) => stack.push(cell),
            Queue::Priority(heap) => heap.push(Reverse(Entry {
                priority,
                seq: self.seq,
                cell,
                cost,
            })),
        }
        self.seq += 1;
    }

    /// Take the next candidate, or `None` when the frontier is exhausted.
    pub fn pop(&mut self) -> Option<Candidate> {
        match &mut self.queue {
            Queue::Fifo(queue) => queue.pop_front().map(|cell| Candidate { cell, cost: 0 }),
            Queue::Lifo(stack) => stack.pop().map(|cell| Candidate { cell, cost: 0 }),
            Queue::Priority(heap) => heap.pop().map(|Reverse(e)| Candidate {
                cell: e.cell,
                cost: e.cost,
            }),
        }
    }

    /// Number of entries, stale ones included.
    pub fn len(&self) -> usize {
        match &self.queue {
            Queue::Fifo(queue) => queue.len(),
            Queue::Lifo(stack) => stack.len(),
            Queue::Priority(heap) => heap.len(),
        }
    }

    /// Whether no entries remain.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the queued cells in no particular order.
    pub fn cells(&self) -> Box<dyn Iterator<Item = Cell> + '_> {
        match &self.queue {
            Queue::Fifo(queue) => Box::new(queue.iter().copied()),
            Queue::Lifo(stack) => Box::new(stack.iter().copied()),
            Queue::Priority(heap) => Box::new(heap.iter().map(|Reverse(e)| e.cell)),
        }
    }
}
