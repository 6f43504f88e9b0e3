//! Predecessor map and path reconstruction.

use std::collections::HashMap;

use pathviz_core::Cell;

use crate::traits::WeightedPather;

/// Maps each discovered cell to the cell it was reached from.
///
/// The root (the start of a run) maps to no predecessor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CameFrom {
    links: HashMap<Cell, Option<Cell>>,
}

impl CameFrom {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `root` as a cell with no predecessor.
    pub fn insert_root(&mut self, root: Cell) {
        self.links.insert(root, None);
    }

    /// Record that `cell` was reached from `from`, replacing any earlier link.
    pub fn link(&mut self, cell: Cell, from: Cell) {
        self.links.insert(cell, Some(from));
    }

    /// `None` if `cell` was never discovered, `Some(None)` for the root.
    pub fn get(&self, cell: Cell) -> Option<Option<Cell>> {
        self.links.get(&cell).copied()
    }

    /// Whether `cell` has been discovered.
    pub fn contains(&self, cell: Cell) -> bool {
        self.links.contains_key(&cell)
    }

    /// Number of discovered cells, root included.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether nothing has been discovered.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Remove every link.
    pub fn clear(&mut self) {
        self.links.clear();
    }
}

/// Walk `came_from` back from `end` and return the path `start..=end`.
///
/// Returns an empty path when `end` was never reached, or when the chain of
/// predecessors does not lead back to `start`.
pub fn reconstruct(came_from: &CameFrom, start: Cell, end: Cell) -> Vec<Cell> {
    if !came_from.contains(end) {
        return Vec::new();
    }

    let mut path = vec![end];
    let mut current = end;
    // A well-formed chain visits every link at most once.
    let limit = came_from.len();
    while let Some(Some(prev)) = came_from.get(current) {
        if path.len() > limit {
            return Vec::new();
        }
        path.push(prev);
        current = prev;
    }

    if current != start {
        return Vec::new();
    }
    path.reverse();
    path
}

/// Total cost of walking `path`: the step cost of every cell entered after
/// the first. A single-cell or empty path costs 0.
pub fn path_cost<P: WeightedPather>(pather: &P, path: &[Cell]) -> u32 {
    path.windows(2).map(|w| pather.cost(w[0], w[1])).sum()
}
