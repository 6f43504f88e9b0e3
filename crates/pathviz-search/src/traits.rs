use pathviz_core::{Cell, GridModel};

/// Minimal search interface: bounds, passability and neighbour enumeration.
pub trait Pather {
    /// Whether `c` lies inside the searchable area.
    fn contains(&self, c: Cell) -> bool;

    /// Whether a search may enter `c`. Implies [`contains`](Self::contains).
    fn passable(&self, c: Cell) -> bool;

    /// Append the in-bounds neighbours of `c` into `buf`. The caller clears
    /// `buf` before calling. Impassable neighbours may be included.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>);
}

/// Pather with weighted (positive-cost) steps.
pub trait WeightedPather: Pather {
    /// Cost of stepping from `from` into adjacent `to`. Must be >= 1 for the
    /// Manhattan heuristic to stay admissible.
    fn cost(&self, from: Cell, to: Cell) -> u32;
}

impl Pather for GridModel {
    #[inline]
    fn contains(&self, c: Cell) -> bool {
        GridModel::contains(self, c)
    }

    #[inline]
    fn passable(&self, c: Cell) -> bool {
        self.is_passable(c)
    }

    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        buf.extend(GridModel::neighbors(self, c));
    }
}

impl WeightedPather for GridModel {
    /// The weight of the cell being entered.
    #[inline]
    fn cost(&self, _from: Cell, to: Cell) -> u32 {
        u32::from(self.weight(to))
    }
}
