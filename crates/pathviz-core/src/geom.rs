//! Geometry primitives: [`Cell`] and [`Bounds`].
//!
//! A grid is always anchored at the origin, so [`Bounds`] only carries the
//! column and row counts.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// An integer grid coordinate. X grows right, Y grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Create a new cell coordinate.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four axis-aligned neighbours, in the order right, left, down, up.
    ///
    /// The order is observable: it decides which route depth-first search
    /// follows and how equal-priority ties are seeded.
    #[inline]
    pub const fn neighbors_4(self) -> [Cell; 4] {
        [
            Self::new(self.x + 1, self.y),
            Self::new(self.x - 1, self.y),
            Self::new(self.x, self.y + 1),
            Self::new(self.x, self.y - 1),
        ]
    }

    /// Whether `other` is one axis-aligned step away.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major ordering.
impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Cell {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The half-open rectangle `[0, cols) × [0, rows)` covered by a grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub cols: i32,
    pub rows: i32,
}

impl Bounds {
    /// Create bounds for a `cols` × `rows` grid. Negative sizes clamp to 0.
    #[inline]
    pub const fn new(cols: i32, rows: i32) -> Self {
        Self {
            cols: if cols < 0 { 0 } else { cols },
            rows: if rows < 0 { 0 } else { rows },
        }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        (self.cols as usize) * (self.rows as usize)
    }

    /// Whether the grid has no cells at all.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.cols == 0 || self.rows == 0
    }

    /// Whether `c` is inside the grid.
    #[inline]
    pub fn contains(self, c: Cell) -> bool {
        c.x >= 0 && c.x < self.cols && c.y >= 0 && c.y < self.rows
    }

    /// Flat row-major index of `c`, or `None` when out of bounds.
    #[inline]
    pub fn index(self, c: Cell) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.y as usize * self.cols as usize + c.x as usize)
    }

    /// Row-major iterator over every cell.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            cur: Cell::new(0, 0),
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Cell;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

/// Row-major iterator over the cells of a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    cur: Cell,
}

impl Iterator for BoundsIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.bounds.is_empty() || self.cur.y >= self.bounds.rows {
            return None;
        }
        let c = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.bounds.cols {
            self.cur.x = 0;
            self.cur.y += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.bounds.is_empty() || self.cur.y >= self.bounds.rows {
            return (0, Some(0));
        }
        let in_row = (self.bounds.cols - self.cur.x) as usize;
        let rows_left = (self.bounds.rows - self.cur.y - 1) as usize;
        let total = in_row + rows_left * self.bounds.cols as usize;
        (total, Some(total))
    }
}

impl ExactSizeIterator for BoundsIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_order_is_right_left_down_up() {
        let n = Cell::new(2, 2).neighbors_4();
        assert_eq!(
            n,
            [
                Cell::new(3, 2),
                Cell::new(1, 2),
                Cell::new(2, 3),
                Cell::new(2, 1)
            ]
        );
        assert!(n.iter().all(|&c| c.is_adjacent(Cell::new(2, 2))));
        assert!(!Cell::new(0, 0).is_adjacent(Cell::new(1, 1)));
    }

    #[test]
    fn bounds_contains_half_open() {
        let b = Bounds::new(3, 2);
        assert!(b.contains(Cell::new(0, 0)));
        assert!(b.contains(Cell::new(2, 1)));
        assert!(!b.contains(Cell::new(3, 0)));
        assert!(!b.contains(Cell::new(0, 2)));
        assert!(!b.contains(Cell::new(-1, 0)));
    }

    #[test]
    fn bounds_index_row_major() {
        let b = Bounds::new(4, 3);
        assert_eq!(b.index(Cell::new(0, 0)), Some(0));
        assert_eq!(b.index(Cell::new(3, 0)), Some(3));
        assert_eq!(b.index(Cell::new(1, 2)), Some(9));
        assert_eq!(b.index(Cell::new(4, 0)), None);
    }

    #[test]
    fn bounds_iter_count() {
        let b = Bounds::new(3, 2);
        let cells: Vec<_> = b.iter().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(b.iter().len(), 6);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[5], Cell::new(2, 1));
        assert!(cells.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn negative_bounds_are_empty() {
        let b = Bounds::new(-2, 5);
        assert!(b.is_empty());
        assert_eq!(b.len(), 0);
        assert_eq!(b.iter().count(), 0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_json_shape() {
        let json = serde_json::to_string(&Cell::new(3, 7)).unwrap();
        assert_eq!(json, r#"{"x":3,"y":7}"#);
    }
}
