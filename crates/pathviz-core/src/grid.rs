//! The editable search grid.
//!
//! [`GridModel`] stores obstacle flags and weight overrides in flat row-major
//! buffers indexed through [`Bounds::index`], plus the optional start and end
//! cells. Every mutator is a silent no-op for cells outside the grid.

use std::fmt;

use crate::error::MapError;
use crate::geom::{Bounds, Cell};

/// Smallest traversal weight; also the weight of any cell without override.
pub const MIN_WEIGHT: u8 = 1;
/// Largest traversal weight.
pub const MAX_WEIGHT: u8 = 9;

/// A rectangular grid with obstacles, per-cell weights and two endpoints.
///
/// Invariants:
/// - the start and end cells are never obstacles;
/// - a weight override is kept while its cell is an obstacle, but ignored
///   until the obstacle is cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridModel {
    bounds: Bounds,
    obstacles: Vec<bool>,
    /// `MIN_WEIGHT` means no override.
    weights: Vec<u8>,
    start: Option<Cell>,
    end: Option<Cell>,
}

impl GridModel {
    /// Create an empty `cols` × `rows` grid: no obstacles, all weights 1, no
    /// endpoints.
    pub fn new(cols: i32, rows: i32) -> Self {
        let bounds = Bounds::new(cols, rows);
        let len = bounds.len();
        Self {
            bounds,
            obstacles: vec![false; len],
            weights: vec![MIN_WEIGHT; len],
            start: None,
            end: None,
        }
    }

    /// Build a grid from an ASCII map.
    ///
    /// `.` is open floor, `#` an obstacle, `S` the start, `E` the end and
    /// `1`–`9` a weighted cell. Leading and trailing blank lines are ignored;
    /// trailing whitespace on a line is not.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let lines: Vec<&str> = text
            .lines()
            .skip_while(|l| l.trim().is_empty())
            .collect();
        let end = lines
            .iter()
            .rposition(|l| !l.trim().is_empty())
            .map_or(0, |i| i + 1);
        let lines = &lines[..end];

        let width = lines.first().map_or(0, |l| l.chars().count());
        if lines.is_empty() || width == 0 {
            return Err(MapError::Empty);
        }

        let mut grid = GridModel::new(width as i32, lines.len() as i32);
        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MapError::InconsistentWidth {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let cell = Cell::new(x as i32, y as i32);
                match ch {
                    '.' => {}
                    '#' => grid.set_obstacle(cell),
                    'S' if grid.start.is_some() => {
                        return Err(MapError::DuplicateMarker { ch, cell });
                    }
                    'E' if grid.end.is_some() => {
                        return Err(MapError::DuplicateMarker { ch, cell });
                    }
                    'S' => grid.set_start(cell),
                    'E' => grid.set_end(cell),
                    '1'..='9' => grid.set_weight(cell, ch as u8 - b'0'),
                    _ => return Err(MapError::InvalidChar { ch, cell }),
                }
            }
        }
        Ok(grid)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// The grid rectangle.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.bounds.contains(c)
    }

    /// Whether `c` is an obstacle. Cells outside the grid are not.
    #[inline]
    pub fn is_obstacle(&self, c: Cell) -> bool {
        self.bounds.index(c).is_some_and(|i| self.obstacles[i])
    }

    /// Whether `c` is inside the grid and not an obstacle.
    #[inline]
    pub fn is_passable(&self, c: Cell) -> bool {
        self.bounds.index(c).is_some_and(|i| !self.obstacles[i])
    }

    /// Traversal weight of `c`: its override, or 1.
    ///
    /// Overrides on obstacle cells are still reported here; searches never
    /// enter obstacles so the value is ignored there.
    #[inline]
    pub fn weight(&self, c: Cell) -> u8 {
        self.bounds.index(c).map_or(MIN_WEIGHT, |i| self.weights[i])
    }

    /// The start cell, if set.
    #[inline]
    pub fn start(&self) -> Option<Cell> {
        self.start
    }

    /// The end cell, if set.
    #[inline]
    pub fn end(&self) -> Option<Cell> {
        self.end
    }

    /// Whether `c` is the start or the end cell.
    #[inline]
    pub fn is_endpoint(&self, c: Cell) -> bool {
        self.start == Some(c) || self.end == Some(c)
    }

    /// The up-to-4 axis-aligned in-bounds neighbours of `c`.
    ///
    /// Obstacles are included; filtering them is the search's concern.
    pub fn neighbors(&self, c: Cell) -> impl Iterator<Item = Cell> + '_ {
        c.neighbors_4()
            .into_iter()
            .filter(move |&n| self.bounds.contains(n))
    }

    /// Every obstacle cell, in row-major order.
    pub fn obstacles(&self) -> impl Iterator<Item = Cell> + '_ {
        self.bounds.iter().filter(move |&c| self.is_obstacle(c))
    }

    /// Every cell with a weight override above 1, in row-major order.
    pub fn weights(&self) -> impl Iterator<Item = (Cell, u8)> + '_ {
        self.bounds
            .iter()
            .map(move |c| (c, self.weight(c)))
            .filter(|&(_, w)| w > MIN_WEIGHT)
    }

    // -----------------------------------------------------------------------
    // Mutators
    // -----------------------------------------------------------------------

    /// Mark `c` as an obstacle. Rejected on the start or end cell.
    ///
    /// An existing weight override is kept and becomes effective again once
    /// the obstacle is cleared.
    pub fn set_obstacle(&mut self, c: Cell) {
        if self.is_endpoint(c) {
            return;
        }
        if let Some(i) = self.bounds.index(c) {
            self.obstacles[i] = true;
        }
    }

    /// Remove the obstacle at `c`, if any.
    pub fn clear_obstacle(&mut self, c: Cell) {
        if let Some(i) = self.bounds.index(c) {
            self.obstacles[i] = false;
        }
    }

    /// Set the weight override of `c` to `w`.
    ///
    /// `w` outside `1..=9` is ignored; `w == 1` removes the override.
    pub fn set_weight(&mut self, c: Cell, w: u8) {
        if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&w) {
            return;
        }
        if let Some(i) = self.bounds.index(c) {
            self.weights[i] = w;
        }
    }

    /// Increment the weight of `c`, wrapping from 9 back to 1.
    ///
    /// No-op on the start cell, the end cell and obstacles.
    pub fn bump_weight(&mut self, c: Cell) {
        if self.is_endpoint(c) || self.is_obstacle(c) {
            return;
        }
        if let Some(i) = self.bounds.index(c) {
            let w = self.weights[i];
            self.weights[i] = if w < MAX_WEIGHT { w + 1 } else { MIN_WEIGHT };
        }
    }

    /// Remove the weight override of `c`.
    pub fn clear_weight(&mut self, c: Cell) {
        if let Some(i) = self.bounds.index(c) {
            self.weights[i] = MIN_WEIGHT;
        }
    }

    /// Make `c` the start cell, clearing any obstacle there.
    pub fn set_start(&mut self, c: Cell) {
        if let Some(i) = self.bounds.index(c) {
            self.obstacles[i] = false;
            self.start = Some(c);
        }
    }

    /// Make `c` the end cell, clearing any obstacle there.
    pub fn set_end(&mut self, c: Cell) {
        if let Some(i) = self.bounds.index(c) {
            self.obstacles[i] = false;
            self.end = Some(c);
        }
    }

    /// Remove the obstacle at `c`, or its weight override when it is not an
    /// obstacle.
    pub fn erase(&mut self, c: Cell) {
        if self.is_obstacle(c) {
            self.clear_obstacle(c);
        } else {
            self.clear_weight(c);
        }
    }

    /// Remove every obstacle, weight override and endpoint.
    pub fn clear(&mut self) {
        self.obstacles.fill(false);
        self.weights.fill(MIN_WEIGHT);
        self.start = None;
        self.end = None;
    }
}

/// Renders the grid in the format accepted by [`GridModel::parse`].
///
/// When start and end coincide the cell is written as `S`.
impl fmt::Display for GridModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.rows() {
            for x in 0..self.cols() {
                let c = Cell::new(x, y);
                let ch = if self.start == Some(c) {
                    'S'
                } else if self.end == Some(c) {
                    'E'
                } else if self.is_obstacle(c) {
                    '#'
                } else {
                    match self.weight(c) {
                        MIN_WEIGHT => '.',
                        w => char::from(b'0' + w),
                    }
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = "
S.#
.5#
..E
";

    #[test]
    fn new_grid_is_open() {
        let g = GridModel::new(4, 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.obstacles().count(), 0);
        assert_eq!(g.weights().count(), 0);
        assert_eq!(g.weight(Cell::new(1, 1)), 1);
        assert_eq!(g.start(), None);
        assert_eq!(g.end(), None);
    }

    #[test]
    fn neighbors_clip_to_bounds() {
        let g = GridModel::new(3, 3);
        let corner: Vec<_> = g.neighbors(Cell::new(0, 0)).collect();
        assert_eq!(corner, vec![Cell::new(1, 0), Cell::new(0, 1)]);
        assert_eq!(g.neighbors(Cell::new(1, 1)).count(), 4);
        assert_eq!(g.neighbors(Cell::new(2, 1)).count(), 3);
    }

    #[test]
    fn out_of_bounds_mutators_are_noops() {
        let mut g = GridModel::new(2, 2);
        let before = g.clone();
        let out = Cell::new(5, -1);
        g.set_obstacle(out);
        g.set_weight(out, 4);
        g.bump_weight(out);
        g.set_start(out);
        g.set_end(out);
        g.clear_obstacle(out);
        g.clear_weight(out);
        g.erase(out);
        assert_eq!(g, before);
        assert!(!g.is_obstacle(out));
        assert!(!g.is_passable(out));
        assert_eq!(g.weight(out), 1);
    }

    #[test]
    fn obstacle_rejected_on_endpoints() {
        let mut g = GridModel::new(3, 1);
        g.set_start(Cell::new(0, 0));
        g.set_end(Cell::new(2, 0));
        g.set_obstacle(Cell::new(0, 0));
        g.set_obstacle(Cell::new(2, 0));
        g.set_obstacle(Cell::new(1, 0));
        assert!(!g.is_obstacle(Cell::new(0, 0)));
        assert!(!g.is_obstacle(Cell::new(2, 0)));
        assert!(g.is_obstacle(Cell::new(1, 0)));
    }

    #[test]
    fn endpoint_clears_obstacle_keeps_weight() {
        let mut g = GridModel::new(3, 1);
        let c = Cell::new(1, 0);
        g.set_weight(c, 6);
        g.set_obstacle(c);
        g.set_start(c);
        assert!(!g.is_obstacle(c));
        assert_eq!(g.weight(c), 6);
        assert_eq!(g.start(), Some(c));

        g.set_obstacle(Cell::new(2, 0));
        g.set_end(Cell::new(2, 0));
        assert!(g.is_passable(Cell::new(2, 0)));
    }

    #[test]
    fn moving_start_frees_old_cell() {
        let mut g = GridModel::new(3, 1);
        g.set_start(Cell::new(0, 0));
        g.set_start(Cell::new(1, 0));
        assert_eq!(g.start(), Some(Cell::new(1, 0)));
        g.set_obstacle(Cell::new(0, 0));
        assert!(g.is_obstacle(Cell::new(0, 0)));
    }

    #[test]
    fn obstacle_hides_but_keeps_weight() {
        let mut g = GridModel::new(2, 2);
        let c = Cell::new(1, 1);
        g.set_weight(c, 7);
        g.set_obstacle(c);
        assert!(!g.is_passable(c));
        assert_eq!(g.weight(c), 7);
        g.clear_obstacle(c);
        assert!(g.is_passable(c));
        assert_eq!(g.weight(c), 7);
    }

    #[test]
    fn bump_weight_wraps() {
        let mut g = GridModel::new(2, 1);
        let c = Cell::new(1, 0);
        for expected in 2..=9 {
            g.bump_weight(c);
            assert_eq!(g.weight(c), expected);
        }
        g.bump_weight(c);
        assert_eq!(g.weight(c), 1);
        assert_eq!(g.weights().count(), 0);
    }

    #[test]
    fn bump_weight_skips_endpoints_and_obstacles() {
        let mut g = GridModel::new(3, 1);
        g.set_start(Cell::new(0, 0));
        g.set_obstacle(Cell::new(1, 0));
        g.set_end(Cell::new(2, 0));
        for x in 0..3 {
            g.bump_weight(Cell::new(x, 0));
        }
        assert_eq!(g.weights().count(), 0);
    }

    #[test]
    fn set_weight_rejects_out_of_range() {
        let mut g = GridModel::new(1, 1);
        let c = Cell::new(0, 0);
        g.set_weight(c, 0);
        g.set_weight(c, 10);
        assert_eq!(g.weight(c), 1);
        g.set_weight(c, 9);
        assert_eq!(g.weight(c), 9);
        g.set_weight(c, 1);
        assert_eq!(g.weights().count(), 0);
    }

    #[test]
    fn erase_prefers_obstacle() {
        let mut g = GridModel::new(1, 1);
        let c = Cell::new(0, 0);
        g.set_weight(c, 3);
        g.set_obstacle(c);
        g.erase(c);
        assert!(!g.is_obstacle(c));
        assert_eq!(g.weight(c), 3);
        g.erase(c);
        assert_eq!(g.weight(c), 1);
    }

    #[test]
    fn clear_resets_everything() {
        let mut g = GridModel::parse(MAP).unwrap();
        g.clear();
        assert_eq!(g, GridModel::new(3, 3));
    }

    #[test]
    fn parse_map() {
        let g = GridModel::parse(MAP).unwrap();
        assert_eq!(g.bounds(), Bounds::new(3, 3));
        assert_eq!(g.start(), Some(Cell::new(0, 0)));
        assert_eq!(g.end(), Some(Cell::new(2, 2)));
        assert_eq!(
            g.obstacles().collect::<Vec<_>>(),
            vec![Cell::new(2, 0), Cell::new(2, 1)]
        );
        assert_eq!(g.weights().collect::<Vec<_>>(), vec![(Cell::new(1, 1), 5)]);
        assert_eq!(g.to_string(), "S.#\n.5#\n..E\n");
    }

    #[test]
    fn parse_errors() {
        assert_eq!(GridModel::parse("\n  \n"), Err(MapError::Empty));
        assert_eq!(
            GridModel::parse("...\n..\n"),
            Err(MapError::InconsistentWidth {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            GridModel::parse("..\n.x\n"),
            Err(MapError::InvalidChar {
                ch: 'x',
                cell: Cell::new(1, 1)
            })
        );
        assert_eq!(
            GridModel::parse("S.S\n"),
            Err(MapError::DuplicateMarker {
                ch: 'S',
                cell: Cell::new(2, 0)
            })
        );
    }
}
