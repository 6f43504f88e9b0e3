//! Random demo grids.

use pathviz_core::{Cell, GridModel, MAX_WEIGHT};
use rand::Rng;

/// Fill a `cols` × `rows` grid with walls and weights at random.
///
/// Each cell becomes a wall with probability `wall_pct`; open cells get a
/// weight in `2..=9` with probability `weight_pct`. The start is placed in the
/// top-left corner and the end in the bottom-right one.
pub fn random_grid(
    cols: i32,
    rows: i32,
    wall_pct: f64,
    weight_pct: f64,
    rng: &mut impl Rng,
) -> GridModel {
    let mut grid = GridModel::new(cols, rows);
    for c in grid.bounds() {
        let r: f64 = rng.random();
        if r < wall_pct {
            grid.set_obstacle(c);
        } else if rng.random::<f64>() < weight_pct {
            grid.set_weight(c, rng.random_range(2..=MAX_WEIGHT));
        }
    }
    grid.set_start(Cell::new(0, 0));
    grid.set_end(Cell::new(cols - 1, rows - 1));
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn corners_are_endpoints() {
        let mut rng = StdRng::seed_from_u64(7);
        let g = random_grid(10, 6, 0.9, 0.5, &mut rng);
        assert_eq!(g.start(), Some(Cell::new(0, 0)));
        assert_eq!(g.end(), Some(Cell::new(9, 5)));
        assert!(g.is_passable(Cell::new(0, 0)));
        assert!(g.is_passable(Cell::new(9, 5)));
    }

    #[test]
    fn density_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        let open = random_grid(8, 8, 0.0, 0.0, &mut rng);
        assert_eq!(open.obstacles().count(), 0);
        assert_eq!(open.weights().count(), 0);

        let walled = random_grid(8, 8, 1.0, 0.0, &mut rng);
        assert_eq!(walled.obstacles().count(), 62);
    }

    #[test]
    fn same_seed_same_grid() {
        let a = random_grid(12, 9, 0.3, 0.2, &mut StdRng::seed_from_u64(42));
        let b = random_grid(12, 9, 0.3, 0.2, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
