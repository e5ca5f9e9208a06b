//! Random wall scattering.

use rand::{Rng, RngExt};

use crate::cell::CellType;
use crate::grid::Grid;

impl Grid {
    /// Turn every non-endpoint cell into a `Wall` when a uniform draw in
    /// `[0, 1)` exceeds `weight`, and into `Empty` otherwise. Start and end
    /// cells are kept. Returns the number of walls placed.
    ///
    /// A `weight` of 1.0 clears the grid; 0.0 walls in almost everything.
    pub fn scatter_walls<R: Rng>(&self, rng: &mut R, weight: f64) -> usize {
        let mut walls = 0;
        self.map_cells(|c| {
            if c.kind().is_endpoint() {
                return;
            }
            let r: f64 = rng.random();
            if r > weight {
                c.set_kind(CellType::Wall);
                walls += 1;
            } else {
                c.set_kind(CellType::Empty);
            }
        });
        log::debug!("scattered {walls} walls (weight {weight:.2})");
        walls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scatter_keeps_endpoints() {
        let g = Grid::new(10, 10);
        g.set_cell(CellType::Start, Point::new(0, 0));
        g.set_cell(CellType::End, Point::new(9, 9));
        g.set_cell(CellType::Path, Point::new(5, 5));
        let mut rng = StdRng::seed_from_u64(7);
        let walls = g.scatter_walls(&mut rng, 0.5);
        assert_eq!(g.count(CellType::Wall), walls);
        assert_eq!(g.count(CellType::Empty) + walls, 98);
        assert_eq!(g.kind_at(Point::new(0, 0)), Some(CellType::Start));
        assert_eq!(g.kind_at(Point::new(9, 9)), Some(CellType::End));
    }

    #[test]
    fn scatter_extremes() {
        let g = Grid::new(6, 6);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(g.scatter_walls(&mut rng, 1.0), 0);
        assert_eq!(g.count(CellType::Empty), 36);
    }

    #[test]
    fn scatter_is_reproducible() {
        let a = Grid::new(8, 8);
        let b = Grid::new(8, 8);
        a.scatter_walls(&mut StdRng::seed_from_u64(42), 0.3);
        b.scatter_walls(&mut StdRng::seed_from_u64(42), 0.3);
        assert_eq!(a.to_ascii(), b.to_ascii());
    }
}
