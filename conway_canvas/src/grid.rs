// grid.rs - Cell grid and the Game of Life transition rule

use rand::Rng;

use crate::error::{ConfigError, ConfigResult};
use crate::surface::{CellSize, SurfaceSize};

/// Relative positions of the 8 neighbors.
#[rustfmt::skip]
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// One grid position and its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub alive: bool,
}

/// Next state of a cell from its current state and live neighbor count.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match neighbors {
        2 => alive,  // Survival (or stays dead)
        3 => true,   // Birth
        _ => false,  // Under- or overpopulation
    }
}

/// Fixed-size grid with a closed boundary.
///
/// Cells are stored row-major in `cells`; `next` is the back buffer written
/// during `step` and swapped in afterwards.
#[derive(Debug, Clone)]
pub struct Grid {
    columns: usize,
    rows: usize,
    cells: Vec<bool>,
    next: Vec<bool>,
    generation: u64,
}

impl Grid {
    /// All-dead grid of the given dimensions.
    pub fn new(columns: usize, rows: usize) -> ConfigResult<Self> {
        if columns == 0 || rows == 0 {
            return Err(ConfigError::EmptyGrid { columns, rows });
        }

        Ok(Self {
            columns,
            rows,
            cells: vec![false; columns * rows],
            next: vec![false; columns * rows],
            generation: 0,
        })
    }

    /// All-dead grid filling `surface` with whole cells of size `cell`.
    pub fn for_surface(surface: SurfaceSize, cell: CellSize) -> ConfigResult<Self> {
        if surface.width == 0 || surface.height == 0 {
            return Err(ConfigError::DegenerateSurface {
                width: surface.width.into(),
                height: surface.height.into(),
            });
        }
        if cell.width == 0 || cell.height == 0 {
            return Err(ConfigError::DegenerateCell { width: cell.width, height: cell.height });
        }

        let columns = (surface.width / cell.width) as usize;
        let rows = (surface.height / cell.height) as usize;
        if columns == 0 || rows == 0 {
            return Err(ConfigError::SurfaceTooSmall {
                width: surface.width,
                height: surface.height,
                cell_width: cell.width,
                cell_height: cell.height,
            });
        }

        Self::new(columns, rows)
    }

    /// Grid with exactly the listed `(x, y)` cells alive. Positions out of
    /// bounds are ignored.
    pub fn with_alive(columns: usize, rows: usize, alive: &[(usize, usize)]) -> ConfigResult<Self> {
        let mut grid = Self::new(columns, rows)?;
        for &(x, y) in alive {
            grid.set(x, y, true);
        }
        Ok(grid)
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of completed steps.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    fn index(&self, x: usize, y: usize) -> usize {
        x + y * self.columns
    }

    /// State at `(x, y)`; anything outside the grid is dead.
    pub fn is_alive(&self, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.columns || y >= self.rows {
            return false;
        }
        self.cells[self.index(x, y)]
    }

    /// Sets one cell. Returns `false` without touching the grid when the
    /// position is out of bounds.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> bool {
        if x >= self.columns || y >= self.rows {
            return false;
        }
        let index = self.index(x, y);
        self.cells[index] = alive;
        true
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn live_neighbors(&self, x: isize, y: isize) -> u8 {
        NEIGHBORS
            .iter()
            .filter(|&&(dx, dy)| self.is_alive(x.wrapping_add(dx), y.wrapping_add(dy)))
            .count() as u8
    }

    /// Advances one generation.
    ///
    /// Every next state is computed from the current buffer before any cell
    /// changes, so the update is synchronous across the whole grid.
    pub fn step(&mut self) {
        for y in 0..self.rows {
            for x in 0..self.columns {
                let index = self.index(x, y);
                let neighbors = self.live_neighbors(x as isize, y as isize);
                self.next[index] = next_state(self.cells[index], neighbors);
            }
        }

        std::mem::swap(&mut self.cells, &mut self.next);
        self.generation += 1;
    }

    /// Reseeds every cell, alive with probability `density`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) -> ConfigResult<()> {
        if !(0.0..=1.0).contains(&density) {
            return Err(ConfigError::Density(density));
        }
        for cell in &mut self.cells {
            *cell = rng.random_bool(density);
        }
        Ok(())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().enumerate().map(|(index, &alive)| Cell {
            x: index % self.columns,
            y: index / self.columns,
            alive,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn alive_positions(grid: &Grid) -> Vec<(usize, usize)> {
        grid.cells().filter(|c| c.alive).map(|c| (c.x, c.y)).collect()
    }

    #[test]
    fn rule_table() {
        for neighbors in 0..=8u8 {
            for alive in [false, true] {
                let expected = match neighbors {
                    2 => alive,
                    3 => true,
                    _ => false,
                };
                assert_eq!(next_state(alive, neighbors), expected, "alive={alive} n={neighbors}");
            }
        }
    }

    #[test]
    fn out_of_bounds_is_dead() {
        let mut grid = Grid::new(3, 2).unwrap();
        for y in 0..2 {
            for x in 0..3 {
                grid.set(x, y, true);
            }
        }

        assert!(grid.is_alive(0, 0));
        assert!(grid.is_alive(2, 1));
        assert!(!grid.is_alive(-1, 0));
        assert!(!grid.is_alive(0, -1));
        assert!(!grid.is_alive(3, 0));
        assert!(!grid.is_alive(0, 2));
        assert!(!grid.is_alive(isize::MIN, isize::MAX));
    }

    #[test]
    fn set_out_of_bounds_is_ignored() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert!(!grid.set(2, 0, true));
        assert!(!grid.set(0, 2, true));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn cross_centre_dies_corner_stays_dead() {
        let mut grid = Grid::with_alive(3, 3, &[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)]).unwrap();

        assert_eq!(grid.live_neighbors(1, 1), 4);
        assert_eq!(grid.live_neighbors(0, 0), 2);

        grid.step();

        assert!(!grid.is_alive(1, 1));
        assert!(!grid.is_alive(0, 0));
        assert_eq!(grid.generation(), 1);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let horizontal = vec![(1, 2), (2, 2), (3, 2)];
        let vertical = vec![(2, 1), (2, 2), (2, 3)];
        let mut grid = Grid::with_alive(5, 5, &horizontal).unwrap();

        grid.step();
        assert_eq!(alive_positions(&grid), vertical);

        grid.step();
        assert_eq!(alive_positions(&grid), horizontal);
    }

    #[test]
    fn block_is_still_life() {
        let block = vec![(1, 1), (2, 1), (1, 2), (2, 2)];
        let mut grid = Grid::with_alive(4, 4, &block).unwrap();

        grid.step();

        assert_eq!(alive_positions(&grid), block);
    }

    #[test]
    fn step_reads_pre_step_snapshot() {
        // (0,0) dies and (1,0) survives on the snapshot. Updated in place in
        // row-major order, (1,0) would see (0,0) already dead and die too.
        let mut grid = Grid::with_alive(3, 3, &[(0, 0), (1, 0), (2, 0)]).unwrap();

        grid.step();

        assert_eq!(alive_positions(&grid), vec![(1, 0), (1, 1)]);
    }

    #[test]
    fn dimensions_from_surface() {
        let grid = Grid::for_surface(SurfaceSize::new(100, 100), CellSize::square(20)).unwrap();
        assert_eq!((grid.columns(), grid.rows()), (5, 5));

        let grid = Grid::for_surface(SurfaceSize::new(119, 61), CellSize::square(20)).unwrap();
        assert_eq!((grid.columns(), grid.rows()), (5, 3));
    }

    #[test]
    fn degenerate_surfaces_are_rejected() {
        assert_eq!(
            Grid::for_surface(SurfaceSize::new(0, 100), CellSize::square(20)).unwrap_err(),
            ConfigError::DegenerateSurface { width: 0, height: 100 }
        );
        assert!(matches!(
            Grid::for_surface(SurfaceSize::new(100, 100), CellSize::square(0)),
            Err(ConfigError::DegenerateCell { .. })
        ));
        assert!(matches!(
            Grid::for_surface(SurfaceSize::new(19, 100), CellSize::square(20)),
            Err(ConfigError::SurfaceTooSmall { .. })
        ));
        assert!(matches!(Grid::new(0, 3), Err(ConfigError::EmptyGrid { .. })));
    }

    #[test]
    fn seeded_randomize_is_reproducible() {
        let mut a = Grid::new(30, 20).unwrap();
        let mut b = Grid::new(30, 20).unwrap();

        a.randomize(&mut StdRng::seed_from_u64(7), 0.25).unwrap();
        b.randomize(&mut StdRng::seed_from_u64(7), 0.25).unwrap();

        assert_eq!(alive_positions(&a), alive_positions(&b));
        // 600 cells at 25%: far from both empty and full.
        assert!((60..240).contains(&a.population()), "population {}", a.population());
    }

    #[test]
    fn randomize_extremes_and_invalid_density() {
        let mut grid = Grid::new(4, 4).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        grid.randomize(&mut rng, 1.0).unwrap();
        assert_eq!(grid.population(), 16);

        grid.randomize(&mut rng, 0.0).unwrap();
        assert_eq!(grid.population(), 0);

        assert_eq!(grid.randomize(&mut rng, 1.5), Err(ConfigError::Density(1.5)));
    }

    #[test]
    fn cells_are_row_major_and_unique() {
        let grid = Grid::new(3, 2).unwrap();
        let positions: Vec<_> = grid.cells().map(|c| (c.x, c.y)).collect();
        assert_eq!(positions, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }
}
