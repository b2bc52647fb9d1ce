// driver.rs - Owns one grid and one surface, ticks them together

use rand::Rng;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{ConfigError, ConfigResult};
use crate::grid::Grid;
use crate::render::{Palette, render};
use crate::surface::{CellSize, Surface};

/// One simulation bound to the surface it draws on.
#[derive(Debug)]
pub struct Driver<S> {
    grid: Grid,
    cell: CellSize,
    palette: Palette,
    surface: S,
}

impl<S: Surface> Driver<S> {
    /// Builds a grid sized to `surface` and seeds it, either from the
    /// configured pattern or randomly from `rng`.
    pub fn start<R: Rng + ?Sized>(config: &Config, surface: S, rng: &mut R) -> ConfigResult<Self> {
        config.validate()?;

        let mut grid = Grid::for_surface(surface.size(), config.cell)?;
        match config.pattern {
            Some(pattern) => grid.stamp(pattern),
            None => grid.randomize(rng, config.density)?,
        }

        info!(
            columns = grid.columns(),
            rows = grid.rows(),
            population = grid.population(),
            pattern = config.pattern.map(|p| p.name),
            "grid created"
        );

        Self::with_grid(grid, config.cell, config.palette, surface)
    }

    /// Wraps an already prepared grid. Every cell, drawn at `cell` size, has
    /// to fit on `surface`.
    pub fn with_grid(grid: Grid, cell: CellSize, palette: Palette, surface: S) -> ConfigResult<Self> {
        if cell.width == 0 || cell.height == 0 {
            return Err(ConfigError::DegenerateCell { width: cell.width, height: cell.height });
        }

        let size = surface.size();
        let needed_width = grid.columns() as u64 * u64::from(cell.width);
        let needed_height = grid.rows() as u64 * u64::from(cell.height);
        if needed_width > u64::from(size.width) || needed_height > u64::from(size.height) {
            return Err(ConfigError::GridExceedsSurface {
                columns: grid.columns(),
                rows: grid.rows(),
                width: size.width,
                height: size.height,
            });
        }

        Ok(Self { grid, cell, palette, surface })
    }

    /// One loop iteration: advance the grid, then draw it.
    pub fn tick(&mut self) {
        self.grid.step();
        render(&self.grid, self.cell, &self.palette, &mut self.surface);

        debug!(
            generation = self.grid.generation(),
            population = self.grid.population(),
            "tick"
        );
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_parts(self) -> (Grid, S) {
        (self.grid, self.surface)
    }
}
