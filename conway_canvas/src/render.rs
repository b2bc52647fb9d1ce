// render.rs - Maps a grid onto a drawing surface

use egui::Color32;

use crate::grid::Grid;
use crate::surface::{CellSize, PixelRect, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub alive: Color32,
    pub dead: Color32,
}

impl Palette {
    pub fn color(&self, alive: bool) -> Color32 {
        if alive { self.alive } else { self.dead }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            alive: Color32::from_rgb(0xF6, 0xF7, 0xF9),
            dead: Color32::WHITE,
        }
    }
}

/// Clears `surface` and draws every cell as a filled rectangle.
///
/// The grid at `cell` size must fit on the surface; `Driver` checks this
/// when it is built.
pub fn render<S: Surface + ?Sized>(grid: &Grid, cell: CellSize, palette: &Palette, surface: &mut S) {
    surface.clear(PixelRect::covering(surface.size()));

    for c in grid.cells() {
        let rect = PixelRect {
            x: c.x as u32 * cell.width,
            y: c.y as u32 * cell.height,
            width: cell.width,
            height: cell.height,
        };
        surface.fill_rect(rect, palette.color(c.alive));
    }
}
