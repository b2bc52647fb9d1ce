// lib.rs - Conway's Game of Life on a drawing surface
//
// The grid and its transition rule know nothing about drawing; `render`
// maps a grid onto any `Surface`, and the driver ties the two together
// behind either the egui frame clock (`ticker`) or a tokio task (`runner`).

pub mod config;
pub mod driver;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod render;
pub mod runner;
pub mod surface;
pub mod ticker;

pub use config::Config;
pub use driver::Driver;
pub use error::{ConfigError, ConfigResult};
pub use grid::{Cell, Grid};
pub use patterns::{PATTERNS, Pattern};
pub use render::{Palette, render};
pub use surface::{CellSize, DrawCommand, DrawList, PixelRect, Surface, SurfaceSize};
pub use ticker::{Poll, Ticker};
