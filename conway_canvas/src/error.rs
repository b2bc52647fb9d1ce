// error.rs - Startup error types

use thiserror::Error;

/// Everything that can be wrong with the startup configuration.
///
/// The simulation itself cannot fail once a grid exists, so this is the
/// only error a library caller has to handle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Surface width or height is zero or negative.
    #[error("surface must have positive dimensions, got {width}x{height}")]
    DegenerateSurface { width: i64, height: i64 },

    /// Cell width or height is zero.
    #[error("cell size must be positive, got {width}x{height}")]
    DegenerateCell { width: u32, height: u32 },

    /// Surface cannot hold a single cell.
    #[error("surface {width}x{height} is smaller than one {cell_width}x{cell_height} cell")]
    SurfaceTooSmall {
        width: u32,
        height: u32,
        cell_width: u32,
        cell_height: u32,
    },

    /// Grid drawn at the given cell size does not fit on the surface.
    #[error("{columns}x{rows} grid does not fit on a {width}x{height} surface")]
    GridExceedsSurface {
        columns: usize,
        rows: usize,
        width: u32,
        height: u32,
    },

    /// Grid with no columns or no rows.
    #[error("grid needs at least one column and one row, got {columns}x{rows}")]
    EmptyGrid { columns: usize, rows: usize },

    /// Alive probability outside `0..=1`.
    #[error("alive density must be within 0..=1, got {0}")]
    Density(f64),

    /// Zero delay between generations.
    #[error("tick interval must be non-zero")]
    ZeroInterval,

    /// Environment variable present but unparsable.
    #[error("invalid value {value:?} for {var}")]
    InvalidEnv { var: &'static str, value: String },

    /// No pattern with the requested name.
    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
