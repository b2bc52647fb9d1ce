// config.rs - Startup configuration

use std::str::FromStr;
use std::time::Duration;

use crate::error::{ConfigError, ConfigResult};
use crate::patterns::Pattern;
use crate::render::Palette;
use crate::surface::{CellSize, SurfaceSize};

pub const ENV_WIDTH: &str = "CONWAY_WIDTH";
pub const ENV_HEIGHT: &str = "CONWAY_HEIGHT";
pub const ENV_CELL_SIZE: &str = "CONWAY_CELL_SIZE";
pub const ENV_TICK_MS: &str = "CONWAY_TICK_MS";
pub const ENV_DENSITY: &str = "CONWAY_DENSITY";
pub const ENV_SEED: &str = "CONWAY_SEED";
pub const ENV_PATTERN: &str = "CONWAY_PATTERN";
pub const ENV_HEADLESS: &str = "CONWAY_HEADLESS";
pub const ENV_GENERATIONS: &str = "CONWAY_GENERATIONS";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Drawing surface in pixels; also the window's inner size.
    pub surface: SurfaceSize,
    pub cell: CellSize,
    /// Delay between the end of one generation and the start of the next.
    pub tick: Duration,
    /// Probability that a cell starts alive.
    pub density: f64,
    /// Random seed. `None` draws one at startup.
    pub seed: Option<u64>,
    /// Seed from a named pattern instead of randomly.
    pub pattern: Option<&'static Pattern>,
    pub palette: Palette,
    /// Run the tokio loop against an off-screen surface instead of a window.
    pub headless: bool,
    /// Headless only: stop after this many generations.
    pub max_generations: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface: SurfaceSize::new(800, 600),
            cell: CellSize::default(),
            tick: Duration::from_millis(100),
            density: 0.25,
            seed: None,
            pattern: None,
            palette: Palette::default(),
            headless: false,
            max_generations: None,
        }
    }
}

impl Config {
    /// Defaults overridden by `CONWAY_*` environment variables.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();

        let width = parse::<i64>(&lookup, ENV_WIDTH)?;
        let height = parse::<i64>(&lookup, ENV_HEIGHT)?;
        if width.is_some() || height.is_some() {
            config.surface = surface_size(
                width.unwrap_or(config.surface.width.into()),
                height.unwrap_or(config.surface.height.into()),
            )?;
        }
        if let Some(edge) = parse::<u32>(&lookup, ENV_CELL_SIZE)? {
            config.cell = CellSize::square(edge);
        }
        if let Some(ms) = parse::<u64>(&lookup, ENV_TICK_MS)? {
            config.tick = Duration::from_millis(ms);
        }
        if let Some(density) = parse::<f64>(&lookup, ENV_DENSITY)? {
            config.density = density;
        }
        config.seed = parse::<u64>(&lookup, ENV_SEED)?;
        config.pattern = lookup(ENV_PATTERN)
            .filter(|name| !name.trim().is_empty())
            .map(|name| Pattern::find(&name))
            .transpose()?;
        if let Some(value) = lookup(ENV_HEADLESS) {
            config.headless = parse_flag(ENV_HEADLESS, &value)?;
        }
        config.max_generations = parse::<u64>(&lookup, ENV_GENERATIONS)?;

        config.validate()?;
        Ok(config)
    }

    /// Fails fast on anything that would produce an empty grid or a
    /// degenerate loop.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.surface.width == 0 || self.surface.height == 0 {
            return Err(ConfigError::DegenerateSurface {
                width: self.surface.width.into(),
                height: self.surface.height.into(),
            });
        }
        if self.cell.width == 0 || self.cell.height == 0 {
            return Err(ConfigError::DegenerateCell {
                width: self.cell.width,
                height: self.cell.height,
            });
        }
        if self.surface.width < self.cell.width || self.surface.height < self.cell.height {
            return Err(ConfigError::SurfaceTooSmall {
                width: self.surface.width,
                height: self.surface.height,
                cell_width: self.cell.width,
                cell_height: self.cell.height,
            });
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::Density(self.density));
        }
        if self.tick.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&'static str) -> Option<String>,
    var: &'static str,
) -> ConfigResult<Option<T>> {
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { var, value }),
    }
}

fn parse_flag(var: &'static str, value: &str) -> ConfigResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnv { var, value: value.to_owned() }),
    }
}

fn surface_size(width: i64, height: i64) -> ConfigResult<SurfaceSize> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok(SurfaceSize::new(w, h)),
        _ => Err(ConfigError::DegenerateSurface { width, height }),
    }
}
