// patterns.rs - Named seed patterns

use crate::error::{ConfigError, ConfigResult};
use crate::grid::Grid;

/// A named set of live cells, as `(x, y)` offsets from the pattern's
/// top-left corner.
#[derive(Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
];

impl Pattern {
    /// Case-insensitive lookup by name.
    pub fn find(name: &str) -> ConfigResult<&'static Pattern> {
        PATTERNS
            .iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| ConfigError::UnknownPattern(name.to_owned()))
    }

    /// Bounding box as `(width, height)`.
    pub fn extent(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(w, h), &(x, y)| (w.max(x + 1), h.max(y + 1)))
    }
}

impl Grid {
    /// Clears the grid and places `pattern` in its centre. Cells that fall
    /// outside a grid smaller than the pattern are dropped.
    pub fn stamp(&mut self, pattern: &Pattern) {
        self.clear();

        let (width, height) = pattern.extent();
        let left = self.columns().saturating_sub(width) / 2;
        let top = self.rows().saturating_sub(height) / 2;
        for &(x, y) in pattern.cells {
            self.set(left + x, top + y, true);
        }
    }
}
