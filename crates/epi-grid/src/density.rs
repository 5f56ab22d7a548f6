//! Per-cell population-density classes and their transmission coefficients.
//!
//! The map is produced by an external loader (a spreadsheet in the reference
//! setup — out of scope here) and consumed read-only.  Each cell carries a
//! small integer density class; the class maps to a fixed multiplier on the
//! infection probability, modelling suppressed transmission in empty terrain
//! and amplified transmission in dense urban cells.

use crate::error::{GridError, GridResult};
use crate::grid::{Grid, Position};

/// Immutable matrix of density classes, dimensions matching the grid.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DensityMap {
    width:   u32,
    height:  u32,
    /// Row-major: `classes[y * width + x]`.
    classes: Vec<u8>,
}

impl DensityMap {
    /// Build from row vectors (`rows[y][x]`).  Empty or ragged input is
    /// rejected.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> GridResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(GridError::EmptyDensityMap);
        }
        let mut classes = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::RaggedDensityRows {
                    row:      y,
                    expected: width,
                    got:      row.len(),
                });
            }
            classes.extend_from_slice(row);
        }
        Ok(Self {
            width: width as u32,
            height: height as u32,
            classes,
        })
    }

    /// A map assigning the same class to every cell.
    pub fn uniform(width: u32, height: u32, class: u8) -> GridResult<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            classes: vec![class; width as usize * height as usize],
        })
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// `true` if this map covers `grid` cell-for-cell.
    pub fn matches_grid(&self, grid: &Grid) -> bool {
        self.width == grid.width() && self.height == grid.height()
    }

    /// The raw density class at `pos` (must be in bounds — dimension match
    /// is checked once at sim construction).
    #[inline]
    pub fn class_at(&self, pos: Position) -> u8 {
        debug_assert!(pos.x < self.width && pos.y < self.height);
        self.classes[pos.y as usize * self.width as usize + pos.x as usize]
    }

    /// The transmission multiplier for the cell at `pos`.
    ///
    /// Class 0 → 0.1, class 1 → 1.0, class 2 → 10.0; any other value is
    /// treated as unknown density and strongly suppressed.
    #[inline]
    pub fn coefficient(&self, pos: Position) -> f64 {
        match self.class_at(pos) {
            0 => 0.1,
            1 => 1.0,
            2 => 10.0,
            _ => 0.01,
        }
    }
}
