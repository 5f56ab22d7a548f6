//! The multi-occupancy 2D cell grid.
//!
//! # Design
//!
//! Cells are stored row-major as `Vec<Vec<AgentId>>`; a cell holds the ids of
//! every agent currently standing on it (multi-occupancy).  The grid knows
//! nothing about health state — it is purely an occupancy index plus the
//! Moore-neighborhood geometry, with edges either hard (`wrap = false`) or
//! toroidal (`wrap = true`).
//!
//! Out-of-bounds placement on a non-wrapping grid is a hard error, never a
//! clamp: the step logic only produces in-bounds coordinates, so an
//! out-of-bounds write indicates a bug upstream and must surface.

use epi_core::{AgentId, AgentRng};
use rustc_hash::FxHashSet;

use crate::error::{GridError, GridResult};

/// Offsets of the 8 Moore-neighboring cells (diagonals included).
const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

// ── Position ──────────────────────────────────────────────────────────────────

/// An in-bounds cell coordinate.
///
/// Constructed only by the grid's own `resolve`/bounds checks or by code that
/// has already validated the coordinate, so holding a `Position` is a weak
/// promise of validity for the grid it came from.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Bounded or toroidal 2D grid with per-cell agent occupancy lists.
pub struct Grid {
    width:  u32,
    height: u32,
    wrap:   bool,
    /// Row-major occupancy: `cells[y * width + x]` lists the agents there.
    cells:  Vec<Vec<AgentId>>,
}

impl Grid {
    /// Create an empty grid.  Zero dimensions are rejected.
    pub fn new(width: u32, height: u32, wrap: bool) -> GridResult<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let cell_count = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            wrap,
            cells: vec![Vec::new(); cell_count],
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn wrap(&self) -> bool {
        self.wrap
    }

    #[inline]
    fn cell_index(&self, pos: Position) -> usize {
        pos.y as usize * self.width as usize + pos.x as usize
    }

    /// Resolve a possibly-out-of-range coordinate to an in-bounds `Position`.
    ///
    /// On a wrapping grid the coordinate is reduced modulo the dimensions; on
    /// a bounded grid out-of-range coordinates resolve to `None`.
    pub fn resolve(&self, x: i64, y: i64) -> Option<Position> {
        let (w, h) = (self.width as i64, self.height as i64);
        if (0..w).contains(&x) && (0..h).contains(&y) {
            return Some(Position::new(x as u32, y as u32));
        }
        if self.wrap {
            Some(Position::new(
                x.rem_euclid(w) as u32,
                y.rem_euclid(h) as u32,
            ))
        } else {
            None
        }
    }

    /// Register `agent` in the cell at `pos`.
    ///
    /// The caller is responsible for not double-placing an agent; the grid
    /// does not scan for duplicates.
    pub fn place(&mut self, agent: AgentId, pos: Position) -> GridResult<()> {
        self.check_bounds(pos)?;
        let idx = self.cell_index(pos);
        self.cells[idx].push(agent);
        Ok(())
    }

    /// Unregister `agent` from the cell at `pos`.
    pub fn remove(&mut self, agent: AgentId, pos: Position) -> GridResult<()> {
        self.check_bounds(pos)?;
        let idx = self.cell_index(pos);
        let cell = &mut self.cells[idx];
        match cell.iter().position(|&a| a == agent) {
            Some(i) => {
                cell.swap_remove(i);
                Ok(())
            }
            None => Err(GridError::AgentNotInCell(agent)),
        }
    }

    /// Move `agent` from `from` to `to`, updating both occupancy lists.
    pub fn relocate(&mut self, agent: AgentId, from: Position, to: Position) -> GridResult<()> {
        self.remove(agent, from)?;
        self.place(agent, to)
    }

    /// Move `agent` one step to a uniformly random Moore-neighboring cell.
    ///
    /// The current cell is never a candidate, and on a bounded grid neither
    /// are out-of-range cells.  Wrapped offsets that resolve back onto the
    /// current cell (tiny toroidal grids) are excluded too, and duplicate
    /// resolved cells count once so the choice stays uniform over *cells*.
    /// With no candidate at all (a 1x1 grid) the agent stays put.
    ///
    /// Returns the agent's new position.
    pub fn random_step(
        &mut self,
        agent: AgentId,
        from:  Position,
        rng:   &mut AgentRng,
    ) -> GridResult<Position> {
        let candidates = self.neighborhood_cells(from, false);
        match rng.choose(&candidates) {
            Some(&to) => {
                self.relocate(agent, from, to)?;
                Ok(to)
            }
            None => Ok(from),
        }
    }

    /// The distinct in-bounds cells of the 3x3 Moore neighborhood around
    /// `center`, optionally including the center cell itself.
    ///
    /// Order follows the offset table (center first when included) and is
    /// deterministic; the dedup set only filters wrap collisions.
    pub fn neighborhood_cells(&self, center: Position, include_center: bool) -> Vec<Position> {
        let mut seen: FxHashSet<Position> = FxHashSet::default();
        let mut cells = Vec::with_capacity(9);
        seen.insert(center);
        if include_center {
            cells.push(center);
        }
        for (dx, dy) in MOORE_OFFSETS {
            let Some(pos) = self.resolve(center.x as i64 + dx, center.y as i64 + dy) else {
                continue;
            };
            if seen.insert(pos) {
                cells.push(pos);
            }
        }
        cells
    }

    /// The agents occupying the cell at `pos`.  Order is unspecified.
    pub fn occupants(&self, pos: Position) -> &[AgentId] {
        debug_assert!(pos.x < self.width && pos.y < self.height);
        &self.cells[self.cell_index(pos)]
    }

    /// All agents in the Moore neighborhood around `center` (optionally
    /// including the center cell).  No agent is reported twice; order is
    /// unspecified.
    pub fn neighbors(&self, center: Position, include_center: bool) -> Vec<AgentId> {
        let mut out = Vec::new();
        for cell in self.neighborhood_cells(center, include_center) {
            out.extend_from_slice(self.occupants(cell));
        }
        out
    }

    fn check_bounds(&self, pos: Position) -> GridResult<()> {
        if pos.x < self.width && pos.y < self.height {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                x:      pos.x as i64,
                y:      pos.y as i64,
                width:  self.width,
                height: self.height,
            })
        }
    }
}
