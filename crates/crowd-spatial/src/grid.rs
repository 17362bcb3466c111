//! The uniform grid itself.

use crowd_core::{CrowdConfig, Vec3};

/// A uniform grid over the XZ simulation plane.
///
/// Each cell holds the indices of agents whose position falls inside it.
/// The grid is rebuilt from scratch every tick (cells are cleared, not
/// reallocated) and owned exclusively by the orchestrator; after `build` it
/// is read-only for the remainder of the tick.
pub struct SpatialGrid {
    /// Edge length of one cell.
    pub cell_size: f32,
    /// Number of columns (X axis).
    pub width: usize,
    /// Number of rows (Z axis).
    pub height: usize,
    /// Lower corner of the covered world region.
    pub world_min: Vec3,
    /// Upper corner of the covered world region.
    pub world_max: Vec3,

    /// `width * height` cells in row-major order (`row * width + col`).
    /// `Vec` capacity persists across rebuilds.
    cells: Vec<Vec<u32>>,
}

impl SpatialGrid {
    /// Create an empty grid.  Dimensions are assumed validated upstream
    /// (the config validation boundary rejects zero sizes).
    pub fn new(cell_size: f32, width: usize, height: usize, world_min: Vec3, world_max: Vec3) -> Self {
        Self {
            cell_size,
            width,
            height,
            world_min,
            world_max,
            cells: (0..width * height).map(|_| Vec::new()).collect(),
        }
    }

    /// Grid sized from the validated configuration.
    pub fn from_config(config: &CrowdConfig) -> Self {
        Self::new(
            config.cell_size,
            config.grid_width as usize,
            config.grid_height as usize,
            config.world_min,
            config.world_max,
        )
    }

    /// The (col, row) cell coordinates covering `position`, clamped to the
    /// grid so out-of-bounds positions degrade to edge cells.
    #[inline]
    pub fn cell_coords(&self, position: Vec3) -> (usize, usize) {
        let col = ((position.x - self.world_min.x) / self.cell_size).floor();
        let row = ((position.z - self.world_min.z) / self.cell_size).floor();
        (
            (col.max(0.0) as usize).min(self.width - 1),
            (row.max(0.0) as usize).min(self.height - 1),
        )
    }

    /// Row-major index of the cell covering `position`.
    #[inline]
    pub fn cell_index(&self, position: Vec3) -> usize {
        let (col, row) = self.cell_coords(position);
        row * self.width + col
    }

    /// Read-only view of one cell's agent indices (for tests and debug
    /// overlays).
    pub fn cell(&self, col: usize, row: usize) -> &[u32] {
        &self.cells[row * self.width + col]
    }

    /// Rebuild the grid from current agent positions.
    ///
    /// Clears every cell, then inserts each agent index into the single cell
    /// covering its position.  Per-cell allocations are retained between
    /// ticks, so steady-state rebuilds allocate nothing.
    pub fn build(&mut self, positions: &[Vec3]) {
        for cell in &mut self.cells {
            cell.clear();
        }
        for (i, &pos) in positions.iter().enumerate() {
            let idx = self.cell_index(pos);
            self.cells[idx].push(i as u32);
        }
    }

    /// Append to `out` every agent index in the 3×3 cell block centered on
    /// the cell covering `position`.  `out` is not cleared — callers reuse a
    /// scratch buffer across agents to avoid reallocation.
    ///
    /// The result may include the querying agent itself and agents beyond
    /// the caller's radius; both are filtered by the caller.
    pub fn neighbors_into(&self, position: Vec3, out: &mut Vec<u32>) {
        let (col, row) = self.cell_coords(position);

        let col_lo = col.saturating_sub(1);
        let col_hi = (col + 1).min(self.width - 1);
        let row_lo = row.saturating_sub(1);
        let row_hi = (row + 1).min(self.height - 1);

        for r in row_lo..=row_hi {
            let base = r * self.width;
            for c in col_lo..=col_hi {
                out.extend_from_slice(&self.cells[base + c]);
            }
        }
    }

    /// Allocating convenience wrapper around [`neighbors_into`][Self::neighbors_into].
    pub fn neighbors(&self, position: Vec3) -> Vec<u32> {
        let mut out = Vec::new();
        self.neighbors_into(position, &mut out);
        out
    }

    /// Total number of stored agent indices (each agent appears exactly once).
    pub fn len(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Vec::is_empty)
    }
}
