use serde_derive::{Deserialize, Serialize};

/// Side length of a square maze, the grid holds `GridSize * GridSize` cells.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Serialize, Deserialize)]
pub struct GridSize(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Octaves(pub usize);

/// Divisor applied to lattice coordinates before sampling a noise field.
#[derive(PartialEq, Copy, Clone, Debug, Serialize, Deserialize)]
pub struct NoiseScale(pub f64);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct NodesCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct EdgesCount(pub usize);

impl GridSize {
    /// First row/column index of the far quadrant used for exit placement.
    #[inline]
    pub fn quadrant_start(self) -> usize {
        self.0 / 2
    }

    #[inline]
    pub fn cells_count(self) -> NodesCount {
        NodesCount(self.0 * self.0)
    }

    /// Upper bound on interior walls, each shared by two cells.
    #[inline]
    pub fn interior_walls_count(self) -> EdgesCount {
        EdgesCount(2 * self.0 * self.0.saturating_sub(1))
    }
}
