//! Grid records (ISO 11783-10 `GRD` binary files).

use serde::Deserialize;

use super::Point;

/// One grid file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Grid {
    /// Base file name, e.g. `GRD00001`.
    pub filename: String,
    pub cells: Vec<GridCell>,
}

impl Grid {
    /// Largest value vector of any cell in this grid (0 for an empty grid).
    pub fn max_values(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| cell.values.len())
            .max()
            .unwrap_or(0)
    }
}

/// A grid cell: its centre position and the values recorded for it.
///
/// Cells of the same grid may carry value vectors of different lengths.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GridCell {
    pub position: Point,
    pub values: Vec<i32>,
}
