//! Whole-grid classification counts.

use serde::{Deserialize, Serialize};

use crate::model::SignClass;

use super::EvaluatedGrid;

/// Counts of each classification over the whole grid
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SweepSummary {
    pub total_cells: usize,
    /// Cells with `b1 > b0`
    pub filtered_cells: usize,
    pub wins: usize,
    pub losses: usize,
    /// Filtered cells where the gap is exactly zero
    pub ties: usize,
}

impl SweepSummary {
    #[must_use]
    pub fn from_grid(grid: &EvaluatedGrid) -> Self {
        let mut summary = Self {
            total_cells: grid.total_cells(),
            ..Default::default()
        };
        for (&in_filter, &class) in grid.filter().data().iter().zip(grid.sign().data()) {
            if !in_filter {
                continue;
            }
            summary.filtered_cells += 1;
            match class {
                SignClass::Win => summary.wins += 1,
                SignClass::Lose => summary.losses += 1,
                SignClass::Undefined => summary.ties += 1,
            }
        }
        summary
    }

    /// Cells that count toward a probability
    #[must_use]
    pub fn defined_cells(&self) -> usize {
        self.wins + self.losses
    }

    /// Win probability over the entire grid
    #[must_use]
    pub fn overall_probability(&self) -> Option<f64> {
        let defined = self.defined_cells();
        (defined > 0).then(|| self.wins as f64 / defined as f64)
    }
}
