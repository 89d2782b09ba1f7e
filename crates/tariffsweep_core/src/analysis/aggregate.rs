//! Axis aggregation - collapses every dimension but one to a probability.

use serde::{Deserialize, Serialize};

use crate::model::{AxisKind, SignClass};

use super::EvaluatedGrid;

/// Probability at one coordinate of the aggregated axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Axis coordinate
    pub value: f64,
    /// Fraction of defined cells where firm M produces more; `None` when no
    /// cell at this coordinate is defined
    pub probability: Option<f64>,
    /// Number of defined cells the probability averages over
    pub defined_cells: usize,
}

/// Win probability as a function of one parameter, with all other
/// parameters averaged out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedSeries {
    pub axis: AxisKind,
    /// One point per axis value, in axis order
    pub points: Vec<SeriesPoint>,
}

impl AggregatedSeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Axis coordinates in order
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Probabilities in axis order
    #[must_use]
    pub fn probabilities(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.probability).collect()
    }

    /// `(value, probability)` pairs for defined points only
    #[must_use]
    pub fn defined_points(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .filter_map(|p| p.probability.map(|prob| (p.value, prob)))
            .collect()
    }
}

/// Average the sign classification over every dimension except `axis`.
///
/// Each coordinate's probability is the mean of the defined cells sharing
/// that coordinate; undefined cells are skipped, and a coordinate whose
/// cells are all undefined gets `None`.
#[must_use]
pub fn aggregate_axis(grid: &EvaluatedGrid, axis: AxisKind) -> AggregatedSeries {
    let dim = axis.dim();
    let coords = grid.axis(axis).values();
    let sign = grid.sign();

    let mut wins = vec![0usize; coords.len()];
    let mut defined = vec![0usize; coords.len()];
    for (flat, class) in sign.data().iter().enumerate() {
        let slot = sign.axis_index(flat, dim);
        match class {
            SignClass::Win => {
                wins[slot] += 1;
                defined[slot] += 1;
            }
            SignClass::Lose => defined[slot] += 1,
            SignClass::Undefined => {}
        }
    }

    let points: Vec<SeriesPoint> = coords
        .iter()
        .zip(wins.iter().zip(&defined))
        .map(|(&value, (&win_count, &defined_cells))| SeriesPoint {
            value,
            probability: (defined_cells > 0).then(|| win_count as f64 / defined_cells as f64),
            defined_cells,
        })
        .collect();

    let gaps = points.iter().filter(|p| p.probability.is_none()).count();
    tracing::debug!(
        axis = axis.symbol(),
        points = points.len(),
        undefined_points = gaps,
        "aggregated sweep axis"
    );

    AggregatedSeries { axis, points }
}

/// Aggregate several axes of the same grid, preserving the order of `axes`.
#[must_use]
pub fn aggregate_many(grid: &EvaluatedGrid, axes: &[AxisKind]) -> Vec<AggregatedSeries> {
    axes.iter().map(|&axis| aggregate_axis(grid, axis)).collect()
}

impl EvaluatedGrid {
    /// See [`aggregate_axis`]
    #[must_use]
    pub fn aggregate(&self, axis: AxisKind) -> AggregatedSeries {
        aggregate_axis(self, axis)
    }
}
