//! Grid evaluation - applies the filter and quantity-gap formula to every cell.
//!
//! Cells are evaluated in row-major order over `t, r, b0, b1, c, a`. With the
//! `parallel` feature each `t` block is evaluated on the rayon pool; blocks
//! are concatenated in order, so the output does not depend on scheduling.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::ModelConfig;
use crate::error::{GridError, Result};
use crate::model::{AxisKind, CellParams, ParameterAxis, SignClass};

use super::{SweepGrid, SweepSummary, cell_count};

/// Builds and evaluates the six-dimensional parameter grid.
#[derive(Debug, Clone)]
pub struct GridEvaluator {
    axes: [ParameterAxis; 6],
    total_cells: usize,
}

/// Per-cell outputs of one evaluated `t` block
struct BlockOutput {
    filter: Vec<bool>,
    gap: Vec<f64>,
    sign: Vec<SignClass>,
}

impl GridEvaluator {
    /// Validate the configured axes and prepare an evaluator
    pub fn new(config: &ModelConfig) -> Result<Self> {
        Self::from_axes(config.axes()?)
    }

    /// Create from already validated axes. Axes must be in grid order.
    ///
    /// Fails with [`GridError::TooManyCells`] when the grid size overflows.
    pub fn from_axes(axes: [ParameterAxis; 6]) -> Result<Self> {
        debug_assert!(
            axes.iter()
                .zip(AxisKind::ALL)
                .all(|(axis, kind)| axis.kind() == kind)
        );
        let shape: Vec<usize> = axes.iter().map(ParameterAxis::len).collect();
        let total_cells = cell_count(&shape).ok_or(GridError::TooManyCells { shape })?;
        Ok(Self { axes, total_cells })
    }

    /// Get the axes in grid order
    #[must_use]
    pub fn axes(&self) -> &[ParameterAxis; 6] {
        &self.axes
    }

    /// Get the grid shape `(|t|, |r|, |b0|, |b1|, |c|, |a|)`
    #[must_use]
    pub fn shape(&self) -> Vec<usize> {
        self.axes.iter().map(ParameterAxis::len).collect()
    }

    /// Get the total number of cells
    #[must_use]
    pub fn total_cells(&self) -> usize {
        self.total_cells
    }

    /// Evaluate every cell, in parallel when the `parallel` feature is enabled.
    #[must_use]
    pub fn evaluate(&self) -> EvaluatedGrid {
        let t_count = self.axes[AxisKind::TimeCost.dim()].len();
        tracing::debug!(
            cells = self.total_cells(),
            shape = ?self.shape(),
            "evaluating parameter grid"
        );

        #[cfg(feature = "parallel")]
        let blocks: Vec<BlockOutput> = (0..t_count)
            .into_par_iter()
            .map(|t_idx| self.evaluate_block(t_idx))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let blocks: Vec<BlockOutput> = (0..t_count).map(|t_idx| self.evaluate_block(t_idx)).collect();

        self.assemble(blocks)
    }

    /// Evaluate every cell on the calling thread.
    #[must_use]
    pub fn evaluate_sequential(&self) -> EvaluatedGrid {
        let t_count = self.axes[AxisKind::TimeCost.dim()].len();
        let blocks = (0..t_count).map(|t_idx| self.evaluate_block(t_idx)).collect();
        self.assemble(blocks)
    }

    /// Evaluate all cells sharing one `t` coordinate, in row-major order
    fn evaluate_block(&self, t_idx: usize) -> BlockOutput {
        let [t_axis, r_axis, b0_axis, b1_axis, c_axis, a_axis] = &self.axes;
        let t = t_axis.values()[t_idx];
        let block_len = self.total_cells / t_axis.len();

        let mut out = BlockOutput {
            filter: Vec::with_capacity(block_len),
            gap: Vec::with_capacity(block_len),
            sign: Vec::with_capacity(block_len),
        };

        for &r in r_axis.values() {
            for &b0 in b0_axis.values() {
                for &b1 in b1_axis.values() {
                    for &c in c_axis.values() {
                        for &a in a_axis.values() {
                            let params = CellParams { t, r, b0, b1, c, a };
                            let in_filter = params.in_filter();
                            let gap = params.payoff_gap();
                            out.filter.push(in_filter);
                            out.gap.push(gap);
                            out.sign.push(SignClass::from_gap(in_filter, gap));
                        }
                    }
                }
            }
        }

        out
    }

    fn assemble(&self, blocks: Vec<BlockOutput>) -> EvaluatedGrid {
        let total = self.total_cells;
        let mut filter = Vec::with_capacity(total);
        let mut gap = Vec::with_capacity(total);
        let mut sign = Vec::with_capacity(total);
        for block in blocks {
            filter.extend(block.filter);
            gap.extend(block.gap);
            sign.extend(block.sign);
        }

        let shape = self.shape();
        EvaluatedGrid {
            axes: self.axes.clone(),
            filter: grid_from_cells(&shape, filter),
            gap: grid_from_cells(&shape, gap),
            sign: grid_from_cells(&shape, sign),
        }
    }
}

/// Wrap evaluated cells in a grid. The evaluator always produces exactly
/// `shape.product()` cells.
fn grid_from_cells<T>(shape: &[usize], cells: Vec<T>) -> SweepGrid<T> {
    let len = cells.len();
    match SweepGrid::from_data(shape.to_vec(), cells) {
        Some(grid) => grid,
        None => unreachable!("evaluator produced {len} cells for shape {shape:?}"),
    }
}

/// Output of [`GridEvaluator::evaluate`]: the filter mask, quantity gap and
/// sign classification for every cell, plus the axes that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedGrid {
    axes: [ParameterAxis; 6],
    filter: SweepGrid<bool>,
    gap: SweepGrid<f64>,
    sign: SweepGrid<SignClass>,
}

impl EvaluatedGrid {
    /// Get the axes in grid order
    #[must_use]
    pub fn axes(&self) -> &[ParameterAxis; 6] {
        &self.axes
    }

    /// Get one axis
    #[must_use]
    pub fn axis(&self, kind: AxisKind) -> &ParameterAxis {
        &self.axes[kind.dim()]
    }

    /// Get the grid shape
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        self.sign.shape()
    }

    /// Get the total number of cells
    #[must_use]
    pub fn total_cells(&self) -> usize {
        self.sign.len()
    }

    /// `b1 > b0` for each cell
    #[must_use]
    pub fn filter(&self) -> &SweepGrid<bool> {
        &self.filter
    }

    /// Firm M's quantity minus firm L's for each cell
    #[must_use]
    pub fn gap(&self) -> &SweepGrid<f64> {
        &self.gap
    }

    /// Sign classification for each cell
    #[must_use]
    pub fn sign(&self) -> &SweepGrid<SignClass> {
        &self.sign
    }

    /// Parameter values at the given indices
    #[must_use]
    pub fn cell(&self, indices: &[usize]) -> Option<CellParams> {
        self.sign.flat_index(indices)?;
        let value = |kind: AxisKind| self.axes[kind.dim()].values()[indices[kind.dim()]];
        Some(CellParams {
            t: value(AxisKind::TimeCost),
            r: value(AxisKind::TariffRate),
            b0: value(AxisKind::B0),
            b1: value(AxisKind::B1),
            c: value(AxisKind::MarginalCost),
            a: value(AxisKind::MarketSize),
        })
    }

    /// Count cells by classification
    #[must_use]
    pub fn summary(&self) -> SweepSummary {
        SweepSummary::from_grid(self)
    }
}

/// Evaluate the grid described by `config`.
pub fn evaluate_grid(config: &ModelConfig) -> Result<EvaluatedGrid> {
    Ok(GridEvaluator::new(config)?.evaluate())
}
