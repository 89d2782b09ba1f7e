//! Comparative statics for firm competition under tariffs
//!
//! This crate sweeps a six-dimensional grid of model parameters (time cost
//! `t`, tariff rate `r`, demand coefficients `b0`/`b1`, marginal cost `c` and
//! market size `α`), evaluates the closed-form equilibrium quantity gap
//! between firms M and L at every cell, and reports the probability that
//! firm M produces more as a function of a single parameter.
//!
//! ```ignore
//! use tariffsweep_core::{ModelConfig, run};
//!
//! let report = run(&ModelConfig::default())?;
//! for series in &report.series {
//!     println!("{}: {:?}", series.axis.symbol(), series.probabilities());
//! }
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod config;
pub mod error;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{AggregatedSeries, EvaluatedGrid, GridEvaluator, SweepSummary};
pub use config::{AxisSpec, ModelConfig};
pub use error::GridError;
pub use model::AxisKind;

use serde::{Deserialize, Serialize};

/// Result of a full sweep: whole-grid counts and one series per charted axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    pub summary: SweepSummary,
    pub series: Vec<AggregatedSeries>,
}

/// Evaluate the grid described by `config` and aggregate it over
/// [`AxisKind::CHARTED`] (`b1`, `α`, `r`).
pub fn run(config: &ModelConfig) -> error::Result<SweepReport> {
    run_axes(config, &AxisKind::CHARTED)
}

/// Evaluate the grid described by `config` and aggregate it over `axes`.
pub fn run_axes(config: &ModelConfig, axes: &[AxisKind]) -> error::Result<SweepReport> {
    let grid = GridEvaluator::new(config)?.evaluate();
    let summary = grid.summary();
    tracing::info!(
        total_cells = summary.total_cells,
        filtered_cells = summary.filtered_cells,
        wins = summary.wins,
        losses = summary.losses,
        ties = summary.ties,
        "parameter sweep evaluated"
    );
    let series = analysis::aggregate_many(&grid, axes);
    Ok(SweepReport { summary, series })
}
