//! Parameter sweep analysis.
//!
//! The sweep runs in two phases:
//!
//! ```ignore
//! use tariffsweep_core::analysis::{GridEvaluator, aggregate_axis};
//! use tariffsweep_core::config::ModelConfig;
//! use tariffsweep_core::model::AxisKind;
//!
//! // Phase 1: evaluate every cell of the six-dimensional grid
//! let grid = GridEvaluator::new(&ModelConfig::default())?.evaluate();
//!
//! // Phase 2: collapse all dimensions but one (cheap, repeatable)
//! let by_tariff = aggregate_axis(&grid, AxisKind::TariffRate);
//! let by_market = aggregate_axis(&grid, AxisKind::MarketSize);
//! ```
//!
//! # N-Dimensional Grid
//!
//! `SweepGrid<T>` stores N-dimensional data with stride-based indexing in
//! row-major order.

mod aggregate;
mod evaluator;
mod grid;
mod summary;

pub use aggregate::*;
pub use evaluator::*;
pub use grid::*;
pub use summary::*;
