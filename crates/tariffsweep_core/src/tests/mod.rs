//! Scenario tests for the tariff sweep
//!
//! Tests are organized by topic:
//! - `grid_evaluator` - Grid shape, filter mask, gap values and classification
//! - `aggregation` - Per-axis probability series
//! - `scenarios` - End-to-end runs of the published parameterization
//! - `config` - Axis overrides and validation

mod aggregation;
mod scenarios;
