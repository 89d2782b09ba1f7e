//! Sweep configuration
//!
//! The main configuration type is `ModelConfig`, which describes the values
//! of all six swept parameters. `ModelConfig::default()` is the published
//! parameterization of the model:
//!
//! | axis | values                                                     |
//! |------|------------------------------------------------------------|
//! | `t`  | 11 points in `[1, 2]`                                      |
//! | `r`  | `0, 0.02, 0.03, 0.05, 0.07, 0.1, 0.17, 0.25, 0.35, 0.5, 0.7` |
//! | `b0` | `0.1, 0.2, …, 0.9`                                         |
//! | `b1` | `0.2, 0.3, …, 1.0`                                         |
//! | `c`  | 6 points in `[10, 15]`                                     |
//! | `a`  | 11 points in `[100, 200]`                                  |
//!
//! Any axis can be overridden, either with explicit values or a linspace:
//!
//! ```ignore
//! use tariffsweep_core::config::{AxisSpec, ModelConfig};
//! use tariffsweep_core::model::AxisKind;
//!
//! let config = ModelConfig::default()
//!     .with_axis(AxisKind::TariffRate, AxisSpec::values(vec![0.0, 0.1, 0.2]))
//!     .with_axis(AxisKind::MarketSize, AxisSpec::linspace(100.0, 300.0, 21));
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::cell_count;
use crate::error::{GridError, Result};
use crate::model::{AxisKind, ParameterAxis};

/// How the values of one axis are described.
///
/// Uses struct variants with an explicit `type` tag so the YAML form stays
/// flat (`type: values` / `type: linspace`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum AxisSpec {
    /// Explicit values in sweep order
    Values { values: Vec<f64> },
    /// `count` evenly spaced points from `start` to `end` inclusive
    Linspace { start: f64, end: f64, count: usize },
}

impl AxisSpec {
    pub fn values(values: Vec<f64>) -> Self {
        AxisSpec::Values { values }
    }

    pub fn linspace(start: f64, end: f64, count: usize) -> Self {
        AxisSpec::Linspace { start, end, count }
    }

    /// Materialize and validate the axis values
    pub fn build(&self, kind: AxisKind) -> Result<ParameterAxis> {
        match self {
            AxisSpec::Values { values } => ParameterAxis::new(kind, values.clone()),
            AxisSpec::Linspace { start, end, count } => {
                ParameterAxis::linspace(kind, *start, *end, *count)
            }
        }
    }
}

/// Values for all six swept parameters.
///
/// Fields missing from a deserialized config keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    /// Time cost
    pub t: AxisSpec,
    /// Tariff rate
    pub r: AxisSpec,
    pub b0: AxisSpec,
    pub b1: AxisSpec,
    /// Marginal cost
    pub c: AxisSpec,
    /// Market size
    pub a: AxisSpec,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            t: AxisSpec::linspace(1.0, 2.0, 11),
            r: AxisSpec::values(vec![
                0.0, 0.02, 0.03, 0.05, 0.07, 0.1, 0.17, 0.25, 0.35, 0.5, 0.7,
            ]),
            b0: AxisSpec::values(vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9]),
            b1: AxisSpec::values(vec![0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0]),
            c: AxisSpec::linspace(10.0, 15.0, 6),
            a: AxisSpec::linspace(100.0, 200.0, 11),
        }
    }
}

impl ModelConfig {
    /// Get the spec for one axis
    #[must_use]
    pub fn spec(&self, kind: AxisKind) -> &AxisSpec {
        match kind {
            AxisKind::TimeCost => &self.t,
            AxisKind::TariffRate => &self.r,
            AxisKind::B0 => &self.b0,
            AxisKind::B1 => &self.b1,
            AxisKind::MarginalCost => &self.c,
            AxisKind::MarketSize => &self.a,
        }
    }

    /// Replace the spec for one axis
    #[must_use]
    pub fn with_axis(mut self, kind: AxisKind, spec: AxisSpec) -> Self {
        let slot = match kind {
            AxisKind::TimeCost => &mut self.t,
            AxisKind::TariffRate => &mut self.r,
            AxisKind::B0 => &mut self.b0,
            AxisKind::B1 => &mut self.b1,
            AxisKind::MarginalCost => &mut self.c,
            AxisKind::MarketSize => &mut self.a,
        };
        *slot = spec;
        self
    }

    /// Build all six axes in grid order, failing on the first invalid one
    pub fn axes(&self) -> Result<[ParameterAxis; 6]> {
        Ok([
            self.t.build(AxisKind::TimeCost)?,
            self.r.build(AxisKind::TariffRate)?,
            self.b0.build(AxisKind::B0)?,
            self.b1.build(AxisKind::B1)?,
            self.c.build(AxisKind::MarginalCost)?,
            self.a.build(AxisKind::MarketSize)?,
        ])
    }

    /// Grid shape implied by this config, in grid order.
    ///
    /// Fails when any axis is invalid or the total cell count overflows.
    pub fn grid_shape(&self) -> Result<Vec<usize>> {
        let shape: Vec<usize> = self.axes()?.iter().map(ParameterAxis::len).collect();
        match cell_count(&shape) {
            Some(_) => Ok(shape),
            None => Err(GridError::TooManyCells { shape }),
        }
    }
}
