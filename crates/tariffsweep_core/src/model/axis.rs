//! Swept parameters and their value sequences.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// One of the six swept model parameters.
///
/// The declaration order is the grid's dimension order (`t, r, b0, b1, c, a`),
/// so [`AxisKind::dim`] doubles as the index into the grid shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AxisKind {
    /// Time cost `t`
    #[serde(rename = "t")]
    TimeCost,
    /// Tariff rate `r`
    #[serde(rename = "r")]
    TariffRate,
    /// Demand-sensitivity coefficient `b0`
    #[serde(rename = "b0")]
    B0,
    /// Demand-sensitivity coefficient `b1` (scale diseconomy)
    #[serde(rename = "b1")]
    B1,
    /// Marginal cost `c`
    #[serde(rename = "c")]
    MarginalCost,
    /// Market size `α`
    #[serde(rename = "a")]
    MarketSize,
}

impl AxisKind {
    /// All axes in grid order
    pub const ALL: [AxisKind; 6] = [
        AxisKind::TimeCost,
        AxisKind::TariffRate,
        AxisKind::B0,
        AxisKind::B1,
        AxisKind::MarginalCost,
        AxisKind::MarketSize,
    ];

    /// Axes the probability is charted against, in panel order
    pub const CHARTED: [AxisKind; 3] = [AxisKind::B1, AxisKind::MarketSize, AxisKind::TariffRate];

    /// Dimension index of this axis in the grid
    #[must_use]
    pub fn dim(self) -> usize {
        match self {
            AxisKind::TimeCost => 0,
            AxisKind::TariffRate => 1,
            AxisKind::B0 => 2,
            AxisKind::B1 => 3,
            AxisKind::MarginalCost => 4,
            AxisKind::MarketSize => 5,
        }
    }

    /// Math symbol used in labels
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            AxisKind::TimeCost => "t",
            AxisKind::TariffRate => "r",
            AxisKind::B0 => "b0",
            AxisKind::B1 => "b1",
            AxisKind::MarginalCost => "c",
            AxisKind::MarketSize => "α",
        }
    }

    /// Short description suitable for chart titles
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            AxisKind::TimeCost => "time cost",
            AxisKind::TariffRate => "tariff rate",
            AxisKind::B0 => "demand sensitivity",
            AxisKind::B1 => "scale diseconomy",
            AxisKind::MarginalCost => "marginal cost",
            AxisKind::MarketSize => "market size",
        }
    }
}

/// An ordered, validated sequence of values for one swept parameter.
///
/// Construction rejects empty sequences, non-finite values and repeated
/// coordinates, so every `ParameterAxis` can be iterated and averaged over.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterAxis {
    kind: AxisKind,
    values: Vec<f64>,
}

impl ParameterAxis {
    /// Create an axis from explicit values, keeping their order.
    pub fn new(kind: AxisKind, values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(GridError::EmptyAxis(kind));
        }
        let mut seen: HashMap<u64, usize> = HashMap::with_capacity(values.len());
        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(GridError::NonFiniteValue { axis: kind, index, value });
            }
            // -0.0 and 0.0 are the same coordinate
            let key = (if value == 0.0 { 0.0f64 } else { value }).to_bits();
            if let Some(&first) = seen.get(&key) {
                return Err(GridError::DuplicateValue {
                    axis: kind,
                    first,
                    second: index,
                    value,
                });
            }
            seen.insert(key, index);
        }
        Ok(Self { kind, values })
    }

    /// Create an axis of `count` evenly spaced points from `start` to `end`
    /// inclusive. The last point is exactly `end`.
    pub fn linspace(kind: AxisKind, start: f64, end: f64, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(GridError::EmptyAxis(kind));
        }
        if !start.is_finite() || !end.is_finite() {
            return Err(GridError::InvalidLinspace {
                axis: kind,
                reason: "bounds must be finite",
            });
        }
        if count == 1 {
            return Self::new(kind, vec![start]);
        }
        if start == end {
            return Err(GridError::InvalidLinspace {
                axis: kind,
                reason: "start and end must differ when count > 1",
            });
        }

        let step = (end - start) / (count - 1) as f64;
        let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
        values[count - 1] = end;
        Self::new(kind, values)
    }

    #[must_use]
    pub fn kind(&self) -> AxisKind {
        self.kind
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed axis; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
