//! Per-cell model evaluation: the filter predicate, the quantity gap and its
//! sign classification.

use serde::{Deserialize, Serialize};

/// Parameter values at one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellParams {
    /// Time cost
    pub t: f64,
    /// Tariff rate
    pub r: f64,
    pub b0: f64,
    pub b1: f64,
    /// Marginal cost
    pub c: f64,
    /// Market size
    pub a: f64,
}

impl CellParams {
    /// Whether the cell lies in the region where the comparison is meaningful
    #[must_use]
    pub fn in_filter(&self) -> bool {
        self.b1 > self.b0
    }

    /// Firm M's equilibrium quantity minus firm L's:
    /// `b0·(a − c − t) − b1·(a − c − c·r) + 3·(c·r − t)`
    #[must_use]
    pub fn payoff_gap(&self) -> f64 {
        let Self { t, r, b0, b1, c, a } = *self;
        b0 * (a - c - t) - b1 * (a - c - c * r) + 3.0 * (c * r - t)
    }

    /// Classify this cell
    #[must_use]
    pub fn classify(&self) -> SignClass {
        SignClass::from_gap(self.in_filter(), self.payoff_gap())
    }
}

/// Outcome of comparing the two firms' quantities at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SignClass {
    /// Firm M produces more
    Win,
    /// Firm L produces more
    Lose,
    /// Outside the filter, or an exact tie
    #[default]
    Undefined,
}

impl SignClass {
    /// Three-way classification. Ties (`gap == 0`) count as neither side.
    #[must_use]
    pub fn from_gap(in_filter: bool, gap: f64) -> Self {
        if !in_filter {
            SignClass::Undefined
        } else if gap > 0.0 {
            SignClass::Win
        } else if gap < 0.0 {
            SignClass::Lose
        } else {
            SignClass::Undefined
        }
    }

    /// Numeric indicator: `Some(1.0)` for a win, `Some(0.0)` for a loss
    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            SignClass::Win => Some(1.0),
            SignClass::Lose => Some(0.0),
            SignClass::Undefined => None,
        }
    }
}
