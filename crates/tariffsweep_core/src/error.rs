use std::fmt;

use crate::model::AxisKind;

/// Errors raised while materializing or validating parameter axes
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// An axis has no values, so nothing can be swept or averaged over it
    EmptyAxis(AxisKind),
    /// An axis value is NaN or infinite
    NonFiniteValue {
        axis: AxisKind,
        index: usize,
        value: f64,
    },
    /// The same coordinate appears twice on one axis
    DuplicateValue {
        axis: AxisKind,
        first: usize,
        second: usize,
        value: f64,
    },
    /// A linspace description cannot produce a valid axis
    InvalidLinspace {
        axis: AxisKind,
        reason: &'static str,
    },
    /// The product of the axis lengths does not fit in `usize`
    TooManyCells { shape: Vec<usize> },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::EmptyAxis(axis) => write!(f, "axis {} has no values", axis.symbol()),
            GridError::NonFiniteValue { axis, index, value } => {
                write!(
                    f,
                    "axis {} has a non-finite value {value} at position {index}",
                    axis.symbol()
                )
            }
            GridError::DuplicateValue {
                axis,
                first,
                second,
                value,
            } => {
                write!(
                    f,
                    "axis {} repeats value {value} at positions {first} and {second}",
                    axis.symbol()
                )
            }
            GridError::InvalidLinspace { axis, reason } => {
                write!(f, "invalid linspace for axis {}: {reason}", axis.symbol())
            }
            GridError::TooManyCells { shape } => {
                write!(f, "grid of shape {shape:?} has too many cells")
            }
        }
    }
}

impl std::error::Error for GridError {}

pub type Result<T> = std::result::Result<T, GridError>;
