//! Model types for the tariff competition sweep
//!
//! - `axis`: the six swept parameters and their validated value sequences
//! - `cell`: per-cell parameters, quantity-gap formula and sign classification

mod axis;
mod cell;

pub use axis::*;
pub use cell::*;
