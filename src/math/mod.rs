//! Numeric primitives: angle units, real intervals and polynomials
//!
//! Every other module builds on these. The precondition helpers at the bottom
//! turn violated construction invariants into [`SkyError::InvalidArgument`].

pub mod angle;
pub mod interval;
pub mod polynomial;

pub use interval::{ClosedInterval, Interval, RightOpenInterval};
pub use polynomial::Polynomial;

use crate::{Result, SkyError};

/// Fail with `InvalidArgument` carrying `message` unless `condition` holds
pub fn check_argument(condition: bool, message: impl FnOnce() -> String) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(SkyError::InvalidArgument(message()))
    }
}

/// Return `value` unchanged if `interval` contains it
pub fn check_in_interval<I: Interval + std::fmt::Display>(interval: &I, value: f64) -> Result<f64> {
    if interval.contains(value) {
        Ok(value)
    } else {
        Err(SkyError::InvalidArgument(format!(
            "Value {:.6} not in {}",
            value, interval
        )))
    }
}
