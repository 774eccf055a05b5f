//! Bounded intervals of the real line
//!
//! Intervals are immutable and validated on construction (`low < high`).
//! Neither type implements `PartialEq`: comparing floating point bounds for
//! equality is not meaningful, so the compiler rejects it instead.

use std::fmt;

use super::check_argument;
use crate::Result;

/// Common behaviour of closed and right-open intervals
pub trait Interval {
    /// Lower bound
    fn low(&self) -> f64;

    /// Upper bound
    fn high(&self) -> f64;

    /// Width of the interval
    fn size(&self) -> f64 {
        self.high() - self.low()
    }

    /// Whether `v` belongs to the interval
    fn contains(&self, v: f64) -> bool;
}

/// Closed interval `[low, high]`
#[derive(Debug, Clone, Copy)]
pub struct ClosedInterval {
    low: f64,
    high: f64,
}

impl ClosedInterval {
    /// Create the interval `[low, high]`, failing unless `low < high`
    pub fn of(low: f64, high: f64) -> Result<Self> {
        check_argument(low < high, || {
            format!("Closed interval needs low < high, got [{}, {}]", low, high)
        })?;
        Ok(Self { low, high })
    }

    /// Create `[-size/2, size/2]`, failing unless `size > 0`
    pub fn symmetric(size: f64) -> Result<Self> {
        check_argument(size > 0.0, || {
            format!("Symmetric interval needs a positive size, got {}", size)
        })?;
        let bound = size / 2.0;
        Ok(Self {
            low: -bound,
            high: bound,
        })
    }

    /// Build an interval from bounds already known to satisfy `low < high`.
    ///
    /// Meant for module-level constants; the bounds are not checked.
    pub(crate) const fn from_bounds(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Clamp `v` to the nearest bound when it lies outside the interval
    pub fn clip(&self, v: f64) -> f64 {
        if v < self.low {
            self.low
        } else {
            v.min(self.high)
        }
    }
}

impl Interval for ClosedInterval {
    fn low(&self) -> f64 {
        self.low
    }

    fn high(&self) -> f64 {
        self.high
    }

    fn contains(&self, v: f64) -> bool {
        self.low <= v && v <= self.high
    }
}

impl fmt::Display for ClosedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.2},{:.2}]", self.low, self.high)
    }
}

/// Right-open interval `[low, high)`
#[derive(Debug, Clone, Copy)]
pub struct RightOpenInterval {
    low: f64,
    high: f64,
}

impl RightOpenInterval {
    /// Create the interval `[low, high)`, failing unless `low < high`
    pub fn of(low: f64, high: f64) -> Result<Self> {
        check_argument(low < high, || {
            format!("Right-open interval needs low < high, got [{}, {})", low, high)
        })?;
        Ok(Self { low, high })
    }

    /// Create `[-size/2, size/2)`, failing unless `size > 0`
    pub fn symmetric(size: f64) -> Result<Self> {
        check_argument(size > 0.0, || {
            format!("Symmetric interval needs a positive size, got {}", size)
        })?;
        let bound = size / 2.0;
        Ok(Self {
            low: -bound,
            high: bound,
        })
    }

    /// Unchecked counterpart of [`RightOpenInterval::of`] for constants
    pub(crate) const fn from_bounds(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Wrap `v` into the interval using a floored modulo.
    ///
    /// The result lies in `[low, high)` and differs from `v` by an integer
    /// multiple of the interval size.
    pub fn reduce(&self, v: f64) -> f64 {
        let x = v - self.low;
        let y = self.size();
        let r = self.low + (x - y * (x / y).floor());
        // a tiny negative offset rounds up to the excluded bound
        if r >= self.high {
            self.low
        } else {
            r
        }
    }
}

impl Interval for RightOpenInterval {
    fn low(&self) -> f64 {
        self.low
    }

    fn high(&self) -> f64 {
        self.high
    }

    fn contains(&self, v: f64) -> bool {
        self.low <= v && v < self.high
    }
}

impl fmt::Display for RightOpenInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.2},{:.2}[", self.low, self.high)
    }
}
