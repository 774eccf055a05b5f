//! Angle unit conversions
//!
//! All angles in this crate are plain `f64` radians. These helpers convert
//! from and to degrees, arcseconds, degree-minute-second triples and hours.
//!
//! ```rust
//! use skychart::math::angle;
//!
//! let right_angle = angle::of_deg(90.0);
//! assert!((angle::to_hr(right_angle) - 6.0).abs() < 1e-12);
//! assert!((angle::normalize_positive(-right_angle) - angle::of_deg(270.0)).abs() < 1e-12);
//! ```

use super::interval::RightOpenInterval;
use super::check_in_interval;
use crate::constants::{ASEC360, HOUR2RAD, RAD2DEG, RAD2HOUR, TAU};
use crate::Result;

pub(crate) const DEG_RAD: f64 = TAU / 360.0;
pub(crate) const MIN_RAD: f64 = TAU / (360.0 * 60.0);
pub(crate) const SEC_RAD: f64 = TAU / ASEC360;

const TURN: RightOpenInterval = RightOpenInterval::from_bounds(0.0, TAU);
const SEXAGESIMAL: RightOpenInterval = RightOpenInterval::from_bounds(0.0, 60.0);

/// Reduce an angle into `[0, 2π)`
pub fn normalize_positive(rad: f64) -> f64 {
    TURN.reduce(rad)
}

/// Convert arcseconds to radians
pub fn of_arcsec(sec: f64) -> f64 {
    sec * SEC_RAD
}

/// Convert a degree-minute-second triple to radians.
///
/// Minutes and seconds must lie in `[0, 60)`; degrees are unsigned.
pub fn of_dms(deg: u32, min: u32, sec: f64) -> Result<f64> {
    check_in_interval(&SEXAGESIMAL, f64::from(min))?;
    check_in_interval(&SEXAGESIMAL, sec)?;
    Ok(f64::from(deg) * DEG_RAD + f64::from(min) * MIN_RAD + sec * SEC_RAD)
}

/// Convert degrees to radians
pub fn of_deg(deg: f64) -> f64 {
    deg * DEG_RAD
}

/// Convert radians to degrees
pub fn to_deg(rad: f64) -> f64 {
    rad * RAD2DEG
}

/// Convert hours to radians
pub fn of_hr(hr: f64) -> f64 {
    hr * HOUR2RAD
}

/// Convert radians to hours
pub fn to_hr(rad: f64) -> f64 {
    rad * RAD2HOUR
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_normalize_positive() {
        assert_relative_eq!(normalize_positive(-PI / 2.0), 3.0 * PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(normalize_positive(5.0 * PI), PI, epsilon = 1e-12);
        assert_eq!(normalize_positive(0.0), 0.0);
        assert_eq!(normalize_positive(TAU), 0.0);
        assert_eq!(normalize_positive(-1e-17), 0.0);
        assert!(normalize_positive(-f64::EPSILON) < TAU);
    }

    #[test]
    fn test_of_arcsec() {
        assert_relative_eq!(of_arcsec(3600.0), of_deg(1.0), epsilon = 1e-15);
        assert_relative_eq!(of_arcsec(ASEC360), TAU, epsilon = 1e-12);
    }

    #[test]
    fn test_of_dms() {
        assert_relative_eq!(
            of_dms(23, 26, 21.45).unwrap(),
            0.409_092_813_918_602_5,
            epsilon = 1e-12
        );
        assert_relative_eq!(of_dms(0, 30, 0.0).unwrap(), of_deg(0.5), epsilon = 1e-15);
    }

    #[test]
    fn test_of_dms_rejects_out_of_range_parts() {
        assert!(of_dms(10, 60, 0.0).is_err());
        assert!(of_dms(10, 0, 60.0).is_err());
        assert!(of_dms(10, 0, -0.5).is_err());
    }

    #[test]
    fn test_degree_and_hour_round_trip() {
        assert_relative_eq!(to_deg(of_deg(123.456)), 123.456, epsilon = 1e-12);
        assert_relative_eq!(to_hr(of_hr(17.25)), 17.25, epsilon = 1e-12);
        assert_relative_eq!(of_hr(12.0), PI, epsilon = 1e-15);
    }
}
