//! Constants module for astronomical calculations

use std::f64::consts::PI;

// Angles
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;
/// Arcseconds in a complete circle
pub const ASEC360: f64 = 1_296_000.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Hours to radians conversion factor
pub const HOUR2RAD: f64 = TAU / 24.0;
/// Radians to hours conversion factor
pub const RAD2HOUR: f64 = 24.0 / TAU;

// Time constants
/// Milliseconds in a day
pub const DAY_MS: f64 = 86_400_000.0;
/// Milliseconds in an hour
pub const HOUR_MS: f64 = 3_600_000.0;
/// Days in a Julian century
pub const JULIAN_CENTURY_DAYS: f64 = 36_525.0;
/// Length of the tropical year in days
pub const TROPICAL_YEAR_DAYS: f64 = 365.242_191;
/// Ratio of sidereal to solar time rates used by the sidereal clock
pub const SIDEREAL_RATE: f64 = 1.002_737_909;

// Photometry
/// Apparent visual magnitude of the Sun
pub const SUN_MAGNITUDE: f32 = -26.7;
