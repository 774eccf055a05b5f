//! Sidereal time
//!
//! Greenwich sidereal time is evaluated from the sidereal time at the
//! preceding UTC midnight plus the elapsed solar hours scaled to sidereal
//! hours. Results are angles in `[0, 2π)`.

use chrono::{DateTime, NaiveTime, TimeZone, Utc};

use super::Epoch;
use crate::constants::{HOUR_MS, SIDEREAL_RATE};
use crate::coordinates::GeographicCoordinates;
use crate::math::{angle, Polynomial};

/// Sidereal time at 0h UT in hours, as a function of Julian centuries since J2000
const MIDNIGHT_SIDEREAL_HOURS: Polynomial =
    Polynomial::from_static(&[0.000_025_862, 2400.051_336, 6.697_374_558]);

/// Greenwich mean sidereal time at `when`, in radians
pub fn greenwich<Tz: TimeZone>(when: &DateTime<Tz>) -> f64 {
    let utc = when.with_timezone(&Utc);
    let midnight = utc.date_naive().and_time(NaiveTime::MIN).and_utc();

    let centuries = Epoch::J2000.julian_centuries_until(&midnight);
    let hours_since_midnight = (utc - midnight).num_milliseconds() as f64 * (1.0 / HOUR_MS);

    let hours = MIDNIGHT_SIDEREAL_HOURS.at(centuries) + SIDEREAL_RATE * hours_since_midnight;
    angle::normalize_positive(angle::of_hr(hours))
}

/// Local mean sidereal time at `when` for an observer at `location`, in radians
pub fn local<Tz: TimeZone>(when: &DateTime<Tz>, location: &GeographicCoordinates) -> f64 {
    angle::normalize_positive(greenwich(when) + location.lon())
}
