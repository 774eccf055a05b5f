//! Time module for epoch arithmetic and sidereal time
//!
//! Instants are `chrono::DateTime` values in any time zone; everything is
//! converted to UTC before computing. Elapsed time is measured with
//! millisecond precision.

pub mod sidereal;

use chrono::{DateTime, TimeDelta, TimeZone, Utc};

use crate::constants::{DAY_MS, JULIAN_CENTURY_DAYS};

/// Reference instants used as the origin of the position models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Epoch {
    /// 2000-01-01T12:00Z
    J2000,
    /// 2009-12-31T00:00Z, i.e. 2010 January 0.0
    J2010,
}

impl Epoch {
    fn unix_seconds(&self) -> i64 {
        match self {
            Epoch::J2000 => 946_728_000,
            Epoch::J2010 => 1_262_217_600,
        }
    }

    /// The epoch as a UTC instant
    pub fn instant(&self) -> DateTime<Utc> {
        DateTime::UNIX_EPOCH + TimeDelta::seconds(self.unix_seconds())
    }

    /// Days elapsed from the epoch to `when`, negative if `when` is earlier
    pub fn days_until<Tz: TimeZone>(&self, when: &DateTime<Tz>) -> f64 {
        let elapsed = when.with_timezone(&Utc) - self.instant();
        elapsed.num_milliseconds() as f64 / DAY_MS
    }

    /// Julian centuries elapsed from the epoch to `when`
    pub fn julian_centuries_until<Tz: TimeZone>(&self, when: &DateTime<Tz>) -> f64 {
        self.days_until(when) / JULIAN_CENTURY_DAYS
    }
}
