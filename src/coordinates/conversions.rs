//! Ecliptic to equatorial and equatorial to horizontal conversions
//!
//! Both conversions are bound to an instant (and, for the horizontal one, to
//! an observer location) and precompute the trigonometry that depends only on
//! those, so a single value can be applied to an entire catalogue.

use chrono::{DateTime, TimeZone};

use super::{
    CoordinateConversion, EclipticCoordinates, EquatorialCoordinates, GeographicCoordinates,
    HorizontalCoordinates,
};
use crate::math::angle::{self, DEG_RAD, MIN_RAD, SEC_RAD};
use crate::math::Polynomial;
use crate::time::{sidereal, Epoch};

/// Obliquity of the ecliptic in radians, over Julian centuries since J2000
const OBLIQUITY: Polynomial = Polynomial::from_static(&[
    0.001_81 * SEC_RAD,
    -0.000_6 * SEC_RAD,
    -46.815 * SEC_RAD,
    23.0 * DEG_RAD + 26.0 * MIN_RAD + 21.45 * SEC_RAD,
]);

/// Converts ecliptic coordinates to equatorial ones at a given instant
#[derive(Debug, Clone, Copy)]
pub struct EclipticToEquatorialConversion {
    sin_obliquity: f64,
    cos_obliquity: f64,
}

impl EclipticToEquatorialConversion {
    /// Build the conversion for the obliquity of the ecliptic at `when`
    pub fn new<Tz: TimeZone>(when: &DateTime<Tz>) -> Self {
        let obliquity = OBLIQUITY.at(Epoch::J2000.julian_centuries_until(when));
        Self {
            sin_obliquity: obliquity.sin(),
            cos_obliquity: obliquity.cos(),
        }
    }

    /// Obliquity of the ecliptic in radians
    pub fn obliquity(&self) -> f64 {
        self.sin_obliquity.atan2(self.cos_obliquity)
    }
}

impl CoordinateConversion<EclipticCoordinates, EquatorialCoordinates>
    for EclipticToEquatorialConversion
{
    fn apply(&self, ecl: EclipticCoordinates) -> EquatorialCoordinates {
        let (sin_lon, cos_lon) = ecl.lon().sin_cos();
        let (sin_lat, cos_lat) = ecl.lat().sin_cos();

        let ra = angle::normalize_positive(
            (sin_lon * self.cos_obliquity - (sin_lat / cos_lat) * self.sin_obliquity)
                .atan2(cos_lon),
        );
        let dec = (sin_lat * self.cos_obliquity + cos_lat * self.sin_obliquity * sin_lon)
            .clamp(-1.0, 1.0)
            .asin();

        EquatorialCoordinates::from_normalized(ra, dec)
    }
}

/// Converts equatorial coordinates to horizontal ones for an observer
#[derive(Debug, Clone, Copy)]
pub struct EquatorialToHorizontalConversion {
    local_sidereal_time: f64,
    sin_lat: f64,
    cos_lat: f64,
}

impl EquatorialToHorizontalConversion {
    /// Build the conversion for an observer at `location` at instant `when`
    pub fn new<Tz: TimeZone>(when: &DateTime<Tz>, location: &GeographicCoordinates) -> Self {
        let (sin_lat, cos_lat) = location.lat().sin_cos();
        Self {
            local_sidereal_time: sidereal::local(when, location),
            sin_lat,
            cos_lat,
        }
    }

    /// Local sidereal time this conversion was built for, in radians
    pub fn local_sidereal_time(&self) -> f64 {
        self.local_sidereal_time
    }
}

impl CoordinateConversion<EquatorialCoordinates, HorizontalCoordinates>
    for EquatorialToHorizontalConversion
{
    fn apply(&self, equ: EquatorialCoordinates) -> HorizontalCoordinates {
        let hour_angle = self.local_sidereal_time - equ.ra();
        let (sin_dec, cos_dec) = equ.dec().sin_cos();
        let (sin_ha, cos_ha) = hour_angle.sin_cos();

        let alt = (sin_dec * self.sin_lat + cos_dec * self.cos_lat * cos_ha)
            .clamp(-1.0, 1.0)
            .asin();
        let az = angle::normalize_positive(
            (-cos_dec * self.cos_lat * sin_ha).atan2(sin_dec - self.sin_lat * alt.sin()),
        );

        HorizontalCoordinates::from_normalized(az, alt)
    }
}
