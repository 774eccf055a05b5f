//! Spherical coordinate pairs in radians
//!
//! Each system is a distinct type enforcing its own ranges:
//!
//! | Type | longitude-like axis | latitude-like axis |
//! |------|---------------------|--------------------|
//! | [`EclipticCoordinates`] | λ in `[0, 2π)` | β in `[-π/2, π/2]` |
//! | [`EquatorialCoordinates`] | α in `[0, 2π)` | δ in `[-π/2, π/2]` |
//! | [`GeographicCoordinates`] | lon in `[-π, π)` | lat in `[-π/2, π/2]` |
//! | [`HorizontalCoordinates`] | az in `[0, 2π)` | alt in `[-π/2, π/2]` |
//!
//! None of them implement `PartialEq`; compare components with a tolerance.

use std::f64::consts::PI;
use std::fmt;

use serde::Serialize;

use crate::constants::TAU;
use crate::math::{angle, check_in_interval, ClosedInterval, Interval, RightOpenInterval};
use crate::Result;

const FULL_TURN: RightOpenInterval = RightOpenInterval::from_bounds(0.0, TAU);
const HALF_TURN_CENTERED: RightOpenInterval = RightOpenInterval::from_bounds(-PI, PI);
const QUARTER_TURNS: ClosedInterval = ClosedInterval::from_bounds(-PI / 2.0, PI / 2.0);

/// Position on the ecliptic sphere
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EclipticCoordinates {
    lon: f64,
    lat: f64,
}

impl EclipticCoordinates {
    /// Create ecliptic coordinates from longitude λ and latitude β in radians
    pub fn of(lon: f64, lat: f64) -> Result<Self> {
        Ok(Self {
            lon: check_in_interval(&FULL_TURN, lon)?,
            lat: check_in_interval(&QUARTER_TURNS, lat)?,
        })
    }

    /// Ecliptic longitude λ in radians
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Ecliptic longitude λ in degrees
    pub fn lon_deg(&self) -> f64 {
        angle::to_deg(self.lon)
    }

    /// Ecliptic latitude β in radians
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Ecliptic latitude β in degrees
    pub fn lat_deg(&self) -> f64 {
        angle::to_deg(self.lat)
    }
}

impl fmt::Display for EclipticCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(λ={:.4}°, β={:.4}°)", self.lon_deg(), self.lat_deg())
    }
}

/// Position on the celestial sphere (right ascension, declination)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EquatorialCoordinates {
    ra: f64,
    dec: f64,
}

impl EquatorialCoordinates {
    /// Create equatorial coordinates from right ascension and declination in radians
    pub fn of(ra: f64, dec: f64) -> Result<Self> {
        Ok(Self {
            ra: check_in_interval(&FULL_TURN, ra)?,
            dec: check_in_interval(&QUARTER_TURNS, dec)?,
        })
    }

    /// Wrap components a conversion has already brought into range
    pub(crate) fn from_normalized(ra: f64, dec: f64) -> Self {
        debug_assert!(FULL_TURN.contains(ra), "ra {} out of range", ra);
        debug_assert!(QUARTER_TURNS.contains(dec), "dec {} out of range", dec);
        Self { ra, dec }
    }

    /// Right ascension α in radians
    pub fn ra(&self) -> f64 {
        self.ra
    }

    /// Right ascension α in degrees
    pub fn ra_deg(&self) -> f64 {
        angle::to_deg(self.ra)
    }

    /// Right ascension α in hours
    pub fn ra_hr(&self) -> f64 {
        angle::to_hr(self.ra)
    }

    /// Declination δ in radians
    pub fn dec(&self) -> f64 {
        self.dec
    }

    /// Declination δ in degrees
    pub fn dec_deg(&self) -> f64 {
        angle::to_deg(self.dec)
    }
}

impl fmt::Display for EquatorialCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(ra={:.4}h, dec={:.4}°)", self.ra_hr(), self.dec_deg())
    }
}

/// Location on Earth
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GeographicCoordinates {
    lon: f64,
    lat: f64,
}

impl GeographicCoordinates {
    /// Create a location from longitude and latitude in degrees.
    ///
    /// Longitude must lie in `[-180°, 180°)` and latitude in `[-90°, 90°]`.
    pub fn of_deg(lon_deg: f64, lat_deg: f64) -> Result<Self> {
        Ok(Self {
            lon: check_in_interval(&HALF_TURN_CENTERED, angle::of_deg(lon_deg))?,
            lat: check_in_interval(&QUARTER_TURNS, angle::of_deg(lat_deg))?,
        })
    }

    /// Whether `lon_deg` is an acceptable longitude
    pub fn is_valid_lon_deg(lon_deg: f64) -> bool {
        HALF_TURN_CENTERED.contains(angle::of_deg(lon_deg))
    }

    /// Whether `lat_deg` is an acceptable latitude
    pub fn is_valid_lat_deg(lat_deg: f64) -> bool {
        QUARTER_TURNS.contains(angle::of_deg(lat_deg))
    }

    /// Longitude in radians, positive east of Greenwich
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Longitude in degrees
    pub fn lon_deg(&self) -> f64 {
        angle::to_deg(self.lon)
    }

    /// Latitude in radians
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Latitude in degrees
    pub fn lat_deg(&self) -> f64 {
        angle::to_deg(self.lat)
    }
}

impl fmt::Display for GeographicCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(lon={:.4}°, lat={:.4}°)", self.lon_deg(), self.lat_deg())
    }
}

/// Position in the observer's local sky (azimuth, altitude)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HorizontalCoordinates {
    az: f64,
    alt: f64,
}

impl HorizontalCoordinates {
    /// Create horizontal coordinates from azimuth and altitude in radians
    pub fn of(az: f64, alt: f64) -> Result<Self> {
        Ok(Self {
            az: check_in_interval(&FULL_TURN, az)?,
            alt: check_in_interval(&QUARTER_TURNS, alt)?,
        })
    }

    /// Wrap components a conversion has already brought into range
    pub(crate) fn from_normalized(az: f64, alt: f64) -> Self {
        debug_assert!(FULL_TURN.contains(az), "az {} out of range", az);
        debug_assert!(QUARTER_TURNS.contains(alt), "alt {} out of range", alt);
        Self { az, alt }
    }

    /// Create horizontal coordinates from azimuth and altitude in degrees
    pub fn of_deg(az_deg: f64, alt_deg: f64) -> Result<Self> {
        Self::of(angle::of_deg(az_deg), angle::of_deg(alt_deg))
    }

    /// Azimuth in radians, measured from north towards east
    pub fn az(&self) -> f64 {
        self.az
    }

    /// Azimuth in degrees
    pub fn az_deg(&self) -> f64 {
        angle::to_deg(self.az)
    }

    /// Altitude above the horizon in radians
    pub fn alt(&self) -> f64 {
        self.alt
    }

    /// Altitude in degrees
    pub fn alt_deg(&self) -> f64 {
        angle::to_deg(self.alt)
    }

    /// Name of the compass octant containing the azimuth.
    ///
    /// The names of intermediate octants are built by concatenation, so
    /// passing `"N", "E", "S", "W"` yields one of N, NE, E, SE, S, SW, W, NW.
    pub fn az_octant_name(&self, n: &str, e: &str, s: &str, w: &str) -> String {
        let octants = [
            n.to_string(),
            format!("{}{}", n, e),
            e.to_string(),
            format!("{}{}", s, e),
            s.to_string(),
            format!("{}{}", s, w),
            w.to_string(),
            format!("{}{}", n, w),
        ];
        let per_octant = TAU / octants.len() as f64;
        let index = (self.az / per_octant).round() as usize % octants.len();
        octants[index].clone()
    }

    /// Great-circle distance to `other` in radians
    pub fn angular_distance_to(&self, other: &HorizontalCoordinates) -> f64 {
        let cos = self.alt.sin() * other.alt.sin()
            + self.alt.cos() * other.alt.cos() * (self.az - other.az).cos();
        cos.clamp(-1.0, 1.0).acos()
    }
}

impl fmt::Display for HorizontalCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(az={:.4}°, alt={:.4}°)", self.az_deg(), self.alt_deg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_ecliptic_ranges() {
        assert!(EclipticCoordinates::of(0.0, PI / 2.0).is_ok());
        assert!(EclipticCoordinates::of(TAU, 0.0).is_err());
        assert!(EclipticCoordinates::of(-0.1, 0.0).is_err());
        assert!(EclipticCoordinates::of(1.0, -PI / 2.0 - 1e-9).is_err());

        let ecl = EclipticCoordinates::of(angle::of_deg(22.5), angle::of_deg(-10.0)).unwrap();
        assert_eq!(ecl.to_string(), "(λ=22.5000°, β=-10.0000°)");
    }

    #[test]
    fn test_equatorial_accessors() {
        let equ = EquatorialCoordinates::of(PI, angle::of_deg(30.0)).unwrap();
        assert_relative_eq!(equ.ra_hr(), 12.0, epsilon = 1e-12);
        assert_relative_eq!(equ.ra_deg(), 180.0, epsilon = 1e-12);
        assert_relative_eq!(equ.dec_deg(), 30.0, epsilon = 1e-12);
        assert_eq!(equ.to_string(), "(ra=12.0000h, dec=30.0000°)");

        assert!(EquatorialCoordinates::of(TAU, 0.0).is_err());
        assert!(EquatorialCoordinates::of(0.0, 2.0).is_err());
    }

    #[test]
    fn test_geographic_ranges() {
        assert!(GeographicCoordinates::of_deg(-180.0, 0.0).is_ok());
        assert!(GeographicCoordinates::of_deg(180.0, 0.0).is_err());
        assert!(GeographicCoordinates::of_deg(0.0, 90.0).is_ok());
        assert!(GeographicCoordinates::of_deg(0.0, 90.0001).is_err());

        assert!(GeographicCoordinates::is_valid_lon_deg(179.999));
        assert!(!GeographicCoordinates::is_valid_lon_deg(180.0));
        assert!(GeographicCoordinates::is_valid_lat_deg(-90.0));
        assert!(!GeographicCoordinates::is_valid_lat_deg(-91.0));

        let epfl = GeographicCoordinates::of_deg(6.57, 46.52).unwrap();
        assert_relative_eq!(epfl.lon_deg(), 6.57, epsilon = 1e-12);
        assert_relative_eq!(epfl.lat_deg(), 46.52, epsilon = 1e-12);
        assert_eq!(epfl.to_string(), "(lon=6.5700°, lat=46.5200°)");
    }

    #[test]
    fn test_horizontal_display() {
        let h = HorizontalCoordinates::of_deg(10.997845, 18.15895).unwrap();
        assert_eq!(h.to_string(), "(az=10.9978°, alt=18.1590°)");
    }

    #[test]
    fn test_horizontal_rejects_out_of_range() {
        assert!(HorizontalCoordinates::of_deg(360.0, 0.0).is_err());
        assert!(HorizontalCoordinates::of_deg(0.0, -90.5).is_err());
        assert!(HorizontalCoordinates::of(TAU - 1e-9, PI / 2.0).is_ok());
    }

    #[rstest]
    #[case(22.6, "NE")]
    #[case(22.4, "N")]
    #[case(359.0, "N")]
    #[case(330.0, "NW")]
    #[case(90.0, "E")]
    #[case(180.0, "S")]
    #[case(200.0, "S")]
    #[case(225.0, "SW")]
    fn test_octant_names(#[case] az_deg: f64, #[case] expected: &str) {
        let h = HorizontalCoordinates::of_deg(az_deg, 0.0).unwrap();
        assert_eq!(h.az_octant_name("N", "E", "S", "W"), expected);
    }

    #[test]
    fn test_octant_names_use_given_labels() {
        let h = HorizontalCoordinates::of_deg(135.0, 0.0).unwrap();
        assert_eq!(h.az_octant_name("n", "o", "s", "w"), "so");
    }

    #[test]
    fn test_angular_distance() {
        let epfl = HorizontalCoordinates::of_deg(6.5682, 46.5183).unwrap();
        let bern = HorizontalCoordinates::of_deg(8.5476, 47.3763).unwrap();
        assert_relative_eq!(epfl.angular_distance_to(&bern), 0.0279, epsilon = 1e-4);
    }

    #[test]
    fn test_angular_distance_to_itself() {
        for (az, alt) in [(0.3, 0.7), (6.5682, 46.5183), (123.4, -12.3), (271.0, 89.9)] {
            let h = HorizontalCoordinates::of_deg(az, alt).unwrap();
            let d = h.angular_distance_to(&h);
            assert!(!d.is_nan(), "distance of {} to itself is NaN", h);
            assert!(d < 1e-7);
        }
    }
}
