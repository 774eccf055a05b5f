//! Apparent position of the Sun

use super::CelestialObjectModel;
use crate::celestial::Sun;
use crate::constants::{TAU, TROPICAL_YEAR_DAYS};
use crate::coordinates::{CoordinateConversion, EclipticCoordinates, EclipticToEquatorialConversion};
use crate::math::angle;
use crate::Result;

// Longitude at J2010, longitude at perigee and eccentricity of the apparent orbit
const LONGITUDE_J2010_DEG: f64 = 279.557_208;
const LONGITUDE_PERIGEE_DEG: f64 = 283.112_438;
const ECCENTRICITY: f64 = 0.016_705;
/// Angular size at one astronomical unit, degrees
const ANGULAR_SIZE_1AU_DEG: f64 = 0.533_128;

const MEAN_ANGULAR_VELOCITY: f64 = TAU / TROPICAL_YEAR_DAYS;

/// The Sun's apparent orbit around the Earth as a Keplerian ellipse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SunModel;

impl SunModel {
    fn mean_anomaly(days_since_j2010: f64) -> f64 {
        MEAN_ANGULAR_VELOCITY * days_since_j2010 + angle::of_deg(LONGITUDE_J2010_DEG)
            - angle::of_deg(LONGITUDE_PERIGEE_DEG)
    }
}

impl CelestialObjectModel for SunModel {
    type Output = Sun;

    fn at(
        &self,
        days_since_j2010: f64,
        conversion: &EclipticToEquatorialConversion,
    ) -> Result<Sun> {
        let mean_anomaly = Self::mean_anomaly(days_since_j2010);
        let real_anomaly = mean_anomaly + 2.0 * ECCENTRICITY * mean_anomaly.sin();

        let lon = angle::normalize_positive(real_anomaly + angle::of_deg(LONGITUDE_PERIGEE_DEG));
        let ecliptic = EclipticCoordinates::of(lon, 0.0)?;
        let equatorial = conversion.apply(ecliptic);

        let angular_size = angle::of_deg(ANGULAR_SIZE_1AU_DEG)
            * (1.0 + ECCENTRICITY * real_anomaly.cos())
            / (1.0 - ECCENTRICITY * ECCENTRICITY);

        Sun::new(ecliptic, equatorial, angular_size as f32, mean_anomaly as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Epoch;
    use approx::assert_relative_eq;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_sun_2003() {
        let when = Utc.with_ymd_and_hms(2003, 7, 27, 0, 0, 0).unwrap();
        let conversion = EclipticToEquatorialConversion::new(&when);
        let sun = SunModel.at(Epoch::J2010.days_until(&when), &conversion).unwrap();

        assert_relative_eq!(sun.ecliptic_pos().lon_deg(), 123.58060053153356, epsilon = 1e-9);
        assert_eq!(sun.ecliptic_pos().lat(), 0.0);
        assert_relative_eq!(sun.equatorial_pos().ra_hr(), 8.392682808297806, epsilon = 1e-9);
        assert_relative_eq!(sun.equatorial_pos().dec_deg(), 19.35288373097352, epsilon = 1e-9);
        assert_relative_eq!(sun.angular_size(), 0.009_161_771_f32, epsilon = 1e-9);
        assert_eq!(sun.magnitude(), -26.7);
    }

    #[test]
    fn test_sun_mean_anomaly_is_not_reduced() {
        let when = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let conversion = EclipticToEquatorialConversion::new(&when);
        let days = Epoch::J2010.days_until(&when);
        let sun = SunModel.at(days, &conversion).unwrap();
        assert!(f64::from(sun.mean_anomaly()) > TAU);
    }
}
