//! Apparent position, size and phase of the Moon
//!
//! The mean orbital longitude is corrected in turn for the evection, the
//! annual equation, the equation of the centre and the variation. The Sun's
//! longitude and mean anomaly at the same instant enter several of these
//! terms.

use super::{CelestialObjectModel, SunModel};
use crate::celestial::Moon;
use crate::coordinates::{CoordinateConversion, EclipticCoordinates, EclipticToEquatorialConversion};
use crate::math::angle::{self, DEG_RAD};
use crate::Result;

const MEAN_LONGITUDE_J2010: f64 = 91.929_336 * DEG_RAD;
const PERIGEE_LONGITUDE_J2010: f64 = 130.143_076 * DEG_RAD;
const NODE_LONGITUDE_J2010: f64 = 291.682_547 * DEG_RAD;
const INCLINATION: f64 = 5.145_396 * DEG_RAD;
const ECCENTRICITY: f64 = 0.054_9;
/// Angular size at the semi-major axis distance
const ANGULAR_SIZE: f64 = 0.518_1 * DEG_RAD;

// Daily motions
const MEAN_LONGITUDE_RATE: f64 = 13.176_396_6 * DEG_RAD;
const PERIGEE_RATE: f64 = 0.111_404_1 * DEG_RAD;
const NODE_RATE: f64 = 0.052_953_9 * DEG_RAD;

// Amplitudes of the periodic terms
const EVECTION: f64 = 1.273_9 * DEG_RAD;
const ANNUAL_EQUATION: f64 = 0.185_8 * DEG_RAD;
const CORRECTION_3: f64 = 0.37 * DEG_RAD;
const EQUATION_OF_CENTRE: f64 = 6.288_6 * DEG_RAD;
const CORRECTION_4: f64 = 0.214 * DEG_RAD;
const VARIATION: f64 = 0.658_3 * DEG_RAD;
const NODE_CORRECTION: f64 = 0.16 * DEG_RAD;

/// The Moon's orbit with its main periodic perturbations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoonModel;

/// Intermediate quantities of one evaluation of the orbit
struct Orbit {
    ecliptic_pos: EclipticCoordinates,
    true_lon: f64,
    sun_lon: f64,
    true_anomaly: f64,
}

impl MoonModel {
    fn orbit(days_since_j2010: f64, conversion: &EclipticToEquatorialConversion) -> Result<Orbit> {
        let sun = SunModel.at(days_since_j2010, conversion)?;
        let sun_lon = sun.ecliptic_pos().lon();
        let sin_sun_anomaly = f64::from(sun.mean_anomaly()).sin();

        let mean_lon = MEAN_LONGITUDE_RATE * days_since_j2010 + MEAN_LONGITUDE_J2010;
        let mean_anomaly = mean_lon - PERIGEE_RATE * days_since_j2010 - PERIGEE_LONGITUDE_J2010;

        let evection = EVECTION * (2.0 * (mean_lon - sun_lon) - mean_anomaly).sin();
        let annual_equation = ANNUAL_EQUATION * sin_sun_anomaly;
        let correction_3 = CORRECTION_3 * sin_sun_anomaly;
        let corrected_anomaly = mean_anomaly + evection - annual_equation - correction_3;

        let centre = EQUATION_OF_CENTRE * corrected_anomaly.sin();
        let correction_4 = CORRECTION_4 * (2.0 * corrected_anomaly).sin();
        let corrected_lon = mean_lon + evection + centre - annual_equation + correction_4;

        let variation = VARIATION * (2.0 * (corrected_lon - sun_lon)).sin();
        let true_lon = corrected_lon + variation;

        let node = NODE_LONGITUDE_J2010 - NODE_RATE * days_since_j2010
            - NODE_CORRECTION * sin_sun_anomaly;

        let sin_x = (true_lon - node).sin();
        let lon = angle::normalize_positive(
            (sin_x * INCLINATION.cos()).atan2((true_lon - node).cos()) + node,
        );
        let lat = (sin_x * INCLINATION.sin()).asin();

        Ok(Orbit {
            ecliptic_pos: EclipticCoordinates::of(lon, lat)?,
            true_lon,
            sun_lon,
            true_anomaly: corrected_anomaly + centre,
        })
    }

    /// Ecliptic position before conversion to equatorial coordinates
    pub(crate) fn ecliptic_pos(
        &self,
        days_since_j2010: f64,
        conversion: &EclipticToEquatorialConversion,
    ) -> Result<EclipticCoordinates> {
        Ok(Self::orbit(days_since_j2010, conversion)?.ecliptic_pos)
    }
}

impl CelestialObjectModel for MoonModel {
    type Output = Moon;

    fn at(
        &self,
        days_since_j2010: f64,
        conversion: &EclipticToEquatorialConversion,
    ) -> Result<Moon> {
        let orbit = Self::orbit(days_since_j2010, conversion)?;
        let equatorial = conversion.apply(orbit.ecliptic_pos);

        let distance = (1.0 - ECCENTRICITY * ECCENTRICITY)
            / (1.0 + ECCENTRICITY * orbit.true_anomaly.cos());
        let angular_size = ANGULAR_SIZE / distance;
        let phase = (1.0 - (orbit.true_lon - orbit.sun_lon).cos()) / 2.0;

        Moon::new(equatorial, angular_size as f32, phase as f32)
    }
}
