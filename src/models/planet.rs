//! Apparent positions of the planets
//!
//! Every planet, the Earth included, follows a Keplerian orbit described by
//! the [`OrbitalElements`] of its [`PlanetModel`] variant. The geocentric
//! longitude is computed with a different formula for inner and for outer
//! planets, each numerically stable on its own side of the Earth's orbit.

use std::f64::consts::PI;

use super::CelestialObjectModel;
use crate::celestial::{CelestialObjectIdentifier, Planet};
use crate::constants::{TAU, TROPICAL_YEAR_DAYS};
use crate::coordinates::{CoordinateConversion, EclipticCoordinates, EclipticToEquatorialConversion};
use crate::math::angle;
use crate::Result;

const EARTH_MEAN_ANGULAR_VELOCITY: f64 = TAU / TROPICAL_YEAR_DAYS;

/// Orbital elements at epoch J2010, angles in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Sidereal revolution period, tropical years
    pub period: f64,
    /// Mean longitude at J2010
    pub longitude_j2010: f64,
    /// Longitude at perihelion
    pub longitude_perihelion: f64,
    pub eccentricity: f64,
    /// Semi-major axis, astronomical units
    pub semi_major_axis: f64,
    pub inclination: f64,
    /// Longitude of the ascending node
    pub longitude_node: f64,
    /// Angular size at one astronomical unit, arcseconds
    pub angular_size_1au: f64,
    /// Magnitude at one astronomical unit
    pub magnitude_1au: f64,
}

/// Position model of one planet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanetModel {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

/// Heliocentric state of a planet
struct Heliocentric {
    /// Longitude in the orbital plane
    lon: f64,
    /// Distance to the Sun
    radius: f64,
}

impl PlanetModel {
    /// Every planet from the Sun outwards, the Earth included
    pub const ALL: [PlanetModel; 8] = [
        PlanetModel::Mercury,
        PlanetModel::Venus,
        PlanetModel::Earth,
        PlanetModel::Mars,
        PlanetModel::Jupiter,
        PlanetModel::Saturn,
        PlanetModel::Uranus,
        PlanetModel::Neptune,
    ];

    pub fn identifier(&self) -> CelestialObjectIdentifier {
        match self {
            PlanetModel::Mercury => CelestialObjectIdentifier::Mercury,
            PlanetModel::Venus => CelestialObjectIdentifier::Venus,
            PlanetModel::Earth => CelestialObjectIdentifier::Earth,
            PlanetModel::Mars => CelestialObjectIdentifier::Mars,
            PlanetModel::Jupiter => CelestialObjectIdentifier::Jupiter,
            PlanetModel::Saturn => CelestialObjectIdentifier::Saturn,
            PlanetModel::Uranus => CelestialObjectIdentifier::Uranus,
            PlanetModel::Neptune => CelestialObjectIdentifier::Neptune,
        }
    }

    pub fn name(&self) -> &'static str {
        self.identifier().name()
    }

    pub fn elements(&self) -> OrbitalElements {
        let (period, longitude_j2010, longitude_perihelion, eccentricity, semi_major_axis) =
            match self {
                PlanetModel::Mercury => (0.24085, 75.5671, 77.612, 0.205627, 0.387098),
                PlanetModel::Venus => (0.615207, 272.30044, 131.54, 0.006812, 0.723329),
                PlanetModel::Earth => (0.999996, 99.556772, 103.2055, 0.016671, 0.999985),
                PlanetModel::Mars => (1.880765, 109.09646, 336.217, 0.093348, 1.523689),
                PlanetModel::Jupiter => (11.857911, 337.917132, 14.6633, 0.048907, 5.20278),
                PlanetModel::Saturn => (29.310579, 172.398316, 89.567, 0.053853, 9.51134),
                PlanetModel::Uranus => (84.039492, 356.135400, 172.884833, 0.046321, 19.21814),
                PlanetModel::Neptune => (165.84539, 326.895127, 23.07, 0.010483, 30.1985),
            };
        let (inclination, longitude_node, angular_size_1au, magnitude_1au) = match self {
            PlanetModel::Mercury => (7.0051, 48.449, 6.74, -0.42),
            PlanetModel::Venus => (3.3947, 76.769, 16.92, -4.40),
            PlanetModel::Earth => (0.0, 0.0, 0.0, 0.0),
            PlanetModel::Mars => (1.8497, 49.632, 9.36, -1.52),
            PlanetModel::Jupiter => (1.3035, 100.595, 196.74, -9.40),
            PlanetModel::Saturn => (2.4873, 113.752, 165.60, -8.88),
            PlanetModel::Uranus => (0.773059, 73.926961, 65.80, -7.19),
            PlanetModel::Neptune => (1.7673, 131.879, 62.20, -6.87),
        };
        OrbitalElements {
            period,
            longitude_j2010,
            longitude_perihelion,
            eccentricity,
            semi_major_axis,
            inclination,
            longitude_node,
            angular_size_1au,
            magnitude_1au,
        }
    }

    /// Model for the planet with this identifier, if it is one
    pub fn for_identifier(identifier: CelestialObjectIdentifier) -> Option<PlanetModel> {
        Self::ALL.into_iter().find(|model| model.identifier() == identifier)
    }

    fn heliocentric(&self, days_since_j2010: f64) -> Heliocentric {
        let el = self.elements();
        let perihelion = angle::of_deg(el.longitude_perihelion);

        let mean_anomaly = EARTH_MEAN_ANGULAR_VELOCITY * days_since_j2010 / el.period
            + angle::of_deg(el.longitude_j2010)
            - perihelion;
        let real_anomaly = mean_anomaly + 2.0 * el.eccentricity * mean_anomaly.sin();

        Heliocentric {
            lon: real_anomaly + perihelion,
            radius: el.semi_major_axis * (1.0 - el.eccentricity * el.eccentricity)
                / (1.0 + el.eccentricity * real_anomaly.cos()),
        }
    }
}

impl CelestialObjectModel for PlanetModel {
    type Output = Planet;

    /// Meaningless for [`PlanetModel::Earth`], which callers skip
    fn at(
        &self,
        days_since_j2010: f64,
        conversion: &EclipticToEquatorialConversion,
    ) -> Result<Planet> {
        let el = self.elements();
        let node = angle::of_deg(el.longitude_node);
        let (sin_i, cos_i) = angle::of_deg(el.inclination).sin_cos();

        let planet = self.heliocentric(days_since_j2010);
        let earth = PlanetModel::Earth.heliocentric(days_since_j2010);

        // heliocentric ecliptic latitude and longitude, distance projected on the ecliptic
        let from_node = planet.lon - node;
        let psi = (from_node.sin() * sin_i).asin();
        let projected_lon = (from_node.sin() * cos_i).atan2(from_node.cos()) + node;
        let projected_radius = planet.radius * psi.cos();

        let (sin_diff, cos_diff) = (earth.lon - projected_lon).sin_cos();

        let lon = if earth.radius < planet.radius {
            angle::normalize_positive(
                projected_lon
                    + (earth.radius * -sin_diff).atan2(projected_radius - earth.radius * cos_diff),
            )
        } else {
            angle::normalize_positive(
                PI + earth.lon
                    + (projected_radius * sin_diff)
                        .atan2(earth.radius - projected_radius * cos_diff),
            )
        };
        let lat = (projected_radius * psi.tan() * (lon - projected_lon).sin()
            / (earth.radius * -sin_diff))
            .atan();

        let equatorial = conversion.apply(EclipticCoordinates::of(lon, lat)?);

        let distance_to_earth = (earth.radius * earth.radius + planet.radius * planet.radius
            - 2.0 * earth.radius * planet.radius * (planet.lon - earth.lon).cos() * psi.cos())
        .sqrt();
        let angular_size = angle::of_arcsec(el.angular_size_1au) / distance_to_earth;

        let phase = (1.0 + (lon - planet.lon).cos()) / 2.0;
        let magnitude =
            el.magnitude_1au + 5.0 * (planet.radius * distance_to_earth / phase.sqrt()).log10();

        Planet::new(self.identifier(), equatorial, angular_size as f32, magnitude as f32)
    }
}
