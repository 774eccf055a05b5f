//! The sky seen by an observer at one instant
//!
//! [`ObservedSky`] evaluates every position model once, projects the Sun,
//! the Moon, the planets and every catalogue star onto the plane of a
//! [`StereographicProjection`], and answers nearest-object queries against
//! the projected positions. A sky is an immutable snapshot; a new instant
//! needs a new sky.

pub mod concat;

use std::slice;
use std::sync::Arc;

use chrono::{DateTime, TimeZone};

use crate::catalogs::StarCatalogue;
use crate::celestial::{
    Asterism, CelestialObject, CelestialObjectIdentifier, CelestialObjectType, Moon, Planet, Star,
    Sun,
};
use crate::coordinates::{
    CartesianCoordinates, CoordinateConversion, EclipticToEquatorialConversion,
    EquatorialCoordinates, EquatorialToHorizontalConversion, GeographicCoordinates,
    HorizontalCoordinates, StereographicProjection,
};
use crate::models::{CelestialObjectModel, MoonModel, PlanetModel, SunModel};
use crate::time::Epoch;
use crate::Result;

use concat::Concatenation;

/// Projected positions of every object visible from one place at one instant
#[derive(Debug, Clone)]
pub struct ObservedSky {
    to_horizontal: EquatorialToHorizontalConversion,
    projection: StereographicProjection,

    sun: Sun,
    sun_position: CartesianCoordinates,

    moon: Moon,
    moon_position: CartesianCoordinates,

    planets: Vec<Planet>,
    planet_coordinates: Vec<CartesianCoordinates>,
    planet_positions: Vec<f64>,

    catalogue: Arc<StarCatalogue>,
    star_coordinates: Vec<CartesianCoordinates>,
    star_positions: Vec<f64>,
}

/// Interleave `x, y` pairs into a flat array
fn flatten(coordinates: &[CartesianCoordinates]) -> Vec<f64> {
    coordinates.iter().flat_map(|c| [c.x(), c.y()]).collect()
}

impl ObservedSky {
    /// Compute the sky seen from `location` at `when`
    pub fn new<Tz: TimeZone>(
        when: &DateTime<Tz>,
        location: &GeographicCoordinates,
        projection: StereographicProjection,
        catalogue: Arc<StarCatalogue>,
    ) -> Result<Self> {
        let days = Epoch::J2010.days_until(when);
        let to_equatorial = EclipticToEquatorialConversion::new(when);
        let to_horizontal = EquatorialToHorizontalConversion::new(when, location);
        let project = |equ: EquatorialCoordinates| projection.apply(to_horizontal.apply(equ));

        let sun = SunModel.at(days, &to_equatorial)?;
        let sun_position = project(sun.equatorial_pos());

        let moon = MoonModel.at(days, &to_equatorial)?;
        let moon_position = project(moon.equatorial_pos());

        let planets = PlanetModel::ALL
            .iter()
            .filter(|model| **model != PlanetModel::Earth)
            .map(|model| model.at(days, &to_equatorial))
            .collect::<Result<Vec<_>>>()?;
        let planet_coordinates: Vec<_> =
            planets.iter().map(|p| project(p.equatorial_pos())).collect();

        let star_coordinates: Vec<_> = catalogue
            .stars()
            .iter()
            .map(|s| project(s.equatorial_pos()))
            .collect();

        log::debug!(
            "Observed sky at {} days since J2010: {} stars, {} planets",
            days,
            star_coordinates.len(),
            planets.len()
        );

        Ok(Self {
            to_horizontal,
            projection,
            sun,
            sun_position,
            moon,
            moon_position,
            planet_positions: flatten(&planet_coordinates),
            planets,
            planet_coordinates,
            star_positions: flatten(&star_coordinates),
            catalogue,
            star_coordinates,
        })
    }

    /// Horizontal position of an equatorial direction for this observer
    pub fn horizontal_position(&self, equ: EquatorialCoordinates) -> HorizontalCoordinates {
        self.to_horizontal.apply(equ)
    }

    /// Position of an object on the projection plane
    pub fn compute_position(&self, object: &CelestialObject) -> CartesianCoordinates {
        self.projection
            .apply(self.horizontal_position(object.equatorial_pos()))
    }

    pub fn projection(&self) -> &StereographicProjection {
        &self.projection
    }

    pub fn sun(&self) -> &Sun {
        &self.sun
    }

    pub fn sun_position(&self) -> CartesianCoordinates {
        self.sun_position
    }

    pub fn moon(&self) -> &Moon {
        &self.moon
    }

    pub fn moon_position(&self) -> CartesianCoordinates {
        self.moon_position
    }

    /// Every planet but the Earth, from the Sun outwards
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    /// Planet with this identifier; `None` for the Earth and for non-planets
    pub fn planet(&self, identifier: CelestialObjectIdentifier) -> Option<&Planet> {
        self.planets.iter().find(|p| p.identifier() == identifier)
    }

    /// Projected planet positions as `x0, y0, x1, y1, ...`, in [`planets`](Self::planets) order
    pub fn planet_positions(&self) -> Vec<f64> {
        self.planet_positions.clone()
    }

    pub fn stars(&self) -> &[Arc<Star>] {
        self.catalogue.stars()
    }

    /// Projected star positions as `x0, y0, x1, y1, ...`, in [`stars`](Self::stars) order
    pub fn star_positions(&self) -> Vec<f64> {
        self.star_positions.clone()
    }

    pub fn asterisms(&self) -> &[Asterism] {
        self.catalogue.asterisms()
    }

    /// Indices into [`stars`](Self::stars) of the stars of `asterism`
    pub fn asterism_indices(&self, asterism: &Asterism) -> Result<&[usize]> {
        self.catalogue.asterism_indices(asterism)
    }

    pub fn catalogue(&self) -> &Arc<StarCatalogue> {
        &self.catalogue
    }

    /// Projected positions of the enabled categories, stars first, then the
    /// Sun, the Moon and the planets
    fn enabled_positions(
        &self,
        enabled: &[CelestialObjectType],
    ) -> Concatenation<'_, CelestialObjectType, CartesianCoordinates> {
        let mut view = Concatenation::new();
        for kind in CelestialObjectType::ALL.into_iter().filter(|k| enabled.contains(k)) {
            let part = match kind {
                CelestialObjectType::Star => &self.star_coordinates[..],
                CelestialObjectType::Sun => slice::from_ref(&self.sun_position),
                CelestialObjectType::Moon => slice::from_ref(&self.moon_position),
                CelestialObjectType::Planet => &self.planet_coordinates[..],
            };
            view.push(kind, part);
        }
        view
    }

    fn object(&self, kind: CelestialObjectType, index: usize) -> Option<CelestialObject> {
        match kind {
            CelestialObjectType::Star => {
                self.stars().get(index).cloned().map(CelestialObject::Star)
            }
            CelestialObjectType::Sun => Some(CelestialObject::Sun(self.sun.clone())),
            CelestialObjectType::Moon => Some(CelestialObject::Moon(self.moon.clone())),
            CelestialObjectType::Planet => {
                self.planets.get(index).cloned().map(CelestialObject::Planet)
            }
        }
    }

    /// The object of an enabled category closest to `point`, if one lies
    /// within `max_distance` of it.
    ///
    /// A point exactly `max_distance` away still matches. Among objects at
    /// the same distance the first one wins, scanning stars, then the Sun,
    /// the Moon and the planets. A negative `max_distance` never matches.
    pub fn object_closest_to(
        &self,
        point: &CartesianCoordinates,
        max_distance: f64,
        enabled: &[CelestialObjectType],
    ) -> Option<CelestialObject> {
        if max_distance < 0.0 {
            return None;
        }
        let max_squared = max_distance * max_distance;

        let positions = self.enabled_positions(enabled);
        let mut min_squared = point.distance_squared_to(positions.get(0)?);
        let mut closest = (min_squared <= max_squared).then_some(0);

        for (i, position) in positions.iter().enumerate() {
            let d = point.distance_squared_to(position);
            if d <= max_squared && d < min_squared {
                min_squared = d;
                closest = Some(i);
            }
        }

        let (kind, local) = positions.locate(closest?)?;
        self.object(kind, local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn when() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 2, 17, 20, 15, 0).unwrap()
    }

    fn location() -> GeographicCoordinates {
        GeographicCoordinates::of_deg(6.57, 46.52).unwrap()
    }

    fn projection() -> StereographicProjection {
        StereographicProjection::new(HorizontalCoordinates::of_deg(180.0, 45.0).unwrap())
    }

    fn sky_with(stars: Vec<Star>) -> ObservedSky {
        let mut builder = StarCatalogue::builder();
        for star in stars {
            builder.add_star(star);
        }
        let catalogue = Arc::new(builder.build().unwrap());
        ObservedSky::new(&when(), &location(), projection(), catalogue).unwrap()
    }

    fn star_at(id: u32, name: &str, pos: EquatorialCoordinates) -> Star {
        Star::new(id, name, pos, 1.0, 0.2).unwrap()
    }

    #[test]
    fn test_planets_exclude_earth() {
        let sky = sky_with(Vec::new());
        assert_eq!(sky.planets().len(), 7);
        assert!(sky.planet(CelestialObjectIdentifier::Earth).is_none());
        assert_eq!(
            sky.planet(CelestialObjectIdentifier::Venus).unwrap().name(),
            "Venus"
        );
        assert_eq!(sky.planet_positions().len(), 14);
    }

    #[test]
    fn test_positions_are_copies_in_star_order() {
        let a = EquatorialCoordinates::of(1.0, 0.3).unwrap();
        let b = EquatorialCoordinates::of(2.0, -0.2).unwrap();
        let sky = sky_with(vec![star_at(1, "A", a), star_at(2, "B", b)]);

        let mut positions = sky.star_positions();
        assert_eq!(positions.len(), 4);
        let second = CelestialObject::Star(sky.stars()[1].clone());
        let expected = sky.compute_position(&second);
        assert_eq!(positions[2], expected.x());
        assert_eq!(positions[3], expected.y());

        positions[0] = f64::NAN;
        assert!(!sky.star_positions()[0].is_nan());
    }

    #[test]
    fn test_negative_distance_never_matches() {
        let pos = EquatorialCoordinates::of(1.0, 0.3).unwrap();
        let sky = sky_with(vec![star_at(1, "A", pos)]);
        let point = sky.compute_position(&CelestialObject::Star(sky.stars()[0].clone()));
        assert!(sky
            .object_closest_to(&point, -1e-9, &CelestialObjectType::ALL)
            .is_none());
    }

    #[test]
    fn test_zero_distance_matches_exact_point_only() {
        let pos = EquatorialCoordinates::of(1.0, 0.3).unwrap();
        let sky = sky_with(vec![star_at(1, "A", pos)]);
        let point = sky.compute_position(&CelestialObject::Star(sky.stars()[0].clone()));

        let found = sky.object_closest_to(&point, 0.0, &[CelestialObjectType::Star]).unwrap();
        assert_eq!(found.name(), "A");

        let nudged = CartesianCoordinates::of(point.x() + 1e-6, point.y());
        assert!(sky.object_closest_to(&nudged, 0.0, &[CelestialObjectType::Star]).is_none());
    }

    #[test]
    fn test_first_of_equally_close_stars_wins() {
        let pos = EquatorialCoordinates::of(1.0, 0.3).unwrap();
        let sky = sky_with(vec![star_at(1, "First", pos), star_at(2, "Second", pos)]);
        let point = sky.compute_position(&CelestialObject::Star(sky.stars()[1].clone()));

        let found = sky.object_closest_to(&point, 0.1, &CelestialObjectType::ALL).unwrap();
        assert_eq!(found.name(), "First");
    }

    #[test]
    fn test_star_wins_over_coincident_planet() {
        let mars = sky_with(Vec::new())
            .planet(CelestialObjectIdentifier::Mars)
            .unwrap()
            .equatorial_pos();
        let sky = sky_with(vec![star_at(9, "Impostor", mars)]);
        let point = sky.compute_position(&CelestialObject::Planet(
            sky.planet(CelestialObjectIdentifier::Mars).unwrap().clone(),
        ));

        let all = sky.object_closest_to(&point, 0.01, &CelestialObjectType::ALL).unwrap();
        assert_eq!(all.object_type(), CelestialObjectType::Star);

        let planets_only = sky
            .object_closest_to(&point, 0.01, &[CelestialObjectType::Planet])
            .unwrap();
        assert_eq!(planets_only.identifier(), CelestialObjectIdentifier::Mars);
    }

    #[test]
    fn test_sun_and_moon_can_be_found() {
        let sky = sky_with(Vec::new());
        let sun = sky
            .object_closest_to(&sky.sun_position(), 0.0, &[CelestialObjectType::Sun])
            .unwrap();
        assert_eq!(sun.identifier(), CelestialObjectIdentifier::Sun);

        let moon = sky
            .object_closest_to(&sky.moon_position(), 1e-3, &[CelestialObjectType::Moon])
            .unwrap();
        assert_eq!(moon.identifier(), CelestialObjectIdentifier::Moon);
    }

    #[test]
    fn test_nothing_enabled_or_nothing_near() {
        let sky = sky_with(Vec::new());
        let origin = CartesianCoordinates::of(0.0, 0.0);
        assert!(sky.object_closest_to(&origin, 100.0, &[]).is_none());
        assert!(sky.object_closest_to(&origin, 100.0, &[CelestialObjectType::Star]).is_none());

        let far = CartesianCoordinates::of(1e6, 1e6);
        assert!(sky.object_closest_to(&far, 1.0, &CelestialObjectType::ALL).is_none());
    }
}
