//! Observed sky over the reference catalogue

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use skychart::catalogs::{AsterismLoader, HygDatabaseLoader};
use skychart::{
    CelestialObject, CelestialObjectIdentifier, CelestialObjectType, ObservedSky, SkyConfig,
    StarCatalogue,
};

fn when() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 2, 17, 20, 15, 0).unwrap()
}

fn sky() -> ObservedSky {
    let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data");
    let mut builder = StarCatalogue::builder();
    builder
        .load_from_path(data.join("hygdata_sample.csv"), &HygDatabaseLoader)
        .unwrap()
        .load_from_path(data.join("asterisms_sample.txt"), &AsterismLoader)
        .unwrap();
    let catalogue = Arc::new(builder.build().unwrap());

    let config = SkyConfig::default().with_center(180.0, 45.0);
    let observer = config.observer().unwrap();
    ObservedSky::new(&when(), &observer, config.projection().unwrap(), catalogue).unwrap()
}

#[test]
fn test_every_star_is_projected() {
    let sky = sky();
    assert_eq!(sky.stars().len(), 14);
    assert_eq!(sky.star_positions().len(), 28);
    assert_eq!(sky.planets().len(), 7);
    assert_eq!(sky.planet_positions().len(), 14);
    assert!(sky.planet(CelestialObjectIdentifier::Jupiter).is_some());
}

#[test]
fn test_star_found_at_its_own_position() {
    let sky = sky();
    let betelgeuse = sky.catalogue().star_named("Betelgeuse").unwrap().clone();
    let object = CelestialObject::Star(betelgeuse);
    let point = sky.compute_position(&object);

    let found = sky
        .object_closest_to(&point, 1e-6, &[CelestialObjectType::Star])
        .unwrap();
    assert_eq!(found.name(), "Betelgeuse");
    assert_eq!(found.object_type(), CelestialObjectType::Star);

    assert!(sky
        .object_closest_to(&point, 1e-6, &[CelestialObjectType::Planet])
        .is_none());
}

#[test]
fn test_sun_and_moon_are_found() {
    let sky = sky();
    let sun = sky
        .object_closest_to(&sky.sun_position(), 0.0, &[CelestialObjectType::Sun])
        .unwrap();
    assert_eq!(sun.identifier(), CelestialObjectIdentifier::Sun);

    let moon = sky
        .object_closest_to(&sky.moon_position(), 0.0, &CelestialObjectType::ALL)
        .unwrap();
    assert_eq!(moon.identifier(), CelestialObjectIdentifier::Moon);
}

#[test]
fn test_asterisms_index_into_projected_stars() {
    let sky = sky();
    let positions = sky.star_positions();
    for asterism in sky.asterisms() {
        for &index in sky.asterism_indices(asterism).unwrap() {
            assert!(2 * index + 1 < positions.len());
            let star = &sky.stars()[index];
            let point = sky.compute_position(&CelestialObject::Star(Arc::clone(star)));
            assert_eq!(positions[2 * index], point.x());
            assert_eq!(positions[2 * index + 1], point.y());
        }
    }
}

#[test]
fn test_orion_is_above_the_horizon_in_the_evening() {
    let sky = sky();
    let rigel = sky.catalogue().star_named("Rigel").unwrap();
    let hor = sky.horizontal_position(rigel.equatorial_pos());
    assert!(hor.alt_deg() > 0.0, "Rigel at {}", hor);
}
