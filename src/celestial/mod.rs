//! Celestial objects shown on the sky
//!
//! [`CelestialObject`] is a closed sum over the four kinds of bodies. Shared
//! accessors (name, position, magnitude, angular size) dispatch on the
//! variant; variant-specific data is reached through the payload types in
//! [`bodies`].
//!
//! Stars are held behind `Arc` because catalogues, asterisms and query
//! results all refer to the same star values.

pub mod asterism;
pub mod attribute;
pub mod bodies;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

pub use asterism::Asterism;
pub use attribute::{AttributeKind, FloatAttribute};
pub use bodies::{Moon, Planet, Star, Sun};

use crate::coordinates::EquatorialCoordinates;

/// Category of a celestial object, used to filter queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CelestialObjectType {
    Star,
    Sun,
    Moon,
    Planet,
}

impl CelestialObjectType {
    /// Every category, in the order the sky scans them
    pub const ALL: [CelestialObjectType; 4] = [
        CelestialObjectType::Star,
        CelestialObjectType::Sun,
        CelestialObjectType::Moon,
        CelestialObjectType::Planet,
    ];
}

/// Identity of a celestial object, finer than its category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CelestialObjectIdentifier {
    Star,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Sun,
    Moon,
}

impl CelestialObjectIdentifier {
    /// Category the identified object belongs to
    pub fn object_type(&self) -> CelestialObjectType {
        match self {
            Self::Star => CelestialObjectType::Star,
            Self::Sun => CelestialObjectType::Sun,
            Self::Moon => CelestialObjectType::Moon,
            Self::Mercury
            | Self::Venus
            | Self::Earth
            | Self::Mars
            | Self::Jupiter
            | Self::Saturn
            | Self::Uranus
            | Self::Neptune => CelestialObjectType::Planet,
        }
    }

    /// English name; stars have individual names so this is a generic label
    pub fn name(&self) -> &'static str {
        match self {
            Self::Star => "Star",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Earth => "Earth",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Sun => "Sun",
            Self::Moon => "Moon",
        }
    }
}

/// Any object that can be placed on the sky
#[derive(Debug, Clone, Serialize)]
pub enum CelestialObject {
    Star(Arc<Star>),
    Sun(Sun),
    Moon(Moon),
    Planet(Planet),
}

impl CelestialObject {
    pub fn name(&self) -> &str {
        match self {
            CelestialObject::Star(star) => star.name(),
            CelestialObject::Sun(sun) => sun.name(),
            CelestialObject::Moon(moon) => moon.name(),
            CelestialObject::Planet(planet) => planet.name(),
        }
    }

    pub fn equatorial_pos(&self) -> EquatorialCoordinates {
        match self {
            CelestialObject::Star(star) => star.equatorial_pos(),
            CelestialObject::Sun(sun) => sun.equatorial_pos(),
            CelestialObject::Moon(moon) => moon.equatorial_pos(),
            CelestialObject::Planet(planet) => planet.equatorial_pos(),
        }
    }

    /// Attribute of the given kind, if this object carries one
    pub fn attribute(&self, kind: AttributeKind) -> Option<&FloatAttribute> {
        match self {
            CelestialObject::Star(star) => star.attribute(kind),
            CelestialObject::Sun(sun) => sun.attribute(kind),
            CelestialObject::Moon(moon) => moon.attribute(kind),
            CelestialObject::Planet(planet) => planet.attribute(kind),
        }
    }

    /// All attributes this object carries, in display order
    pub fn attributes(&self) -> impl Iterator<Item = &FloatAttribute> + '_ {
        AttributeKind::ALL
            .into_iter()
            .filter_map(move |kind| self.attribute(kind))
    }

    /// Angular size in radians, 0 for point-like objects
    pub fn angular_size(&self) -> f64 {
        self.attribute_value(AttributeKind::AngularSize)
    }

    /// Apparent magnitude, 0 when the object has none
    pub fn magnitude(&self) -> f64 {
        self.attribute_value(AttributeKind::Magnitude)
    }

    fn attribute_value(&self, kind: AttributeKind) -> f64 {
        self.attribute(kind)
            .map_or(0.0, |attribute| f64::from(attribute.value()))
    }

    pub fn object_type(&self) -> CelestialObjectType {
        self.identifier().object_type()
    }

    pub fn identifier(&self) -> CelestialObjectIdentifier {
        match self {
            CelestialObject::Star(_) => CelestialObjectIdentifier::Star,
            CelestialObject::Sun(_) => CelestialObjectIdentifier::Sun,
            CelestialObject::Moon(_) => CelestialObjectIdentifier::Moon,
            CelestialObject::Planet(planet) => planet.identifier(),
        }
    }

    /// Short description for display, the name except for the Moon which adds its phase
    pub fn info(&self) -> String {
        match self {
            CelestialObject::Moon(moon) => moon.info(),
            other => other.name().to_string(),
        }
    }
}

impl fmt::Display for CelestialObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.info())
    }
}

impl From<Arc<Star>> for CelestialObject {
    fn from(star: Arc<Star>) -> Self {
        CelestialObject::Star(star)
    }
}

impl From<Sun> for CelestialObject {
    fn from(sun: Sun) -> Self {
        CelestialObject::Sun(sun)
    }
}

impl From<Moon> for CelestialObject {
    fn from(moon: Moon) -> Self {
        CelestialObject::Moon(moon)
    }
}

impl From<Planet> for CelestialObject {
    fn from(planet: Planet) -> Self {
        CelestialObject::Planet(planet)
    }
}
