//! Coordinate systems and the conversions between them
//!
//! Four spherical systems (ecliptic, equatorial, geographic, horizontal) each
//! validate their own legal ranges on construction. The plane of the
//! stereographic projection uses [`CartesianCoordinates`].

pub mod cartesian;
pub mod conversions;
pub mod spherical;
pub mod stereographic;

pub use cartesian::CartesianCoordinates;
pub use conversions::{EclipticToEquatorialConversion, EquatorialToHorizontalConversion};
pub use spherical::{
    EclipticCoordinates, EquatorialCoordinates, GeographicCoordinates, HorizontalCoordinates,
};
pub use stereographic::StereographicProjection;

/// A mapping from one coordinate system to another.
///
/// Implementors precompute whatever depends only on the instant or location
/// they were built for, so applying them to many objects is cheap.
pub trait CoordinateConversion<From, To> {
    /// Convert a single coordinate pair
    fn apply(&self, from: From) -> To;
}
