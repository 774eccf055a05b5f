//! # Plane Coordinates
//!
//! Points of the stereographic projection plane. The unit of length is the
//! projection's own: a point at distance 2 from the origin lies 90° away from
//! the projection centre.
//!
//! Like the spherical types, `CartesianCoordinates` has no `PartialEq`.
//! Conversions to and from `nalgebra::Vector2` make vector arithmetic on
//! projected positions straightforward.
//!
//! ```rust
//! use skychart::coordinates::CartesianCoordinates;
//!
//! let a = CartesianCoordinates::of(1.0, 2.0);
//! let b = CartesianCoordinates::of(4.0, 6.0);
//! assert_eq!(a.distance_squared_to(&b), 25.0);
//! ```

use nalgebra::Vector2;
use serde::Serialize;
use std::fmt;

/// A point of the projection plane
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CartesianCoordinates {
    x: f64,
    y: f64,
}

impl CartesianCoordinates {
    /// Create a point from its abscissa and ordinate
    pub fn of(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Abscissa
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Ordinate
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Squared Euclidean distance to `other`
    #[inline]
    pub fn distance_squared_to(&self, other: &CartesianCoordinates) -> f64 {
        (other.to_vector() - self.to_vector()).norm_squared()
    }

    /// Position as a column vector
    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<f64>> for CartesianCoordinates {
    fn from(v: Vector2<f64>) -> Self {
        Self::of(v.x, v.y)
    }
}

impl fmt::Display for CartesianCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x={:.4}, y={:.4})", self.x, self.y)
    }
}
