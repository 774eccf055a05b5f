//! Low-precision position models for the bodies of the solar system
//!
//! Each model maps a number of days since [`Epoch::J2010`](crate::time::Epoch)
//! and an ecliptic to equatorial conversion for the same instant to a fully
//! populated body. Models are stateless values: the Sun and the Moon have a
//! single model each, the planets share one parameterised model.
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use skychart::coordinates::EclipticToEquatorialConversion;
//! use skychart::models::{CelestialObjectModel, SunModel};
//! use skychart::time::Epoch;
//!
//! let when = Utc.with_ymd_and_hms(2003, 7, 27, 0, 0, 0).unwrap();
//! let conversion = EclipticToEquatorialConversion::new(&when);
//! let sun = SunModel.at(Epoch::J2010.days_until(&when), &conversion).unwrap();
//! assert!((sun.equatorial_pos().ra_hr() - 8.3927).abs() < 1e-4);
//! ```

pub mod moon;
pub mod planet;
pub mod sun;

pub use moon::MoonModel;
pub use planet::PlanetModel;
pub use sun::SunModel;

use crate::coordinates::EclipticToEquatorialConversion;
use crate::Result;

/// A way of computing where a body is at a given instant
pub trait CelestialObjectModel {
    /// Body produced by the model
    type Output;

    /// Position and appearance `days_since_j2010` days after J2010.
    ///
    /// Fails only when the model leaves its domain of validity and yields
    /// coordinates or attributes out of range.
    fn at(
        &self,
        days_since_j2010: f64,
        conversion: &EclipticToEquatorialConversion,
    ) -> Result<Self::Output>;
}
