//! Payloads of the individual celestial object variants

use serde::Serialize;

use super::{AttributeKind, CelestialObjectIdentifier, FloatAttribute};
use crate::constants::SUN_MAGNITUDE;
use crate::coordinates::{EclipticCoordinates, EquatorialCoordinates};
use crate::math::{check_in_interval, ClosedInterval};
use crate::Result;

const COLOR_INDEX_RANGE: ClosedInterval = ClosedInterval::from_bounds(-0.5, 5.5);

/// A catalogue star
#[derive(Debug, Clone, Serialize)]
pub struct Star {
    hipparcos_id: u32,
    name: String,
    equatorial_pos: EquatorialCoordinates,
    magnitude: FloatAttribute,
    color_temperature: u32,
}

impl Star {
    /// Create a star.
    ///
    /// A Hipparcos id of 0 means the star has none. Fails when the B-V color
    /// index lies outside `[-0.5, 5.5]`.
    pub fn new(
        hipparcos_id: u32,
        name: impl Into<String>,
        equatorial_pos: EquatorialCoordinates,
        magnitude: f32,
        color_index: f32,
    ) -> Result<Self> {
        let color_index = check_in_interval(&COLOR_INDEX_RANGE, f64::from(color_index))?;
        // always positive on the allowed color index range
        let color_temperature = (4600.0
            * (1.0 / (0.92 * color_index + 1.7) + 1.0 / (0.92 * color_index + 0.62)))
            as u32;

        Ok(Self {
            hipparcos_id,
            name: name.into(),
            equatorial_pos,
            magnitude: FloatAttribute::magnitude(magnitude),
            color_temperature,
        })
    }

    /// Hipparcos catalogue number, 0 when unknown
    pub fn hipparcos_id(&self) -> u32 {
        self.hipparcos_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn equatorial_pos(&self) -> EquatorialCoordinates {
        self.equatorial_pos
    }

    pub fn magnitude(&self) -> f32 {
        self.magnitude.value()
    }

    /// Effective temperature in kelvins, from the Ballesteros formula
    pub fn color_temperature(&self) -> u32 {
        self.color_temperature
    }

    pub(super) fn attribute(&self, kind: AttributeKind) -> Option<&FloatAttribute> {
        (kind == AttributeKind::Magnitude).then_some(&self.magnitude)
    }
}

/// The Sun as seen from the Earth at some instant
#[derive(Debug, Clone, Serialize)]
pub struct Sun {
    ecliptic_pos: EclipticCoordinates,
    equatorial_pos: EquatorialCoordinates,
    angular_size: FloatAttribute,
    magnitude: FloatAttribute,
    mean_anomaly: f32,
}

impl Sun {
    pub fn new(
        ecliptic_pos: EclipticCoordinates,
        equatorial_pos: EquatorialCoordinates,
        angular_size: f32,
        mean_anomaly: f32,
    ) -> Result<Self> {
        Ok(Self {
            ecliptic_pos,
            equatorial_pos,
            angular_size: FloatAttribute::angular_size(angular_size)?,
            magnitude: FloatAttribute::magnitude(SUN_MAGNITUDE),
            mean_anomaly,
        })
    }

    pub fn name(&self) -> &'static str {
        "Sun"
    }

    pub fn ecliptic_pos(&self) -> EclipticCoordinates {
        self.ecliptic_pos
    }

    pub fn equatorial_pos(&self) -> EquatorialCoordinates {
        self.equatorial_pos
    }

    pub fn angular_size(&self) -> f32 {
        self.angular_size.value()
    }

    pub fn magnitude(&self) -> f32 {
        self.magnitude.value()
    }

    /// Mean anomaly in radians, not reduced to a single turn
    pub fn mean_anomaly(&self) -> f32 {
        self.mean_anomaly
    }

    pub(super) fn attribute(&self, kind: AttributeKind) -> Option<&FloatAttribute> {
        match kind {
            AttributeKind::AngularSize => Some(&self.angular_size),
            AttributeKind::Magnitude => Some(&self.magnitude),
            AttributeKind::Phase => None,
        }
    }
}

/// The Moon as seen from the Earth at some instant
#[derive(Debug, Clone, Serialize)]
pub struct Moon {
    equatorial_pos: EquatorialCoordinates,
    angular_size: FloatAttribute,
    phase: FloatAttribute,
}

impl Moon {
    /// Fails when the phase is outside `[0, 1]` or the angular size is negative
    pub fn new(
        equatorial_pos: EquatorialCoordinates,
        angular_size: f32,
        phase: f32,
    ) -> Result<Self> {
        Ok(Self {
            equatorial_pos,
            angular_size: FloatAttribute::angular_size(angular_size)?,
            phase: FloatAttribute::phase(phase)?,
        })
    }

    pub fn name(&self) -> &'static str {
        "Moon"
    }

    pub fn equatorial_pos(&self) -> EquatorialCoordinates {
        self.equatorial_pos
    }

    pub fn angular_size(&self) -> f32 {
        self.angular_size.value()
    }

    /// Illuminated fraction of the disc
    pub fn phase(&self) -> f32 {
        self.phase.value()
    }

    /// Name followed by the illuminated percentage, e.g. `Moon (22.5%)`
    pub fn info(&self) -> String {
        format!("{} ({:.1}%)", self.name(), f64::from(self.phase()) * 100.0)
    }

    pub(super) fn attribute(&self, kind: AttributeKind) -> Option<&FloatAttribute> {
        match kind {
            AttributeKind::AngularSize => Some(&self.angular_size),
            AttributeKind::Phase => Some(&self.phase),
            AttributeKind::Magnitude => None,
        }
    }
}

/// A planet of the solar system as seen from the Earth
#[derive(Debug, Clone, Serialize)]
pub struct Planet {
    identifier: CelestialObjectIdentifier,
    equatorial_pos: EquatorialCoordinates,
    angular_size: FloatAttribute,
    magnitude: FloatAttribute,
}

impl Planet {
    pub fn new(
        identifier: CelestialObjectIdentifier,
        equatorial_pos: EquatorialCoordinates,
        angular_size: f32,
        magnitude: f32,
    ) -> Result<Self> {
        Ok(Self {
            identifier,
            equatorial_pos,
            angular_size: FloatAttribute::angular_size(angular_size)?,
            magnitude: FloatAttribute::magnitude(magnitude),
        })
    }

    pub fn identifier(&self) -> CelestialObjectIdentifier {
        self.identifier
    }

    pub fn name(&self) -> &'static str {
        self.identifier.name()
    }

    pub fn equatorial_pos(&self) -> EquatorialCoordinates {
        self.equatorial_pos
    }

    pub fn angular_size(&self) -> f32 {
        self.angular_size.value()
    }

    pub fn magnitude(&self) -> f32 {
        self.magnitude.value()
    }

    pub(super) fn attribute(&self, kind: AttributeKind) -> Option<&FloatAttribute> {
        match kind {
            AttributeKind::AngularSize => Some(&self.angular_size),
            AttributeKind::Magnitude => Some(&self.magnitude),
            AttributeKind::Phase => None,
        }
    }
}
