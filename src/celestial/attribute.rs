//! Displayable scalar attributes of celestial objects
//!
//! A [`FloatAttribute`] pairs a validated single-precision value with the
//! label text shown by user interfaces, e.g. `"Magnitude: 0.2"`. The text is
//! formatted once, when the attribute is created.

use std::fmt;

use serde::Serialize;

use crate::math::{check_argument, check_in_interval, ClosedInterval};
use crate::Result;

const PHASE_RANGE: ClosedInterval = ClosedInterval::from_bounds(0.0, 1.0);

/// The quantity an attribute measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AttributeKind {
    /// Illuminated fraction, in `[0, 1]`
    Phase,
    /// Apparent diameter in radians, non-negative
    AngularSize,
    /// Apparent visual magnitude
    Magnitude,
}

impl AttributeKind {
    /// Every kind, in display order
    pub const ALL: [AttributeKind; 3] = [
        AttributeKind::Phase,
        AttributeKind::AngularSize,
        AttributeKind::Magnitude,
    ];

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            AttributeKind::Phase => "Phase",
            AttributeKind::AngularSize => "Angular size",
            AttributeKind::Magnitude => "Magnitude",
        }
    }

    /// Number of decimals shown in the attribute text
    pub fn precision(&self) -> usize {
        match self {
            AttributeKind::Phase => 2,
            AttributeKind::AngularSize => 5,
            AttributeKind::Magnitude => 1,
        }
    }

    fn check(&self, value: f32) -> Result<f32> {
        match self {
            AttributeKind::Phase => {
                check_in_interval(&PHASE_RANGE, f64::from(value))?;
            }
            AttributeKind::AngularSize => {
                check_argument(value >= 0.0, || {
                    format!("Angular size must be non-negative, got {}", value)
                })?;
            }
            AttributeKind::Magnitude => {}
        }
        Ok(value)
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated attribute value with its display text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloatAttribute {
    kind: AttributeKind,
    value: f32,
    text: String,
}

impl FloatAttribute {
    /// Create an attribute of the given kind, validating its value
    pub fn new(kind: AttributeKind, value: f32) -> Result<Self> {
        let value = kind.check(value)?;
        Ok(Self {
            kind,
            value,
            text: format!("{}: {:.*}", kind.label(), kind.precision(), value),
        })
    }

    /// Phase attribute; fails outside `[0, 1]`
    pub fn phase(value: f32) -> Result<Self> {
        Self::new(AttributeKind::Phase, value)
    }

    /// Angular size attribute; fails when negative
    pub fn angular_size(value: f32) -> Result<Self> {
        Self::new(AttributeKind::AngularSize, value)
    }

    /// Magnitude attribute; any value is accepted
    pub fn magnitude(value: f32) -> Self {
        Self {
            kind: AttributeKind::Magnitude,
            value,
            text: format!("{}: {:.1}", AttributeKind::Magnitude.label(), value),
        }
    }

    pub fn kind(&self) -> AttributeKind {
        self.kind
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Label and formatted value
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for FloatAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AttributeKind::Phase, 0.226, "Phase: 0.23")]
    #[case(AttributeKind::AngularSize, 0.009_161_771, "Angular size: 0.00916")]
    #[case(AttributeKind::Magnitude, -26.7, "Magnitude: -26.7")]
    #[case(AttributeKind::Magnitude, 0.18, "Magnitude: 0.2")]
    fn test_text(#[case] kind: AttributeKind, #[case] value: f32, #[case] expected: &str) {
        let attribute = FloatAttribute::new(kind, value).unwrap();
        assert_eq!(attribute.text(), expected);
        assert_eq!(attribute.to_string(), expected);
        assert_eq!(attribute.kind(), kind);
        assert_eq!(attribute.value(), value);
    }

    #[test]
    fn test_phase_range_is_checked() {
        assert!(FloatAttribute::phase(0.0).is_ok());
        assert!(FloatAttribute::phase(1.0).is_ok());
        assert!(FloatAttribute::phase(-0.01).is_err());
        assert!(FloatAttribute::phase(1.01).is_err());
    }

    #[test]
    fn test_angular_size_must_be_non_negative() {
        assert!(FloatAttribute::angular_size(0.0).is_ok());
        assert!(FloatAttribute::angular_size(-1e-6).is_err());
    }

    #[test]
    fn test_magnitude_constructor_matches_checked_one() {
        assert_eq!(
            FloatAttribute::magnitude(1.25),
            FloatAttribute::new(AttributeKind::Magnitude, 1.25).unwrap()
        );
    }
}
