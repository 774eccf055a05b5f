//! Stereographic projection of the horizontal sphere onto a tangent plane
//!
//! The projection is conformal, so small shapes on the sky keep their form,
//! and parallels of altitude map to circles. Points at distance 2 from the
//! origin lie a quarter turn away from the centre.

use std::fmt;

use super::{CartesianCoordinates, CoordinateConversion, HorizontalCoordinates};
use crate::math::angle;

/// Stereographic projection centred on a horizontal direction
#[derive(Debug, Clone, Copy)]
pub struct StereographicProjection {
    center: HorizontalCoordinates,
    sin_center_alt: f64,
    cos_center_alt: f64,
}

impl StereographicProjection {
    /// Projection whose tangent point is `center`
    pub fn new(center: HorizontalCoordinates) -> Self {
        let (sin_center_alt, cos_center_alt) = center.alt().sin_cos();
        Self {
            center,
            sin_center_alt,
            cos_center_alt,
        }
    }

    /// Direction the projection is centred on
    pub fn center(&self) -> HorizontalCoordinates {
        self.center
    }

    /// Centre of the circle the parallel through `hor` maps to.
    ///
    /// The ordinate is infinite when the parallel maps to a straight line.
    pub fn circle_center_for_parallel(&self, hor: &HorizontalCoordinates) -> CartesianCoordinates {
        CartesianCoordinates::of(0.0, self.cos_center_alt / (hor.alt().sin() + self.sin_center_alt))
    }

    /// Radius of the circle the parallel through `hor` maps to; may be negative
    pub fn circle_radius_for_parallel(&self, hor: &HorizontalCoordinates) -> f64 {
        hor.alt().cos() / (hor.alt().sin() + self.sin_center_alt)
    }

    /// Projected diameter of a disc of angular size `rad` centred on the tangent point
    pub fn apply_to_angle(&self, rad: f64) -> f64 {
        2.0 * (rad / 4.0).tan()
    }

    /// Horizontal coordinates of the sky point projected to `xy`
    pub fn inverse_apply(&self, xy: &CartesianCoordinates) -> HorizontalCoordinates {
        let (x, y) = (xy.x(), xy.y());
        if x == 0.0 && y == 0.0 {
            return self.center;
        }

        // sin(c)/ρ and cos(c) expressed through ρ² only
        let norm_squared = x * x + y * y;
        let sin_c_over_rho = 2.0 / (norm_squared + 1.0);
        let cos_c = (1.0 - norm_squared) / (norm_squared + 1.0);

        let az = (x * sin_c_over_rho)
            .atan2(self.cos_center_alt * cos_c - y * self.sin_center_alt * sin_c_over_rho)
            + self.center.az();
        let alt = (cos_c * self.sin_center_alt + y * sin_c_over_rho * self.cos_center_alt)
            .clamp(-1.0, 1.0)
            .asin();

        HorizontalCoordinates::from_normalized(angle::normalize_positive(az), alt)
    }
}

impl CoordinateConversion<HorizontalCoordinates, CartesianCoordinates> for StereographicProjection {
    fn apply(&self, hor: HorizontalCoordinates) -> CartesianCoordinates {
        let (sin_alt, cos_alt) = hor.alt().sin_cos();
        let (sin_delta_az, cos_delta_az) = (hor.az() - self.center.az()).sin_cos();

        let d = 1.0
            / (1.0 + sin_alt * self.sin_center_alt + cos_alt * self.cos_center_alt * cos_delta_az);

        CartesianCoordinates::of(
            d * cos_alt * sin_delta_az,
            d * (sin_alt * self.cos_center_alt - cos_alt * self.sin_center_alt * cos_delta_az),
        )
    }
}

impl fmt::Display for StereographicProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StereographicProjection: c=({:.4}°, {:.4}°)",
            self.center.az_deg(),
            self.center.alt_deg()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TAU;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn hor(az: f64, alt: f64) -> HorizontalCoordinates {
        HorizontalCoordinates::of(az, alt).unwrap()
    }

    fn assert_point(actual: CartesianCoordinates, x: f64, y: f64) {
        assert_relative_eq!(actual.x(), x, epsilon = 1e-9);
        assert_relative_eq!(actual.y(), y, epsilon = 1e-9);
    }

    #[test]
    fn test_apply_known_values() {
        let projection = StereographicProjection::new(hor(0.0, 0.0));
        assert_point(projection.apply(hor(0.0, 0.0)), 0.0, 0.0);
        assert_point(
            projection.apply(hor(3.14159265358, 1.5)),
            7.454747877686338e-13,
            1.0734261485493775,
        );
        assert_point(
            projection.apply(hor(1.02154, 1.254628991)),
            0.22815831277444687,
            0.8177043360380242,
        );

        let projection = StereographicProjection::new(hor(3.14159265358, 1.50215));
        assert_point(
            projection.apply(hor(0.9548734, 0.014257852)),
            -0.837427342015761,
            0.5923149401203371,
        );
    }

    #[test]
    fn test_inverse_apply_center_is_exact() {
        let center = hor(1.2, -0.3);
        let back =
            StereographicProjection::new(center).inverse_apply(&CartesianCoordinates::of(0.0, 0.0));
        assert_eq!(back.az(), center.az());
        assert_eq!(back.alt(), center.alt());
    }

    #[test]
    fn test_circles_for_parallels() {
        let projection = StereographicProjection::new(hor(0.0, 0.0));
        let parallel = hor(3.14159265358, 1.5);
        assert_relative_eq!(
            projection.circle_center_for_parallel(&parallel).y(),
            1.002511304,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            projection.circle_radius_for_parallel(&parallel),
            0.070914844,
            epsilon = 1e-9
        );

        let below = hor(0.001050408, -1.5);
        assert_relative_eq!(
            projection.circle_radius_for_parallel(&below),
            -0.070914844,
            epsilon = 1e-9
        );

        let horizon = hor(0.0, 0.0);
        assert_eq!(projection.circle_center_for_parallel(&horizon).y(), f64::INFINITY);

        let projection = StereographicProjection::new(hor(2.545219642, -0.8525865));
        let parallel = hor(0.9548734, -1.50500315);
        assert_relative_eq!(
            projection.circle_center_for_parallel(&parallel).y(),
            -0.375845174,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            projection.circle_radius_for_parallel(&parallel),
            -0.037551359,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_apply_to_angle() {
        let projection = StereographicProjection::new(hor(0.0, 0.0));
        assert_relative_eq!(
            projection.apply_to_angle(angle::of_deg(0.5)),
            0.004363330,
            epsilon = 1e-9
        );
        assert_eq!(projection.apply_to_angle(0.0), 0.0);
    }

    #[test]
    fn test_round_trips() {
        let mut rng = StdRng::seed_from_u64(5_318);
        for _ in 0..200 {
            let center = hor(rng.gen_range(0.0..TAU), rng.gen_range(-1.4..1.4));
            let projection = StereographicProjection::new(center);

            // sky points within 120° of the centre, away from the poles
            let point = loop {
                let candidate = hor(rng.gen_range(0.0..TAU), rng.gen_range(-1.4..1.4));
                if candidate.angular_distance_to(&center) < TAU / 3.0 {
                    break candidate;
                }
            };
            let back = projection.inverse_apply(&projection.apply(point));
            let az_error = angle::normalize_positive(back.az() - point.az());
            assert!(az_error.min(TAU - az_error) < 1e-9);
            assert_relative_eq!(back.alt(), point.alt(), epsilon = 1e-9);

            let xy = CartesianCoordinates::of(rng.gen_range(-3.0..3.0), rng.gen_range(-3.0..3.0));
            let again = projection.apply(projection.inverse_apply(&xy));
            assert_point(again, xy.x(), xy.y());
        }
    }

    #[test]
    fn test_display() {
        let projection =
            StereographicProjection::new(HorizontalCoordinates::of_deg(180.0, 45.0).unwrap());
        assert_eq!(projection.to_string(), "StereographicProjection: c=(180.0000°, 45.0000°)");
    }
}
