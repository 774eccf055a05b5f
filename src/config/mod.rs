//! Observation settings stored as JSON
//!
//! Every field has a default, so a configuration file only needs the values
//! it changes:
//!
//! ```json
//! { "observer_lat_deg": -33.9, "field_of_view_deg": 100.0 }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::coordinates::{GeographicCoordinates, HorizontalCoordinates, StereographicProjection};
use crate::math::angle;
use crate::{Result, SkyError};

/// Where the observer stands, where they look, and which catalogue files to read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyConfig {
    /// Observer longitude, degrees east
    pub observer_lon_deg: f64,
    /// Observer latitude, degrees north
    pub observer_lat_deg: f64,
    /// Azimuth of the projection centre, degrees
    pub center_az_deg: f64,
    /// Altitude of the projection centre, degrees
    pub center_alt_deg: f64,
    /// Horizontal field of view, degrees
    pub field_of_view_deg: f64,
    /// HYG database CSV, optionally gzipped
    pub hyg_path: PathBuf,
    /// Asterism definitions; skipped when absent
    pub asterism_path: Option<PathBuf>,
    /// Nearest-object search radius, in percent of the field of view extent
    pub search_radius: f64,
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self {
            observer_lon_deg: 6.57,
            observer_lat_deg: 46.52,
            center_az_deg: 180.0,
            center_alt_deg: 15.0,
            field_of_view_deg: 70.0,
            hyg_path: PathBuf::from("data/hygdata_v3.csv"),
            asterism_path: Some(PathBuf::from("data/asterisms.txt")),
            search_radius: 10.0,
        }
    }
}

impl SkyConfig {
    /// Load from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Save as pretty-printed JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn with_observer(mut self, lon_deg: f64, lat_deg: f64) -> Self {
        self.observer_lon_deg = lon_deg;
        self.observer_lat_deg = lat_deg;
        self
    }

    pub fn with_center(mut self, az_deg: f64, alt_deg: f64) -> Self {
        self.center_az_deg = az_deg;
        self.center_alt_deg = alt_deg;
        self
    }

    pub fn with_field_of_view(mut self, fov_deg: f64) -> Self {
        self.field_of_view_deg = fov_deg;
        self
    }

    pub fn with_hyg_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.hyg_path = path.into();
        self
    }

    pub fn with_asterism_path(mut self, path: Option<PathBuf>) -> Self {
        self.asterism_path = path;
        self
    }

    pub fn with_search_radius(mut self, radius: f64) -> Self {
        self.search_radius = radius;
        self
    }

    /// Observer location, validated
    pub fn observer(&self) -> Result<GeographicCoordinates> {
        GeographicCoordinates::of_deg(self.observer_lon_deg, self.observer_lat_deg)
            .map_err(|e| SkyError::Config(format!("observer location: {}", e)))
    }

    /// Projection centre, validated
    pub fn projection_center(&self) -> Result<HorizontalCoordinates> {
        HorizontalCoordinates::of_deg(self.center_az_deg, self.center_alt_deg)
            .map_err(|e| SkyError::Config(format!("projection centre: {}", e)))
    }

    /// Projection centred on [`projection_center`](Self::projection_center)
    pub fn projection(&self) -> Result<StereographicProjection> {
        Ok(StereographicProjection::new(self.projection_center()?))
    }

    /// Search radius in projection plane units
    pub fn search_radius_extent(&self) -> Result<f64> {
        Ok(self.search_radius / 100.0 * self.field_of_view_extent()?)
    }

    /// Plane distance spanned by the field of view
    pub fn field_of_view_extent(&self) -> Result<f64> {
        if !(self.field_of_view_deg > 0.0 && self.field_of_view_deg < 360.0) {
            return Err(SkyError::Config(format!(
                "field of view must be in (0°, 360°), got {}°",
                self.field_of_view_deg
            )));
        }
        let projection = self.projection()?;
        Ok(projection.apply_to_angle(angle::of_deg(self.field_of_view_deg)))
    }
}
