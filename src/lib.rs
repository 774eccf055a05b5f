//! Skychart: the computational core of a planetarium
//!
//! For a given instant and observer location this crate computes the apparent
//! position of the Sun, the Moon, the planets and a catalogue of stars, projects
//! them stereographically onto a plane and answers nearest-object queries.
//!
//! The position models are low-precision closed-form approximations meant for
//! visual use over a human timescale.

use thiserror::Error;

pub mod catalogs;
pub mod celestial;
pub mod config;
pub mod constants;
pub mod coordinates;
pub mod math;
pub mod models;
pub mod sky;
pub mod time;

// Re-export commonly used types
pub use catalogs::{StarCatalogue, StarCatalogueBuilder};
pub use celestial::{CelestialObject, CelestialObjectIdentifier, CelestialObjectType};
pub use config::SkyConfig;
pub use coordinates::{
    CartesianCoordinates, EclipticCoordinates, EquatorialCoordinates, GeographicCoordinates,
    HorizontalCoordinates,
};
pub use sky::ObservedSky;
pub use time::Epoch;

/// Main error type for the skychart library
#[derive(Debug, Error)]
pub enum SkyError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Catalogue consistency error: {0}")]
    CatalogueConsistency(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for skychart operations
pub type Result<T> = std::result::Result<T, SkyError>;
