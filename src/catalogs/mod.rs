//! Star catalogues and the loaders that fill them
//!
//! A [`StarCatalogue`] is an immutable list of stars together with the
//! asterisms drawn between them. It is assembled through a
//! [`StarCatalogueBuilder`], into which any number of [`Loader`]s append
//! their entries:
//!
//! ```rust,no_run
//! use skychart::catalogs::{AsterismLoader, HygDatabaseLoader, StarCatalogueBuilder};
//!
//! let mut builder = StarCatalogueBuilder::new();
//! builder
//!     .load_from_path("data/hygdata_v3.csv.gz", &HygDatabaseLoader)?
//!     .load_from_path("data/asterisms.txt", &AsterismLoader)?;
//! let catalogue = builder.build()?;
//! println!("{} stars", catalogue.len());
//! # Ok::<(), skychart::SkyError>(())
//! ```
//!
//! Asterisms refer to catalogue stars by identity, so stars must be loaded
//! before the asterisms that use them.

pub mod asterisms;
pub mod hyg;

pub use asterisms::AsterismLoader;
pub use hyg::HygDatabaseLoader;

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use crate::celestial::{Asterism, Star};
use crate::{Result, SkyError};

/// A source of catalogue entries
pub trait Loader {
    /// Read entries from `reader` and append them to `builder`.
    ///
    /// The input is consumed in a single forward pass. Read errors are
    /// returned unchanged; the builder may then hold a partial load.
    fn load(&self, reader: &mut dyn BufRead, builder: &mut StarCatalogueBuilder) -> Result<()>;
}

/// Stars and the asterisms drawn between them
#[derive(Debug, Clone)]
pub struct StarCatalogue {
    stars: Vec<Arc<Star>>,
    asterisms: Vec<Asterism>,
    asterism_indices: HashMap<Asterism, Vec<usize>>,
}

impl StarCatalogue {
    /// Create a catalogue.
    ///
    /// Fails when an asterism contains a star that is not, by identity, one of
    /// `stars`. An equal but distinct star value does not count.
    pub fn new(stars: Vec<Arc<Star>>, asterisms: Vec<Asterism>) -> Result<Self> {
        let index_of: HashMap<*const Star, usize> = stars
            .iter()
            .enumerate()
            .map(|(i, star)| (Arc::as_ptr(star), i))
            .collect();

        let mut asterism_indices = HashMap::with_capacity(asterisms.len());
        let mut unique = Vec::with_capacity(asterisms.len());
        for asterism in asterisms {
            if asterism_indices.contains_key(&asterism) {
                continue;
            }
            let indices = asterism
                .stars()
                .iter()
                .map(|star| {
                    index_of.get(&Arc::as_ptr(star)).copied().ok_or_else(|| {
                        SkyError::CatalogueConsistency(format!(
                            "Asterism star {} (HIP {}) is not in the catalogue",
                            star.name(),
                            star.hipparcos_id()
                        ))
                    })
                })
                .collect::<Result<Vec<usize>>>()?;
            asterism_indices.insert(asterism.clone(), indices);
            unique.push(asterism);
        }

        log::debug!(
            "Catalogue of {} stars and {} asterisms",
            stars.len(),
            unique.len()
        );
        Ok(Self {
            stars,
            asterisms: unique,
            asterism_indices,
        })
    }

    /// Start an empty builder
    pub fn builder() -> StarCatalogueBuilder {
        StarCatalogueBuilder::new()
    }

    /// Stars in load order
    pub fn stars(&self) -> &[Arc<Star>] {
        &self.stars
    }

    /// Asterisms in load order
    pub fn asterisms(&self) -> &[Asterism] {
        &self.asterisms
    }

    /// Positions in [`stars`](Self::stars) of the stars of `asterism`, in
    /// drawing order. Fails for an asterism of another catalogue.
    pub fn asterism_indices(&self, asterism: &Asterism) -> Result<&[usize]> {
        self.asterism_indices
            .get(asterism)
            .map(Vec::as_slice)
            .ok_or_else(|| {
                SkyError::InvalidArgument("Asterism is not part of this catalogue".to_string())
            })
    }

    /// First star with this name, ignoring ASCII case
    pub fn star_named(&self, name: &str) -> Option<&Arc<Star>> {
        self.stars.iter().find(|s| s.name().eq_ignore_ascii_case(name))
    }

    /// First star with this Hipparcos number; 0 never matches
    pub fn star_with_hipparcos_id(&self, hipparcos_id: u32) -> Option<&Arc<Star>> {
        if hipparcos_id == 0 {
            return None;
        }
        self.stars.iter().find(|s| s.hipparcos_id() == hipparcos_id)
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

/// Staging area for a [`StarCatalogue`]
#[derive(Debug, Default)]
pub struct StarCatalogueBuilder {
    stars: Vec<Arc<Star>>,
    asterisms: Vec<Asterism>,
}

impl StarCatalogueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a star
    pub fn add_star(&mut self, star: impl Into<Arc<Star>>) -> &mut Self {
        self.stars.push(star.into());
        self
    }

    /// Append an asterism; its stars should already have been added
    pub fn add_asterism(&mut self, asterism: Asterism) -> &mut Self {
        self.asterisms.push(asterism);
        self
    }

    /// Stars added so far
    pub fn stars(&self) -> &[Arc<Star>] {
        &self.stars
    }

    /// Asterisms added so far
    pub fn asterisms(&self) -> &[Asterism] {
        &self.asterisms
    }

    /// Run `loader` over `input`
    pub fn load_from<R, L>(&mut self, input: R, loader: &L) -> Result<&mut Self>
    where
        R: Read,
        L: Loader + ?Sized,
    {
        let mut reader = BufReader::new(input);
        loader.load(&mut reader, self)?;
        Ok(self)
    }

    /// Run `loader` over a file, decompressing it when its name ends in `.gz`
    pub fn load_from_path<P, L>(&mut self, path: P, loader: &L) -> Result<&mut Self>
    where
        P: AsRef<Path>,
        L: Loader + ?Sized,
    {
        let path = path.as_ref();
        let file = File::open(path)?;
        log::debug!("Loading catalogue entries from {}", path.display());

        let is_gzipped = path.extension().is_some_and(|ext| ext == "gz");
        let mut reader: Box<dyn BufRead> = if is_gzipped {
            Box::new(BufReader::new(flate2::read::GzDecoder::new(BufReader::new(file))))
        } else {
            Box::new(BufReader::new(file))
        };
        loader.load(&mut reader, self)?;
        Ok(self)
    }

    /// Move the staged entries into a catalogue
    pub fn build(self) -> Result<StarCatalogue> {
        StarCatalogue::new(self.stars, self.asterisms)
    }
}
