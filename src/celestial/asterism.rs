//! Asterisms: ordered groups of catalogue stars
//!
//! Stars are shared through `Arc`, and an asterism refers to the very star
//! values of the catalogue it was built against. Equality and hashing are by
//! identity: two asterisms are equal only when one is a clone of the other.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::Star;
use crate::math::check_argument;
use crate::Result;

/// A non-empty ordered list of stars
#[derive(Debug, Clone)]
pub struct Asterism {
    stars: Arc<[Arc<Star>]>,
}

impl Asterism {
    /// Fails when `stars` is empty
    pub fn new(stars: Vec<Arc<Star>>) -> Result<Self> {
        check_argument(!stars.is_empty(), || "An asterism needs at least one star".to_string())?;
        Ok(Self {
            stars: stars.into(),
        })
    }

    /// Stars in drawing order
    pub fn stars(&self) -> &[Arc<Star>] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Whether one of the stars has this name, ignoring case
    pub fn contains_star_named(&self, name: &str) -> bool {
        self.stars.iter().any(|s| s.name().eq_ignore_ascii_case(name))
    }
}

impl PartialEq for Asterism {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.stars, &other.stars)
    }
}

impl Eq for Asterism {}

impl Hash for Asterism {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.stars) as *const Arc<Star> as usize).hash(state);
    }
}
