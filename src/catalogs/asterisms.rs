//! Loader for asterism definitions
//!
//! Each non-blank line lists the Hipparcos numbers of the stars of one
//! asterism, comma separated, in drawing order. The stars must already be in
//! the builder.

use std::collections::HashMap;
use std::io::BufRead;
use std::sync::Arc;

use super::{Loader, StarCatalogueBuilder};
use crate::celestial::{Asterism, Star};
use crate::{Result, SkyError};

/// Reads asterisms as lines of Hipparcos numbers
#[derive(Debug, Clone, Copy, Default)]
pub struct AsterismLoader;

impl Loader for AsterismLoader {
    fn load(&self, reader: &mut dyn BufRead, builder: &mut StarCatalogueBuilder) -> Result<()> {
        // stars without a Hipparcos number cannot be referenced
        let by_id: HashMap<u32, Arc<Star>> = builder
            .stars()
            .iter()
            .filter(|star| star.hipparcos_id() != 0)
            .map(|star| (star.hipparcos_id(), Arc::clone(star)))
            .collect();

        let mut loaded = 0usize;
        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let stars = line
                .split(',')
                .map(|field| {
                    let id: u32 = field.trim().parse().map_err(|_| {
                        SkyError::Parse(format!(
                            "Invalid Hipparcos number {:?} on asterism line {}",
                            field,
                            number + 1
                        ))
                    })?;
                    by_id.get(&id).cloned().ok_or_else(|| {
                        SkyError::CatalogueConsistency(format!(
                            "Asterism line {} refers to unknown star HIP {}",
                            number + 1,
                            id
                        ))
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            builder.add_asterism(Asterism::new(stars)?);
            loaded += 1;
        }

        log::info!("Loaded {} asterisms", loaded);
        Ok(())
    }
}
