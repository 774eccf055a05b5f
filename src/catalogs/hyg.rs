//! Loader for the HYG star database in CSV form
//!
//! The first line is a header and is ignored. Each following line holds one
//! star in the fixed column layout of HYG v3. Empty fields take defaults: an
//! id of 0, a magnitude or color index of 0, and a name built from the Bayer
//! designation (or `?`) and the constellation, e.g. `"Alp Ori"`.
//!
//! A row that cannot be parsed, or that describes an invalid star, aborts the
//! load with an error naming the line.

use std::io::BufRead;
use std::str::FromStr;

use super::{Loader, StarCatalogueBuilder};
use crate::celestial::Star;
use crate::coordinates::EquatorialCoordinates;
use crate::{Result, SkyError};

/// Zero-based positions of the columns read by the loader
mod column {
    pub const HIP: usize = 1;
    pub const PROPER: usize = 6;
    pub const MAG: usize = 13;
    pub const CI: usize = 16;
    pub const RARAD: usize = 23;
    pub const DECRAD: usize = 24;
    pub const BAYER: usize = 27;
    pub const CON: usize = 29;
}

/// Reads stars from HYG database CSV files
#[derive(Debug, Clone, Copy, Default)]
pub struct HygDatabaseLoader;

impl HygDatabaseLoader {
    /// Parse one data row into a star
    pub fn parse_row(line: &str) -> Result<Star> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() <= column::CON {
            return Err(SkyError::Parse(format!(
                "Expected at least {} columns, found {}",
                column::CON + 1,
                fields.len()
            )));
        }

        let hipparcos_id = parse_or(fields[column::HIP], 0u32)?;
        let name = match fields[column::PROPER] {
            "" => {
                let bayer = match fields[column::BAYER] {
                    "" => "?",
                    bayer => bayer,
                };
                format!("{} {}", bayer, fields[column::CON])
            }
            proper => proper.to_string(),
        };

        let ra: f64 = parse(fields[column::RARAD])?;
        let dec: f64 = parse(fields[column::DECRAD])?;
        let magnitude = parse_or(fields[column::MAG], 0f32)?;
        let color_index = parse_or(fields[column::CI], 0f32)?;

        Star::new(
            hipparcos_id,
            name,
            EquatorialCoordinates::of(ra, dec)?,
            magnitude,
            color_index,
        )
    }
}

fn parse<T: FromStr>(field: &str) -> Result<T> {
    field
        .trim()
        .parse()
        .map_err(|_| SkyError::Parse(format!("Invalid number {:?}", field)))
}

fn parse_or<T: FromStr>(field: &str, default: T) -> Result<T> {
    if field.is_empty() {
        Ok(default)
    } else {
        parse(field)
    }
}

impl Loader for HygDatabaseLoader {
    fn load(&self, reader: &mut dyn BufRead, builder: &mut StarCatalogueBuilder) -> Result<()> {
        let mut loaded = 0usize;

        for (number, line) in reader.lines().enumerate().skip(1) {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let star = Self::parse_row(&line).map_err(|e| at_line(e, number + 1))?;
            builder.add_star(star);
            loaded += 1;
        }

        log::info!("Loaded {} stars from HYG data", loaded);
        Ok(())
    }
}

/// Prefix the message of a row error with its one-based line number
fn at_line(error: SkyError, line: usize) -> SkyError {
    match error {
        SkyError::Parse(msg) => SkyError::Parse(format!("HYG line {}: {}", line, msg)),
        SkyError::InvalidArgument(msg) => {
            SkyError::InvalidArgument(format!("HYG line {}: {}", line, msg))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "id,hip,hd,hr,gl,bf,proper,ra,dec,dist,pmra,pmdec,rv,mag,absmag,spect,ci,x,y,z,vx,vy,vz,rarad,decrad,pmrarad,pmdecrad,bayer,flam,con,comp,comp_primary,base,lum,var,var_min,var_max";

    fn row(hip: &str, proper: &str, mag: &str, ci: &str, bayer: &str, con: &str) -> String {
        format!(
            "1,{hip},,,,,{proper},5.24,-8.2,264.55,1.31,0.5,20.7,{mag},-6.933,B8I...,{ci},1,2,3,0,0,0,1.372,-0.143,0,0,{bayer},19,{con},1,1,,1,,,"
        )
    }

    fn load(text: &str) -> StarCatalogueBuilder {
        let mut builder = StarCatalogueBuilder::new();
        builder.load_from(Cursor::new(text.to_string()), &HygDatabaseLoader).unwrap();
        builder
    }

    #[test]
    fn test_full_row() {
        let line = row("24436", "Rigel", "0.18", "-0.03", "Bet", "Ori");
        let star = HygDatabaseLoader::parse_row(&line).unwrap();
        assert_eq!(star.hipparcos_id(), 24436);
        assert_eq!(star.name(), "Rigel");
        assert_eq!(star.magnitude(), 0.18);
        assert_eq!(star.color_temperature(), 10515);
        assert_eq!(star.equatorial_pos().ra(), 1.372);
        assert_eq!(star.equatorial_pos().dec(), -0.143);
    }

    #[test]
    fn test_defaults_for_empty_fields() {
        let star = HygDatabaseLoader::parse_row(&row("", "", "", "", "Gam", "Ori")).unwrap();
        assert_eq!(star.hipparcos_id(), 0);
        assert_eq!(star.name(), "Gam Ori");
        assert_eq!(star.magnitude(), 0.0);

        let star = HygDatabaseLoader::parse_row(&row("12", "", "1.0", "0.5", "", "Cru")).unwrap();
        assert_eq!(star.name(), "? Cru");
    }

    #[test]
    fn test_header_and_blank_lines_are_ignored() {
        let text = format!(
            "{}\n{}\n\n{}\n\n\n",
            HEADER,
            row("24436", "Rigel", "0.18", "-0.03", "Bet", "Ori"),
            row("27989", "Betelgeuse", "0.45", "1.5", "Alp", "Ori")
        );
        let builder = load(&text);
        let names: Vec<&str> = builder.stars().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Rigel", "Betelgeuse"]);
    }

    #[test]
    fn test_invalid_star_aborts_the_load() {
        let text = format!(
            "{}\n{}\n{}\n",
            HEADER,
            row("1", "Good", "1.0", "0.1", "", "And"),
            row("2", "Too red", "1.0", "9.5", "", "And"),
        );
        let mut builder = StarCatalogueBuilder::new();
        let err = builder
            .load_from(Cursor::new(text), &HygDatabaseLoader)
            .unwrap_err();
        match err {
            SkyError::InvalidArgument(msg) => assert!(msg.starts_with("HYG line 3:"), "{}", msg),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_malformed_row_aborts_the_load() {
        let text = format!("{}\nnot,a,star\n", HEADER);
        let mut builder = StarCatalogueBuilder::new();
        let err = builder
            .load_from(Cursor::new(text), &HygDatabaseLoader)
            .unwrap_err();
        assert!(matches!(err, SkyError::Parse(msg) if msg.starts_with("HYG line 2:")));
    }

    #[test]
    fn test_only_header() {
        assert!(load(HEADER).stars().is_empty());
        assert!(load("").stars().is_empty());
    }
}
