//! Sky report tool
//!
//! Computes the sky seen by an observer at one instant and prints the Sun,
//! the Moon, the planets and the brightest catalogue stars with their
//! horizontal and projected positions.
//!
//! Usage:
//!   cargo run --bin sky_report -- --config sky.json --time 2020-02-17T20:15:00Z
//!   cargo run --bin sky_report -- --hyg data/hygdata_v3.csv.gz --nearest 0.1,-0.2 --json

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use clap::Parser;
use serde_json::json;

use skychart::catalogs::{AsterismLoader, HygDatabaseLoader};
use skychart::{
    CartesianCoordinates, CelestialObject, CelestialObjectType, ObservedSky, SkyConfig,
    StarCatalogue,
};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Print the sky seen from one place at one instant
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON configuration file; defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Observation instant in RFC 3339 form; now when omitted
    #[arg(short, long)]
    time: Option<DateTime<Utc>>,

    /// Observer longitude in degrees, overriding the configuration
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Observer latitude in degrees, overriding the configuration
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    /// HYG catalogue file, overriding the configuration
    #[arg(long)]
    hyg: Option<PathBuf>,

    /// Skip loading asterisms
    #[arg(long)]
    no_asterisms: bool,

    /// Number of stars to list, brightest first
    #[arg(short = 'n', long, default_value_t = 10)]
    stars: usize,

    /// Report the object nearest to this projected point, given as x,y
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    nearest: Option<CartesianCoordinates>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

fn parse_point(s: &str) -> std::result::Result<CartesianCoordinates, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got {:?}", s))?;
    let x: f64 = x.trim().parse().map_err(|_| format!("invalid x {:?}", x))?;
    let y: f64 = y.trim().parse().map_err(|_| format!("invalid y {:?}", y))?;
    Ok(CartesianCoordinates::of(x, y))
}

fn load_config(args: &Args) -> Result<SkyConfig> {
    let mut config = match &args.config {
        Some(path) => SkyConfig::from_file(path)?,
        None => SkyConfig::default(),
    };
    if args.lon.is_some() || args.lat.is_some() {
        let lon = args.lon.unwrap_or(config.observer_lon_deg);
        let lat = args.lat.unwrap_or(config.observer_lat_deg);
        config = config.with_observer(lon, lat);
    }
    if let Some(hyg) = &args.hyg {
        config = config.with_hyg_path(hyg);
    }
    if args.no_asterisms {
        config = config.with_asterism_path(None);
    }
    Ok(config)
}

fn load_catalogue(config: &SkyConfig) -> skychart::Result<StarCatalogue> {
    let mut builder = StarCatalogue::builder();
    builder.load_from_path(&config.hyg_path, &HygDatabaseLoader)?;
    if let Some(path) = &config.asterism_path {
        if path.exists() {
            builder.load_from_path(path, &AsterismLoader)?;
        } else {
            log::warn!("Asterism file {} not found, skipping", path.display());
        }
    }
    builder.build()
}

/// One row of the report
struct Entry {
    object: CelestialObject,
    position: CartesianCoordinates,
}

fn entries(sky: &ObservedSky, star_count: usize) -> Vec<Entry> {
    let mut stars: Vec<_> = sky.stars().iter().collect();
    stars.sort_by(|a, b| a.magnitude().total_cmp(&b.magnitude()));

    let mut objects: Vec<CelestialObject> =
        vec![sky.sun().clone().into(), sky.moon().clone().into()];
    objects.extend(sky.planets().iter().cloned().map(CelestialObject::from));
    objects.extend(stars.into_iter().take(star_count).cloned().map(CelestialObject::from));

    objects
        .into_iter()
        .map(|object| Entry {
            position: sky.compute_position(&object),
            object,
        })
        .collect()
}

fn print_text(
    sky: &ObservedSky,
    when: &DateTime<Utc>,
    config: &SkyConfig,
    entries: &[Entry],
) -> Result<()> {
    println!("Sky at {} from {}", when.to_rfc3339(), config.observer()?);
    println!("{}", sky.projection());
    println!("-------------------------------------------------------");

    for entry in entries {
        let hor = sky.horizontal_position(entry.object.equatorial_pos());
        let direction = hor.az_octant_name("N", "E", "S", "W");
        println!(
            "{:<16} {:<8} {} {:>2}  {}  {}",
            entry.object.to_string(),
            format!("{:?}", entry.object.object_type()),
            hor,
            direction,
            entry.position,
            entry.object.info()
        );
    }
    println!(
        "{} stars, {} asterisms in catalogue",
        sky.stars().len(),
        sky.asterisms().len()
    );
    Ok(())
}

fn print_json(
    sky: &ObservedSky,
    when: &DateTime<Utc>,
    config: &SkyConfig,
    entries: &[Entry],
    nearest: Option<&CelestialObject>,
) -> Result<()> {
    let objects: Vec<_> = entries
        .iter()
        .map(|entry| {
            let hor = sky.horizontal_position(entry.object.equatorial_pos());
            json!({
                "name": entry.object.name(),
                "type": format!("{:?}", entry.object.object_type()),
                "ra_hr": entry.object.equatorial_pos().ra_hr(),
                "dec_deg": entry.object.equatorial_pos().dec_deg(),
                "az_deg": hor.az_deg(),
                "alt_deg": hor.alt_deg(),
                "x": entry.position.x(),
                "y": entry.position.y(),
                "magnitude": entry.object.magnitude(),
                "angular_size": entry.object.angular_size(),
                "info": entry.object.info(),
            })
        })
        .collect();

    let report = json!({
        "time": when.to_rfc3339(),
        "observer": { "lon_deg": config.observer_lon_deg, "lat_deg": config.observer_lat_deg },
        "center": { "az_deg": config.center_az_deg, "alt_deg": config.center_alt_deg },
        "star_count": sky.stars().len(),
        "asterism_count": sky.asterisms().len(),
        "objects": objects,
        "nearest": nearest.map(|object| object.name().to_string()),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(&args)?;
    let when = args.time.unwrap_or_else(Utc::now);
    let observer = config.observer()?;
    let projection = config.projection()?;

    let catalogue = load_catalogue(&config)?;
    log::info!("Catalogue holds {} stars", catalogue.len());

    let sky = ObservedSky::new(&when, &observer, projection, Arc::new(catalogue))?;
    let entries = entries(&sky, args.stars);

    let nearest = match &args.nearest {
        Some(point) => {
            let radius = config.search_radius_extent()?;
            let found = sky.object_closest_to(point, radius, &CelestialObjectType::ALL);
            if found.is_none() {
                log::info!("Nothing within {:.4} of {}", radius, point);
            }
            found
        }
        None => None,
    };

    if args.json {
        print_json(&sky, &when, &config, &entries, nearest.as_ref())?;
    } else {
        print_text(&sky, &when, &config, &entries)?;
        if args.nearest.is_some() {
            match &nearest {
                Some(object) => println!("Nearest object: {}", object.info()),
                None => println!("Nearest object: none"),
            }
        }
    }
    Ok(())
}
