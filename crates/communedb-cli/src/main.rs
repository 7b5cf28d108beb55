//! communedb-cli — Command-line interface for communedb-core
//!
//! This binary provides a simple way to inspect the resolved commune
//! database from your terminal. It supports printing basic statistics,
//! listing the resolved cities, resolving a single city by inexact name,
//! and printing two cities side by side.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ communedb-cli stats
//!
//! - List all resolved cities
//!   $ communedb-cli cities
//!
//! - Resolve one city (case- and accent-insensitive)
//!   $ communedb-cli resolve orleans
//!   $ communedb-cli resolve "Saint-Étienne"
//!
//! - Compare two cities
//!   $ communedb-cli compare Paris Lyon
//!
//! Data source
//! -----------
//!
//! By default, the CLI builds from the sample extracts bundled with the
//! `communedb-core` crate. Use `--data-dir <path>` to point at a
//! directory holding the full INSEE exports, and `--min-population <n>`
//! to override the inclusion floor.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use communedb_core::{CityDb, CityRecord, SourcePaths, POPULATION_FLOOR};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    let paths = match &args.data_dir {
        Some(dir) => SourcePaths::in_dir(dir),
        None => SourcePaths::default(),
    };
    let floor = args.min_population.unwrap_or(POPULATION_FLOOR);

    let db = CityDb::build_with_floor(&paths, floor)
        .with_context(|| format!("building the resolver from {}", paths.geo.display()))?;

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Database statistics:");
            println!("  Cities: {}", stats.cities);
            println!("  Departments: {}", stats.departments);
            println!("  Regions: {}", stats.regions);
            println!("  Population floor: > {floor}");
        }

        Commands::Cities => {
            for name in db.city_names() {
                println!("{name}");
            }
        }

        Commands::Resolve { name } => match db.resolve(&name) {
            Some(city) => print_city(city),
            None => eprintln!("No commune found for: {name}"),
        },

        Commands::Compare { first, second } => {
            for name in [&first, &second] {
                match db.resolve(name) {
                    Some(city) => {
                        print_city(city);
                        println!();
                    }
                    None => eprintln!("No commune found for: {name}"),
                }
            }
        }
    }

    Ok(())
}

fn print_city(city: &CityRecord) {
    println!("{} ({})", city.name, city.insee_code);
    println!("  Department: {}", city.department);
    println!("  Region: {}", city.region);
    println!("  Population: {}", city.population);
    match city.coordinates() {
        Some((lat, lon)) => println!("  Coordinates: {lat}, {lon}"),
        None => println!("  Coordinates: not available"),
    }
}
