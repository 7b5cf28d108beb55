//! City comparison example for communedb
//!
//! This example demonstrates the query surface a comparison dashboard
//! sits on: substring search, side-by-side records, per-region grouping.

use communedb_core::prelude::*;
use std::collections::BTreeMap;

fn main() -> Result<()> {
    println!("=== communedb City Comparison Example ===\n");

    let db = CityDb::build(&SourcePaths::default())?;

    // Example 1: Substring search for a selection UI
    println!("--- Example 1: Cities matching 'saint' ---");
    for city in db.find_by_substring("saint") {
        println!("- {} ({})", city.name, city.department);
    }
    println!();

    // Example 2: Two cities side by side
    println!("--- Example 2: Paris vs Lyon ---");
    let cities: Vec<_> = ["Paris", "Lyon"]
        .iter()
        .filter_map(|n| db.resolve(n))
        .collect();
    for city in &cities {
        println!(
            "{:<12} {:>10} inhabitants  {} / {}",
            city.name, city.population, city.department, city.region
        );
    }
    println!();

    // Example 3: Largest resolved city per region
    println!("--- Example 3: Largest city per region ---");
    let mut by_region: BTreeMap<&str, &CityRecord> = BTreeMap::new();
    for city in db.cities() {
        by_region
            .entry(city.region.as_str())
            .and_modify(|best| {
                if city.population > best.population {
                    *best = city;
                }
            })
            .or_insert(city);
    }
    for (region, city) in &by_region {
        println!("{region}: {} ({} inhabitants)", city.name, city.population);
    }
    println!();

    // Example 4: Every resolved city sits above the floor
    println!("--- Example 4: Population floor ---");
    let smallest = db
        .cities()
        .iter()
        .min_by_key(|c| c.population)
        .expect("non-empty database");
    println!(
        "Smallest resolved city: {} with {} inhabitants (floor: {})",
        smallest.name, smallest.population, POPULATION_FLOOR
    );

    Ok(())
}
