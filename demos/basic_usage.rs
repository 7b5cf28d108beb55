//! Basic usage example for communedb
//!
//! This example demonstrates how to:
//! - Build the resolver from the bundled sample extracts
//! - Resolve cities by inexact (accented / differently cased) names
//! - Read the supplementary datasets keyed off the resolved record
//! - Use the caching mechanism

use communedb_core::prelude::*;

fn main() -> Result<()> {
    println!("=== communedb Basic Usage Example ===\n");

    // Build the database from the bundled extracts
    println!("Building the commune database...");
    let db = CityDb::build(&SourcePaths::default())?;
    let stats = db.stats();
    println!(
        "✓ Resolved {} cities across {} departments and {} regions\n",
        stats.cities, stats.departments, stats.regions
    );

    // Example 1: Accent- and case-insensitive resolution
    println!("--- Example 1: Resolve by inexact name ---");
    for query in ["Orléans", "ORLEANS", "saint-etienne", "Nimes"] {
        match db.resolve(query) {
            Some(city) => println!(
                "{query:>15} -> {} ({}), {} inhabitants",
                city.name, city.insee_code, city.population
            ),
            None => println!("{query:>15} -> not found"),
        }
    }
    println!();

    // Example 2: The canonical record
    println!("--- Example 2: Full record ---");
    if let Some(paris) = db.resolve("Paris") {
        println!("Name: {}", paris.name);
        println!("INSEE code: {}", paris.insee_code);
        println!("Department: {}", paris.department);
        println!("Region: {}", paris.region);
        println!("Population: {}", paris.population);
        match paris.coordinates() {
            Some((lat, lon)) => println!("Coordinates: {lat}, {lon}"),
            None => println!("Coordinates: not available"),
        }
    }
    println!();

    // Example 3: Supplementary datasets keyed off the resolved record
    println!("--- Example 3: Housing, security and election measures ---");
    let data_dir = CityDb::default_data_dir();
    if let Some(orleans) = db.resolve("Orléans") {
        let housing = HousingTable::load(data_dir.join("logements.csv"))?;
        if let Some(row) = housing.for_city(&orleans.name) {
            println!(
                "Rents in {}: {:.2} €/m² (apartments), {:.2} €/m² (houses)",
                orleans.name, row.rent_apartment, row.rent_house
            );
        }

        let security = SecurityTable::load(data_dir.join("delinquance.csv"))?;
        for rate in security.rates_for(&orleans.insee_code) {
            println!("{}: {:.2} ‰", rate.infraction, rate.rate_per_1000);
        }

        let elections = ElectionTable::load(data_dir.join("resultats-presidentielle-t1.csv"))?;
        for score in elections.results_for(&orleans.name).iter().take(3) {
            println!("{}: {:.1} %", score.candidate, score.pct);
        }
    }
    println!();

    // Example 4: Using the process cache
    println!("--- Example 4: Cache usage ---");
    println!("First load (will build):");
    let start = std::time::Instant::now();
    let _db1 = CityDb::load_cached(&SourcePaths::default())?;
    println!("Time: {:?}", start.elapsed());

    println!("Second load (from cache):");
    let start = std::time::Instant::now();
    let _db2 = CityDb::load_cached(&SourcePaths::default())?;
    println!("Time: {:?}", start.elapsed());

    println!("\n=== Example completed successfully ===");
    Ok(())
}
