//! Error handling example for communedb
//!
//! This example demonstrates proper error handling and edge cases

use communedb_core::prelude::*;

fn main() -> Result<()> {
    println!("=== communedb Error Handling Example ===\n");

    // Example 1: A missing source fails the whole build
    println!("--- Example 1: Building from a missing directory ---");
    match CityDb::build(&SourcePaths::in_dir("/no/such/directory")) {
        Ok(_) => println!("✗ unexpectedly succeeded"),
        Err(e) => println!("✓ Build failed loudly: {e}"),
    }
    println!();

    // Example 2: Loading the bundled extracts with error handling
    println!("--- Example 2: Building with error handling ---");
    let db = match CityDb::build(&SourcePaths::default()) {
        Ok(db) => {
            println!("✓ Database built successfully");
            println!("  Cities: {}", db.len());
            db
        }
        Err(e) => {
            eprintln!("✗ Failed to build database: {e}");
            return Err(e);
        }
    };
    println!();

    // Example 3: Handling unknown cities — an explicit miss, not an error
    println!("--- Example 3: Resolving unknown names ---");
    for name in ["Ville Inexistante", "Atlantis", ""] {
        match db.resolve(name) {
            Some(city) => println!("  Found: {} ({})", city.name, city.insee_code),
            None => println!("  Not found: {name:?}"),
        }
    }
    println!();

    // Example 4: Safe access to optional data
    println!("--- Example 4: Optional coordinates ---");
    for name in ["Paris", "Le Mans"] {
        if let Some(city) = db.resolve(name) {
            match city.coordinates() {
                Some((lat, lon)) => println!("  {}: {lat}, {lon}", city.name),
                None => println!("  {}: coordinates not available", city.name),
            }
        }
    }

    Ok(())
}
