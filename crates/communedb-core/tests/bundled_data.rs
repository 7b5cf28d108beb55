//! The bundled sample extracts under `data/` must build a usable
//! database out of the box, and the supplementary datasets must key off
//! the records it resolves.

use communedb_core::prelude::*;

fn build() -> CityDb {
    CityDb::build(&SourcePaths::default()).expect("bundled extracts build")
}

#[test]
fn bundled_extracts_resolve_the_big_cities() {
    let db = build();
    assert!(db.len() >= 20);
    for name in ["Paris", "Marseille", "Lyon", "Nice", "Nîmes", "Saint-Etienne"] {
        assert!(db.resolve(name).is_some(), "{name} should resolve");
    }
}

#[test]
fn padded_code_from_unpadded_source() {
    let db = build();
    // Nice is stored as "6088" in both raw extracts.
    let nice = db.resolve("Nice").expect("Nice resolves");
    assert_eq!(nice.insee_code, "06088");
    assert_eq!(db.find_by_code("6088").unwrap().name, "Nice");
}

#[test]
fn below_floor_communes_are_excluded() {
    let db = build();
    // Cahors fell under the floor at the latest census; the tiny Ain
    // commune never was near it.
    assert!(db.resolve("Cahors").is_none());
    assert!(db.resolve("L'Abergement-Clémenciat").is_none());
}

#[test]
fn population_only_commune_is_absent() {
    let db = build();
    // 97411 Saint-Denis exists in the population extract only.
    assert!(db.find_by_code("97411").is_none());
}

#[test]
fn le_mans_has_no_coordinates_but_resolves() {
    let db = build();
    let le_mans = db.resolve("Le Mans").expect("resolves");
    assert_eq!(le_mans.coordinates(), None);
    assert_eq!(le_mans.population, 145_507);
}

#[test]
fn housing_measures_key_off_resolved_names() {
    let db = build();
    let housing = HousingTable::load(CityDb::default_data_dir().join("logements.csv"))
        .expect("housing extract");
    // The resolver title-cases "SAINT-ETIENNE" while the housing file
    // spells "Saint-Étienne": the normalized key bridges both.
    let st_etienne = db.resolve("saint-étienne").expect("resolves");
    let row = housing.for_city(&st_etienne.name).expect("housing row");
    assert_eq!(row.rent_apartment, 8.1);
    assert!(row.house_share_pct().is_some());
}

#[test]
fn security_rates_key_off_resolved_codes() {
    let db = build();
    let security = SecurityTable::load(CityDb::default_data_dir().join("delinquance.csv"))
        .expect("security extract");
    let orleans = db.resolve("Orléans").expect("resolves");
    let rates = security.rates_for(&orleans.insee_code);
    assert_eq!(rates.len(), 2);
    assert!(rates.iter().all(|r| r.rate_per_1000 > 0.0));
}

#[test]
fn election_results_survive_the_legacy_encoding() {
    let db = build();
    let elections =
        ElectionTable::load(CityDb::default_data_dir().join("resultats-presidentielle-t1.csv"))
            .expect("election extract");
    let orleans = db.resolve("Orléans").expect("resolves");
    let scores = elections.results_for(&orleans.name);
    assert_eq!(scores.len(), 4);
    assert_eq!(scores[0].candidate, "MACRON Emmanuel");
    assert!(scores.iter().any(|s| s.candidate == "MÉLENCHON Jean-Luc"));
    let total_pct: f64 = scores.iter().map(|s| s.pct).sum();
    assert!((total_pct - 100.0).abs() < 1e-9);
}
