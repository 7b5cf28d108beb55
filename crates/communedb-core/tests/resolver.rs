//! End-to-end resolver scenarios over the fixture extracts in
//! `tests/data/`: the fixtures carry a duplicate commune code, a ragged
//! row, an unparseable population and a below-floor commune on purpose.

use communedb_core::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data")
}

fn sources() -> SourcePaths {
    SourcePaths::in_dir(fixture_dir())
}

fn build() -> CityDb {
    CityDb::build(&sources()).expect("fixture build")
}

#[test]
fn resolves_paris_to_the_exact_record() {
    let db = build();
    let paris = db.resolve("Paris").expect("Paris resolves");
    assert_eq!(paris.insee_code, "75056");
    assert_eq!(paris.name, "Paris");
    assert_eq!(paris.normalized_name, "PARIS");
    assert_eq!(paris.department, "Paris");
    assert_eq!(paris.region, "Île-de-France");
    assert_eq!(paris.latitude, Some(48.8566));
    assert_eq!(paris.longitude, Some(2.3522));
    assert_eq!(paris.population, 2_133_111);
}

#[test]
fn accent_and_case_variants_resolve_to_the_same_record() {
    let db = build();
    let a = db.resolve("Orléans").expect("accented");
    let b = db.resolve("ORLEANS").expect("uppercase");
    let c = db.resolve("orléans").expect("lowercase accented");
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn below_floor_commune_is_absent() {
    let db = build();
    assert!(db.resolve("Petite-Ville").is_none());
    assert!(!db.city_names().iter().any(|n| *n == "Petite-Ville"));
}

#[test]
fn no_resolved_record_is_at_or_below_the_floor() {
    let db = build();
    assert!(db.cities().iter().all(|c| c.population > POPULATION_FLOOR));
}

#[test]
fn unknown_name_is_not_found_not_a_panic() {
    let db = build();
    assert!(db.resolve("Ville Inexistante").is_none());
}

#[test]
fn unparseable_population_excludes_the_commune() {
    let db = build();
    // 22222 has "n/a" as its latest census figure: excluded, not zeroed.
    assert!(db.resolve("Sans-Population").is_none());
    assert!(db.find_by_code("22222").is_none());
}

#[test]
fn missing_geolocation_survives_with_no_coordinates() {
    let db = build();
    let city = db.resolve("Sans-Geoloc").expect("above floor, resolvable");
    assert_eq!(city.coordinates(), None);
    assert_eq!(city.population, 25_000);
}

#[test]
fn duplicate_commune_code_keeps_the_first_row() {
    let db = build();
    assert_eq!(db.resolve("Paris").unwrap().name, "Paris");
    assert!(db.resolve("Paris-Doublon").is_none());
}

#[test]
fn city_names_are_sorted_and_unique() {
    let db = build();
    let names = db.city_names();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(names, sorted);
    assert_eq!(names, vec!["Orléans", "Paris", "Sans-Geoloc"]);
}

#[test]
fn find_by_code_accepts_unpadded_codes() {
    let db = build();
    assert_eq!(db.find_by_code("75056").unwrap().name, "Paris");
    assert!(db.find_by_code("9999").is_none());
}

#[test]
fn missing_source_fails_the_whole_build() {
    let err = CityDb::build(&SourcePaths::in_dir("/nonexistent-dir")).unwrap_err();
    assert!(matches!(err, CityError::SourceUnavailable { .. }));
}

#[test]
fn load_cached_shares_one_build_per_source_version() {
    let first = CityDb::load_cached(&sources()).expect("first load");
    let second = CityDb::load_cached(&sources()).expect("second load");
    assert!(Arc::ptr_eq(&first, &second));
    assert!(first.resolve("Paris").is_some());
}

#[test]
fn snapshot_round_trips() {
    let db = build();
    let snap = std::env::temp_dir().join(format!("communedb-snapshot-{}.bin", std::process::id()));
    db.save_as(&snap).expect("write snapshot");
    let restored = CityDb::load_snapshot(&snap).expect("read snapshot");
    assert_eq!(restored.len(), db.len());
    assert_eq!(
        restored.resolve("Orléans").unwrap(),
        db.resolve("Orléans").unwrap()
    );
    let _ = std::fs::remove_file(&snap);
}
