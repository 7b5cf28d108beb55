// crates/communedb-core/src/search.rs

//! Query surface of the resolved database.

use crate::model::{CityDb, CityRecord, DbStats};
use crate::text::{normalize_key, pad_commune_code};
use std::collections::HashSet;

impl CityDb {
    /// Look up one commune by display name.
    ///
    /// The query is normalized first, so case and accent differences do
    /// not matter: `resolve("ORLEANS")` and `resolve("Orléans")` return
    /// the same record. `None` means not found — never a partial record.
    pub fn resolve(&self, name: &str) -> Option<&CityRecord> {
        let key = normalize_key(name);
        if key.is_empty() {
            return None;
        }
        self.index.get(&key).map(|&i| &self.cities[i])
    }

    /// Look up one commune by INSEE code; the query is zero-padded first.
    pub fn find_by_code(&self, code: &str) -> Option<&CityRecord> {
        let code = pad_commune_code(code);
        // Linear scan is fine: the resolved set is a few hundred communes.
        self.cities.iter().find(|c| c.insee_code == code)
    }

    /// All communes whose normalized name contains the normalized query.
    pub fn find_by_substring(&self, substr: &str) -> Vec<&CityRecord> {
        let q = normalize_key(substr);
        if q.is_empty() {
            return Vec::new();
        }
        self.cities
            .iter()
            .filter(|c| c.normalized_name.contains(&q))
            .collect()
    }

    /// Sorted display names for selection UIs. No duplicates: the build
    /// phase drops records whose normalized name collides.
    pub fn city_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.cities.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// All resolved records, in source order.
    pub fn cities(&self) -> &[CityRecord] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Aggregate statistics for the resolved database.
    pub fn stats(&self) -> DbStats {
        let departments: HashSet<&str> =
            self.cities.iter().map(|c| c.department.as_str()).collect();
        let regions: HashSet<&str> = self.cities.iter().map(|c| c.region.as_str()).collect();
        DbStats {
            cities: self.cities.len(),
            departments: departments.len(),
            regions: regions.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{CityDb, CityRecord};
    use crate::traits::NameMatch;

    fn record(code: &str, name: &str, pop: u32) -> CityRecord {
        CityRecord {
            insee_code: code.to_string(),
            name: name.to_string(),
            normalized_name: crate::text::normalize_key(name),
            department: "Loiret".to_string(),
            region: "Centre-Val de Loire".to_string(),
            latitude: Some(47.9),
            longitude: Some(1.9),
            population: pop,
        }
    }

    fn sample_db() -> CityDb {
        CityDb::from_records(vec![
            record("45234", "Orléans", 117_026),
            record("75056", "Paris", 2_133_111),
            record("42218", "Saint-Étienne", 171_924),
        ])
    }

    #[test]
    fn resolve_ignores_case_and_accents() {
        let db = sample_db();
        let a = db.resolve("Orléans").expect("accented");
        let b = db.resolve("ORLEANS").expect("uppercase");
        assert_eq!(a.insee_code, b.insee_code);
        assert_eq!(a.insee_code, "45234");
    }

    #[test]
    fn resolve_unknown_name_is_none() {
        let db = sample_db();
        assert!(db.resolve("Ville Inexistante").is_none());
        assert!(db.resolve("").is_none());
        assert!(db.resolve("   ").is_none());
    }

    #[test]
    fn find_by_code_pads_the_query() {
        let db = CityDb::from_records(vec![record("01053", "Bourg-en-Bresse", 41_365)]);
        assert!(db.find_by_code("1053").is_some());
        assert!(db.find_by_code("01053").is_some());
        assert!(db.find_by_code("99999").is_none());
    }

    #[test]
    fn substring_search_folds_both_sides() {
        let db = sample_db();
        let hits = db.find_by_substring("étienne");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Saint-Étienne");
        assert!(db.find_by_substring("").is_empty());
    }

    #[test]
    fn city_names_sorted_without_duplicates() {
        // Two distinct codes collapsing to the same normalized name:
        // first one wins, the second is dropped entirely.
        let db = CityDb::from_records(vec![
            record("45234", "Orléans", 117_026),
            record("99999", "ORLEANS", 50_000),
            record("75056", "Paris", 2_133_111),
        ]);
        let names = db.city_names();
        assert_eq!(names, vec!["Orléans", "Paris"]);
        assert_eq!(db.resolve("orleans").unwrap().insee_code, "45234");
    }

    #[test]
    fn stats_count_distinct_admin_labels() {
        let db = sample_db();
        let stats = db.stats();
        assert_eq!(stats.cities, 3);
        assert_eq!(stats.departments, 1);
        assert_eq!(stats.regions, 1);
    }

    #[test]
    fn name_match_on_records() {
        let db = sample_db();
        let orleans = db.resolve("orleans").unwrap();
        assert!(orleans.is_named("ORLÉANS"));
        assert!(orleans.name_contains("orle"));
    }
}
