// crates/communedb-core/src/model.rs

use crate::traits::NameMatch;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The canonical record for one resolved commune.
///
/// `insee_code` is the unique key of the resolved set; `normalized_name`
/// is the accent-free uppercase matching key derived from `name` and is
/// what all lookups go through.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    /// 5-character zero-padded INSEE commune code.
    pub insee_code: String,
    /// Title-cased display name.
    pub name: String,
    /// Uppercase, diacritic- and punctuation-stripped matching key.
    pub normalized_name: String,
    pub department: String,
    pub region: String,
    /// Absent when the source referential carried no geolocation.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Latest municipal census figure; always above the build floor.
    pub population: u32,
}

impl CityRecord {
    /// Both coordinates, when the source carried a geolocation.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

impl NameMatch for CityRecord {
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// Aggregate statistics for the resolved database.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DbStats {
    pub cities: usize,
    pub departments: usize,
    pub regions: usize,
}

/// The resolved city table.
///
/// Built once from the source extracts, then immutable: queries are pure
/// in-memory reads, so sharing a `CityDb` across threads needs no locking.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CityDb {
    pub(crate) cities: Vec<CityRecord>,
    /// normalized name → index into `cities`
    pub(crate) index: HashMap<String, usize>,
}

impl CityDb {
    /// Index a set of records by normalized name, first occurrence wins.
    ///
    /// A record whose normalized name is already taken is dropped
    /// entirely, so `city_names()` never lists a name that `resolve`
    /// cannot return.
    pub(crate) fn from_records(records: Vec<CityRecord>) -> Self {
        let mut cities: Vec<CityRecord> = Vec::with_capacity(records.len());
        let mut index = HashMap::with_capacity(records.len());
        for record in records {
            if index.contains_key(&record.normalized_name) {
                warn!(
                    "commune {} ({}) collides with an already-indexed name; dropped",
                    record.insee_code, record.name
                );
                continue;
            }
            index.insert(record.normalized_name.clone(), cities.len());
            cities.push(record);
        }
        CityDb { cities, index }
    }
}
