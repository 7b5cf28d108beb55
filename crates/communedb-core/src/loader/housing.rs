// crates/communedb-core/src/loader/housing.rs

//! Loader for the DHUP/INSEE housing dataset: predicted rents per m² and
//! dwelling counts by type and usage, keyed by commune name.

use crate::error::Result;
use crate::table::{read_table, RawTable, SourceEncoding, TableSpec};
use crate::text::{normalize_key, parse_locale_f64};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

const SOURCE: &str = "logements";

const COL_NAME: &str = "LIBGEO";
const COL_RENT_APARTMENT: &str = "App_loypredm2";
const COL_RENT_HOUSE: &str = "Maison_loypredm2";
const COL_RENT_SMALL: &str = "App12_loypredm2";
const COL_RENT_LARGE: &str = "App3_loypredm2";
const COL_HOUSES: &str = "P21_MAISON";
const COL_APARTMENTS: &str = "P21_APPART";
const COL_PRINCIPAL: &str = "P21_RP";
const COL_SECONDARY: &str = "P21_RSECOCC";
const COL_VACANT: &str = "P21_LOGVAC";

/// Housing measures for one commune.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HousingRow {
    pub name: String,
    pub normalized_name: String,
    /// Predicted rents, €/m².
    pub rent_apartment: f64,
    pub rent_house: f64,
    /// 1–2 room apartments.
    pub rent_small_apartment: f64,
    /// 3+ room apartments.
    pub rent_large_apartment: f64,
    /// Dwelling counts from the 2021 census.
    pub houses: f64,
    pub apartments: f64,
    pub principal: f64,
    pub secondary: f64,
    pub vacant: f64,
}

impl HousingRow {
    /// Share of houses in the housing stock, percent.
    pub fn house_share_pct(&self) -> Option<f64> {
        let total = self.houses + self.apartments;
        if total <= 0.0 {
            return None;
        }
        Some(self.houses / total * 100.0)
    }

    /// Principal / secondary / vacant shares, percent.
    pub fn usage_mix_pct(&self) -> Option<[f64; 3]> {
        let total = self.principal + self.secondary + self.vacant;
        if total <= 0.0 {
            return None;
        }
        Some([
            self.principal / total * 100.0,
            self.secondary / total * 100.0,
            self.vacant / total * 100.0,
        ])
    }
}

/// The parsed housing dataset, indexed by normalized commune name.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HousingTable {
    pub rows: Vec<HousingRow>,
    index: HashMap<String, usize>,
}

impl HousingTable {
    pub fn spec() -> TableSpec {
        TableSpec {
            delimiter: b';',
            skip_rows: 0,
            encoding: SourceEncoding::Windows1252,
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let table = read_table(path.as_ref(), &Self::spec(), SOURCE)?;
        Self::from_table(&table)
    }

    pub(crate) fn from_table(table: &RawTable) -> Result<Self> {
        let name_idx = table.column(COL_NAME)?;
        let measure_cols = [
            table.column(COL_RENT_APARTMENT)?,
            table.column(COL_RENT_HOUSE)?,
            table.column(COL_RENT_SMALL)?,
            table.column(COL_RENT_LARGE)?,
            table.column(COL_HOUSES)?,
            table.column(COL_APARTMENTS)?,
            table.column(COL_PRINCIPAL)?,
            table.column(COL_SECONDARY)?,
            table.column(COL_VACANT)?,
        ];

        let mut rows = Vec::with_capacity(table.rows.len());
        let mut index = HashMap::with_capacity(table.rows.len());
        for rec in &table.rows {
            let raw_name = table.field(rec, name_idx);
            if raw_name.is_empty() {
                warn!("{SOURCE}: row without commune name; skipped");
                continue;
            }
            let mut measures = [0.0f64; 9];
            let mut ok = true;
            for (slot, &idx) in measures.iter_mut().zip(&measure_cols) {
                match parse_locale_f64(table.field(rec, idx)) {
                    Some(v) => *slot = v,
                    None => {
                        ok = false;
                        break;
                    }
                }
            }
            if !ok {
                warn!("{SOURCE}: {raw_name}: unparseable measure; row skipped");
                continue;
            }
            let [rent_apartment, rent_house, rent_small_apartment, rent_large_apartment, houses, apartments, principal, secondary, vacant] =
                measures;
            let normalized_name = normalize_key(raw_name);
            if index.contains_key(&normalized_name) {
                continue; // first occurrence wins
            }
            index.insert(normalized_name.clone(), rows.len());
            rows.push(HousingRow {
                name: raw_name.to_string(),
                normalized_name,
                rent_apartment,
                rent_house,
                rent_small_apartment,
                rent_large_apartment,
                houses,
                apartments,
                principal,
                secondary,
                vacant,
            });
        }
        Ok(HousingTable { rows, index })
    }

    /// Housing measures for a commune, by accent-insensitive name.
    pub fn for_city(&self, name: &str) -> Option<&HousingRow> {
        self.index.get(&normalize_key(name)).map(|&i| &self.rows[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::parse_table;

    // windows-1252 bytes: "Orléans" carries 0xe9
    const SAMPLE: &[u8] = b"\
LIBGEO;App_loypredm2;Maison_loypredm2;App12_loypredm2;App3_loypredm2;P21_MAISON;P21_APPART;P21_RP;P21_RSECOCC;P21_LOGVAC
Orl\xe9ans;11,9;10,4;13,6;10,8;18 210;52 384;62 306;1 766;6 521
Paris;28,9;30,1;32,4;26,2;8 514;1 352 963;1 133 929;134 622;92 926
Broken;;10,0;13,0;10,0;1;2;3;4;5
";

    fn load_sample() -> HousingTable {
        let table = parse_table(SAMPLE, &HousingTable::spec(), "test").unwrap();
        HousingTable::from_table(&table).unwrap()
    }

    #[test]
    fn decodes_latin1_names_and_comma_decimals() {
        let housing = load_sample();
        let orleans = housing.for_city("Orléans").expect("present");
        assert_eq!(orleans.name, "Orléans");
        assert_eq!(orleans.rent_apartment, 11.9);
        assert_eq!(orleans.houses, 18_210.0);
    }

    #[test]
    fn lookup_is_accent_insensitive() {
        let housing = load_sample();
        assert!(housing.for_city("ORLEANS").is_some());
        assert!(housing.for_city("orléans").is_some());
        assert!(housing.for_city("Lyon").is_none());
    }

    #[test]
    fn row_with_missing_measure_is_excluded() {
        let housing = load_sample();
        assert_eq!(housing.rows.len(), 2);
        assert!(housing.for_city("Broken").is_none());
    }

    #[test]
    fn share_helpers() {
        let housing = load_sample();
        let orleans = housing.for_city("Orléans").unwrap();
        let share = orleans.house_share_pct().unwrap();
        assert!((share - 25.8).abs() < 0.1);
        let [principal, secondary, vacant] = orleans.usage_mix_pct().unwrap();
        assert!(principal > secondary && principal > vacant);
        assert!((principal + secondary + vacant - 100.0).abs() < 1e-9);
    }
}
