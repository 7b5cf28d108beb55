// crates/communedb-core/src/loader/security.rs

//! Loader for the SSMSI communal delinquency dataset: one row per commune
//! and infraction class, with a rate per 1 000 inhabitants.

use crate::error::Result;
use crate::table::{read_table, RawTable, SourceEncoding, TableSpec};
use crate::text::{pad_commune_code, parse_locale_f64};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

const SOURCE: &str = "delinquance_communale";

const COL_CODE: &str = "CODGEO";
const COL_CLASS: &str = "classe";
const COL_RATE: &str = "tauxpourmille";

/// One infraction measure for one commune.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SecurityRow {
    /// Zero-padded commune code.
    pub code: String,
    /// Infraction class label ("Cambriolages de logement", ...).
    pub infraction: String,
    /// Rate per 1 000 inhabitants.
    pub rate_per_1000: f64,
}

/// The parsed delinquency dataset, indexed by commune code.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SecurityTable {
    pub rows: Vec<SecurityRow>,
    index: HashMap<String, Vec<usize>>,
}

impl SecurityTable {
    pub fn spec() -> TableSpec {
        TableSpec {
            delimiter: b';',
            skip_rows: 0,
            encoding: SourceEncoding::Utf8,
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let table = read_table(path.as_ref(), &Self::spec(), SOURCE)?;
        Self::from_table(&table)
    }

    pub(crate) fn from_table(table: &RawTable) -> Result<Self> {
        let code_idx = table.column(COL_CODE)?;
        let class_idx = table.column(COL_CLASS)?;
        let rate_idx = table.column(COL_RATE)?;

        let mut rows = Vec::with_capacity(table.rows.len());
        let mut index: HashMap<String, Vec<usize>> = HashMap::new();
        for rec in &table.rows {
            let raw_code = table.field(rec, code_idx);
            let infraction = table.field(rec, class_idx);
            if raw_code.is_empty() || infraction.is_empty() {
                warn!("{SOURCE}: row without commune code or class; skipped");
                continue;
            }
            let raw_rate = table.field(rec, rate_idx);
            let Some(rate_per_1000) = parse_locale_f64(raw_rate) else {
                warn!("{SOURCE}: {raw_code}: unparseable rate {raw_rate:?}; row skipped");
                continue;
            };
            let code = pad_commune_code(raw_code);
            index.entry(code.clone()).or_default().push(rows.len());
            rows.push(SecurityRow {
                code,
                infraction: infraction.to_string(),
                rate_per_1000,
            });
        }
        Ok(SecurityTable { rows, index })
    }

    /// Every infraction rate recorded for a commune; the query code is
    /// zero-padded first.
    pub fn rates_for(&self, code: &str) -> Vec<&SecurityRow> {
        let code = pad_commune_code(code);
        self.index
            .get(&code)
            .map(|ids| ids.iter().map(|&i| &self.rows[i]).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::parse_table;

    const SAMPLE: &[u8] = b"\
CODGEO;classe;tauxpourmille
75056;Cambriolages de logement;4,91
75056;Vols sans violence contre des personnes;21,3
1053;Cambriolages de logement;2,7
75056;Coups et blessures volontaires;bad
";

    fn load_sample() -> SecurityTable {
        let table = parse_table(SAMPLE, &SecurityTable::spec(), "test").unwrap();
        SecurityTable::from_table(&table).unwrap()
    }

    #[test]
    fn groups_rates_by_commune() {
        let security = load_sample();
        let paris = security.rates_for("75056");
        assert_eq!(paris.len(), 2);
        assert_eq!(paris[0].infraction, "Cambriolages de logement");
        assert_eq!(paris[0].rate_per_1000, 4.91);
    }

    #[test]
    fn query_code_is_padded() {
        let security = load_sample();
        assert_eq!(security.rates_for("1053").len(), 1);
        assert_eq!(security.rates_for("01053").len(), 1);
        assert!(security.rates_for("99999").is_empty());
    }

    #[test]
    fn unparseable_rate_is_excluded() {
        let security = load_sample();
        assert!(security
            .rows
            .iter()
            .all(|r| r.infraction != "Coups et blessures volontaires"));
    }
}
