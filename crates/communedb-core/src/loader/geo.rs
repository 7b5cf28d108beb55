// crates/communedb-core/src/loader/geo.rs

//! Loader for the geographic referential: commune code, administrative
//! labels and the combined `"lat,lon"` geolocation field.

use crate::error::Result;
use crate::table::{read_table, RawTable, SourceEncoding, TableSpec};
use crate::text::{normalize_key, pad_commune_code, title_case};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

const SOURCE: &str = "referentiel_geographique";

const COL_CODE: &str = "COM_CODE";
const COL_NAME: &str = "COM_NOM_MAJ_COURT";
const COL_DEPARTMENT: &str = "DEP_NOM";
const COL_REGION: &str = "REG_NOM";
const COL_GEOLOC: &str = "geolocalisation";

/// One commune of the geographic referential.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeoRow {
    /// Zero-padded commune code.
    pub code: String,
    /// Title-cased display name (the referential stores uppercase).
    pub name: String,
    pub normalized_name: String,
    pub department: String,
    pub region: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// The parsed geographic referential.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GeoTable {
    pub rows: Vec<GeoRow>,
}

impl GeoTable {
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
        let code = table.column(COL_CODE)?;
        let name = table.column(COL_NAME)?;
        let department = table.column(COL_DEPARTMENT)?;
        let region = table.column(COL_REGION)?;
        let geoloc = table.column(COL_GEOLOC)?;

        let mut rows = Vec::with_capacity(table.rows.len());
        for rec in &table.rows {
            let raw_code = table.field(rec, code);
            let raw_name = table.field(rec, name);
            if raw_code.is_empty() || raw_name.is_empty() {
                warn!("{SOURCE}: row without commune code or name; skipped");
                continue;
            }
            // Missing geolocation is not disqualifying: the record keeps
            // None coordinates and downstream map rendering degrades.
            let (latitude, longitude) = match split_geoloc(table.field(rec, geoloc)) {
                Some((lat, lon)) => (Some(lat), Some(lon)),
                None => (None, None),
            };
            rows.push(GeoRow {
                code: pad_commune_code(raw_code),
                name: title_case(raw_name),
                normalized_name: normalize_key(raw_name),
                department: table.field(rec, department).to_string(),
                region: table.field(rec, region).to_string(),
                latitude,
                longitude,
            });
        }
        Ok(GeoTable { rows })
    }
}

/// Split the referential's combined `"lat,lon"` field.
fn split_geoloc(s: &str) -> Option<(f64, f64)> {
    let (lat, lon) = s.trim().split_once(',')?;
    Some((lat.trim().parse().ok()?, lon.trim().parse().ok()?))
}
