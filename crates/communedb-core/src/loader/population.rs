// crates/communedb-core/src/loader/population.rs

//! Loader for the historical municipal population table.
//!
//! The export carries a multi-line preamble before the header and one
//! `PMUN<year>` column per census year, with locale-formatted values
//! ("2 133 111"). The latest year is the join measure of the resolver;
//! the full series stays available for evolution displays.

use crate::error::{CityError, Result};
use crate::table::{read_table, RawTable, SourceEncoding, TableSpec};
use crate::text::{normalize_key, pad_commune_code, parse_locale_f64};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

const SOURCE: &str = "base_pop_historiques";

const COL_CODE: &str = "CODGEO";
const COL_NAME: &str = "LIBGEO";
const MEASURE_PREFIX: &str = "PMUN";

/// Preamble lines before the header in the INSEE export.
const PREAMBLE_ROWS: usize = 5;

/// One commune of the population history.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PopulationRow {
    /// Zero-padded commune code.
    pub code: String,
    pub name: String,
    pub normalized_name: String,
    /// Latest municipal census figure (the join measure).
    pub population: u32,
    /// Historic series, oldest first; years whose cell did not parse are
    /// simply absent.
    pub series: Vec<(u16, u32)>,
}

impl PopulationRow {
    fn lookup(&self, year: u16) -> Option<u32> {
        self.series
            .iter()
            .find(|&&(y, _)| y == year)
            .map(|&(_, p)| p)
    }

    /// Population evolution between two census years, in percent.
    pub fn evolution_pct(&self, from: u16, to: u16) -> Option<f64> {
        let a = self.lookup(from)?;
        let b = self.lookup(to)?;
        if a == 0 {
            return None;
        }
        Some((f64::from(b) - f64::from(a)) / f64::from(a) * 100.0)
    }
}

/// The parsed population history.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PopulationTable {
    pub rows: Vec<PopulationRow>,
    /// Latest census year found in the header.
    pub latest_year: u16,
}

impl PopulationTable {
    pub fn spec() -> TableSpec {
        TableSpec {
            delimiter: b';',
            skip_rows: PREAMBLE_ROWS,
            encoding: SourceEncoding::Utf8,
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let table = read_table(path.as_ref(), &Self::spec(), SOURCE)?;
        Self::from_table(&table)
    }

    pub(crate) fn from_table(table: &RawTable) -> Result<Self> {
        let code_idx = table.column(COL_CODE)?;
        let name_idx = table.column(COL_NAME)?;

        // Year columns; order in the export is not guaranteed.
        let mut year_cols: Vec<(u16, usize)> = table
            .headers
            .iter()
            .enumerate()
            .filter_map(|(i, h)| {
                h.strip_prefix(MEASURE_PREFIX)
                    .and_then(|y| y.parse::<u16>().ok())
                    .map(|y| (y, i))
            })
            .collect();
        year_cols.sort_unstable();
        let &(latest_year, latest_idx) =
            year_cols.last().ok_or_else(|| CityError::MissingColumn {
                source_name: SOURCE,
                column: format!("{MEASURE_PREFIX}<year>"),
            })?;

        let mut rows = Vec::with_capacity(table.rows.len());
        for rec in &table.rows {
            let raw_code = table.field(rec, code_idx);
            let raw_name = table.field(rec, name_idx);
            if raw_code.is_empty() || raw_name.is_empty() {
                warn!("{SOURCE}: row without commune code or name; skipped");
                continue;
            }
            // A commune whose latest figure does not parse is excluded
            // outright: coercing it to zero would fabricate a measure.
            let latest_raw = table.field(rec, latest_idx);
            let population = match parse_locale_f64(latest_raw) {
                Some(p) if (0.0..=f64::from(u32::MAX)).contains(&p) => p.round() as u32,
                _ => {
                    warn!(
                        "{SOURCE}: {raw_code}: unparseable {MEASURE_PREFIX}{latest_year} value {latest_raw:?}; row skipped"
                    );
                    continue;
                }
            };
            let series: Vec<(u16, u32)> = year_cols
                .iter()
                .filter_map(|&(year, idx)| {
                    parse_locale_f64(table.field(rec, idx))
                        .filter(|p| (0.0..=f64::from(u32::MAX)).contains(p))
                        .map(|p| (year, p.round() as u32))
                })
                .collect();
            rows.push(PopulationRow {
                code: pad_commune_code(raw_code),
                name: raw_name.to_string(),
                normalized_name: normalize_key(raw_name),
                population,
                series,
            });
        }
        Ok(PopulationTable { rows, latest_year })
    }
}
