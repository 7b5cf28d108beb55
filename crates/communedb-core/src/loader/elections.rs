// crates/communedb-core/src/loader/elections.rs

//! Loader for the first-round presidential results.
//!
//! The interior-ministry export is one wide row per polling place with up
//! to twelve repeated candidate slots (`Nom<i>`, `Prénom<i>`, `Voix<i>`),
//! in a legacy 8-bit encoding whose accented bytes come out mangled.
//! The loader repairs the text and unpivots the slots into long
//! `(commune, candidate, votes)` rows.

use crate::error::Result;
use crate::table::{read_table, RawTable, SourceEncoding, TableSpec};
use crate::text::{normalize_key, parse_locale_f64, repair_legacy};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

const SOURCE: &str = "resultats_presidentielle_t1";

const COL_COMMUNE: &str = "Libellé de la commune";
const CANDIDATE_SLOTS: usize = 12;

/// One candidate score in one polling place.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ElectionRow {
    pub commune: String,
    pub normalized_commune: String,
    /// "NOM Prénom", repaired.
    pub candidate: String,
    pub votes: u32,
}

/// Aggregated result of one candidate in one commune.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CandidateScore {
    pub candidate: String,
    pub votes: u64,
    /// Share of the commune's expressed votes, percent.
    pub pct: f64,
}

/// The parsed election results in long form.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ElectionTable {
    pub rows: Vec<ElectionRow>,
}

impl ElectionTable {
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
        let commune_idx = table.column(COL_COMMUNE)?;

        // Resolve the repeated candidate slots present in this export.
        // Older extracts spell the first-name column without the accent.
        let mut slots = Vec::new();
        for i in 1..=CANDIDATE_SLOTS {
            let (Some(nom), Some(voix)) = (
                table.column_opt(&format!("Nom{i}")),
                table.column_opt(&format!("Voix{i}")),
            ) else {
                continue;
            };
            let prenom = table
                .column_opt(&format!("Prénom{i}"))
                .or_else(|| table.column_opt(&format!("Prenom{i}")));
            slots.push((nom, prenom, voix));
        }

        let mut rows = Vec::new();
        for rec in &table.rows {
            let commune = repair_legacy(table.field(rec, commune_idx)).into_owned();
            if commune.is_empty() {
                warn!("{SOURCE}: row without commune label; skipped");
                continue;
            }
            let normalized_commune = normalize_key(&commune);
            for &(nom, prenom, voix) in &slots {
                let last = repair_legacy(table.field(rec, nom)).into_owned();
                if last.is_empty() {
                    continue; // unused trailing slot
                }
                let raw_votes = table.field(rec, voix);
                let votes = match parse_locale_f64(raw_votes) {
                    Some(v) if (0.0..=f64::from(u32::MAX)).contains(&v) => v.round() as u32,
                    _ => {
                        warn!(
                            "{SOURCE}: {commune}: unparseable vote count {raw_votes:?} for {last}; slot skipped"
                        );
                        continue;
                    }
                };
                let first = prenom
                    .map(|idx| repair_legacy(table.field(rec, idx)).into_owned())
                    .unwrap_or_default();
                let candidate = if first.is_empty() {
                    last
                } else {
                    format!("{last} {first}")
                };
                rows.push(ElectionRow {
                    commune: commune.clone(),
                    normalized_commune: normalized_commune.clone(),
                    candidate,
                    votes,
                });
            }
        }
        Ok(ElectionTable { rows })
    }

    /// Aggregated scores for a commune, by accent-insensitive name,
    /// sorted by descending vote count.
    pub fn results_for(&self, commune: &str) -> Vec<CandidateScore> {
        let key = normalize_key(commune);
        let mut by_candidate: BTreeMap<&str, u64> = BTreeMap::new();
        for row in self.rows.iter().filter(|r| r.normalized_commune == key) {
            *by_candidate.entry(row.candidate.as_str()).or_insert(0) += u64::from(row.votes);
        }
        let total: u64 = by_candidate.values().sum();
        if total == 0 {
            return Vec::new();
        }
        let mut scores: Vec<CandidateScore> = by_candidate
            .into_iter()
            .map(|(candidate, votes)| CandidateScore {
                candidate: candidate.to_string(),
                votes,
                pct: votes as f64 / total as f64 * 100.0,
            })
            .collect();
        scores.sort_by(|a, b| b.votes.cmp(&a.votes));
        scores
    }
}
