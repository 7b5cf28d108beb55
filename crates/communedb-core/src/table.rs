// crates/communedb-core/src/table.rs

//! Physical layer shared by the dataset loaders.
//!
//! Opens a raw export, decodes its bytes, skips the preamble, and hands
//! well-formed records to the typed loaders. The raw files disagree on
//! separator, preamble length and encoding, so each loader carries its own
//! [`TableSpec`].

use crate::error::{CityError, Result};
use crate::text::repair_legacy;
use log::warn;
use std::fs;
use std::path::Path;

/// Text encoding of a raw export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    /// Interior-ministry and DHUP exports; also covers plain latin1.
    Windows1252,
}

impl SourceEncoding {
    fn encoding(self) -> &'static encoding_rs::Encoding {
        match self {
            SourceEncoding::Utf8 => encoding_rs::UTF_8,
            SourceEncoding::Windows1252 => encoding_rs::WINDOWS_1252,
        }
    }
}

/// Per-source parse configuration.
#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    pub delimiter: u8,
    /// Preamble lines before the header row (some INSEE exports carry a
    /// multi-line description block first).
    pub skip_rows: usize,
    pub encoding: SourceEncoding,
}

impl Default for TableSpec {
    fn default() -> Self {
        TableSpec {
            delimiter: b';',
            skip_rows: 0,
            encoding: SourceEncoding::Utf8,
        }
    }
}

/// A decoded table: the header row plus every well-formed data row.
///
/// Header names go through [`repair_legacy`] so loaders can address
/// columns by their intended spelling even when the export mangled it
/// (`"Libell‚ de la commune"`).
#[derive(Debug)]
pub struct RawTable {
    pub source: &'static str,
    pub headers: Vec<String>,
    pub rows: Vec<csv::StringRecord>,
}

impl RawTable {
    /// Index of a required header column.
    pub fn column(&self, name: &str) -> Result<usize> {
        self.column_opt(name).ok_or_else(|| CityError::MissingColumn {
            source_name: self.source,
            column: name.to_string(),
        })
    }

    /// Index of an optional header column.
    pub fn column_opt(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Trimmed field accessor; absent cells read as empty.
    pub fn field<'a>(&self, row: &'a csv::StringRecord, idx: usize) -> &'a str {
        row.get(idx).unwrap_or("").trim()
    }
}

/// Read and decode a raw export from disk.
pub fn read_table(path: &Path, spec: &TableSpec, source: &'static str) -> Result<RawTable> {
    let bytes = fs::read(path).map_err(|e| CityError::SourceUnavailable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_table(&bytes, spec, source)
}

/// Decode and parse a raw export already held in memory.
pub(crate) fn parse_table(bytes: &[u8], spec: &TableSpec, source: &'static str) -> Result<RawTable> {
    let (text, _, had_errors) = spec.encoding.encoding().decode(bytes);
    if had_errors {
        warn!("{source}: undecodable byte sequences replaced");
    }

    let mut body: &str = &text;
    for _ in 0..spec.skip_rows {
        match body.find('\n') {
            Some(i) => body = &body[i + 1..],
            None => {
                return Err(CityError::InvalidData(format!(
                    "{source}: shorter than its {}-line preamble",
                    spec.skip_rows
                )))
            }
        }
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(spec.delimiter)
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| repair_legacy(h.trim()).into_owned())
        .collect();

    let mut rows = Vec::new();
    for (i, rec) in reader.records().enumerate() {
        // Line number in the raw file, for diagnostics.
        let line = i + 2 + spec.skip_rows;
        match rec {
            Ok(r) if r.len() == headers.len() => rows.push(r),
            Ok(r) => {
                warn!(
                    "{source}: line {line} has {} fields, expected {}; skipped",
                    r.len(),
                    headers.len()
                );
            }
            Err(e) => {
                warn!("{source}: line {line}: {e}; skipped");
            }
        }
    }

    Ok(RawTable {
        source,
        headers,
        rows,
    })
}
