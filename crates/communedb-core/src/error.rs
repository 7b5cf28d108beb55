// crates/communedb-core/src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading source extracts or building the resolver.
///
/// Row-level problems never reach this enum: a malformed row is dropped by
/// the loader (with a log warning) and the load continues. Only structural
/// failures — a missing source, a missing required column, a join that
/// yields nothing — abort a build, because no meaningful partial result
/// exists for those.
#[derive(Debug, Error)]
pub enum CityError {
    /// A required source file is missing or unreadable.
    #[error("source not available at {path}: {reason}")]
    SourceUnavailable { path: PathBuf, reason: String },

    /// The header row of a source lacks a column the loader depends on.
    #[error("{source_name}: missing required column `{column}`")]
    MissingColumn {
        source_name: &'static str,
        column: String,
    },

    /// A source decoded but its overall shape is unusable.
    #[error("invalid source data: {0}")]
    InvalidData(String),

    /// The geo × population join produced no city above the floor.
    /// Surfaced loudly: callers cannot distinguish "empty but valid" from
    /// "wrong file", so an empty resolver is never returned as Ok.
    #[error("joining {geo} with {population} produced no commune above the population floor")]
    EmptyJoin { geo: PathBuf, population: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed table: {0}")]
    Csv(#[from] csv::Error),

    /// Snapshot (de)serialization failure.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, CityError>;
