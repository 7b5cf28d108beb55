// crates/communedb-core/src/lib.rs

//! # communedb-core
//!
//! Canonical reference data for French communes.
//!
//! The crate loads the heterogeneous CSV extracts a city dashboard feeds
//! on (geographic referential, population history, housing, delinquency,
//! election results), normalizes their inconsistencies — locale-formatted
//! numbers, stripped leading zeros in commune codes, accented and legacy
//! 8-bit encoded names — and joins the two authoritative sources into one
//! immutable city table keyed by INSEE code, queried by
//! accent-insensitive name.
//!
//! ```no_run
//! use communedb_core::{CityDb, SourcePaths};
//!
//! fn main() -> communedb_core::Result<()> {
//!     let db = CityDb::build(&SourcePaths::default())?;
//!     if let Some(city) = db.resolve("Orléans") {
//!         println!("{} ({}) — {} inhabitants", city.name, city.insee_code, city.population);
//!     }
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod error;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod resolver;
pub mod search;
pub mod table;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::error::{CityError, Result};
pub use crate::model::{CityDb, CityRecord, DbStats};
pub use crate::resolver::{SourcePaths, POPULATION_FLOOR};
pub use crate::text::{equals_key, normalize_key, parse_locale_f64};
pub use crate::traits::NameMatch;
