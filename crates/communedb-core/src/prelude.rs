//! communedb prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::error::{CityError, Result};
pub use crate::loader::{
    CandidateScore, ElectionTable, GeoTable, HousingTable, PopulationTable, SecurityTable,
};
pub use crate::model::{CityDb, CityRecord, DbStats};
pub use crate::resolver::{SourcePaths, POPULATION_FLOOR};
pub use crate::text::{equals_key, normalize_key, pad_commune_code, parse_locale_f64};
pub use crate::traits::NameMatch;
