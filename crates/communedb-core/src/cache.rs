// crates/communedb-core/src/cache.rs

//! Caching of the resolved database.
//!
//! Two independent layers, both optimizations rather than requirements:
//!
//! - a process-wide memo keyed on source identity (paths + mtimes), so a
//!   session builds each source version at most once and concurrent
//!   callers wait for the in-flight build;
//! - an on-disk bincode snapshot next to the geographic source, reused as
//!   long as neither source file is newer, gzip'd when the `compact`
//!   feature is enabled.

use crate::error::Result;
use crate::model::CityDb;
use crate::resolver::SourcePaths;
use log::{debug, warn};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

#[cfg(not(feature = "compact"))]
pub const SNAPSHOT_SUFFIX: &str = "cities.bin";
#[cfg(feature = "compact")]
pub const SNAPSHOT_SUFFIX: &str = "cities.bin.gz";

/// Identity of one build: source paths plus their modification times.
/// Touching a source file changes the key and forces a rebuild.
#[derive(Clone, PartialEq, Eq, Hash)]
struct SourceKey {
    geo: (PathBuf, Option<SystemTime>),
    population: (PathBuf, Option<SystemTime>),
}

impl SourceKey {
    fn of(paths: &SourcePaths) -> Self {
        SourceKey {
            geo: (paths.geo.clone(), mtime(&paths.geo)),
            population: (paths.population.clone(), mtime(&paths.population)),
        }
    }
}

fn mtime(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

static DB_CACHE: Lazy<Mutex<HashMap<SourceKey, Arc<CityDb>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

impl CityDb {
    /// Memoized [`CityDb::build`].
    ///
    /// The cache lock is held across the build: that is the single-build
    /// guarantee — a second caller for the same source version blocks
    /// until the first build lands, then gets the shared copy.
    pub fn load_cached(paths: &SourcePaths) -> Result<Arc<Self>> {
        let key = SourceKey::of(paths);
        let mut cache = DB_CACHE.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(db) = cache.get(&key) {
            debug!("resolver served from the process cache");
            return Ok(Arc::clone(db));
        }
        let db = Arc::new(Self::build(paths)?);
        cache.insert(key, Arc::clone(&db));
        Ok(db)
    }

    /// Build, going through the on-disk snapshot when it is fresh.
    ///
    /// A stale or unreadable snapshot is never an error: the database is
    /// rebuilt from the sources and the snapshot rewritten.
    pub fn load_with_snapshot(paths: &SourcePaths) -> Result<Self> {
        let snap = snapshot_path(&paths.geo);
        if is_snapshot_fresh(paths, &snap) {
            match Self::load_snapshot(&snap) {
                Ok(db) => {
                    debug!("resolver restored from {}", snap.display());
                    return Ok(db);
                }
                Err(e) => warn!("unreadable snapshot {}: {e}; rebuilding", snap.display()),
            }
        }
        let db = Self::build(paths)?;
        if let Err(e) = db.save_as(&snap) {
            warn!("could not write snapshot {}: {e}", snap.display());
        }
        Ok(db)
    }

    /// Read a previously saved snapshot.
    pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        #[cfg(feature = "compact")]
        let reader: Box<dyn Read> = Box::new(flate2::read::GzDecoder::new(reader));
        #[cfg(not(feature = "compact"))]
        let reader: Box<dyn Read> = Box::new(reader);
        Ok(bincode::deserialize_from(reader)?)
    }

    /// Persist the resolved database as a snapshot.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let writer = BufWriter::new(file);
        #[cfg(feature = "compact")]
        let mut writer: Box<dyn Write> = Box::new(flate2::write::GzEncoder::new(
            writer,
            flate2::Compression::default(),
        ));
        #[cfg(not(feature = "compact"))]
        let mut writer: Box<dyn Write> = Box::new(writer);
        bincode::serialize_into(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

fn snapshot_path(geo_path: &Path) -> PathBuf {
    let filename = geo_path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    geo_path.with_file_name(format!("{filename}.{SNAPSHOT_SUFFIX}"))
}

fn is_snapshot_fresh(paths: &SourcePaths, snap: &Path) -> bool {
    let Some(snap_time) = mtime(snap) else {
        return false;
    };
    for source in [&paths.geo, &paths.population] {
        match mtime(source) {
            Some(t) if t > snap_time => return false,
            Some(_) => {}
            None => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_path_sits_next_to_the_geo_source() {
        let p = snapshot_path(Path::new("/data/referentiel_geographique.csv"));
        let name = p.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("referentiel_geographique.csv."));
        assert!(name.ends_with(SNAPSHOT_SUFFIX));
        assert_eq!(p.parent(), Some(Path::new("/data")));
    }

    #[test]
    fn missing_snapshot_is_never_fresh() {
        let paths = SourcePaths::in_dir("/nonexistent");
        assert!(!is_snapshot_fresh(
            &paths,
            Path::new("/nonexistent/absent.bin")
        ));
    }
}
