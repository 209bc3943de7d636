//! Persistence backends for the stats ledger.

extern crate alloc;

use alloc::collections::BTreeMap;

#[cfg(feature = "std")]
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::error::StoreError;
use crate::game::PlayerId;
use crate::stats::StatsRecord;
use crate::sync::Mutex;

/// A durable home for every player's [`StatsRecord`].
///
/// The ledger loads all records once and hands the full map back on every
/// change. Implementations only need an exact round trip.
pub trait StatsStore {
    /// Loads all stored records.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read or decoded.
    fn load(&self) -> Result<BTreeMap<PlayerId, StatsRecord>, StoreError>;

    /// Replaces the stored records with `records`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn persist(&self, records: &BTreeMap<PlayerId, StatsRecord>) -> Result<(), StoreError>;
}

impl<T: StatsStore + ?Sized> StatsStore for &T {
    fn load(&self) -> Result<BTreeMap<PlayerId, StatsRecord>, StoreError> {
        (**self).load()
    }

    fn persist(&self, records: &BTreeMap<PlayerId, StatsRecord>) -> Result<(), StoreError> {
        (**self).persist(records)
    }
}

/// Keeps records in memory only.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<BTreeMap<PlayerId, StatsRecord>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `records`.
    #[must_use]
    pub fn with_records(records: BTreeMap<PlayerId, StatsRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    /// Returns the last persisted record for `player_id`.
    pub fn record(&self, player_id: PlayerId) -> Option<StatsRecord> {
        self.records.lock().get(&player_id).copied()
    }

    /// Consumes the store and returns everything it holds.
    pub fn into_records(self) -> BTreeMap<PlayerId, StatsRecord> {
        self.records.into_inner()
    }
}

impl StatsStore for MemoryStore {
    fn load(&self) -> Result<BTreeMap<PlayerId, StatsRecord>, StoreError> {
        Ok(self.records.lock().clone())
    }

    fn persist(&self, records: &BTreeMap<PlayerId, StatsRecord>) -> Result<(), StoreError> {
        (*self.records.lock()).clone_from(records);
        Ok(())
    }
}

/// Stores records as a JSON object keyed by player id.
///
/// ```json
/// {"1234": {"wins": 3, "losses": 1, "draws": 0}}
/// ```
///
/// A missing file reads as empty. Writes go to a sibling temporary file that
/// is renamed over the target.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

#[cfg(feature = "std")]
impl JsonFileStore {
    /// Creates a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(feature = "std")]
impl StatsStore for JsonFileStore {
    fn load(&self) -> Result<BTreeMap<PlayerId, StatsRecord>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn persist(&self, records: &BTreeMap<PlayerId, StatsRecord>) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(records)?;
        let temp = self.temp_path();
        fs::write(&temp, bytes)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }
}
