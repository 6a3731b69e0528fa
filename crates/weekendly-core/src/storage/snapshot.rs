//! Plan snapshots and the persistence port.
//!
//! The engine captures and restores [`PlanSnapshot`] values; where they
//! go is the host's business. [`JsonSnapshotStore`] is the bundled
//! implementation, writing a single JSON file under the data directory.
//! The engine does not version or migrate snapshots.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::catalog::{Activity, Day};
use crate::error::SnapshotError;
use crate::plan::BucketEntry;

/// Full plan state at one point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSnapshot {
    pub id: String,
    /// Key of the active weekend option.
    pub weekend: String,
    /// Key of the most recently applied theme, if any.
    #[serde(default)]
    pub theme: Option<String>,
    pub schedule: BTreeMap<Day, Vec<Activity>>,
    #[serde(default)]
    pub bucket: Vec<BucketEntry>,
    pub saved_at: DateTime<Utc>,
}

/// Where committed plan state is saved and loaded.
///
/// The host calls `save` after each committed mutation and `load` when a
/// session starts; `Ok(None)` means no snapshot exists yet.
pub trait PersistencePort {
    fn save(&self, snapshot: &PlanSnapshot) -> Result<(), SnapshotError>;
    fn load(&self) -> Result<Option<PlanSnapshot>, SnapshotError>;
}

/// JSON-file-backed persistence.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the default location, `~/.config/weekendly/plan.json`.
    pub fn default_location() -> Result<Self, SnapshotError> {
        let dir = data_dir().map_err(|e| SnapshotError::ReadFailed {
            path: PathBuf::from("~/.config/weekendly"),
            message: e.to_string(),
        })?;
        Ok(Self::new(dir.join("plan.json")))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl PersistencePort for JsonSnapshotStore {
    fn save(&self, snapshot: &PlanSnapshot) -> Result<(), SnapshotError> {
        let raw =
            serde_json::to_string_pretty(snapshot).map_err(|e| SnapshotError::WriteFailed {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        std::fs::write(&self.path, raw).map_err(|e| SnapshotError::WriteFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    fn load(&self) -> Result<Option<PlanSnapshot>, SnapshotError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path).map_err(|e| SnapshotError::ReadFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        let snapshot =
            serde_json::from_str(&raw).map_err(|e| SnapshotError::ReadFailed {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        Ok(Some(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn empty_store_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSnapshotStore::new(dir.path().join("plan.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn snapshot_survives_the_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSnapshotStore::new(dir.path().join("plan.json"));

        let catalog = Catalog::builtin();
        let brunch = catalog.activity("gourmet-brunch").unwrap().clone();
        let snapshot = PlanSnapshot {
            id: "snap-1".to_string(),
            weekend: "two_days".to_string(),
            theme: Some("mindful_escape".to_string()),
            schedule: [(Day::Saturday, vec![brunch])].into_iter().collect(),
            bucket: Vec::new(),
            saved_at: Utc::now(),
        };
        store.save(&snapshot).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.id, "snap-1");
        assert_eq!(loaded.weekend, "two_days");
        assert_eq!(loaded.theme.as_deref(), Some("mindful_escape"));
        assert_eq!(loaded.schedule[&Day::Saturday][0].id, "gourmet-brunch");
    }

    #[test]
    fn unreadable_json_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.json");
        std::fs::write(&path, "{not json").unwrap();
        let store = JsonSnapshotStore::new(path);
        assert!(matches!(
            store.load(),
            Err(SnapshotError::ReadFailed { .. })
        ));
    }
}
