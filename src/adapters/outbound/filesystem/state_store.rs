use crate::shared::error::PkgdashError;
use crate::shared::security::{validate_file_size, validate_not_symlink, MAX_STATE_FILE_SIZE};
use crate::shared::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Per-package install state recorded at install/update time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StateEntry {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_date: Option<DateTime<Utc>>,
    /// sha256 digest the registry published for this release at install time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_hash: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StateFile {
    packages: BTreeMap<String, StateEntry>,
}

/// InstallStateStore adapter - the packages.json install-state file
///
/// Supplies the dashboard's Install Date attribute and the reference
/// digest for the security-verified check. A missing or corrupt file
/// degrades to an empty store; only symlinked or oversized files are
/// refused outright. Writes are serialized through an internal lock so
/// concurrent installs do not clobber each other.
pub struct InstallStateStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl InstallStateStore {
    pub const DEFAULT_FILENAME: &'static str = "packages.json";

    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    /// Returns the recorded entry for a package, if any.
    pub fn entry(&self, name: &str) -> Option<StateEntry> {
        let _guard = self.lock.lock().ok()?;
        self.load().ok()?.packages.get(name).cloned()
    }

    /// The date the package was installed (or last updated, for entries
    /// written before install dates were kept across updates).
    pub fn install_date(&self, name: &str) -> Option<NaiveDate> {
        let entry = self.entry(name)?;
        entry
            .install_date
            .or(entry.update_date)
            .map(|ts| ts.date_naive())
    }

    /// Records a fresh install.
    pub fn record_install(
        &self,
        name: &str,
        version: &str,
        security_hash: Option<String>,
    ) -> Result<()> {
        self.mutate(|packages| {
            packages.insert(
                name.to_string(),
                StateEntry {
                    version: version.to_string(),
                    install_date: Some(Utc::now()),
                    update_date: None,
                    security_hash,
                },
            );
        })
    }

    /// Records an update, keeping the original install date when present.
    pub fn record_update(
        &self,
        name: &str,
        version: &str,
        security_hash: Option<String>,
    ) -> Result<()> {
        self.mutate(|packages| {
            let install_date = packages.get(name).and_then(|e| e.install_date);
            packages.insert(
                name.to_string(),
                StateEntry {
                    version: version.to_string(),
                    install_date,
                    update_date: Some(Utc::now()),
                    security_hash,
                },
            );
        })
    }

    /// Removes the entry for an uninstalled package. Removing an absent
    /// entry is not an error.
    pub fn remove(&self, name: &str) -> Result<()> {
        self.mutate(|packages| {
            packages.remove(name);
        })
    }

    fn mutate(&self, f: impl FnOnce(&mut BTreeMap<String, StateEntry>)) -> Result<()> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| anyhow::anyhow!("state store lock poisoned"))?;
        let mut state = self.load()?;
        f(&mut state.packages);
        self.save(&state)
    }

    fn load(&self) -> Result<StateFile> {
        if !self.path.exists() {
            return Ok(StateFile::default());
        }

        validate_not_symlink(&self.path, "read").map_err(|e| PkgdashError::StateFileError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;

        let metadata = fs::metadata(&self.path).map_err(|e| PkgdashError::StateFileError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;
        validate_file_size(metadata.len(), &self.path, MAX_STATE_FILE_SIZE).map_err(|e| {
            PkgdashError::StateFileError {
                path: self.path.clone(),
                details: e.to_string(),
            }
        })?;

        let content = fs::read_to_string(&self.path).map_err(|e| PkgdashError::StateFileError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;

        match serde_json::from_str(&content) {
            Ok(state) => Ok(state),
            Err(e) => {
                // Corrupt state degrades to empty; packages still render.
                eprintln!(
                    "⚠️  Warning: Ignoring corrupt state file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(StateFile::default())
            }
        }
    }

    fn save(&self, state: &StateFile) -> Result<()> {
        if self.path.exists() {
            validate_not_symlink(&self.path, "write").map_err(|e| {
                PkgdashError::StateFileError {
                    path: self.path.clone(),
                    details: e.to_string(),
                }
            })?;
        }

        let content =
            serde_json::to_string_pretty(state).map_err(|e| PkgdashError::StateFileError {
                path: self.path.clone(),
                details: e.to_string(),
            })?;

        fs::write(&self.path, content).map_err(|e| {
            PkgdashError::StateFileError {
                path: self.path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> InstallStateStore {
        InstallStateStore::new(dir.path().join(InstallStateStore::DEFAULT_FILENAME))
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.entry("requests").is_none());
        assert!(store.install_date("requests").is_none());
    }

    #[test]
    fn test_record_install_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store
            .record_install("requests", "2.32.3", Some("abc123".to_string()))
            .unwrap();

        let entry = store.entry("requests").unwrap();
        assert_eq!(entry.version, "2.32.3");
        assert_eq!(entry.security_hash.as_deref(), Some("abc123"));
        assert!(entry.install_date.is_some());
        assert!(store.install_date("requests").is_some());
    }

    #[test]
    fn test_record_update_keeps_install_date() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.record_install("requests", "2.31.0", None).unwrap();
        let installed = store.entry("requests").unwrap().install_date;

        store
            .record_update("requests", "2.32.3", Some("def456".to_string()))
            .unwrap();

        let entry = store.entry("requests").unwrap();
        assert_eq!(entry.version, "2.32.3");
        assert_eq!(entry.install_date, installed);
        assert!(entry.update_date.is_some());
    }

    #[test]
    fn test_remove_entry() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.record_install("requests", "2.32.3", None).unwrap();
        store.remove("requests").unwrap();
        assert!(store.entry("requests").is_none());

        // Removing an absent entry is fine.
        store.remove("ghost-pkg").unwrap();
    }

    #[test]
    fn test_corrupt_file_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("packages.json");
        fs::write(&path, "{not valid json").unwrap();

        let store = InstallStateStore::new(path);
        assert!(store.entry("requests").is_none());

        // And it can still be written afterwards.
        store.record_install("requests", "2.32.3", None).unwrap();
        assert!(store.entry("requests").is_some());
    }

    #[test]
    fn test_state_survives_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let store = store_in(&dir);
            store.record_install("idna", "3.10", None).unwrap();
        }
        let store = store_in(&dir);
        assert_eq!(store.entry("idna").unwrap().version, "3.10");
    }
}
