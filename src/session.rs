//! Persisted `username -> current room` records.
//!
//! The whole file is read and rewritten on every operation. Writes go to a
//! temp file that is renamed over the store, so a crash never leaves a
//! half-written file. There is no locking: two processes sharing one store
//! can still lose each other's updates.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::StoreError;

pub type SessionMap = BTreeMap<String, String>;

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records, or an empty map if the store was never created.
    pub fn load(&self) -> Result<SessionMap, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(SessionMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Insert or overwrite the record for `username`, creating the store if needed.
    pub fn save(&self, username: &str, room_id: &str) -> Result<(), StoreError> {
        let mut sessions = self.load()?;
        sessions.insert(username.to_string(), room_id.to_string());
        self.write(&sessions)?;
        debug!("saved session {} -> {}", username, room_id);
        Ok(())
    }

    pub fn get(&self, username: &str) -> Result<String, StoreError> {
        self.load()?
            .remove(username)
            .ok_or_else(|| StoreError::UnknownUser(username.to_string()))
    }

    /// Remove the record for `username`.
    ///
    /// Fails if the store file does not exist or has no such user.
    pub fn delete(&self, username: &str) -> Result<(), StoreError> {
        if !self.path.exists() {
            return Err(StoreError::MissingStore(self.path.clone()));
        }

        let mut sessions = self.load()?;
        if sessions.remove(username).is_none() {
            return Err(StoreError::UnknownUser(username.to_string()));
        }
        self.write(&sessions)?;
        info!("deleted session for {}", username);
        Ok(())
    }

    fn write(&self, sessions: &SessionMap) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(sessions)?;

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let base = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("sessions.json");

        // Unique temp file next to the store, then rename over it.
        let mut counter = 0u32;
        let tmp_path = loop {
            let candidate = dir.join(format!(".{}.tmp-{}-{}", base, std::process::id(), counter));
            match OpenOptions::new().write(true).create_new(true).open(&candidate) {
                Ok(mut tmp) => {
                    tmp.write_all(content.as_bytes())?;
                    tmp.flush()?;
                    let _ = tmp.sync_all();
                    break candidate;
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    counter = counter.saturating_add(1);
                }
                Err(e) => return Err(e.into()),
            }
        };

        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        // Persist the rename (best-effort)
        if let Ok(dir_file) = File::open(dir) {
            let _ = dir_file.sync_all();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, SessionStore) {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path().join("location.json"));
        (dir, store)
    }

    #[test]
    fn load_of_absent_store_is_empty() {
        let (_dir, store) = store();
        assert!(store.load().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn save_then_get_round_trips_on_fresh_store() {
        let (_dir, store) = store();
        store.save("ash", "Pallet Town").unwrap();
        assert!(store.path().exists());
        assert_eq!(store.get("ash").unwrap(), "Pallet Town");
    }

    #[test]
    fn resave_overwrites_single_entry() {
        let (_dir, store) = store();
        store.save("ash", "Route 1").unwrap();
        store.save("ash", "Route 1").unwrap();
        let all = store.load().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all["ash"], "Route 1");

        store.save("ash", "Viridian City").unwrap();
        assert_eq!(store.get("ash").unwrap(), "Viridian City");
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn users_are_independent() {
        let (_dir, store) = store();
        store.save("ash", "Route 1").unwrap();
        store.save("misty", "Cerulean City").unwrap();
        store.delete("ash").unwrap();
        assert!(matches!(store.get("ash"), Err(StoreError::UnknownUser(_))));
        assert_eq!(store.get("misty").unwrap(), "Cerulean City");
    }

    #[test]
    fn get_unknown_user() {
        let (_dir, store) = store();
        assert!(matches!(store.get("gary"), Err(StoreError::UnknownUser(u)) if u == "gary"));
        store.save("ash", "Route 1").unwrap();
        assert!(matches!(store.get("gary"), Err(StoreError::UnknownUser(_))));
    }

    #[test]
    fn delete_without_store_is_missing_store() {
        let (_dir, store) = store();
        assert!(matches!(store.delete("ash"), Err(StoreError::MissingStore(_))));
    }

    #[test]
    fn delete_of_absent_user_is_unknown_user() {
        let (_dir, store) = store();
        store.save("ash", "Route 1").unwrap();
        assert!(matches!(store.delete("gary"), Err(StoreError::UnknownUser(_))));
        assert_eq!(store.get("ash").unwrap(), "Route 1");
    }

    #[test]
    fn malformed_store_is_a_format_error() {
        let (_dir, store) = store();
        fs::write(store.path(), "not json").unwrap();
        assert!(matches!(store.load(), Err(StoreError::Format(_))));
        assert!(matches!(store.save("ash", "Route 1"), Err(StoreError::Format(_))));
    }

    #[test]
    fn no_temp_files_left_behind() {
        let (dir, store) = store();
        store.save("ash", "Route 1").unwrap();
        store.save("misty", "Route 2").unwrap();
        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["location.json".to_string()]);
    }

    #[test]
    fn store_file_is_plain_json_object() {
        let (_dir, store) = store();
        store.save("ash", "Route 1").unwrap();
        let raw = fs::read_to_string(store.path()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, serde_json::json!({"ash": "Route 1"}));
    }
}
