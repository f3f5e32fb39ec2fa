//! File-backed key store.
//!
//! All keys live in one JSON object. Every write replaces the file with the
//! temp-file + fsync + rename pattern, so a crash mid-write leaves the previous
//! contents intact.

use crate::{KeyValueStore, SessionError, SessionResult};

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::debug;

pub struct FileKeyStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl FileKeyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> SessionResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents =
            fs::read_to_string(&self.path).map_err(|e| SessionError::read(self.path.clone(), e))?;

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents)
            .map_err(|e| SessionError::corrupted(self.path.clone(), e.to_string()))
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> SessionResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SessionError::write(parent.to_path_buf(), e))?;
        }

        let json = serde_json::to_string_pretty(values)?;
        let temp_path = self
            .path
            .with_extension(format!("tmp.{}", std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| SessionError::write(temp_path.clone(), e))?;

            restrict_permissions(&file, &temp_path)?;

            file.write_all(json.as_bytes())
                .map_err(|e| SessionError::write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| SessionError::write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SessionError::atomic_rename(temp_path.clone(), self.path.clone(), e)
        })?;

        debug!("Key store written to {}", self.path.display());
        Ok(())
    }

    fn modify(&self, change: impl FnOnce(&mut BTreeMap<String, String>)) -> SessionResult<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut values = self.read_all()?;
        change(&mut values);
        self.write_all(&values)
    }
}

#[cfg(unix)]
fn restrict_permissions(file: &fs::File, path: &Path) -> SessionResult<()> {
    use std::os::unix::fs::PermissionsExt;

    file.set_permissions(fs::Permissions::from_mode(0o600))
        .map_err(|e| SessionError::write(path.to_path_buf(), e))
}

#[cfg(not(unix))]
fn restrict_permissions(_file: &fs::File, _path: &Path) -> SessionResult<()> {
    Ok(())
}

impl KeyValueStore for FileKeyStore {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        self.modify(|values| {
            values.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        self.modify(|values| {
            values.remove(key);
        })
    }
}
