//! Durable key-value slots backing the store.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{KbError, KbResult};

/// Read/write port for one-blob-per-key storage.
pub trait StoragePort {
    /// `Ok(None)` when nothing was ever written under `key`.
    fn read(&self, key: &str) -> KbResult<Option<String>>;

    fn write(&mut self, key: &str, value: &str) -> KbResult<()>;
}

/// Stores each key as `<key>.json` inside a data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StoragePort for FileStorage {
    fn read(&self, key: &str) -> KbResult<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> KbResult<()> {
        fs::create_dir_all(&self.root)?;
        let path = self.path_for(key);
        // Write-then-rename so a crash never leaves a half-written slot.
        let tmp = self.root.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        tracing::debug!(path = %path.display(), bytes = value.len(), "wrote storage slot");
        Ok(())
    }
}

/// In-memory storage, mainly for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
    fail_writes: bool,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(key: &str, value: &str) -> Self {
        let mut storage = Self::default();
        storage.slots.insert(key.to_string(), value.to_string());
        storage
    }

    /// Make every subsequent write fail with an I/O error.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn slot(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl StoragePort for MemoryStorage {
    fn read(&self, key: &str) -> KbResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> KbResult<()> {
        if self.fail_writes {
            return Err(KbError::Io(io::Error::new(io::ErrorKind::Other, "storage quota exceeded")));
        }
        self.slots.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_storage_reads_none_when_missing() {
        let tmp = TempDir::new().expect("tmp");
        let storage = FileStorage::new(tmp.path().join("data"));
        assert!(storage.read("slot").expect("read").is_none());
    }

    #[test]
    fn file_storage_round_trips_and_creates_dir() {
        let tmp = TempDir::new().expect("tmp");
        let mut storage = FileStorage::new(tmp.path().join("nested/data"));
        storage.write("slot", "[1,2]").expect("write");
        assert_eq!(storage.read("slot").expect("read").as_deref(), Some("[1,2]"));
        assert!(storage.path_for("slot").exists());
        assert!(!tmp.path().join("nested/data/.slot.json.tmp").exists());
    }

    #[test]
    fn failed_rename_removes_temp_file() {
        let tmp = TempDir::new().expect("tmp");
        let mut storage = FileStorage::new(tmp.path().join("data"));
        // A non-empty directory at the slot path makes the rename fail.
        fs::create_dir_all(storage.path_for("slot").join("occupied")).expect("mkdir");

        assert!(storage.write("slot", "[]").is_err());
        assert!(!storage.root().join(".slot.json.tmp").exists());
        assert!(storage.path_for("slot").is_dir());
    }

    #[test]
    fn memory_storage_can_refuse_writes() {
        let mut storage = MemoryStorage::new().failing_writes();
        assert!(storage.write("slot", "x").is_err());
        assert!(storage.slot("slot").is_none());
        assert_eq!(storage.writes(), 0);
    }
}
