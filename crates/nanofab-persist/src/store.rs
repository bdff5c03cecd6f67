//! Where sessions keep their progress between runs.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::PersistError;
use crate::load::decode;
use crate::save::encode;
use crate::snapshot::{AuxState, GridSnapshot, SavedProgress};

/// File extension for snapshots written by [`DirStore`].
pub const SNAPSHOT_EXTENSION: &str = "nfab";

/// Per-level progress storage. `load` returning `None` means nothing was saved.
pub trait ProgressStore: Send + Sync {
    fn save(&self, level_id: &str, grid: &GridSnapshot, aux: &AuxState) -> Result<(), PersistError>;
    fn load(&self, level_id: &str) -> Result<Option<SavedProgress>, PersistError>;
    fn clear(&self, level_id: &str) -> Result<(), PersistError>;
}

/// In-process store. Entries are kept encoded so every save goes through the
/// same binary format as files on disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw bytes for a level, bypassing the encoder.
    pub fn put_raw(&self, level_id: &str, bytes: Vec<u8>) {
        self.entries().insert(level_id.to_string(), bytes);
    }

    pub fn contains(&self, level_id: &str) -> bool {
        self.entries().contains_key(level_id)
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ProgressStore for MemoryStore {
    fn save(&self, level_id: &str, grid: &GridSnapshot, aux: &AuxState) -> Result<(), PersistError> {
        let bytes = encode(grid, aux)?;
        self.put_raw(level_id, bytes);
        Ok(())
    }

    fn load(&self, level_id: &str) -> Result<Option<SavedProgress>, PersistError> {
        match self.entries().get(level_id) {
            Some(bytes) => decode(bytes).map(Some),
            None => Ok(None),
        }
    }

    fn clear(&self, level_id: &str) -> Result<(), PersistError> {
        self.entries().remove(level_id);
        Ok(())
    }
}

/// One snapshot file per level, `<dir>/<level_id>.nfab`.
#[derive(Debug, Clone)]
pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Snapshot path for a level. Ids are limited to `[A-Za-z0-9_-]`.
    pub fn path_for(&self, level_id: &str) -> Result<PathBuf, PersistError> {
        let valid = !level_id.is_empty()
            && level_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(PersistError::InvalidLevelId(level_id.to_string()));
        }
        Ok(self.dir.join(format!("{level_id}.{SNAPSHOT_EXTENSION}")))
    }
}

impl ProgressStore for DirStore {
    fn save(&self, level_id: &str, grid: &GridSnapshot, aux: &AuxState) -> Result<(), PersistError> {
        let path = self.path_for(level_id)?;
        let bytes = encode(grid, aux)?;
        fs::create_dir_all(&self.dir)?;

        // Readers only ever see complete snapshots.
        let tmp = path.with_extension(format!("{SNAPSHOT_EXTENSION}.tmp"));
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &path)?;

        log::debug!("Saved {} bytes of progress to {}", bytes.len(), path.display());
        Ok(())
    }

    fn load(&self, level_id: &str) -> Result<Option<SavedProgress>, PersistError> {
        let path = self.path_for(level_id)?;
        match fs::read(&path) {
            Ok(bytes) => decode(&bytes).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn clear(&self, level_id: &str) -> Result<(), PersistError> {
        let path = self.path_for(level_id)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
