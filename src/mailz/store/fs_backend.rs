use super::backend::StorageBackend;
use crate::error::{MailzError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-backed slots: each slot is `<root>/<slot>.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(MailzError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.slot_path(slot)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(MailzError::Io(e)),
        }
    }

    fn write(&self, slot: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;

        let tmp_file = self.root.join(format!(".{}-{}.tmp", slot, Uuid::new_v4()));
        fs::write(&tmp_file, value).map_err(MailzError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, self.slot_path(slot)) {
            let _ = fs::remove_file(&tmp_file);
            return Err(MailzError::Io(e));
        }
        Ok(())
    }

    fn remove(&self, slot: &str) -> Result<()> {
        match fs::remove_file(self.slot_path(slot)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(MailzError::Io(e)),
        }
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.root.join(format!("{}.json", slot))
    }
}
