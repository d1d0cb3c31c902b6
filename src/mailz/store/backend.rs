use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw key/value storage.
///
/// A backend stores opaque string blobs under named slots. It knows nothing
/// about records; [`super::RecordStore`] owns the serialization and the
/// consistency rules on top of it.
pub trait StorageBackend {
    /// Read the blob stored in `slot`.
    /// Returns Ok(None) when the slot has never been written or was removed.
    fn read(&self, slot: &str) -> Result<Option<String>>;

    /// Replace the blob stored in `slot`.
    /// MUST be atomic: a reader sees either the old or the new blob.
    fn write(&self, slot: &str, value: &str) -> Result<()>;

    /// Remove `slot`. Removing an absent slot is not an error.
    fn remove(&self, slot: &str) -> Result<()>;

    /// Location of the slot, for display. Virtual for non-file backends.
    fn slot_path(&self, slot: &str) -> PathBuf;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        (**self).read(slot)
    }

    fn write(&self, slot: &str, value: &str) -> Result<()> {
        (**self).write(slot, value)
    }

    fn remove(&self, slot: &str) -> Result<()> {
        (**self).remove(slot)
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        (**self).slot_path(slot)
    }
}
