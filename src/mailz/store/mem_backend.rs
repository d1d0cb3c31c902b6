use super::backend::StorageBackend;
use crate::error::{MailzError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since mailz is single-threaded,
/// which lets `StorageBackend` keep `&self` receivers.
#[derive(Default)]
pub struct MemBackend {
    slots: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Test helper to plant raw data in a slot, bypassing the store.
    pub fn put_raw(&self, slot: &str, value: &str) {
        self.slots
            .borrow_mut()
            .insert(slot.to_string(), value.to_string());
    }

    pub fn contains(&self, slot: &str) -> bool {
        self.slots.borrow().contains_key(slot)
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(slot).cloned())
    }

    fn write(&self, slot: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(MailzError::Store("Simulated write error".to_string()));
        }
        self.slots
            .borrow_mut()
            .insert(slot.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, slot: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(MailzError::Store("Simulated write error".to_string()));
        }
        self.slots.borrow_mut().remove(slot);
        Ok(())
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        PathBuf::from(format!("memory://{}", slot))
    }
}
