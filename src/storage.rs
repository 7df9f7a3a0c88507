//! Key-value persistence seam.
//!
//! The trainer persists a single entry (the selected notes). Browsers back
//! this with `localStorage`; tests and hosts without one use [`MemoryStore`].

use crate::error::FretnoteError;
use std::collections::HashMap;

/// Durable string key-value store
pub trait Store {
    fn get(&self, key: &str) -> Result<Option<String>, FretnoteError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), FretnoteError>;
}

/// In-process store, lost when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, FretnoteError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), FretnoteError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: Store + ?Sized> Store for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, FretnoteError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), FretnoteError> {
        (**self).set(key, value)
    }
}
