//! `localStorage` backed store.

use fretnote::{FretnoteError, MemoryStore, Store};
use wasm_bindgen::JsValue;

/// Browser storage, or memory when `localStorage` is unavailable
/// (private browsing, sandboxed iframes)
pub enum BrowserStore {
    Local(web_sys::Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        match storage {
            Some(storage) => BrowserStore::Local(storage),
            None => {
                log::warn!("localStorage unavailable, selected notes will not persist");
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }
}

fn storage_error(e: JsValue) -> FretnoteError {
    FretnoteError::StorageError(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

impl Store for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, FretnoteError> {
        match self {
            BrowserStore::Local(storage) => storage.get_item(key).map_err(storage_error),
            BrowserStore::Memory(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), FretnoteError> {
        match self {
            BrowserStore::Local(storage) => storage.set_item(key, value).map_err(storage_error),
            BrowserStore::Memory(store) => store.set(key, value),
        }
    }
}
