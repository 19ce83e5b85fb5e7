//! Storage backends
//!
//! `MemoryStorage` backs native runs and tests; `LocalStorage` wraps the
//! browser's `window.localStorage` on wasm32.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::Storage;
use crate::error::StorageError;

/// In-memory storage for native runs and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    reads: Cell<usize>,
    writes: Cell<usize>,
}

impl MemoryStorage {
    /// Create empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage with one value already present
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Raw value under `key`, bypassing the trait
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    /// Number of `get` calls so far
    pub fn read_count(&self) -> usize {
        self.reads.get()
    }

    /// Number of successful `set` calls so far
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.reads.set(self.reads.get() + 1);
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// Browser LocalStorage (WASM only)
///
/// Construction never fails: when the page has no usable storage (disabled,
/// sandboxed iframe) every call reports [`StorageError::Unavailable`] and the
/// store falls back the same way it does for corrupt data.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct LocalStorage {
    inner: Option<web_sys::Storage>,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    pub fn new() -> Self {
        let inner = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if inner.is_none() {
            log::warn!("LocalStorage unavailable, reviews will not persist");
        }
        Self { inner }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.inner.as_ref().ok_or(StorageError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?.get_item(key).map_err(classify_js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(classify_js_error)
    }
}

/// Map a thrown DOMException onto a storage error
#[cfg(target_arch = "wasm32")]
fn classify_js_error(err: wasm_bindgen::JsValue) -> StorageError {
    let name = js_sys::Reflect::get(&err, &wasm_bindgen::JsValue::from_str("name"))
        .ok()
        .and_then(|v| v.as_string());
    match name.as_deref() {
        Some("QuotaExceededError") | Some("NS_ERROR_DOM_QUOTA_REACHED") => {
            StorageError::QuotaExceeded
        }
        Some("SecurityError") => StorageError::Unavailable,
        _ => StorageError::Backend(format!("{:?}", err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_get_missing() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("nope").unwrap(), None);
        assert_eq!(storage.read_count(), 1);
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_memory_storage_set_overwrites() {
        let storage = MemoryStorage::with_item("k", "old");
        storage.set("k", "new").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("new"));
        assert_eq!(storage.raw("k").as_deref(), Some("new"));
        assert_eq!(storage.write_count(), 1);
    }

    #[test]
    fn test_memory_storage_through_rc() {
        let storage = std::rc::Rc::new(MemoryStorage::new());
        let shared = storage.clone();
        shared.set("k", "v").unwrap();
        assert_eq!(storage.raw("k").as_deref(), Some("v"));
    }
}
