//! Key-value preference persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme controller persists exactly one value. [`PreferenceStore`] is the
//! seam between that logic and `localStorage`, so the toggle/persist contract
//! can be exercised natively against [`MemoryStore`].

use std::collections::HashMap;

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Minimal string key-value store.
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    fn load(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`. Failures are logged, never raised.
    fn save(&mut self, key: &str, value: &str);
}

/// Browser `localStorage`. Outside the browser reads return `None` and
/// writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = browser_storage()?;
            match storage.get_item(key) {
                Ok(value) => value,
                Err(err) => {
                    log::warn!("localStorage read failed for {key}: {err:?}");
                    None
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    fn save(&mut self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = browser_storage() else {
                return;
            };
            if let Err(err) = storage.set_item(key, value) {
                log::warn!("localStorage write failed for {key}: {err:?}");
            }
        }
    }
}

#[cfg(feature = "csr")]
fn browser_storage() -> Option<web_sys::Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            log::warn!("localStorage unavailable: {err:?}");
            None
        }
    }
}

/// In-memory store used by native tests and non-browser builds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    /// Store pre-seeded with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_owned(), value.to_owned());
        store
    }

    /// Number of `save` calls observed.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.writes += 1;
        self.values.insert(key.to_owned(), value.to_owned());
    }
}
